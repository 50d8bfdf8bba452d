//! Minimal document model the home page is assembled into
//!
//! Nodes live in an arena owned by [`Document`] and are addressed by
//! [`NodeId`]. Removed nodes stay in the arena but are detached from the tree,
//! so queries (which only walk from `body`) no longer see them.

pub mod builder;
pub mod render;

use builder::{Attribute, Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Element(ElementData),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElementData {
    pub tag: String,
    pub attributes: Vec<Attribute>,
}

impl ElementData {
    /// Attribute value; a bare boolean attribute reads as `""`
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_deref().unwrap_or_default())
    }

    pub fn id(&self) -> Option<&str> {
        self.get_attribute("id")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attribute("class")
            .is_some_and(|c| c.split_whitespace().any(|c| c == class))
    }
}

#[derive(Debug)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Simple selectors: `#id`, `.class` or a bare tag name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    Id(&'a str),
    Class(&'a str),
    Tag(&'a str),
}

impl<'a> Selector<'a> {
    pub fn parse(selector: &'a str) -> Self {
        if let Some(id) = selector.strip_prefix('#') {
            Selector::Id(id)
        } else if let Some(class) = selector.strip_prefix('.') {
            Selector::Class(class)
        } else {
            Selector::Tag(selector)
        }
    }

    fn matches(&self, element: &ElementData) -> bool {
        match self {
            Selector::Id(id) => element.id() == Some(*id),
            Selector::Class(class) => element.has_class(class),
            Selector::Tag(tag) => element.tag.eq_ignore_ascii_case(tag),
        }
    }
}

#[derive(Debug)]
pub struct Document {
    nodes: Vec<NodeData>,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            body: NodeId(0),
        };
        doc.body = doc.push(NodeKind::Element(ElementData {
            tag: "body".into(),
            attributes: Vec::new(),
        }));
        doc
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Copy a built tree into the arena. The returned root is detached.
    pub fn insert(&mut self, node: Node) -> NodeId {
        match node {
            Node::Text(text) => self.push(NodeKind::Text(text)),
            Node::Element(element) => {
                let id = self.push(NodeKind::Element(ElementData {
                    tag: element.tag,
                    attributes: element.attributes,
                }));
                for child in element.children {
                    let child_id = self.insert(child);
                    self.nodes[child_id.0].parent = Some(id);
                    self.nodes[id.0].children.push(child_id);
                }
                id
            }
        }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.nodes.get(id.0).map(|n| &n.kind)
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        match self.kind(id)? {
            NodeKind::Element(e) => Some(e),
            NodeKind::Text(_) => None,
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0)?.parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
    }

    /// Whether the node is reachable from `body`
    pub fn is_connected(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == self.body {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.0].parent.take() {
            self.nodes[parent.0].children.retain(|&c| c != id);
        }
    }

    fn can_adopt(&self, parent: NodeId, child: NodeId) -> bool {
        if !self.contains(parent) || !self.contains(child) || self.element(parent).is_none() {
            return false;
        }
        // Refuse to make a node its own ancestor
        let mut current = Some(parent);
        while let Some(node) = current {
            if node == child {
                return false;
            }
            current = self.parent(node);
        }
        true
    }

    /// Move `child` to the end of `parent`'s children. Returns false if the
    /// move is not possible.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if !self.can_adopt(parent, child) {
            return false;
        }
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        true
    }

    /// Move `child` to the front of `parent`'s children.
    pub fn prepend(&mut self, parent: NodeId, child: NodeId) -> bool {
        if !self.can_adopt(parent, child) {
            return false;
        }
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.insert(0, child);
        true
    }

    /// Detach a node (and its subtree) from the document.
    pub fn remove(&mut self, id: NodeId) -> bool {
        if !self.contains(id) || id == self.body || self.parent(id).is_none() {
            return false;
        }
        self.detach(id);
        true
    }

    /// Connected descendants of `root` in document order, `root` excluded
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(root).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev());
        }
        out
    }

    pub fn query_selector(&self, selector: &str) -> Option<NodeId> {
        let selector = Selector::parse(selector);
        self.descendants(self.body)
            .into_iter()
            .find(|&id| self.element(id).is_some_and(|e| selector.matches(e)))
    }

    pub fn query_selector_all(&self, selector: &str) -> Vec<NodeId> {
        let selector = Selector::parse(selector);
        self.descendants(self.body)
            .into_iter()
            .filter(|&id| self.element(id).is_some_and(|e| selector.matches(e)))
            .collect()
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.body)
            .into_iter()
            .find(|&node| self.element(node).and_then(|e| e.id()) == Some(id))
    }

    /// Nearest inclusive ancestor matching `selector`
    pub fn closest(&self, id: NodeId, selector: &str) -> Option<NodeId> {
        let selector = Selector::parse(selector);
        let mut current = Some(id);
        while let Some(node) = current {
            if self.element(node).is_some_and(|e| selector.matches(e)) {
                return Some(node);
            }
            current = self.parent(node);
        }
        None
    }

    pub fn class_list_contains(&self, id: NodeId, class: &str) -> bool {
        self.element(id).is_some_and(|e| e.has_class(class))
    }

    /// Value of the `data-<key>` attribute
    pub fn dataset(&self, id: NodeId, key: &str) -> Option<&str> {
        self.element(id)?.get_attribute(&format!("data-{key}"))
    }

    pub fn text_content(&self, id: NodeId) -> String {
        if let Some(NodeKind::Text(text)) = self.kind(id) {
            return text.clone();
        }
        self.descendants(id)
            .into_iter()
            .filter_map(|n| match self.kind(n) {
                Some(NodeKind::Text(t)) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::builder::{create_element, Children};
    use super::*;

    fn list_doc() -> (Document, NodeId) {
        let mut doc = Document::new();
        let list = doc.insert(create_element(
            "ul",
            [("id", "list"), ("class", "items big")],
            vec![
                create_element("li", [("class", "item"), ("data-id", "1")], "one"),
                create_element("li", [("class", "item"), ("data-id", "2")], "two"),
            ],
        ));
        let body = doc.body();
        assert!(doc.append_child(body, list));
        (doc, list)
    }

    #[test]
    fn queries_find_connected_elements() {
        let (doc, list) = list_doc();

        assert_eq!(doc.get_element_by_id("list"), Some(list));
        assert_eq!(doc.query_selector("#list"), Some(list));
        assert_eq!(doc.query_selector(".big"), Some(list));
        assert_eq!(doc.query_selector_all(".item").len(), 2);
        assert_eq!(doc.query_selector_all("li").len(), 2);
        assert_eq!(doc.text_content(list), "onetwo");
    }

    #[test]
    fn closest_and_dataset() {
        let (doc, list) = list_doc();
        let second = doc.children(list)[1];
        let text = doc.children(second)[0];

        assert_eq!(doc.closest(text, ".item"), Some(second));
        assert_eq!(doc.closest(text, "#list"), Some(list));
        assert_eq!(doc.closest(text, ".missing"), None);
        assert_eq!(doc.dataset(second, "id"), Some("2"));
        assert!(doc.class_list_contains(list, "items"));
        assert!(!doc.class_list_contains(list, "item"));
    }

    #[test]
    fn prepend_and_remove() {
        let (mut doc, list) = list_doc();
        let extra = doc.insert(create_element("li", [("class", "item")], "zero"));

        assert!(doc.prepend(list, extra));
        assert_eq!(doc.children(list)[0], extra);

        let first = doc.children(list)[1];
        assert!(doc.remove(first));
        assert_eq!(doc.children(list).len(), 2);
        assert!(!doc.is_connected(first));
        assert_eq!(doc.query_selector_all(".item").len(), 2);
        // Already detached
        assert!(!doc.remove(first));
    }

    #[test]
    fn refuses_cycles_and_text_parents() {
        let (mut doc, list) = list_doc();
        let item = doc.children(list)[0];
        let text = doc.children(item)[0];

        assert!(!doc.append_child(item, list));
        assert!(!doc.append_child(text, list));
        assert!(!doc.remove(doc.body()));
    }

    #[test]
    fn detached_nodes_are_not_queried() {
        let mut doc = Document::new();
        doc.insert(create_element("div", [("id", "floating")], Children::None));
        assert_eq!(doc.get_element_by_id("floating"), None);
    }
}
