//! Declarative element construction
//!
//! `create_element` builds a detached tree that [`super::render::render`]
//! later mounts into a [`super::Document`].

/// Attribute value as callers write it
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Str(String),
    /// `true` keeps a bare attribute, `false` drops it
    Bool(bool),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        AttrValue::Str(value.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

pub const NO_ATTRS: [(&str, &str); 0] = [];

/// Attribute as stored on an element. `None` is a bare boolean attribute.
pub type Attribute = (String, Option<String>);

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[cfg(test)]
impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }
}

/// Children accepted by [`create_element`]
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Children {
    #[default]
    None,
    Text(String),
    Node(Box<Node>),
    Nodes(Vec<Node>),
    /// Filled in later by whoever owns the pending work. The element is
    /// returned empty.
    Deferred,
}

impl From<&str> for Children {
    fn from(text: &str) -> Self {
        Children::Text(text.to_string())
    }
}

impl From<String> for Children {
    fn from(text: String) -> Self {
        Children::Text(text)
    }
}

impl From<Node> for Children {
    fn from(node: Node) -> Self {
        Children::Node(Box::new(node))
    }
}

impl From<Vec<Node>> for Children {
    fn from(nodes: Vec<Node>) -> Self {
        Children::Nodes(nodes)
    }
}

impl<T: Into<Children>> From<Option<T>> for Children {
    fn from(children: Option<T>) -> Self {
        children.map(Into::into).unwrap_or_default()
    }
}

/// Build an element node. Unknown tags are accepted as-is and values are
/// stored unescaped; escaping happens when the tree is serialised.
pub fn create_element<I, K, V>(tag: &str, attrs: I, children: impl Into<Children>) -> Node
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<AttrValue>,
{
    let mut attributes: Vec<Attribute> = Vec::new();
    for (key, value) in attrs {
        let key = key.into();
        let value = match value.into() {
            AttrValue::Str(s) => Some(s),
            AttrValue::Bool(true) => None,
            AttrValue::Bool(false) => {
                attributes.retain(|(k, _)| *k != key);
                continue;
            }
        };
        // Later entries win, like repeated assignment
        match attributes.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => attributes.push((key, value)),
        }
    }

    let children = match children.into() {
        Children::None | Children::Deferred => Vec::new(),
        Children::Text(text) => vec![Node::Text(text)],
        Children::Node(node) => vec![*node],
        Children::Nodes(nodes) => nodes,
    };

    Node::Element(Element {
        tag: tag.to_string(),
        attributes,
        children,
    })
}

/// A standalone text node
#[cfg(test)]
pub fn text(content: impl Into<String>) -> Node {
    Node::Text(content.into())
}
