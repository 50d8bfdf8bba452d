//! Mounting built trees and serialising the document
//!
//! `to_html` is the escaping boundary: values from the API are stored raw in
//! the document and only escaped when they leave it as markup.

use super::builder::Node;
use super::{Document, NodeId, NodeKind};
use tracing::error;

const VOID_ELEMENTS: &[&str] = &["img", "br", "hr", "input", "meta", "link"];

/// Append `node` as the last child of `target`, keeping existing content.
/// Returns the id of the mounted root.
pub fn render(doc: &mut Document, node: Node, target: NodeId) -> NodeId {
    let root = doc.insert(node);
    if !doc.append_child(target, root) {
        error!(node = ?target, "Render target is not a valid element");
    }
    root
}

pub fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_attr(raw: &str) -> String {
    escape_text(raw).replace('"', "&quot;")
}

/// Serialise a subtree as HTML
pub fn to_html(doc: &Document, id: NodeId) -> String {
    let mut out = String::new();
    write_node(doc, id, &mut out);
    out
}

fn write_node(doc: &Document, id: NodeId, out: &mut String) {
    match doc.kind(id) {
        Some(NodeKind::Text(text)) => out.push_str(&escape_text(text)),
        Some(NodeKind::Element(element)) => {
            out.push('<');
            out.push_str(&element.tag);
            for (name, value) in &element.attributes {
                out.push(' ');
                out.push_str(name);
                if let Some(value) = value {
                    out.push_str("=\"");
                    out.push_str(&escape_attr(value));
                    out.push('"');
                }
            }
            out.push('>');
            if VOID_ELEMENTS.contains(&element.tag.as_str()) {
                return;
            }
            for &child in doc.children(id) {
                write_node(doc, child, out);
            }
            out.push_str("</");
            out.push_str(&element.tag);
            out.push('>');
        }
        None => {}
    }
}

/// Full standalone page around the document body
pub fn to_document_html(doc: &Document, title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n{}\n</html>\n",
        escape_text(title),
        to_html(doc, doc.body())
    )
}
