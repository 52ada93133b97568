//! HTML parsing support.
//!
//! This module parses HTML strings with html5ever (through scraper) and copies
//! the result into the [`Document`] structure used by the converter.

use ego_tree::iter::Edge;
use scraper::{Html, Node as ScraperNode};

use crate::node::{Document, NodeId};

/// Parse an HTML string into a Document tree.
///
/// The full tree construction algorithm runs, so `html`, `head` and `body`
/// are present even when the input omits them.
///
/// # Example
///
/// ```rust
/// use htmltojs::{parse_html, HtmlToJs};
///
/// let document = parse_html("<h1>Hello <em>World</em></h1>");
///
/// let mut converter = HtmlToJs::new();
/// converter.convert(&document);
/// assert!(converter.as_str().contains("createElement(\"em\")"));
/// ```
pub fn parse_html(html: &str) -> Document {
    let parsed = Html::parse_document(html);
    let mut document = Document::new();

    // one entry per open scraper node: where its children are appended
    let mut parents: Vec<NodeId> = Vec::new();
    for edge in parsed.tree.root().traverse() {
        match edge {
            Edge::Open(node) => {
                let id = match parents.last() {
                    Some(&parent) => copy_node(&mut document, parent, node.value()),
                    None => document.root(),
                };
                parents.push(id);
            }
            Edge::Close(_) => {
                parents.pop();
            }
        }
    }

    document
}

/// Copy a single scraper node under `parent`, returning the copy.
/// Nodes without a counterpart return `parent`.
fn copy_node(document: &mut Document, parent: NodeId, node: &ScraperNode) -> NodeId {
    match node {
        ScraperNode::Element(element) => document.append_element(parent, element.name(), element.attrs()),
        ScraperNode::Text(text) => document.append_text(parent, &text.text),
        ScraperNode::Comment(comment) => document.append_comment(parent, &comment.comment),
        ScraperNode::Doctype(doctype) => document.append_doctype(parent, doctype.name()),
        ScraperNode::Fragment => document.append_fragment(parent),
        _ => parent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeType;

    fn child_tags(document: &Document, id: NodeId) -> Vec<String> {
        document
            .children(id)
            .filter(|&c| document.get(c).is_element())
            .map(|c| document.get(c).tag_name().to_string())
            .collect()
    }

    #[test]
    fn test_parse_synthesizes_document_structure() {
        let document = parse_html("<p>Hello World</p>");
        let root = document.root();
        assert_eq!(document.get(root).node_type, NodeType::Document);
        assert_eq!(child_tags(&document, root), ["html"]);

        let html = document.children(root).last().unwrap();
        assert_eq!(child_tags(&document, html), ["head", "body"]);
    }

    #[test]
    fn test_parse_keeps_attribute_order() {
        let document = parse_html(r#"<input type="text" name="q" disabled>"#);
        let node = find_first(&document, "input").unwrap();
        let keys: Vec<&str> = document
            .get(node)
            .attributes
            .iter()
            .map(|a| a.key.as_str())
            .collect();
        assert_eq!(keys, ["type", "name", "disabled"]);
        assert_eq!(document.get(node).attributes[2].value, "");
    }

    #[test]
    fn test_parse_text_and_comments() {
        let document = parse_html("<div>a<!-- note -->b</div>");
        let div = find_first(&document, "div").unwrap();
        let kinds: Vec<NodeType> = document
            .children(div)
            .map(|c| document.get(c).node_type)
            .collect();
        assert_eq!(kinds, [NodeType::Text, NodeType::Comment, NodeType::Text]);
        let comment = document.children(div).nth(1).unwrap();
        assert_eq!(document.get(comment).value.as_deref(), Some(" note "));
    }

    #[test]
    fn test_parse_doctype() {
        let document = parse_html("<!DOCTYPE html><p>x</p>");
        let first = document.children(document.root()).next().unwrap();
        assert_eq!(document.get(first).node_type, NodeType::Doctype);
        assert_eq!(document.get(first).value.as_deref(), Some("html"));
    }

    #[test]
    fn test_parse_deeply_nested_document() {
        let depth = 20_000;
        let html = format!("{}x{}", "<div>".repeat(depth), "</div>".repeat(depth));
        let document = parse_html(&html);

        let mut id = find_first(&document, "div").unwrap();
        let mut divs = 1;
        while let Some(child) = document
            .children(id)
            .find(|&c| document.get(c).is_element())
        {
            id = child;
            divs += 1;
        }
        assert_eq!(divs, depth);
        let text = document.children(id).next().unwrap();
        assert_eq!(document.get(text).value.as_deref(), Some("x"));
    }

    fn find_first(document: &Document, tag: &str) -> Option<NodeId> {
        let mut stack = vec![document.root()];
        while let Some(id) = stack.pop() {
            if document.get(id).tag_name() == tag {
                return Some(id);
            }
            let children: Vec<NodeId> = document.children(id).collect();
            stack.extend(children.into_iter().rev());
        }
        None
    }
}
