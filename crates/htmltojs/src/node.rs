//! Arena-backed DOM tree consumed by the converter.
//!
//! Nodes live in a single `Vec` owned by [`Document`] and refer to each other
//! through [`NodeId`] handles, so a node's identity is stable for the lifetime
//! of the document. Any parser can build this structure; the `html` feature
//! provides one on top of html5ever.

use std::borrow::Cow;
use std::fmt;

/// Node types matching DOM nodeType values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Element node (nodeType = 1)
    Element = 1,
    /// Text node (nodeType = 3)
    Text = 3,
    /// Comment node (nodeType = 8)
    Comment = 8,
    /// Document node (nodeType = 9)
    Document = 9,
    /// Doctype node (nodeType = 10)
    Doctype = 10,
    /// Document fragment node (nodeType = 11)
    DocumentFragment = 11,
}

/// Canonical element name, compared by exact identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(Cow<'static, str>);

impl Tag {
    pub const HTML: Tag = Tag(Cow::Borrowed("html"));
    pub const HEAD: Tag = Tag(Cow::Borrowed("head"));
    pub const BODY: Tag = Tag(Cow::Borrowed("body"));
    pub const SCRIPT: Tag = Tag(Cow::Borrowed("script"));

    /// Create a tag from an element name. The name is kept as given.
    pub fn new(name: impl Into<String>) -> Self {
        Tag(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Tag::new(name)
    }
}

impl From<String> for Tag {
    fn from(name: String) -> Self {
        Tag::new(name)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single `key="value"` pair on an element, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

/// Handle to a node inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A DOM node. Tree links are read through [`Document`].
#[derive(Debug, Clone)]
pub struct Node {
    /// Node type (Element, Text, etc.)
    pub node_type: NodeType,

    /// Tag for element nodes
    pub tag: Option<Tag>,

    /// Text content for text and comment nodes, name for doctypes
    pub value: Option<String>,

    /// Attributes in source order. Empty for non-elements.
    pub attributes: Vec<Attribute>,

    parent: Option<NodeId>,
    first_child: Option<NodeId>,
    last_child: Option<NodeId>,
    next_sibling: Option<NodeId>,
}

impl Node {
    fn new(node_type: NodeType) -> Self {
        Self {
            node_type,
            tag: None,
            value: None,
            attributes: Vec::new(),
            parent: None,
            first_child: None,
            last_child: None,
            next_sibling: None,
        }
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Check if this element has the given tag
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tag.as_ref() == Some(tag)
    }

    /// Get the tag name, empty for non-elements
    pub fn tag_name(&self) -> &str {
        self.tag.as_ref().map(Tag::as_str).unwrap_or("")
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn first_child(&self) -> Option<NodeId> {
        self.first_child
    }

    pub fn next_sibling(&self) -> Option<NodeId> {
        self.next_sibling
    }
}

/// Owner of every node in a tree. The root is always a document node.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Create an empty document containing only the root node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeType::Document)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Append an element with attributes to `parent`
    pub fn append_element<'a, I>(&mut self, parent: NodeId, tag: impl Into<Tag>, attrs: I) -> NodeId
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut node = Node::new(NodeType::Element);
        node.tag = Some(tag.into());
        node.attributes = attrs
            .into_iter()
            .map(|(k, v)| Attribute::new(k, v))
            .collect();
        self.append(parent, node)
    }

    /// Append a text node to `parent`
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let mut node = Node::new(NodeType::Text);
        node.value = Some(text.to_string());
        self.append(parent, node)
    }

    /// Append a comment node to `parent`
    pub fn append_comment(&mut self, parent: NodeId, text: &str) -> NodeId {
        let mut node = Node::new(NodeType::Comment);
        node.value = Some(text.to_string());
        self.append(parent, node)
    }

    /// Append a doctype node to `parent`
    pub fn append_doctype(&mut self, parent: NodeId, name: &str) -> NodeId {
        let mut node = Node::new(NodeType::Doctype);
        node.value = Some(name.to_string());
        self.append(parent, node)
    }

    /// Append an empty document fragment to `parent`
    pub fn append_fragment(&mut self, parent: NodeId) -> NodeId {
        self.append(parent, Node::new(NodeType::DocumentFragment))
    }

    fn append(&mut self, parent: NodeId, mut node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = Some(parent);
        self.nodes.push(node);

        match self.nodes[parent.0].last_child {
            Some(last) => self.nodes[last.0].next_sibling = Some(id),
            None => self.nodes[parent.0].first_child = Some(id),
        }
        self.nodes[parent.0].last_child = Some(id);
        id
    }

    /// Iterate over the children of `id` in sibling order
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            document: self,
            next: self.get(id).first_child(),
        }
    }

    /// Iterate over the ancestors of `id`, nearest first
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            document: self,
            next: self.get(id).parent(),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Children<'a> {
    document: &'a Document,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.document.get(id).next_sibling();
        Some(id)
    }
}

pub struct Ancestors<'a> {
    document: &'a Document,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.document.get(id).parent();
        Some(id)
    }
}
