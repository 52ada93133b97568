//! Tag filters deciding which elements are emitted and which subtrees are walked.

use crate::node::{Node, Tag};

/// Capability shared by every tag filter role.
pub trait Filter {
    /// Replace the whole set
    fn set<I, T>(&mut self, tags: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Tag>;

    /// Append tags to the set
    fn add<I, T>(&mut self, tags: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Tag>;

    /// Remove the first occurrence of `tag`
    fn del(&mut self, tag: &Tag);

    /// Check whether `tag` is a member
    fn matches_tag(&self, tag: &Tag) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if this filter matches an element
    fn matches(&self, node: &Node) -> bool {
        node.tag.as_ref().is_some_and(|tag| self.matches_tag(tag))
    }
}

/// Ordered list of tags. Order is kept for read-back but does not affect matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<Tag>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }
}

impl Filter for TagSet {
    fn set<I, T>(&mut self, tags: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Tag>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
    }

    fn add<I, T>(&mut self, tags: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Tag>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
    }

    fn del(&mut self, tag: &Tag) {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
        }
    }

    fn matches_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    fn len(&self) -> usize {
        self.tags.len()
    }
}

impl<T: Into<Tag>> FromIterator<T> for TagSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// The three filter roles consulted during traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filters {
    /// Allow-list. When non-empty it is the only authority on emission.
    pub includes: TagSet,
    /// Deny-list, consulted only while `includes` is empty
    pub excludes: TagSet,
    /// Subtrees of matching elements are not walked
    pub ignores: TagSet,
}

impl Filters {
    /// Whether an element gets its own `createElement` statement
    pub fn is_eligible(&self, node: &Node) -> bool {
        self.includes.matches(node) || (self.includes.is_empty() && !self.excludes.matches(node))
    }

    /// Whether the children of an element are skipped
    pub fn is_ignored(&self, node: &Node) -> bool {
        self.ignores.matches(node)
    }
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            includes: TagSet::new(),
            excludes: [Tag::HTML, Tag::HEAD, Tag::BODY, Tag::SCRIPT].into_iter().collect(),
            ignores: [Tag::HEAD].into_iter().collect(),
        }
    }
}
