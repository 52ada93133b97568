//! HtmlToJs - the main entry point for HTML to JavaScript conversion.

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::filter::{Filter, Filters};
use crate::node::{Document, NodeId, NodeType, Tag};
use crate::output::Output;
use crate::translate::{
    write_append_child, write_attributes, write_create_element, write_create_text_node,
};
use crate::variable::VariableNames;

/// Options for HtmlToJs
#[derive(Debug, Clone)]
pub struct HtmlToJsOptions {
    /// Prefix of every generated variable name
    pub prefix: String,

    /// Append target for nodes without an emitted ancestor,
    /// such as `document.body` or `document.documentElement`
    pub default_parent: String,

    /// Emit text that would be appended to the default parent.
    /// Such text is dropped when false.
    pub keep_root_text: bool,

    /// Include, exclude and ignore filters
    pub filters: Filters,
}

impl Default for HtmlToJsOptions {
    fn default() -> Self {
        Self {
            prefix: "_".to_string(),
            default_parent: "document.body".to_string(),
            keep_root_text: false,
            filters: Filters::default(),
        }
    }
}

/// Variable names assigned to emitted nodes during one conversion, in emission order
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    names: IndexMap<NodeId, String>,
}

impl Bindings {
    pub fn get(&self, node: NodeId) -> Option<&str> {
        self.names.get(&node).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &str)> {
        self.names.iter().map(|(id, name)| (*id, name.as_str()))
    }

    fn insert(&mut self, node: NodeId, name: String) {
        self.names.insert(node, name);
    }
}

/// Converts documents into JavaScript and buffers the result.
///
/// Repeated conversions append to the same buffer and continue the variable
/// sequence; call [`HtmlToJs::reset`] to start over.
pub struct HtmlToJs {
    options: HtmlToJsOptions,
    names: VariableNames,
    output: Output,
}

impl HtmlToJs {
    /// Create a new HtmlToJs with default options
    pub fn new() -> Self {
        Self::with_options(HtmlToJsOptions::default())
    }

    /// Create a HtmlToJs with custom options
    pub fn with_options(options: HtmlToJsOptions) -> Self {
        Self {
            names: VariableNames::new(&options.prefix),
            options,
            output: Output::new(),
        }
    }

    /// Read HTML from `reader`, parse it and buffer the generated script.
    ///
    /// On a read failure nothing is converted and the buffer is left as it was.
    #[cfg(feature = "html")]
    pub fn parse<R: std::io::Read>(&mut self, mut reader: R) -> crate::Result<()> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(crate::HtmlToJsError::Parse)?;
        self.parse_str(&String::from_utf8_lossy(&bytes));
        Ok(())
    }

    /// Parse an HTML string and buffer the generated script
    #[cfg(feature = "html")]
    pub fn parse_str(&mut self, html: &str) {
        let document = crate::html::parse_html(html);
        self.convert(&document);
    }

    /// Convert an already built tree and buffer the generated script
    pub fn convert(&mut self, document: &Document) -> Bindings {
        let before = self.output.len();
        let mut visitor = Visitor {
            document,
            options: &self.options,
            names: &mut self.names,
            output: &mut self.output,
            bindings: Bindings::default(),
        };
        visitor.visit_children(document.root());
        let bindings = visitor.bindings;

        debug!(
            nodes = document.len(),
            elements = bindings.len(),
            bytes = self.output.len() - before,
            "converted document"
        );
        bindings
    }

    /// Clear the buffer and restart variable names at `a`
    pub fn reset(&mut self) {
        self.output.clear();
        self.names.reset();
    }

    /// Get the buffered script
    pub fn as_str(&self) -> &str {
        self.output.as_str()
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    /// Drain the buffered script into `writer`
    pub fn write_to<W: std::io::Write>(&mut self, writer: &mut W) -> std::io::Result<u64> {
        self.output.write_to(writer)
    }

    /// Get the current options
    pub fn options(&self) -> &HtmlToJsOptions {
        &self.options
    }

    pub fn set_prefix(&mut self, prefix: &str) -> &mut Self {
        self.options.prefix = prefix.to_string();
        self.names.set_prefix(prefix);
        self
    }

    pub fn set_default_parent(&mut self, default_parent: &str) -> &mut Self {
        self.options.default_parent = default_parent.to_string();
        self
    }

    pub fn set_keep_root_text(&mut self, keep: bool) -> &mut Self {
        self.options.keep_root_text = keep;
        self
    }

    pub fn filters(&self) -> &Filters {
        &self.options.filters
    }

    pub fn filters_mut(&mut self) -> &mut Filters {
        &mut self.options.filters
    }

    /// Emit only elements with this tag (and other included tags)
    pub fn include(&mut self, tag: &str) -> &mut Self {
        self.options.filters.includes.add([tag]);
        self
    }

    /// Never emit elements with this tag
    pub fn exclude(&mut self, tag: &str) -> &mut Self {
        self.options.filters.excludes.add([tag]);
        self
    }

    /// Skip the children of elements with this tag
    pub fn ignore(&mut self, tag: &str) -> &mut Self {
        self.options.filters.ignores.add([tag]);
        self
    }
}

impl Default for HtmlToJs {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for HtmlToJs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.output.as_str())
    }
}

/// State of a single depth-first walk
struct Visitor<'a> {
    document: &'a Document,
    options: &'a HtmlToJsOptions,
    names: &'a mut VariableNames,
    output: &'a mut Output,
    bindings: Bindings,
}

impl Visitor<'_> {
    /// Walk the descendants of `parent` in document order.
    ///
    /// Pending siblings are kept on an explicit stack so nesting depth is not
    /// bounded by the call stack.
    fn visit_children(&mut self, parent: NodeId) {
        let mut stack = vec![self.document.children(parent)];
        while let Some(children) = stack.last_mut() {
            let Some(child) = children.next() else {
                stack.pop();
                continue;
            };

            let descend = match self.document.get(child).node_type {
                NodeType::Text => {
                    self.visit_text(child);
                    false
                }
                NodeType::Element => self.visit_element(child),
                _ => true,
            };
            if descend {
                stack.push(self.document.children(child));
            }
        }
    }

    fn visit_text(&mut self, id: NodeId) {
        let node = self.document.get(id);
        let text = node.value.as_deref().unwrap_or("").trim();
        if text.is_empty() {
            return;
        }

        // script bodies are inlined as code
        let in_script = node
            .parent()
            .is_some_and(|parent| self.document.get(parent).has_tag(&Tag::SCRIPT));
        if in_script {
            self.output.raw_line(text);
            return;
        }

        let parent = match self.parent_binding(id) {
            Some(parent) => parent.to_string(),
            None if self.options.keep_root_text => self.options.default_parent.clone(),
            None => {
                trace!(node = id.index(), "dropping text without emitted parent");
                return;
            }
        };

        let var = self.names.generate();
        write_create_text_node(self.output, &var, text);
        write_append_child(self.output, &parent, &var);
    }

    /// Emit the element if eligible. Returns whether its children are walked.
    fn visit_element(&mut self, id: NodeId) -> bool {
        let node = self.document.get(id);
        let filters = &self.options.filters;

        if filters.is_eligible(node) {
            let var = self.names.generate();
            trace!(node = id.index(), tag = node.tag_name(), var = %var, "emitting element");

            write_create_element(self.output, &var, node.tag_name());
            write_attributes(self.output, &var, &node.attributes);
            let parent = self
                .parent_binding(id)
                .unwrap_or(self.options.default_parent.as_str())
                .to_string();
            write_append_child(self.output, &parent, &var);
            self.bindings.insert(id, var);
        }

        !filters.is_ignored(node)
    }

    /// Variable of the nearest emitted ancestor
    fn parent_binding(&self, id: NodeId) -> Option<&str> {
        self.document
            .ancestors(id)
            .find_map(|ancestor| self.bindings.get(ancestor))
    }
}
