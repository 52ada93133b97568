//! # htmltojs
//!
//! Convert HTML documents into JavaScript that rebuilds the same DOM.
//!
//! Every emitted element becomes a `document.createElement` call followed by
//! property assignments for its attributes and an `appendChild` onto the
//! nearest emitted ancestor. Text becomes `document.createTextNode`, and the
//! bodies of `<script>` elements are inlined as code.
//!
//! ## Design
//!
//! The converter walks a small arena-backed [`Document`] tree. Any parser can
//! build one; the default `html` feature provides [`parse_html`] on top of
//! html5ever. Which elements are emitted is controlled by three tag filters:
//!
//! - **includes**: when non-empty, only these tags are emitted
//! - **excludes**: tags never emitted (`html`, `head`, `body`, `script` by default)
//! - **ignores**: tags whose children are not walked (`head` by default)
//!
//! ## Example (Document-based)
//!
//! ```rust
//! use htmltojs::{Document, HtmlToJs};
//!
//! let mut document = Document::new();
//! let p = document.append_element(document.root(), "p", [("class", "lead")]);
//! document.append_text(p, "Hello World");
//!
//! let mut converter = HtmlToJs::new();
//! converter.convert(&document);
//! assert_eq!(
//!     converter.as_str(),
//!     r#"var _a = document.createElement("p");
//! _a.className = "lead";
//! document.body.appendChild(_a);
//! var _b = document.createTextNode("Hello World");
//! _a.appendChild(_b);
//! "#
//! );
//! ```
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use htmltojs::HtmlToJs;
//!
//! let mut converter = HtmlToJs::new();
//! converter.parse("<h1>Hello World</h1>".as_bytes()).unwrap();
//! assert!(converter.as_str().starts_with("var _a = document.createElement(\"h1\");"));
//! ```

#[cfg(feature = "html")]
pub mod html;
pub mod filter;
pub mod node;
mod output;
mod service;
pub mod translate;
mod utilities;
mod variable;

#[cfg(feature = "html")]
pub use html::parse_html;
pub use filter::{Filter, Filters, TagSet};
pub use node::{Attribute, Document, Node, NodeId, NodeType, Tag};
pub use output::Output;
pub use service::{Bindings, HtmlToJs, HtmlToJsOptions};
pub use utilities::*;
pub use variable::VariableNames;

/// Error type for htmltojs operations
#[derive(Debug, thiserror::Error)]
pub enum HtmlToJsError {
    #[error("Parse error: {0}")]
    Parse(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HtmlToJsError>;
