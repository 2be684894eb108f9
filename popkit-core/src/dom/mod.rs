// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Headless Visual Tree
//!
//! A small in-memory document tree that stands in for a browser DOM. Popups are
//! built as [Node]s and attached to a [Document], which makes them usable and
//! testable without a rendering engine.
//!
//! ## Overview
//!
//! - **[Document]**: owns the `body` element that acts as the default root container
//! - **[Node]**: a shared handle to an element or a text node
//! - **[NodeId]**: a process-unique node identifier
//!
//! Nodes are single-threaded handles (`Rc<RefCell<..>>`). Cloning a [Node]
//! clones the handle, not the subtree.
//!
//! ## Usage
//!
//! ```rust
//! use popkit_core::dom::Document;
//!
//! let document = Document::new();
//! let div = document.create_element("div");
//! div.add_class("popupjs");
//! div.set_style_property("color", "red");
//! div.set_inner_html("<b>hi</b>");
//! document.body().append_child(&div).unwrap();
//!
//! assert_eq!(
//!     document.body().outer_html(),
//!     r#"<body><div class="popupjs" style="color: red;"><b>hi</b></div></body>"#
//! );
//! ```

mod node;
mod serialize;

use std::sync::atomic::{AtomicU64, Ordering};

pub use node::Node;
pub use serialize::{escape_attribute, escape_text};

/// Unique identifier for nodes in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Generate a new unique node ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        NodeId(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// A document hosting a tree of nodes under a single `body` element.
///
/// The body is the default container popups attach to. Handles are cheap to
/// clone and all clones refer to the same tree.
#[derive(Debug, Clone)]
pub struct Document {
    body: Node,
}

impl Document {
    /// Create an empty document with a `<body>` root.
    pub fn new() -> Self {
        Self {
            body: Node::new_element("body"),
        }
    }

    /// The document's root container.
    pub fn body(&self) -> Node {
        self.body.clone()
    }

    /// Create a detached element with the given tag name.
    pub fn create_element(&self, tag: &str) -> Node {
        Node::new_element(tag)
    }

    /// Create a detached text node.
    pub fn create_text_node(&self, text: &str) -> Node {
        Node::new_text(text)
    }

    /// Returns `true` if `node` is the body or one of its descendants.
    pub fn contains(&self, node: &Node) -> bool {
        self.body.contains(node)
    }

    /// Serialize the whole document body.
    pub fn to_html(&self) -> String {
        self.body.outer_html()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
