// SPDX-License-Identifier: MIT OR Apache-2.0

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use indexmap::{IndexMap, IndexSet};

use super::serialize;
use super::NodeId;
use crate::error::DomError;

pub(super) enum NodeKind {
    Element(ElementData),
    Text(String),
}

pub(super) struct ElementData {
    pub(super) tag: String,
    pub(super) classes: IndexSet<String>,
    pub(super) style: IndexMap<String, String>,
    pub(super) inner_html: String,
}

pub(super) struct NodeData {
    id: NodeId,
    pub(super) kind: NodeKind,
    parent: Weak<RefCell<NodeData>>,
    pub(super) children: Vec<Node>,
}

/// A shared handle to an element or text node of the visual tree.
///
/// Equality is identity: two handles are equal when they point at the same node.
/// Class and style operations on text nodes are no-ops.
#[derive(Clone)]
pub struct Node(Rc<RefCell<NodeData>>);

impl Node {
    pub(crate) fn new_element(tag: &str) -> Self {
        Self::from_kind(NodeKind::Element(ElementData {
            tag: tag.to_ascii_lowercase(),
            classes: IndexSet::new(),
            style: IndexMap::new(),
            inner_html: String::new(),
        }))
    }

    pub(crate) fn new_text(text: &str) -> Self {
        Self::from_kind(NodeKind::Text(text.to_string()))
    }

    fn from_kind(kind: NodeKind) -> Self {
        let id = NodeId::new();
        log::trace!("created node {:?}", id);
        Self(Rc::new(RefCell::new(NodeData {
            id,
            kind,
            parent: Weak::new(),
            children: Vec::new(),
        })))
    }

    /// The node's unique id.
    pub fn id(&self) -> NodeId {
        self.0.borrow().id
    }

    /// Returns `true` for elements, `false` for text nodes.
    pub fn is_element(&self) -> bool {
        matches!(self.0.borrow().kind, NodeKind::Element(_))
    }

    /// The lowercase tag name, or `None` for text nodes.
    pub fn tag_name(&self) -> Option<String> {
        match &self.0.borrow().kind {
            NodeKind::Element(element) => Some(element.tag.clone()),
            NodeKind::Text(_) => None,
        }
    }

    /// The text of a text node, or `None` for elements.
    pub fn text(&self) -> Option<String> {
        match &self.0.borrow().kind {
            NodeKind::Text(text) => Some(text.clone()),
            NodeKind::Element(_) => None,
        }
    }

    /// The parent node, if attached.
    pub fn parent(&self) -> Option<Node> {
        self.0.borrow().parent.upgrade().map(Node)
    }

    /// A snapshot of the node's children.
    pub fn children(&self) -> Vec<Node> {
        self.0.borrow().children.clone()
    }

    /// Returns `true` if `other` is this node or one of its descendants.
    pub fn contains(&self, other: &Node) -> bool {
        let mut current = Some(other.clone());
        while let Some(node) = current {
            if &node == self {
                return true;
            }
            current = node.parent();
        }
        false
    }

    fn with_element<R>(&self, f: impl FnOnce(&ElementData) -> R) -> Option<R> {
        match &self.0.borrow().kind {
            NodeKind::Element(element) => Some(f(element)),
            NodeKind::Text(_) => None,
        }
    }

    fn with_element_mut<R>(&self, f: impl FnOnce(&mut ElementData) -> R) -> Option<R> {
        match &mut self.0.borrow_mut().kind {
            NodeKind::Element(element) => Some(f(element)),
            NodeKind::Text(_) => None,
        }
    }

    /// Add a class. Returns `true` if the class was not present before.
    pub fn add_class(&self, class: &str) -> bool {
        self.with_element_mut(|element| element.classes.insert(class.to_string()))
            .unwrap_or(false)
    }

    /// Remove a class. Returns `true` if the class was present.
    pub fn remove_class(&self, class: &str) -> bool {
        self.with_element_mut(|element| element.classes.shift_remove(class))
            .unwrap_or(false)
    }

    /// Check whether the class is present.
    pub fn has_class(&self, class: &str) -> bool {
        self.with_element(|element| element.classes.contains(class))
            .unwrap_or(false)
    }

    /// The classes in insertion order.
    pub fn classes(&self) -> Vec<String> {
        self.with_element(|element| element.classes.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Set an inline style property. An empty value removes the property.
    pub fn set_style_property(&self, name: &str, value: &str) {
        self.with_element_mut(|element| {
            if value.is_empty() {
                element.style.shift_remove(name);
            } else {
                element.style.insert(name.to_string(), value.to_string());
            }
        });
    }

    /// Get an inline style property.
    pub fn style_property(&self, name: &str) -> Option<String> {
        self.with_element(|element| element.style.get(name).cloned())
            .flatten()
    }

    /// All inline style properties in insertion order.
    pub fn style_properties(&self) -> Vec<(String, String)> {
        self.with_element(|element| {
            element
                .style
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect()
        })
        .unwrap_or_default()
    }

    /// Replace the raw inner markup. Existing children are detached.
    pub fn set_inner_html(&self, markup: &str) {
        if !self.is_element() {
            return;
        }

        let children = std::mem::take(&mut self.0.borrow_mut().children);
        for child in children {
            child.0.borrow_mut().parent = Weak::new();
        }

        self.with_element_mut(|element| element.inner_html = markup.to_string());
    }

    /// The raw inner markup exactly as last set. Empty for text nodes.
    pub fn inner_html(&self) -> String {
        self.with_element(|element| element.inner_html.clone())
            .unwrap_or_default()
    }

    /// Append `child` as the last child of this node.
    ///
    /// A child that already has a parent is moved.
    pub fn append_child(&self, child: &Node) -> Result<(), DomError> {
        if !self.is_element() {
            return Err(DomError::HierarchyRequest("parent is not an element"));
        }
        if child.contains(self) {
            return Err(DomError::HierarchyRequest("child contains the parent"));
        }

        child.remove();
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child.clone());
        log::trace!("appended {:?} to {:?}", child.id(), self.id());
        Ok(())
    }

    /// Detach this node from its parent. Does nothing when already detached.
    pub fn remove(&self) {
        let Some(parent) = self.parent() else {
            return;
        };

        parent
            .0
            .borrow_mut()
            .children
            .retain(|sibling| !Rc::ptr_eq(&sibling.0, &self.0));
        self.0.borrow_mut().parent = Weak::new();
        log::trace!("removed {:?} from {:?}", self.id(), parent.id());
    }

    /// Serialize this node and its subtree to HTML markup.
    pub fn outer_html(&self) -> String {
        let mut out = String::new();
        serialize::write_node(self, &mut out);
        out
    }

    pub(super) fn data(&self) -> std::cell::Ref<'_, NodeData> {
        self.0.borrow()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0.borrow();
        match &data.kind {
            NodeKind::Element(element) => f
                .debug_struct("Element")
                .field("id", &data.id)
                .field("tag", &element.tag)
                .field("classes", &element.classes)
                .field("children", &data.children.len())
                .finish(),
            NodeKind::Text(text) => f
                .debug_struct("Text")
                .field("id", &data.id)
                .field("text", text)
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dom::Document;
    use crate::error::DomError;

    #[test]
    fn test_class_list_has_set_semantics() {
        let document = Document::new();
        let node = document.create_element("div");

        assert!(node.add_class("a"));
        assert!(node.add_class("b"));
        assert!(!node.add_class("a"));
        assert_eq!(node.classes(), vec!["a", "b"]);

        assert!(node.remove_class("a"));
        assert!(!node.remove_class("a"));
        assert!(!node.has_class("a"));
        assert_eq!(node.classes(), vec!["b"]);
    }

    #[test]
    fn test_style_empty_value_removes() {
        let document = Document::new();
        let node = document.create_element("div");

        node.set_style_property("color", "red");
        node.set_style_property("top", "0");
        node.set_style_property("color", "blue");
        assert_eq!(node.style_property("color").as_deref(), Some("blue"));
        assert_eq!(
            node.style_properties(),
            vec![
                ("color".to_string(), "blue".to_string()),
                ("top".to_string(), "0".to_string()),
            ]
        );

        node.set_style_property("color", "");
        assert_eq!(node.style_property("color"), None);
    }

    #[test]
    fn test_text_node_ignores_element_operations() {
        let document = Document::new();
        let text = document.create_text_node("hello");

        assert!(!text.is_element());
        assert!(!text.add_class("a"));
        assert!(text.classes().is_empty());
        text.set_style_property("color", "red");
        assert_eq!(text.style_property("color"), None);
        text.set_inner_html("<b>x</b>");
        assert_eq!(text.inner_html(), "");
        assert_eq!(text.text().as_deref(), Some("hello"));
    }

    #[test]
    fn test_append_moves_child() {
        let document = Document::new();
        let first = document.create_element("div");
        let second = document.create_element("div");
        let child = document.create_element("span");

        first.append_child(&child).unwrap();
        second.append_child(&child).unwrap();

        assert!(first.children().is_empty());
        assert_eq!(second.children(), vec![child.clone()]);
        assert_eq!(child.parent(), Some(second));
    }

    #[test]
    fn test_append_rejects_cycles_and_text_parents() {
        let document = Document::new();
        let outer = document.create_element("div");
        let inner = document.create_element("div");
        let text = document.create_text_node("t");
        outer.append_child(&inner).unwrap();

        assert_eq!(
            outer.append_child(&outer),
            Err(DomError::HierarchyRequest("child contains the parent"))
        );
        assert!(inner.append_child(&outer).is_err());
        assert_eq!(
            text.append_child(&inner),
            Err(DomError::HierarchyRequest("parent is not an element"))
        );
        assert_eq!(inner.parent(), Some(outer));
    }

    #[test]
    fn test_set_inner_html_detaches_children() {
        let document = Document::new();
        let node = document.create_element("div");
        let child = document.create_element("span");
        node.append_child(&child).unwrap();

        node.set_inner_html("<i>x</i>");

        assert!(node.children().is_empty());
        assert_eq!(child.parent(), None);
        assert_eq!(node.inner_html(), "<i>x</i>");
    }

    #[test]
    fn test_remove() {
        let document = Document::new();
        let node = document.create_element("div");
        document.body().append_child(&node).unwrap();

        node.remove();
        node.remove();

        assert!(document.body().children().is_empty());
        assert_eq!(node.parent(), None);
    }
}
