use indexmap::IndexMap;
use slotmap::new_key_type;

use crate::event::EventKind;

new_key_type! {
    /// Generational handle to a node in a [`Document`](crate::Document).
    pub struct NodeId;
}

/// Element payload: everything an element carries besides its children.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementData {
    pub tag: String,
    /// Whitespace-split `class` tokens, in assignment order.
    pub classes: Vec<String>,
    /// Native attributes other than `class`, `style` and `data-*`.
    pub attributes: IndexMap<String, String>,
    /// Inline style, keyed by CSS property name (`font-size`, `--primary-color`).
    pub style: IndexMap<String, String>,
    /// `data-*` entries, keyed without the `data-` prefix.
    pub dataset: IndexMap<String, String>,
    /// Live form value (`input.value`).
    pub value: Option<String>,
    /// Live checked flag (`input.checked`).
    pub checked: bool,
}

impl ElementData {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into().to_ascii_lowercase(), ..Self::default() }
    }

    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// The single document node at the top of the tree.
    Document,
    Element(ElementData),
    Text(String),
}

/// One arena slot.
pub struct Node<L> {
    pub kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) listeners: Vec<(EventKind, L)>,
}

impl<L> Node<L> {
    pub(crate) fn new(kind: NodeKind) -> Self {
        Self { kind, parent: None, children: Vec::new(), listeners: Vec::new() }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn element(&self) -> Option<&ElementData> {
        match &self.kind {
            NodeKind::Element(el) => Some(el),
            _ => None,
        }
    }

    pub(crate) fn element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.kind {
            NodeKind::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Text nodes are leaves; everything else may hold children.
    pub fn is_container(&self) -> bool {
        !matches!(self.kind, NodeKind::Text(_))
    }
}
