use std::fmt;

use slotmap::SlotMap;

use crate::error::DomError;
use crate::event::EventKind;
use crate::node::{ElementData, Node, NodeId, NodeKind};
use crate::selector::Selector;

// ── Document ──────────────────────────────────────────────────────────────

/// A live document tree.
///
/// Owns every node it ever created. Detached nodes stay alive until they are
/// attached somewhere or released with [`remove_subtree`](Self::remove_subtree)
/// / [`clear_children`](Self::clear_children).
///
/// `L` is the listener payload stored by [`add_event_listener`](Self::add_event_listener);
/// the document never calls it, it only hands clones back through
/// [`listeners`](Self::listeners).
pub struct Document<L = ()> {
    nodes: SlotMap<NodeId, Node<L>>,
    root: NodeId,
    html: NodeId,
    head: NodeId,
    body: NodeId,
}

impl<L> Document<L> {
    /// Creates `#document > html > (head, body)`.
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node::new(NodeKind::Document));
        let html = nodes.insert(Node::new(NodeKind::Element(ElementData::new("html"))));
        let head = nodes.insert(Node::new(NodeKind::Element(ElementData::new("head"))));
        let body = nodes.insert(Node::new(NodeKind::Element(ElementData::new("body"))));

        let mut doc = Self { nodes, root, html, head, body };
        doc.link(root, html);
        doc.link(html, head);
        doc.link(html, body);
        doc
    }

    // ── well-known nodes ──────────────────────────────────────────────────

    /// The document node itself; target of document-level listeners.
    pub fn document_node(&self) -> NodeId {
        self.root
    }

    /// The `<html>` element (`document.documentElement`).
    pub fn document_element(&self) -> NodeId {
        self.html
    }

    pub fn head(&self) -> NodeId {
        self.head
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    // ── lookup ────────────────────────────────────────────────────────────

    /// `true` while `id` refers to a live node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of live nodes, detached ones included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<L>> {
        self.nodes.get(id)
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.nodes.get(id).and_then(Node::element)
    }

    fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.nodes.get_mut(id).and_then(Node::element_mut)
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|el| el.tag.as_str())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|n| n.parent)
    }

    /// Children of `id`; empty for text nodes and stale ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Position of `id` among its parent's children.
    pub fn index_in_parent(&self, id: NodeId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).iter().position(|&c| c == id)
    }

    /// `id` followed by each of its ancestors, innermost first.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_, L> {
        Ancestors { doc: self, next: self.contains(id).then_some(id) }
    }

    /// Nearest inclusive ancestor whose element data satisfies `pred`.
    pub fn closest(&self, id: NodeId, pred: impl Fn(&ElementData) -> bool) -> Option<NodeId> {
        self.ancestors(id).find(|&n| self.element(n).is_some_and(&pred))
    }

    /// Nearest inclusive ancestor carrying `data-<key>`, with the marker value.
    pub fn closest_with_data(&self, id: NodeId, key: &str) -> Option<(NodeId, &str)> {
        self.ancestors(id).find_map(|n| {
            self.element(n)
                .and_then(|el| el.dataset.get(key))
                .map(|v| (n, v.as_str()))
        })
    }

    /// Dispatch path of an event: the target, then every ancestor up to the
    /// document node (or the top of a detached subtree).
    pub fn event_path(&self, target: NodeId) -> Vec<NodeId> {
        self.ancestors(target).collect()
    }

    /// First element in tree order (from the document node) matching `selector`.
    ///
    /// Unparseable selectors match nothing.
    pub fn query_selector(&self, selector: &str) -> Option<NodeId> {
        let sel = Selector::parse(selector)?;
        self.descendants(self.root).find(|&n| self.element(n).is_some_and(|el| sel.matches(el)))
    }

    /// Every element in tree order matching `selector`.
    pub fn query_selector_all(&self, selector: &str) -> Vec<NodeId> {
        let Some(sel) = Selector::parse(selector) else {
            return Vec::new();
        };
        self.descendants(self.root)
            .filter(|&n| self.element(n).is_some_and(|el| sel.matches(el)))
            .collect()
    }

    /// Pre-order walk of the subtree rooted at `id`, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(self.children(next).iter().rev().copied());
            Some(next)
        })
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self, id: NodeId) -> String {
        if let Some(Node { kind: NodeKind::Text(t), .. }) = self.nodes.get(id) {
            return t.clone();
        }
        let mut out = String::new();
        for n in self.descendants(id) {
            if let Some(Node { kind: NodeKind::Text(t), .. }) = self.nodes.get(n) {
                out.push_str(t);
            }
        }
        out
    }

    // ── creation ──────────────────────────────────────────────────────────

    /// Creates a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.insert(Node::new(NodeKind::Element(ElementData::new(tag))))
    }

    /// Creates a detached text node.
    pub fn create_text_node(&mut self, text: impl Into<String>) -> NodeId {
        self.nodes.insert(Node::new(NodeKind::Text(text.into())))
    }

    // ── structure ─────────────────────────────────────────────────────────

    /// Appends `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.check_insert(parent, child)?;
        self.detach(child);
        self.link(parent, child);
        Ok(())
    }

    /// Puts `new` where `old` was under `parent`, keeping its sibling index.
    ///
    /// `old` is detached but stays alive; the caller decides whether to
    /// [`remove_subtree`](Self::remove_subtree) it. Returns `old`.
    pub fn replace_child(
        &mut self,
        parent: NodeId,
        new: NodeId,
        old: NodeId,
    ) -> Result<NodeId, DomError> {
        if !self.contains(old) {
            return Err(DomError::UnknownNode(old));
        }
        if self.parent(old) != Some(parent) {
            return Err(DomError::NotAChild { parent, child: old });
        }
        if new == old {
            return Ok(old);
        }
        self.check_insert(parent, new)?;
        // Detaching `new` first may shift `old` when both share `parent`.
        self.detach(new);
        let index = self
            .index_in_parent(old)
            .ok_or(DomError::NotAChild { parent, child: old })?;
        self.nodes[parent].children[index] = new;
        self.nodes[new].parent = Some(parent);
        self.nodes[old].parent = None;
        Ok(old)
    }

    /// Detaches `child` from `parent` without freeing it.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<NodeId, DomError> {
        if !self.contains(child) {
            return Err(DomError::UnknownNode(child));
        }
        if self.parent(child) != Some(parent) {
            return Err(DomError::NotAChild { parent, child });
        }
        self.detach(child);
        Ok(child)
    }

    /// Detaches `id` and frees it together with every descendant.
    ///
    /// Returns how many nodes were freed. The well-known nodes (document,
    /// html, head, body) are never freed.
    pub fn remove_subtree(&mut self, id: NodeId) -> usize {
        if !self.contains(id) || self.is_well_known(id) {
            return 0;
        }
        self.detach(id);
        let doomed: Vec<NodeId> = std::iter::once(id).chain(self.descendants(id)).collect();
        for n in &doomed {
            self.nodes.remove(*n);
        }
        doomed.len()
    }

    /// Frees every child subtree of `parent` (`innerHTML = ""`).
    pub fn clear_children(&mut self, parent: NodeId) -> usize {
        let children: Vec<NodeId> = self.children(parent).to_vec();
        children.into_iter().map(|c| self.remove_subtree(c)).sum()
    }

    fn is_well_known(&self, id: NodeId) -> bool {
        id == self.root || id == self.html || id == self.head || id == self.body
    }

    fn check_insert(&self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        let Some(p) = self.nodes.get(parent) else {
            return Err(DomError::UnknownNode(parent));
        };
        if !self.contains(child) {
            return Err(DomError::UnknownNode(child));
        }
        if !p.is_container() {
            return Err(DomError::LeafNode(parent));
        }
        if self.ancestors(parent).any(|a| a == child) {
            return Err(DomError::Cycle { parent, child });
        }
        Ok(())
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(old_parent) = self.nodes.get_mut(child).and_then(|n| n.parent.take()) {
            if let Some(p) = self.nodes.get_mut(old_parent) {
                p.children.retain(|&c| c != child);
            }
        }
    }

    fn link(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent].children.push(child);
        self.nodes[child].parent = Some(parent);
    }

    // ── element properties ────────────────────────────────────────────────
    //
    // Setters on stale ids or text nodes are no-ops.

    /// Replaces the class list with the whitespace-split tokens of `class_name`.
    pub fn set_class_name(&mut self, id: NodeId, class_name: &str) {
        if let Some(el) = self.element_mut(id) {
            el.classes = class_name.split_whitespace().map(str::to_owned).collect();
        }
    }

    pub fn class_name(&self, id: NodeId) -> Option<String> {
        self.element(id).map(ElementData::class_name)
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id).is_some_and(|el| el.has_class(class))
    }

    /// Sets a native attribute. `value` and `checked` also seed the live
    /// form state the way the DOM's default value does.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        let Some(el) = self.element_mut(id) else {
            return;
        };
        match name {
            "class" | "className" => {
                el.classes = value.split_whitespace().map(str::to_owned).collect();
                return;
            }
            "value" if el.value.is_none() => el.value = Some(value.to_owned()),
            "checked" => el.checked = value != "false",
            _ => {}
        }
        el.attributes.insert(name.to_owned(), value.to_owned());
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)
            .and_then(|el| el.attributes.get(name))
            .map(String::as_str)
    }

    /// Sets one inline style property. Camel-case names (`fontSize`) are
    /// normalized to CSS names (`font-size`); custom properties (`--x`) are
    /// kept verbatim. An empty value removes the property.
    pub fn set_style_property(&mut self, id: NodeId, name: &str, value: &str) {
        let name = css_property_name(name);
        if let Some(el) = self.element_mut(id) {
            if value.is_empty() {
                el.style.shift_remove(&name);
            } else {
                el.style.insert(name, value.to_owned());
            }
        }
    }

    pub fn style_property(&self, id: NodeId, name: &str) -> Option<&str> {
        let name = css_property_name(name);
        self.element(id)
            .and_then(|el| el.style.get(&name))
            .map(String::as_str)
    }

    /// Writes `data-<key>`.
    pub fn set_data(&mut self, id: NodeId, key: &str, value: &str) {
        if let Some(el) = self.element_mut(id) {
            el.dataset.insert(key.to_owned(), value.to_owned());
        }
    }

    pub fn data(&self, id: NodeId, key: &str) -> Option<&str> {
        self.element(id)
            .and_then(|el| el.dataset.get(key))
            .map(String::as_str)
    }

    /// Sets the live form value, as typing into an `<input>` would.
    pub fn set_value(&mut self, id: NodeId, value: impl Into<String>) {
        if let Some(el) = self.element_mut(id) {
            el.value = Some(value.into());
        }
    }

    pub fn value(&self, id: NodeId) -> Option<&str> {
        self.element(id).and_then(|el| el.value.as_deref())
    }

    pub fn set_checked(&mut self, id: NodeId, checked: bool) {
        if let Some(el) = self.element_mut(id) {
            el.checked = checked;
        }
    }

    pub fn checked(&self, id: NodeId) -> bool {
        self.element(id).is_some_and(|el| el.checked)
    }

    // ── listeners ─────────────────────────────────────────────────────────

    /// Registers `listener` for `kind` on `id` (element or document node).
    pub fn add_event_listener(&mut self, id: NodeId, kind: EventKind, listener: L) {
        match self.nodes.get_mut(id) {
            Some(node) if node.is_container() => node.listeners.push((kind, listener)),
            _ => log::trace!("listener for `{kind}` dropped: {id:?} cannot listen"),
        }
    }

    pub fn listener_count(&self, id: NodeId) -> usize {
        self.nodes.get(id).map_or(0, |n| n.listeners.len())
    }
}

impl<L: Clone> Document<L> {
    /// Clones of the listeners registered on `id` for `kind`, in
    /// registration order.
    pub fn listeners(&self, id: NodeId, kind: &EventKind) -> Vec<L> {
        self.nodes
            .get(id)
            .map(|n| {
                n.listeners
                    .iter()
                    .filter(|(k, _)| k == kind)
                    .map(|(_, l)| l.clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl<L> Default for Document<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> fmt::Debug for Document<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("nodes", &self.nodes.len())
            .field("body", &self.body)
            .finish()
    }
}

// ── Ancestors ─────────────────────────────────────────────────────────────

/// Iterator returned by [`Document::ancestors`].
pub struct Ancestors<'a, L> {
    doc: &'a Document<L>,
    next: Option<NodeId>,
}

impl<L> Iterator for Ancestors<'_, L> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.doc.parent(current);
        Some(current)
    }
}

/// `fontSize` → `font-size`; `--x` and already-kebab names pass through.
fn css_property_name(name: &str) -> String {
    if name.starts_with("--") {
        return name.to_owned();
    }
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
