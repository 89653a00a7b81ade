//! The node builder: tag + property bag + children → one element.
//!
//! Interpretation of a bag happens in two steps. [`partition`] splits it
//! into recognized groups without touching the input, then
//! [`create_element`] applies each group to a fresh node. Nothing here
//! fails: keys with values of the wrong shape are skipped.

use vortex_dom::{EventKind, NodeId};

use crate::action::Handler;
use crate::runtime::Dom;
use crate::value::{fmt_number, Child, Children, Props, Value};

/// Dataset key holding the symbolic action name (`data-action`).
pub const ACTION_MARKER: &str = "action";
/// Dataset key holding the symbolic state key (`data-state`).
pub const STATE_MARKER: &str = "state";

const HANDLER_PREFIX: &str = "on";
const RESERVED_KEYS: &[&str] = &["key", "ref"];

/// A property bag split into the groups the node builder understands.
#[derive(Default)]
pub struct PropParts {
    pub class_name: Option<String>,
    /// Style entries in application order; later entries win.
    pub style: Vec<(String, String)>,
    pub handlers: Vec<(EventKind, Handler)>,
    pub action: Option<String>,
    pub state_key: Option<String>,
    /// Primitive pass-through keys.
    pub attributes: Vec<(String, String)>,
    /// Keys skipped because their value has no native form.
    pub dropped: Vec<String>,
}

/// Splits `props` into recognized and pass-through groups.
pub fn partition(props: &Props) -> PropParts {
    let mut parts = PropParts::default();

    for (key, value) in props.iter() {
        match (key.as_str(), value) {
            ("className", Value::Str(s)) => parts.class_name = Some(s.clone()),
            ("style", Value::Map(style)) => {
                for (name, v) in style.iter() {
                    if let Some(css) = v.as_primitive() {
                        parts.style.push((name.clone(), css));
                    }
                }
            }
            ("style", _) => parts.dropped.push(key.clone()),
            ("dataAction", v) => parts.action = v.as_primitive(),
            ("dataState", v) => parts.state_key = v.as_primitive(),
            (k, _) if RESERVED_KEYS.contains(&k) => {}
            (k, Value::Handler(h)) => match handler_event(k) {
                Some(kind) => parts.handlers.push((kind, h.clone())),
                None => parts.dropped.push(key.clone()),
            },
            (k, v) => match v.as_primitive() {
                Some(attr) => parts.attributes.push((k.to_owned(), attr)),
                None => parts.dropped.push(k.to_owned()),
            },
        }
    }
    parts
}

/// `onClick` → `click`. Keys that are just `on`, or don't start with it,
/// are not handler keys.
fn handler_event(key: &str) -> Option<EventKind> {
    key.strip_prefix(HANDLER_PREFIX)
        .filter(|rest| !rest.is_empty())
        .map(EventKind::from_name)
}

/// Builds one detached element from `tag`, `props` and `children`.
///
/// - `className` replaces the class list.
/// - `style` entries are applied in order.
/// - `on*` handler keys bind native listeners on the node itself.
/// - `dataAction` / `dataState` become `data-action` / `data-state`.
/// - Remaining primitive values become attributes; other values are dropped.
/// - Bare-text children become one text node; list children are appended in
///   order, nodes directly and strings/numbers as text. Widget entries are
///   ignored here; widget builders resolve them first.
pub fn create_element(doc: &mut Dom, tag: &str, props: &Props, children: &Children) -> NodeId {
    let el = doc.create_element(tag);
    let parts = partition(props);

    if let Some(class_name) = parts.class_name.as_deref() {
        doc.set_class_name(el, class_name);
    }
    for (name, value) in &parts.style {
        doc.set_style_property(el, name, value);
    }
    for (name, value) in &parts.attributes {
        doc.set_attribute(el, name, value);
    }
    if let Some(action) = parts.action.as_deref() {
        doc.set_data(el, ACTION_MARKER, action);
    }
    if let Some(key) = parts.state_key.as_deref() {
        doc.set_data(el, STATE_MARKER, key);
    }
    if !parts.dropped.is_empty() {
        log::trace!("<{tag}>: dropped non-primitive props {:?}", parts.dropped);
    }

    append_children(doc, el, children);

    for (kind, h) in parts.handlers {
        doc.add_event_listener(el, kind, h);
    }
    el
}

/// Appends `children` under `parent` with the node builder's coercions.
pub fn append_children(doc: &mut Dom, parent: NodeId, children: &Children) {
    match children {
        Children::Text(text) => {
            let t = doc.create_text_node(text.as_str());
            let _ = doc.append_child(parent, t);
        }
        Children::List(list) => {
            for child in list {
                let node = match child {
                    Child::Node(n) => *n,
                    Child::Text(s) => doc.create_text_node(s.as_str()),
                    Child::Num(n) => doc.create_text_node(fmt_number(*n)),
                    Child::Widget(_) | Child::Empty => continue,
                };
                if let Err(e) = doc.append_child(parent, node) {
                    log::trace!("child skipped: {e}");
                }
            }
        }
    }
}

/// Builder-default classes first, then the caller's `className`.
pub fn join_classes(default: &str, caller: Option<&str>) -> String {
    default
        .split_whitespace()
        .chain(caller.unwrap_or_default().split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}
