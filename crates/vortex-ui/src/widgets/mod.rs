//! Flutter-style composite builders.
//!
//! Every builder is a free function `(cx, props, children) → NodeId` that
//! resolves nested widgets in its slots first and then makes exactly one
//! node-builder call for its own element. Builder-default classes always
//! precede the caller's `className`; builder-default style properties are
//! overridden one by one by the caller's `style`.

mod button;
mod container;
mod flex;
mod material_app;
mod scaffold;
mod text;

pub use button::{elevated_button, floating_action_button, icon, ON_PRESSED};
pub use container::{center, container, sized_box};
pub use flex::{column, row, MainAxisAlignment};
pub use material_app::material_app;
pub use scaffold::{app_bar, scaffold};
pub use text::text;

use vortex_dom::NodeId;

use crate::element::join_classes;
use crate::runtime::BuildCtx;
use crate::value::{Child, Children, Props, Value};

/// The caller's bag with builder defaults folded in underneath it.
fn with_defaults(props: &Props, class: &str, style: Option<Props>) -> Props {
    let mut out = props.clone();
    out.insert("className", join_classes(class, props.str("className")));
    if let Some(style) = style {
        out.insert("style", style.merged(props.map("style")));
    }
    out
}

/// Title-like slot: strings and numbers become a [`text`] first.
fn resolve_titled(cx: &mut BuildCtx<'_>, slot: &str, value: &Value) -> Option<NodeId> {
    match value {
        Value::Str(_) | Value::Num(_) => {
            let title = value.as_primitive()?;
            Some(text(cx, title, Props::new()))
        }
        other => cx.resolve_slot(slot, other),
    }
}

/// A slot holding either one resolvable value or a list of them. Nulls in a
/// list are skipped silently.
fn resolve_many(cx: &mut BuildCtx<'_>, slot: &str, value: &Value) -> Vec<NodeId> {
    match value {
        Value::List(items) => items.iter().filter_map(|item| cx.resolve_slot(slot, item)).collect(),
        single => cx.resolve_slot(slot, single).into_iter().collect(),
    }
}

/// Nodes among `children`, with widgets built; text entries are dropped.
fn child_nodes(cx: &mut BuildCtx<'_>, children: &Children) -> Vec<NodeId> {
    match cx.resolve_children(children) {
        Children::Text(_) => Vec::new(),
        Children::List(list) => list
            .into_iter()
            .filter_map(|c| match c {
                Child::Node(n) => Some(n),
                _ => None,
            })
            .collect(),
    }
}

/// `child` wins over the positional children.
fn single_child_or(cx: &mut BuildCtx<'_>, props: &Props, children: &Children) -> Children {
    match props.present("child").and_then(|v| cx.resolve_slot("child", v)) {
        Some(node) => {
            cx.discard(children);
            Children::from(vec![node])
        }
        None => cx.resolve_children(children),
    }
}
