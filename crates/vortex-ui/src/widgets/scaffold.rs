use vortex_dom::NodeId;

use super::{child_nodes, resolve_many, resolve_titled, with_defaults};
use crate::runtime::BuildCtx;
use crate::value::{Children, Props, Value};
use crate::props;

/// Page shell: app bar, then `main.scaffold-body`, then the floating action
/// button, whatever order the properties were given in.
///
/// `body` may be one widget or node, or a list of them (nulls skipped).
/// Without `body` the positional children fill the body region.
pub fn scaffold(cx: &mut BuildCtx<'_>, props: Props, children: Children) -> NodeId {
    let app_bar = props.present("appBar").and_then(|v| cx.resolve_slot("appBar", v));
    let body: Children = match props.present("body") {
        Some(value) => {
            cx.discard(&children);
            match value {
                Value::List(_) => resolve_many(cx, "body", value).into(),
                _ => cx.resolve_slot("body", value).into_iter().collect::<Vec<_>>().into(),
            }
        }
        None => child_nodes(cx, &children).into(),
    };
    let fab = props
        .present("floatingActionButton")
        .and_then(|v| cx.resolve_slot("floatingActionButton", v));

    let main = cx.create_element("main", &props! { "className" => "scaffold-body" }, &body);
    let regions: Vec<NodeId> = [app_bar, Some(main), fab].into_iter().flatten().collect();

    let bag = with_defaults(&props.without(&["appBar", "body", "floatingActionButton"]), "scaffold", None);
    cx.create_element("div", &bag, &regions.into())
}

/// `header.app-bar` with an optional title region and an optional actions
/// region; empty regions are omitted.
///
/// Trailing actions come from the `actions` property, else the positional
/// children.
pub fn app_bar(cx: &mut BuildCtx<'_>, props: Props, children: Children) -> NodeId {
    let title = props.present("title").and_then(|v| resolve_titled(cx, "title", v));
    let actions = match props.present("actions") {
        Some(value) => {
            cx.discard(&children);
            resolve_many(cx, "actions", value)
        }
        None => child_nodes(cx, &children),
    };

    let mut regions = Vec::new();
    if let Some(title) = title {
        let region = cx.create_element("div", &props! { "className" => "app-bar-title flex-1" }, &vec![title].into());
        regions.push(region);
    }
    if !actions.is_empty() {
        let region = cx.create_element(
            "div",
            &props! { "className" => "app-bar-actions flex row items-center" },
            &actions.into(),
        );
        regions.push(region);
    }

    let bag = with_defaults(&props.without(&["title", "actions"]), "app-bar", None);
    cx.create_element("header", &bag, &regions.into())
}
