use vortex_dom::NodeId;

use super::{single_child_or, with_defaults};
use crate::runtime::BuildCtx;
use crate::value::{fmt_number, Children, Props, Value};
use crate::props;

/// Padded box around `child` or the children list.
pub fn container(cx: &mut BuildCtx<'_>, props: Props, children: Children) -> NodeId {
    let kids = single_child_or(cx, &props, &children);
    let bag = with_defaults(&props.without(&["child"]), "container", None);
    cx.create_element("div", &bag, &kids)
}

/// Fixed-size box: numeric `width`/`height` become pixels, absent ones `auto`.
pub fn sized_box(cx: &mut BuildCtx<'_>, props: Props) -> NodeId {
    let kids = single_child_or(cx, &props, &Children::none());
    let size = props! {
        "width" => dimension(props.get("width")),
        "height" => dimension(props.get("height")),
    };
    let bag = with_defaults(&props.without(&["width", "height", "child"]), "sized-box", Some(size));
    cx.create_element("div", &bag, &kids)
}

fn dimension(value: Option<&Value>) -> String {
    match value {
        Some(Value::Num(n)) if *n != 0.0 => format!("{}px", fmt_number(*n)),
        Some(Value::Str(s)) if !s.is_empty() => s.clone(),
        _ => "auto".to_owned(),
    }
}

/// Centers `child` (or the children list) on both axes.
pub fn center(cx: &mut BuildCtx<'_>, props: Props, children: Children) -> NodeId {
    let kids = single_child_or(cx, &props, &children);
    let bag = with_defaults(&props.without(&["child"]), "flex items-center justify-center", None);
    cx.create_element("div", &bag, &kids)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::app::{host_document, AppContext};
    use crate::children;
    use crate::runtime::Runtime;
    use crate::widgets::text;

    fn rt() -> Runtime {
        Runtime::new(host_document(), AppContext::new())
    }

    #[test]
    fn sized_box_uses_pixels_or_auto() {
        let mut rt = rt();
        let node = rt.compose(|cx| sized_box(cx, props! { "height" => 20 }));
        assert_eq!(
            rt.document().outer_html(node),
            "<div class=\"sized-box\" style=\"width: auto; height: 20px\"></div>"
        );
    }

    #[test]
    fn sized_box_caller_style_wins() {
        let mut rt = rt();
        let node = rt.compose(|cx| {
            sized_box(cx, props! { "width" => 8.5, "className" => "gap", "style" => props! { "width" => "50%" } })
        });
        let doc = rt.document();
        assert_eq!(doc.class_name(node).as_deref(), Some("sized-box gap"));
        assert_eq!(doc.style_property(node, "width"), Some("50%"));
        assert_eq!(doc.style_property(node, "height"), Some("auto"));
    }

    #[test]
    fn center_prefers_child_slot() {
        let mut rt = rt();
        let node = rt.compose(|cx| {
            let only = text(cx, "only", Props::new());
            center(cx, props! { "child" => only, "className" => "page" }, children!["ignored"])
        });
        let doc = rt.document();
        assert_eq!(doc.class_name(node).as_deref(), Some("flex items-center justify-center page"));
        assert_eq!(doc.text_content(node), "only");
        assert_eq!(doc.attribute(node, "child"), None);
    }

    #[test]
    fn container_keeps_children_order() {
        let mut rt = rt();
        let node = rt.compose(|cx| {
            let a = text(cx, "a", Props::new());
            container(cx, props! { "className" => "card" }, children![a, "b", 3])
        });
        let doc = rt.document();
        assert_eq!(doc.class_name(node).as_deref(), Some("container card"));
        assert_eq!(doc.children(node).len(), 3);
        assert_eq!(doc.text_content(node), "ab3");
    }

    #[test]
    fn unresolvable_child_falls_back_to_children() {
        let mut rt = rt();
        let node = rt.compose(|cx| center(cx, props! { "child" => props! {} }, children!["fallback"]));
        assert_eq!(rt.document().text_content(node), "fallback");
    }
}
