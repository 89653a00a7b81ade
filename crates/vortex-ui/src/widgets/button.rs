use vortex_dom::NodeId;

use super::with_defaults;
use crate::runtime::BuildCtx;
use crate::value::{Children, Props, Value};
use crate::props;

/// Marker recorded on buttons that declare `onPressed`.
pub const ON_PRESSED: &str = "onPressed";

/// Raised button.
pub fn elevated_button(cx: &mut BuildCtx<'_>, props: Props, children: Children) -> NodeId {
    pressable(cx, "elevated-button", props, children)
}

/// Round button floating over the page corner.
pub fn floating_action_button(cx: &mut BuildCtx<'_>, props: Props, children: Children) -> NodeId {
    pressable(cx, "floating-action-button", props, children)
}

/// `onPressed` becomes both a native click listener and the `onPressed`
/// action marker. An explicit `onClick` or `dataAction` from the caller wins.
fn pressable(cx: &mut BuildCtx<'_>, class: &str, props: Props, children: Children) -> NodeId {
    let mut bag = props.without(&[ON_PRESSED]);
    if let Some(pressed) = props.present(ON_PRESSED) {
        if !bag.contains("dataAction") {
            bag.insert("dataAction", ON_PRESSED);
        }
        if let Value::Handler(h) = pressed {
            if !bag.contains("onClick") {
                bag.insert("onClick", h.clone());
            }
        }
    }
    let kids = cx.resolve_children(&children);
    let bag = with_defaults(&bag, class, None);
    cx.create_element("button", &bag, &kids)
}

/// Material icon glyph; `add` unless `icon` names another.
pub fn icon(cx: &mut BuildCtx<'_>, props: Props) -> NodeId {
    let glyph = props.present("icon").and_then(|v| v.as_primitive()).unwrap_or_else(|| "add".to_owned());
    let glyph = glyph.strip_prefix("Icons.").map(str::to_owned).unwrap_or(glyph);
    let bag = with_defaults(&props.without(&["icon"]), "material-icons", Some(props! { "color" => "white" }));
    cx.create_element("span", &bag, &Children::Text(glyph))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vortex_dom::EventKind;

    use super::*;
    use crate::action::handler;
    use crate::app::{host_document, AppContext};
    use crate::children;
    use crate::runtime::Runtime;
    use crate::widgets::text;

    fn rt() -> Runtime {
        Runtime::new(host_document(), AppContext::new())
    }

    #[test]
    fn on_pressed_binds_listener_and_marker() {
        let mut rt = rt();
        let node = rt.compose(|cx| {
            let label = text(cx, "Click Me", Props::new());
            elevated_button(cx, props! { "onPressed" => handler(|_, _| {}) }, children![label])
        });
        let doc = rt.document();
        assert_eq!(doc.class_name(node).as_deref(), Some("elevated-button"));
        assert_eq!(doc.data(node, "action"), Some("onPressed"));
        assert_eq!(doc.listeners(node, &EventKind::Click).len(), 1);
        assert_eq!(doc.text_content(node), "Click Me");
    }

    #[test]
    fn button_without_on_pressed_is_inert() {
        let mut rt = rt();
        let node = rt.compose(|cx| floating_action_button(cx, props! { "className" => "fab" }, Children::none()));
        let doc = rt.document();
        assert_eq!(doc.class_name(node).as_deref(), Some("floating-action-button fab"));
        assert_eq!(doc.data(node, "action"), None);
        assert_eq!(doc.listener_count(node), 0);
    }

    #[test]
    fn explicit_action_marker_wins() {
        let mut rt = rt();
        let node = rt.compose(|cx| {
            elevated_button(
                cx,
                props! { "onPressed" => handler(|_, _| {}), "dataAction" => "incrementCounter" },
                children!["+"],
            )
        });
        assert_eq!(rt.document().data(node, "action"), Some("incrementCounter"));
    }

    #[test]
    fn icon_defaults() {
        let mut rt = rt();
        let plain = rt.compose(|cx| icon(cx, Props::new()));
        let named = rt.compose(|cx| icon(cx, props! { "icon" => "Icons.delete", "style" => props! { "color" => "black" } }));
        assert_eq!(
            rt.document().outer_html(plain),
            "<span class=\"material-icons\" style=\"color: white\">add</span>"
        );
        assert_eq!(rt.document().text_content(named), "delete");
        assert_eq!(rt.document().style_property(named, "color"), Some("black"));
    }
}
