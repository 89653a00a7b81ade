use vortex_dom::NodeId;

use super::with_defaults;
use crate::runtime::BuildCtx;
use crate::value::{Children, Props};
use crate::props;

/// `<span class="text-base">` with inline content. A `text` property
/// overrides the positional text.
pub fn text(cx: &mut BuildCtx<'_>, content: impl Into<String>, props: Props) -> NodeId {
    let content = props.present("text").and_then(|v| v.as_primitive()).unwrap_or_else(|| content.into());
    let bag = with_defaults(
        &props.without(&["text"]),
        "text-base",
        Some(props! { "color" => "var(--text-primary)" }),
    );
    cx.create_element("span", &bag, &Children::Text(content))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::app::{host_document, AppContext};
    use crate::runtime::Runtime;

    fn rt() -> Runtime {
        Runtime::new(host_document(), AppContext::new())
    }

    #[test]
    fn plain_text_is_a_text_base_span() {
        let mut rt = rt();
        let node = rt.compose(|cx| text(cx, "Hi", Props::new()));
        let doc = rt.document();
        assert_eq!(doc.tag(node), Some("span"));
        assert_eq!(doc.class_name(node).as_deref(), Some("text-base"));
        assert_eq!(doc.children(node).len(), 1);
        assert_eq!(doc.text_content(node), "Hi");
    }

    #[test]
    fn text_property_overrides_positional() {
        let mut rt = rt();
        let node = rt.compose(|cx| text(cx, "ignored", props! { "text" => 42 }));
        assert_eq!(rt.document().text_content(node), "42");
        assert_eq!(rt.document().attribute(node, "text"), None);
    }

    #[test]
    fn caller_class_and_style_come_last() {
        let mut rt = rt();
        let node = rt.compose(|cx| {
            text(
                cx,
                "Hello",
                props! {
                    "className" => "title",
                    "style" => props! { "color" => "red", "fontSize" => "24px" },
                },
            )
        });
        assert_eq!(
            rt.document().outer_html(node),
            "<span class=\"text-base title\" style=\"color: red; font-size: 24px\">Hello</span>"
        );
    }
}
