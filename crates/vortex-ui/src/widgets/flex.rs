use vortex_dom::NodeId;

use super::with_defaults;
use crate::element::join_classes;
use crate::runtime::BuildCtx;
use crate::value::{Children, Props};

/// Main-axis distribution of a [`row`] or [`column`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainAxisAlignment {
    Start,
    End,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl MainAxisAlignment {
    /// Accepts `center`, `MainAxisAlignment.center`, `spaceBetween`,
    /// `space-between` and `between`, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        let name = name.strip_prefix("MainAxisAlignment.").unwrap_or(name);
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Some(match key.as_str() {
            "start" => Self::Start,
            "end" => Self::End,
            "center" => Self::Center,
            "spacebetween" | "between" => Self::SpaceBetween,
            "spacearound" | "around" => Self::SpaceAround,
            "spaceevenly" | "evenly" => Self::SpaceEvenly,
            _ => return None,
        })
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Start => "justify-start",
            Self::End => "justify-end",
            Self::Center => "justify-center",
            Self::SpaceBetween => "justify-between",
            Self::SpaceAround => "justify-around",
            Self::SpaceEvenly => "justify-evenly",
        }
    }
}

/// Horizontal flex container. Takes the same `mainAxisAlignment` and
/// `children` properties as [`column`].
pub fn row(cx: &mut BuildCtx<'_>, props: Props, children: Children) -> NodeId {
    flex(cx, "flex row", props, children)
}

/// Vertical flex container. `mainAxisAlignment` adds a `justify-*` class;
/// a `children` property replaces the positional children.
pub fn column(cx: &mut BuildCtx<'_>, props: Props, children: Children) -> NodeId {
    flex(cx, "flex column", props, children)
}

fn flex(cx: &mut BuildCtx<'_>, base: &str, props: Props, children: Children) -> NodeId {
    let alignment = props.present("mainAxisAlignment").and_then(|v| v.as_primitive());
    let justify = alignment.as_deref().and_then(|name| {
        let parsed = MainAxisAlignment::parse(name);
        if parsed.is_none() {
            log::debug!("unknown mainAxisAlignment `{name}` ignored");
        }
        parsed
    });

    let children = match props.present("children").and_then(Children::from_value) {
        Some(listed) => {
            cx.discard(&children);
            listed
        }
        None => children,
    };
    let kids = cx.resolve_children(&children);

    let default_class = join_classes(base, justify.map(MainAxisAlignment::class));
    let bag = with_defaults(&props.without(&["mainAxisAlignment", "children"]), &default_class, None);
    cx.create_element("div", &bag, &kids)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::app::{host_document, AppContext};
    use crate::runtime::Runtime;
    use crate::value::Value;
    use crate::widgets::text;
    use crate::{children, props};

    fn rt() -> Runtime {
        Runtime::new(host_document(), AppContext::new())
    }

    #[test]
    fn alignment_names() {
        assert_eq!(MainAxisAlignment::parse("center"), Some(MainAxisAlignment::Center));
        assert_eq!(MainAxisAlignment::parse("MainAxisAlignment.spaceBetween"), Some(MainAxisAlignment::SpaceBetween));
        assert_eq!(MainAxisAlignment::parse("space-evenly"), Some(MainAxisAlignment::SpaceEvenly));
        assert_eq!(MainAxisAlignment::parse("END"), Some(MainAxisAlignment::End));
        assert_eq!(MainAxisAlignment::parse("stretch"), None);
        assert_eq!(MainAxisAlignment::SpaceAround.class(), "justify-around");
    }

    #[test]
    fn centered_column_with_two_texts() {
        let mut rt = rt();
        let node = rt.compose(|cx| {
            let first = text(cx, "one", Props::new());
            let second = text(cx, "two", Props::new());
            column(cx, props! { "mainAxisAlignment" => "center" }, children![first, second])
        });
        let doc = rt.document();
        assert!(doc.has_class(node, "justify-center"));
        assert_eq!(doc.class_name(node).as_deref(), Some("flex column justify-center"));
        let kids = doc.children(node);
        assert_eq!(kids.len(), 2);
        assert_eq!(doc.text_content(kids[0]), "one");
        assert_eq!(doc.text_content(kids[1]), "two");
        assert_eq!(doc.attribute(node, "mainAxisAlignment"), None);
    }

    #[test]
    fn children_property_takes_precedence() {
        let mut rt = rt();
        let node = rt.compose(|cx| {
            let a = text(cx, "from-props", Props::new());
            let list = Value::List(vec![Value::Node(a)]);
            column(cx, props! { "children" => list, "className" => "stack" }, children!["positional"])
        });
        let doc = rt.document();
        assert_eq!(doc.text_content(node), "from-props");
        assert_eq!(doc.class_name(node).as_deref(), Some("flex column stack"));
    }

    #[test]
    fn unknown_alignment_adds_no_class() {
        let mut rt = rt();
        let node = rt.compose(|cx| row(cx, props! { "mainAxisAlignment" => "sideways" }, Children::none()));
        assert_eq!(rt.document().class_name(node).as_deref(), Some("flex row"));
    }

    #[test]
    fn row_accepts_column_properties() {
        let mut rt = rt();
        let node = rt.compose(|cx| {
            let a = text(cx, "a", Props::new());
            let list = Value::List(vec![Value::Node(a)]);
            row(cx, props! { "mainAxisAlignment" => "spaceBetween", "children" => list }, Children::none())
        });
        let doc = rt.document();
        assert_eq!(doc.class_name(node).as_deref(), Some("flex row justify-between"));
        assert_eq!(doc.text_content(node), "a");
    }
}
