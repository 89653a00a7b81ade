use vortex_dom::NodeId;

use super::with_defaults;
use crate::runtime::BuildCtx;
use crate::theme;
use crate::value::{Children, Props, Value};

/// Application shell. The theme's primary color goes to the document-wide
/// `--primary-color`; `home` becomes the sole child.
pub fn material_app(cx: &mut BuildCtx<'_>, props: Props, children: Children) -> NodeId {
    if let Some(color) = primary_color(&props) {
        theme::apply_primary_color(cx.document(), &color);
    }
    let kids = match props.present("home").and_then(|v| cx.resolve_slot("home", v)) {
        Some(home) => {
            cx.discard(&children);
            Children::from(vec![home])
        }
        None => cx.resolve_children(&children),
    };
    let bag = with_defaults(&props.without(&["home", "theme", "themeData"]), "material-app", None);
    cx.create_element("div", &bag, &kids)
}

/// `theme`/`themeData` is either a color or a map holding `primarySwatch`
/// or `primaryColor` (key case ignored).
fn primary_color(props: &Props) -> Option<String> {
    let theme = props.present("themeData").or_else(|| props.present("theme"))?;
    match theme {
        Value::Map(map) => map
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("primarySwatch") || k.eq_ignore_ascii_case("primaryColor"))
            .and_then(|(_, v)| v.as_primitive()),
        other => other.as_primitive(),
    }
}
