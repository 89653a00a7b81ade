use vortex_dom::Document;

/// Custom property on `<html>` that every themed rule reads.
pub const PRIMARY_COLOR_PROPERTY: &str = "--primary-color";

/// Material palette, shade 500.
const PALETTE: &[(&str, &str)] = &[
    ("red", "#F44336"),
    ("pink", "#E91E63"),
    ("purple", "#9C27B0"),
    ("deeppurple", "#673AB7"),
    ("indigo", "#3F51B5"),
    ("blue", "#2196F3"),
    ("lightblue", "#03A9F4"),
    ("cyan", "#00BCD4"),
    ("teal", "#009688"),
    ("green", "#4CAF50"),
    ("lightgreen", "#8BC34A"),
    ("lime", "#CDDC39"),
    ("yellow", "#FFEB3B"),
    ("amber", "#FFC107"),
    ("orange", "#FF9800"),
    ("deeporange", "#FF5722"),
    ("brown", "#795548"),
    ("grey", "#9E9E9E"),
    ("bluegrey", "#607D8B"),
    ("black", "#000000"),
    ("white", "#FFFFFF"),
];

/// Maps `Colors.blue` / `blue` / `deepPurple` to its palette hex value.
/// Anything else is taken to be a CSS color already and returned trimmed.
pub fn resolve_color(color: &str) -> String {
    let color = color.trim();
    let name = color.strip_prefix("Colors.").unwrap_or(color).to_ascii_lowercase();
    PALETTE
        .iter()
        .find(|(n, _)| *n == name)
        .map_or_else(|| color.to_owned(), |(_, hex)| (*hex).to_owned())
}

/// Writes the primary color onto the document element. Returns `false`,
/// without touching the document, when the value is already current.
pub fn apply_primary_color<L>(doc: &mut Document<L>, color: &str) -> bool {
    let resolved = resolve_color(color);
    if resolved.is_empty() {
        return false;
    }
    let html = doc.document_element();
    if doc.style_property(html, PRIMARY_COLOR_PROPERTY) == Some(resolved.as_str()) {
        return false;
    }
    log::debug!("primary color set to {resolved}");
    doc.set_style_property(html, PRIMARY_COLOR_PROPERTY, &resolved);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_names_resolve_case_insensitively() {
        assert_eq!(resolve_color("Colors.blue"), "#2196F3");
        assert_eq!(resolve_color("deepPurple"), "#673AB7");
        assert_eq!(resolve_color("Colors.BlueGrey"), "#607D8B");
    }

    #[test]
    fn css_colors_pass_through() {
        assert_eq!(resolve_color("#123456"), "#123456");
        assert_eq!(resolve_color(" rgb(1, 2, 3) "), "rgb(1, 2, 3)");
        assert_eq!(resolve_color("Colors.notAColor"), "Colors.notAColor");
    }

    #[test]
    fn writes_only_on_change() {
        let mut doc: Document = Document::new();
        let html = doc.document_element();
        assert!(apply_primary_color(&mut doc, "Colors.teal"));
        assert_eq!(doc.style_property(html, PRIMARY_COLOR_PROPERTY), Some("#009688"));
        assert!(!apply_primary_color(&mut doc, "teal"));
        assert!(apply_primary_color(&mut doc, "#000"));
        assert!(!apply_primary_color(&mut doc, "  "));
        assert_eq!(doc.style_property(html, PRIMARY_COLOR_PROPERTY), Some("#000"));
    }
}
