use crate::node::ElementData;

/// A compound selector: optional tag, then any of `.class`, `#id`,
/// `[attr]`, `[attr=value]`.
///
/// Combinators (descendant, child, `,`) are not supported; the runtime only
/// needs to locate its mount point and a few marked nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, Option<String>)>,
}

impl Selector {
    /// Parses `selector`; `None` for empty input or unsupported syntax.
    pub fn parse(selector: &str) -> Option<Self> {
        let s = selector.trim();
        if s.is_empty() || s.contains(char::is_whitespace) || s.contains(',') {
            return None;
        }

        let mut sel = Selector::default();
        let bytes = s.as_bytes();
        let mut i = 0;

        let tag_end = s.find(['.', '#', '[']).unwrap_or(s.len());
        if tag_end > 0 {
            let tag = &s[..tag_end];
            if tag != "*" {
                sel.tag = Some(tag.to_ascii_lowercase());
            }
            i = tag_end;
        }

        while i < bytes.len() {
            match bytes[i] {
                b'.' | b'#' => {
                    let start = i + 1;
                    let end = s[start..]
                        .find(['.', '#', '['])
                        .map_or(s.len(), |p| start + p);
                    let name = &s[start..end];
                    if name.is_empty() {
                        return None;
                    }
                    if bytes[i] == b'.' {
                        sel.classes.push(name.to_owned());
                    } else {
                        sel.id = Some(name.to_owned());
                    }
                    i = end;
                }
                b'[' => {
                    let close = i + s[i..].find(']')?;
                    let inner = &s[i + 1..close];
                    let (name, value) = match inner.split_once('=') {
                        Some((n, v)) => (n, Some(v.trim_matches(['"', '\'']).to_owned())),
                        None => (inner, None),
                    };
                    if name.is_empty() {
                        return None;
                    }
                    sel.attributes.push((name.to_owned(), value));
                    i = close + 1;
                }
                _ => return None,
            }
        }
        Some(sel)
    }

    pub fn matches(&self, el: &ElementData) -> bool {
        if self.tag.as_deref().is_some_and(|t| t != el.tag) {
            return false;
        }
        if let Some(id) = &self.id {
            if el.attributes.get("id") != Some(id) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| el.has_class(c)) {
            return false;
        }
        self.attributes.iter().all(|(name, expected)| {
            let actual = match name.strip_prefix("data-") {
                Some(key) => el.dataset.get(key),
                None => el.attributes.get(name.as_str()),
            };
            match (actual, expected) {
                (Some(_), None) => true,
                (Some(a), Some(e)) => a == e,
                (None, _) => false,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn el(tag: &str, classes: &[&str]) -> ElementData {
        let mut e = ElementData::new(tag);
        e.classes = classes.iter().map(|c| c.to_string()).collect();
        e
    }

    #[test]
    fn class_selector() {
        let s = Selector::parse(".app").unwrap();
        assert!(s.matches(&el("div", &["app"])));
        assert!(!s.matches(&el("div", &["application"])));
    }

    #[test]
    fn tag_and_classes() {
        let s = Selector::parse("main.scaffold-body.wide").unwrap();
        assert!(s.matches(&el("main", &["wide", "scaffold-body"])));
        assert!(!s.matches(&el("div", &["wide", "scaffold-body"])));
    }

    #[test]
    fn id_and_data_attributes() {
        let mut e = el("button", &[]);
        e.attributes.insert("id".into(), "go".into());
        e.dataset.insert("action".into(), "save".into());
        assert!(Selector::parse("#go").unwrap().matches(&e));
        assert!(Selector::parse("[data-action]").unwrap().matches(&e));
        assert!(Selector::parse("button[data-action=save]").unwrap().matches(&e));
        assert!(!Selector::parse("[data-action='load']").unwrap().matches(&e));
        assert!(!Selector::parse("[data-state]").unwrap().matches(&e));
    }

    #[test]
    fn unsupported_syntax_is_rejected() {
        assert_eq!(Selector::parse(""), None);
        assert_eq!(Selector::parse("div span"), None);
        assert_eq!(Selector::parse("a, b"), None);
        assert_eq!(Selector::parse(".."), None);
        assert_eq!(Selector::parse("[unclosed"), None);
    }
}
