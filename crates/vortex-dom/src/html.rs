//! HTML serialization of document subtrees.
//!
//! Output is deterministic: `class` first, then attributes in insertion
//! order, then inline `style`, then `data-*`. Listeners are not serialized,
//! so two subtrees built from the same input serialize identically.

use std::fmt::Write;

use crate::document::Document;
use crate::node::{NodeId, NodeKind};

const VOID_ELEMENTS: &[&str] = &["area", "br", "col", "hr", "img", "input", "link", "meta", "source"];
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

impl<L> Document<L> {
    /// Markup of `id` and its subtree. Stale ids serialize to `""`.
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_node(&mut out, id, false);
        out
    }

    /// Markup of the children of `id`.
    pub fn inner_html(&self, id: NodeId) -> String {
        let raw = self.tag(id).is_some_and(|t| RAW_TEXT_ELEMENTS.contains(&t));
        let mut out = String::new();
        for &child in self.children(id) {
            self.write_node(&mut out, child, raw);
        }
        out
    }

    fn write_node(&self, out: &mut String, id: NodeId, raw_text: bool) {
        let Some(node) = self.node(id) else {
            return;
        };
        match &node.kind {
            NodeKind::Document => {
                out.push_str("<!DOCTYPE html>");
                for &c in node.children() {
                    self.write_node(out, c, false);
                }
            }
            NodeKind::Text(t) if raw_text => out.push_str(t),
            NodeKind::Text(t) => out.push_str(&escape_text(t)),
            NodeKind::Element(el) => {
                let _ = write!(out, "<{}", el.tag);
                if !el.classes.is_empty() {
                    let _ = write!(out, " class=\"{}\"", escape_attr(&el.class_name()));
                }
                for (name, value) in &el.attributes {
                    let _ = write!(out, " {name}=\"{}\"", escape_attr(value));
                }
                if !el.style.is_empty() {
                    let css: Vec<String> = el.style.iter().map(|(k, v)| format!("{k}: {v}")).collect();
                    let _ = write!(out, " style=\"{}\"", escape_attr(&css.join("; ")));
                }
                for (key, value) in &el.dataset {
                    let _ = write!(out, " data-{key}=\"{}\"", escape_attr(value));
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&el.tag.as_str()) {
                    return;
                }
                let raw = RAW_TEXT_ELEMENTS.contains(&el.tag.as_str());
                for &c in node.children() {
                    self.write_node(out, c, raw);
                }
                let _ = write!(out, "</{}>", el.tag);
            }
        }
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
