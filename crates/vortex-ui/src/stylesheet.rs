//! The base stylesheet every widget class relies on.

use vortex_dom::Document;

/// Dataset key marking the injected `<style>` element.
const MARKER: &str = "vortex";

pub const FONT_LINKS: &[&str] = &[
    "https://fonts.googleapis.com/icon?family=Material+Icons",
    "https://fonts.googleapis.com/css2?family=Roboto:wght@300;400;500;700&display=swap",
];

pub const DEFAULT_CSS: &str = r#"
:root {
  --primary-color: #2196F3;
  --primary-dark: #1976D2;
  --primary-light: #BBDEFB;
  --accent-color: #FF4081;
  --text-primary: rgba(0, 0, 0, 0.87);
  --text-secondary: rgba(0, 0, 0, 0.6);
  --text-disabled: rgba(0, 0, 0, 0.38);
  --divider-color: rgba(0, 0, 0, 0.12);
  --elevation-1: 0 2px 1px -1px rgba(0,0,0,0.2), 0 1px 1px 0 rgba(0,0,0,0.14), 0 1px 3px 0 rgba(0,0,0,0.12);
  --elevation-2: 0 3px 1px -2px rgba(0,0,0,0.2), 0 2px 2px 0 rgba(0,0,0,0.14), 0 1px 5px 0 rgba(0,0,0,0.12);
  --elevation-4: 0 2px 4px -1px rgba(0,0,0,0.2), 0 4px 5px 0 rgba(0,0,0,0.14), 0 1px 10px 0 rgba(0,0,0,0.12);
  --elevation-8: 0 5px 5px -3px rgba(0,0,0,0.2), 0 8px 10px 1px rgba(0,0,0,0.14), 0 3px 14px 2px rgba(0,0,0,0.12);
}
body { font-family: 'Roboto', sans-serif; margin: 0; padding: 0; color: var(--text-primary); background-color: #f5f5f5; }
.flex { display: flex; }
.row { flex-direction: row; }
.column { flex-direction: column; }
.flex-1 { flex: 1; }
.items-center { align-items: center; }
.justify-start { justify-content: flex-start; }
.justify-end { justify-content: flex-end; }
.justify-center { justify-content: center; }
.justify-between { justify-content: space-between; }
.justify-around { justify-content: space-around; }
.justify-evenly { justify-content: space-evenly; }
.material-app { min-height: 100vh; background-color: white; }
.app-bar { background-color: var(--primary-color); color: white; height: 64px; display: flex; align-items: center; padding: 0 16px; box-shadow: var(--elevation-4); position: relative; z-index: 100; }
.app-bar-title { font-size: 20px; font-weight: 500; letter-spacing: 0.15px; }
.container { padding: 8px; }
.elevated-button { background-color: var(--primary-color); color: white; border: none; border-radius: 4px; padding: 8px 16px; font-size: 14px; font-weight: 500; text-transform: uppercase; letter-spacing: 0.75px; box-shadow: var(--elevation-2); cursor: pointer; transition: all 0.2s ease; }
.elevated-button:hover { box-shadow: var(--elevation-4); background-color: var(--primary-dark); }
.elevated-button:active { box-shadow: var(--elevation-1); }
.floating-action-button { position: fixed; bottom: 16px; right: 16px; width: 56px; height: 56px; border-radius: 50%; background-color: var(--primary-color); color: white; border: none; box-shadow: var(--elevation-4); display: flex; align-items: center; justify-content: center; cursor: pointer; transition: all 0.2s ease; z-index: 1000; }
.floating-action-button:hover { box-shadow: var(--elevation-8); background-color: var(--primary-dark); }
.floating-action-button:active { box-shadow: var(--elevation-4); }
.material-icons { font-family: 'Material Icons'; font-weight: normal; font-style: normal; font-size: 24px; line-height: 1; letter-spacing: normal; text-transform: none; display: inline-block; white-space: nowrap; word-wrap: normal; direction: ltr; }
.scaffold { display: flex; flex-direction: column; min-height: 100vh; background-color: white; }
.scaffold-body { flex: 1; position: relative; padding: 16px; }
.text-base { font-size: 16px; line-height: 1.5; letter-spacing: 0.15px; }
.sized-box { display: block; }
"#;

/// Appends the font links and the base `<style>` to `<head>`. Runs once per
/// document; later calls return `false` and change nothing.
pub fn install<L>(doc: &mut Document<L>) -> bool {
    if is_installed(doc) {
        return false;
    }
    let head = doc.head();
    for href in FONT_LINKS {
        let link = doc.create_element("link");
        doc.set_attribute(link, "rel", "stylesheet");
        doc.set_attribute(link, "href", href);
        let _ = doc.append_child(head, link);
    }
    let style = doc.create_element("style");
    doc.set_data(style, MARKER, "");
    let css = doc.create_text_node(DEFAULT_CSS);
    let _ = doc.append_child(style, css);
    let _ = doc.append_child(head, style);
    log::debug!("base stylesheet installed");
    true
}

pub fn is_installed<L>(doc: &Document<L>) -> bool {
    doc.query_selector("style[data-vortex]").is_some()
}
