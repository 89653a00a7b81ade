use vortex_dom::Event;

use crate::action::ActionRegistry;
use crate::runtime::{Dom, EventCtx, Runtime};
use crate::stylesheet;
use crate::theme;
use crate::widget::WidgetId;

/// Selector of the container the root widget is mounted under.
pub const DEFAULT_MOUNT_SELECTOR: &str = ".app";

/// Configuration shared by the render controller and the dispatcher.
#[derive(Debug, Clone)]
pub struct AppContext {
    mount_selector: String,
    actions: ActionRegistry,
}

impl AppContext {
    pub fn new() -> Self {
        Self { mount_selector: DEFAULT_MOUNT_SELECTOR.to_owned(), actions: ActionRegistry::new() }
    }

    pub fn with_mount_selector(mut self, selector: impl Into<String>) -> Self {
        self.mount_selector = selector.into();
        self
    }

    /// Registers an application-wide action.
    pub fn with_action(
        mut self,
        name: impl Into<String>,
        f: impl Fn(&mut EventCtx<'_>, &Event) + 'static,
    ) -> Self {
        self.actions.register(name, f);
        self
    }

    pub fn mount_selector(&self) -> &str {
        &self.mount_selector
    }

    /// The application-wide registry, consulted after every widget's own.
    pub fn actions(&self) -> &ActionRegistry {
        &self.actions
    }

    pub fn actions_mut(&mut self) -> &mut ActionRegistry {
        &mut self.actions
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

// ── Application ───────────────────────────────────────────────────────────

/// Entry point for a vortex application.
///
/// # Example
///
/// ```rust,ignore
/// use vortex_ui::prelude::*;
///
/// let rt = Application::new()
///     .primary_color("Colors.teal")
///     .action("incrementCounter", |cx, _| {
///         let n = cx.state().get_num("counter").unwrap_or(0.0);
///         cx.set_state([("counter", n + 1.0)]);
///     })
///     .launch(host_document(), |rt| rt.create_widget(HomePage));
/// ```
pub struct Application {
    ctx: AppContext,
    stylesheet: bool,
    primary_color: Option<String>,
}

impl Application {
    pub fn new() -> Self {
        Self { ctx: AppContext::new(), stylesheet: true, primary_color: None }
    }

    /// Selector of the mount point (default `.app`).
    pub fn mount(mut self, selector: impl Into<String>) -> Self {
        self.ctx = self.ctx.with_mount_selector(selector);
        self
    }

    /// Registers an application-wide action, bound to the root widget.
    pub fn action(mut self, name: impl Into<String>, f: impl Fn(&mut EventCtx<'_>, &Event) + 'static) -> Self {
        self.ctx.actions_mut().register(name, f);
        self
    }

    /// Whether to inject the base stylesheet and font links (default `true`).
    pub fn stylesheet(mut self, enabled: bool) -> Self {
        self.stylesheet = enabled;
        self
    }

    /// Initial `--primary-color`; palette names like `Colors.blue` are accepted.
    pub fn primary_color(mut self, color: impl Into<String>) -> Self {
        self.primary_color = Some(color.into());
        self
    }

    /// Prepares `document`, registers the root widget returned by `root`,
    /// installs delegation and performs the first render.
    ///
    /// A failed first render is logged; the runtime is returned regardless
    /// so the caller can fix the document and call [`Runtime::render`].
    pub fn launch<F>(self, mut document: Dom, root: F) -> Runtime
    where
        F: FnOnce(&mut Runtime) -> WidgetId,
    {
        if self.stylesheet {
            stylesheet::install(&mut document);
        }
        if let Some(color) = &self.primary_color {
            theme::apply_primary_color(&mut document, color);
        }

        let mut rt = Runtime::new(document, self.ctx);
        let root = root(&mut rt);
        if rt.set_root(root).is_ok() {
            if let Err(err) = rt.start() {
                log::warn!("application launched without a mounted tree: {err}");
            }
        }
        rt
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

/// An empty page with the default mount point: `<body><div class="app">`.
pub fn host_document() -> Dom {
    let mut doc = Dom::new();
    let body = doc.body();
    let app = doc.create_element("div");
    doc.set_class_name(app, "app");
    let _ = doc.append_child(body, app);
    doc
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vortex_dom::NodeId;

    use super::*;
    use crate::error::RenderError;
    use crate::runtime::{BuildCtx, Phase};
    use crate::value::Props;
    use crate::widget::Widget;
    use crate::widgets::text;

    struct Hello;

    impl Widget for Hello {
        fn build(&self, cx: &mut BuildCtx<'_>) -> NodeId {
            text(cx, "Hello", Props::new())
        }
    }

    #[test]
    fn context_defaults() {
        let ctx = AppContext::default();
        assert_eq!(ctx.mount_selector(), ".app");
        assert!(ctx.actions().is_empty());
    }

    #[test]
    fn launch_prepares_document_and_mounts() {
        let rt = Application::new()
            .primary_color("Colors.red")
            .action("noop", |_, _| {})
            .launch(host_document(), |rt| rt.create_widget(Hello));

        assert_eq!(rt.phase(), Phase::Mounted);
        assert!(crate::stylesheet::is_installed(rt.document()));
        let html = rt.document().document_element();
        assert_eq!(rt.document().style_property(html, "--primary-color"), Some("#F44336"));
        assert!(rt.context().actions().contains("noop"));
        let app = rt.document().query_selector(".app").unwrap();
        assert_eq!(rt.document().text_content(app), "Hello");
    }

    #[test]
    fn launch_with_custom_mount_point() {
        let mut doc = Dom::new();
        let body = doc.body();
        let root = doc.create_element("main");
        doc.set_attribute(root, "id", "root");
        doc.append_child(body, root).unwrap();

        let rt = Application::new()
            .mount("#root")
            .stylesheet(false)
            .launch(doc, |rt| rt.create_widget(Hello));

        assert!(!crate::stylesheet::is_installed(rt.document()));
        assert_eq!(rt.document().text_content(root), "Hello");
    }

    #[test]
    fn launch_without_mount_point_stays_unmounted() {
        let mut rt = Application::new().stylesheet(false).launch(Dom::new(), |rt| rt.create_widget(Hello));
        assert_eq!(rt.phase(), Phase::Unmounted);
        assert_eq!(rt.render(), Err(RenderError::MissingMountPoint(".app".into())));
    }

    #[test]
    fn host_document_has_mount_point() {
        let doc = host_document();
        let app = doc.query_selector(DEFAULT_MOUNT_SELECTOR).unwrap();
        assert_eq!(doc.parent(app), Some(doc.body()));
    }
}
