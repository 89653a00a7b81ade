//! Event delivery and document-level delegation.
//!
//! [`Runtime::dispatch`] plays the role of the browser: it walks the event
//! path from the target up to the document node and calls every listener
//! registered for the event kind. The runtime's own delegation consists of
//! listeners on the document node, installed once by
//! [`Runtime::install_delegation`]:
//!
//! - `click` resolves the nearest `data-action` marker to a named action;
//! - `input` and `change` resolve the nearest `data-state` marker to a state
//!   update on the owning widget.

use vortex_dom::{Event, EventKind, NodeId};

use crate::action::{handler, Handler};
use crate::element::{ACTION_MARKER, STATE_MARKER};
use crate::runtime::Runtime;
use crate::state::{StateValue, ViewState};
use crate::widget::WidgetId;

impl Runtime {
    /// Registers the delegated listeners on the document node. Returns
    /// `false` when they were already installed.
    pub fn install_delegation(&mut self) -> bool {
        if self.delegation_installed {
            return false;
        }
        let root = self.document.document_node();
        self.document
            .add_event_listener(root, EventKind::Click, handler(|cx, ev| cx.rt.delegate_activation(ev)));
        for kind in [EventKind::Input, EventKind::Change] {
            self.document
                .add_event_listener(root, kind, handler(|cx, ev| cx.rt.delegate_value_change(ev)));
        }
        self.delegation_installed = true;
        log::debug!("delegated listeners installed on the document node");
        true
    }

    /// Delivers `event` along its path, target first. Each listener is bound
    /// to the widget owning the node it sits on, or to the root.
    ///
    /// Returns how many listeners ran. Listeners on nodes discarded by an
    /// earlier listener's re-render are skipped.
    pub fn dispatch(&mut self, event: &Event) -> usize {
        if !self.document.contains(event.target) {
            log::debug!("{} event on a discarded node ignored", event.kind);
            return 0;
        }
        let path = self.document.event_path(event.target);
        let mut invoked = 0;
        for node in path {
            let listeners = self.document.listeners(node, &event.kind);
            if listeners.is_empty() {
                continue;
            }
            let owner = self.owner_of(node).or(self.root);
            for listener in &listeners {
                self.invoke(listener, owner, event);
                invoked += 1;
            }
        }
        invoked
    }

    /// Finds the handler for `name`: enclosing widgets of `node` innermost
    /// first, then the application-wide registry (bound to the root).
    pub fn resolve_action(&self, node: NodeId, name: &str) -> Option<(Handler, Option<WidgetId>)> {
        self.enclosing_widgets(node)
            .into_iter()
            .find_map(|w| self.actions(w).and_then(|a| a.get(name)).map(|h| (h, Some(w))))
            .or_else(|| self.ctx.actions().get(name).map(|h| (h, self.root)))
    }

    fn delegate_activation(&mut self, event: &Event) {
        let Some((marked, name)) = self
            .document
            .closest_with_data(event.target, ACTION_MARKER)
            .map(|(n, name)| (n, name.to_owned()))
        else {
            log::trace!("activation without an action marker");
            return;
        };
        match self.resolve_action(marked, &name) {
            Some((action, owner)) => {
                log::debug!("action `{name}` bound to {owner:?}");
                self.invoke(&action, owner, event);
            }
            None => log::debug!("no handler registered for action `{name}`"),
        }
    }

    fn delegate_value_change(&mut self, event: &Event) {
        let Some((marked, key)) = self
            .document
            .closest_with_data(event.target, STATE_MARKER)
            .map(|(n, key)| (n, key.to_owned()))
        else {
            log::trace!("{} without a state marker", event.kind);
            return;
        };
        let value = self.current_value(marked, &event.kind);
        let Some(owner) = self.owner_of(marked).or(self.root) else {
            log::debug!("state key `{key}` changed with no widget to receive it");
            return;
        };
        let _ = self.set_state(owner, ViewState::new().with(key, value));
    }

    /// Checkboxes and radios report their checked flag on `change`; every
    /// other case reports the element's value.
    fn current_value(&self, node: NodeId, kind: &EventKind) -> StateValue {
        let toggles = matches!(self.document.attribute(node, "type"), Some("checkbox" | "radio"));
        if *kind == EventKind::Change && toggles {
            StateValue::Bool(self.document.checked(node))
        } else {
            StateValue::Str(self.document.value(node).unwrap_or_default().to_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::action::ActionRegistry;
    use crate::app::{host_document, AppContext};
    use crate::runtime::BuildCtx;
    use crate::value::Props;
    use crate::widget::Widget;
    use crate::widgets::{column, elevated_button, text};
    use crate::{children, props};

    type Log = Rc<RefCell<Vec<String>>>;

    /// A button marked with `data-action="save"` and a local `save` action.
    struct Saver {
        log: Log,
        local: bool,
    }

    impl Widget for Saver {
        fn build(&self, cx: &mut BuildCtx<'_>) -> NodeId {
            cx.create_element("button", &props! { "dataAction" => "save", "id" => "save" }, &"Save".into())
        }

        fn actions(&self) -> ActionRegistry {
            if !self.local {
                return ActionRegistry::new();
            }
            let log = self.log.clone();
            ActionRegistry::new().with("save", move |cx, _| {
                log.borrow_mut().push("local".into());
                cx.set_state([("saved", true)]);
            })
        }
    }

    struct Form {
        saver: WidgetId,
    }

    impl Widget for Form {
        fn build(&self, cx: &mut BuildCtx<'_>) -> NodeId {
            let name = cx.state().get_str("name").unwrap_or_default().to_owned();
            let input = cx.create_element("input", &props! { "dataState" => "name", "id" => "name" }, &().into());
            let echo = text(cx, name, Props::new());
            column(cx, Props::new(), children![input, echo, self.saver])
        }
    }

    fn app(log: &Log, local: bool) -> (Runtime, WidgetId, WidgetId) {
        let global = log.clone();
        let ctx = AppContext::new().with_action("save", move |_, _| global.borrow_mut().push("global".into()));
        let mut rt = Runtime::new(host_document(), ctx);
        let saver = rt.create_widget(Saver { log: log.clone(), local });
        let root = rt.create_root(Form { saver });
        rt.start().unwrap();
        (rt, root, saver)
    }

    fn find(rt: &Runtime, selector: &str) -> NodeId {
        rt.document().query_selector(selector).unwrap()
    }

    #[test]
    fn instance_action_wins_over_global() {
        let log = Log::default();
        let (mut rt, root, saver) = app(&log, true);
        let button = find(&rt, "#save");

        rt.dispatch(&Event::click(button));

        assert_eq!(*log.borrow(), vec!["local".to_string()]);
        assert_eq!(rt.state(saver).unwrap().get_bool("saved"), Some(true));
        assert!(rt.state(root).unwrap().is_empty());
    }

    /// Returns the nested instance's node as its own.
    struct Passthrough {
        inner: WidgetId,
    }

    impl Widget for Passthrough {
        fn build(&self, cx: &mut BuildCtx<'_>) -> NodeId {
            match cx.build(self.inner) {
                Some(node) => node,
                None => cx.create_element("div", &Props::new(), &().into()),
            }
        }
    }

    #[test]
    fn action_of_instance_wrapped_without_element_is_reachable() {
        let log = Log::default();
        let mut rt = Runtime::new(host_document(), AppContext::new());
        let saver = rt.create_widget(Saver { log: log.clone(), local: true });
        let wrapper = rt.create_widget(Passthrough { inner: saver });
        let root = rt.create_root(Form { saver: wrapper });
        rt.start().unwrap();
        let button = find(&rt, "#save");
        assert_eq!(rt.enclosing_widgets(button), vec![saver, wrapper, root]);

        rt.dispatch(&Event::click(button));

        assert_eq!(*log.borrow(), vec!["local".to_string()]);
        assert_eq!(rt.state(saver).unwrap().get_bool("saved"), Some(true));
        // The local re-render kept the wrapper on the shared node.
        let button = find(&rt, "#save");
        assert_eq!(rt.mount_record(wrapper).unwrap().rendered, button);
        assert_eq!(rt.enclosing_widgets(button), vec![saver, wrapper, root]);
    }

    #[test]
    fn global_action_is_the_fallback() {
        let log = Log::default();
        let (mut rt, _, _) = app(&log, false);
        let button = find(&rt, "#save");
        let label = rt.document().children(button)[0];

        // Clicking the button's text still finds the marker on the button.
        rt.dispatch(&Event::click(label));

        assert_eq!(*log.borrow(), vec!["global".to_string()]);
    }

    #[test]
    fn global_action_is_bound_to_the_root() {
        let ctx = AppContext::new().with_action("save", |cx, _| {
            let by_root = cx.owner().is_some() && cx.owner() == cx.runtime().root();
            cx.set_state([("by_root", by_root)]);
        });
        let mut rt = Runtime::new(host_document(), ctx);
        let saver = rt.create_widget(Saver { log: Log::default(), local: false });
        let root = rt.create_root(Form { saver });
        rt.start().unwrap();

        rt.dispatch(&Event::click(find(&rt, "#save")));

        assert_eq!(rt.state(root).unwrap().get_bool("by_root"), Some(true));
    }

    #[test]
    fn input_updates_owning_state() {
        let log = Log::default();
        let (mut rt, root, _) = app(&log, false);
        let input = find(&rt, "#name");

        rt.document_mut().set_value(input, "Ada");
        rt.dispatch(&Event::input(input));

        assert_eq!(rt.state(root).unwrap().get_str("name"), Some("Ada"));
        // The root re-rendered, so the echo shows the new value.
        let app = find(&rt, ".app");
        assert!(rt.document().text_content(app).starts_with("Ada"));
        assert!(!rt.document().contains(input));
    }

    #[test]
    fn change_on_checkbox_reports_checked_flag() {
        let mut rt = Runtime::new(host_document(), AppContext::new());
        struct Toggle;
        impl Widget for Toggle {
            fn build(&self, cx: &mut BuildCtx<'_>) -> NodeId {
                cx.create_element(
                    "input",
                    &props! { "type" => "checkbox", "dataState" => "agreed", "id" => "agree" },
                    &().into(),
                )
            }
        }
        let root = rt.create_root(Toggle);
        rt.start().unwrap();
        let input = find(&rt, "#agree");

        rt.document_mut().set_checked(input, true);
        rt.dispatch(&Event::change(input));

        assert_eq!(rt.state(root).unwrap().get_bool("agreed"), Some(true));
    }

    #[test]
    fn unmarked_targets_are_no_ops() {
        let log = Log::default();
        let (mut rt, root, _) = app(&log, true);
        let body = rt.document().body();
        let html_before = rt.document().outer_html(body);

        // Only the delegated listener on the document node runs.
        assert_eq!(rt.dispatch(&Event::click(body)), 1);
        assert_eq!(rt.dispatch(&Event::input(body)), 1);
        assert_eq!(rt.dispatch(&Event::new(EventKind::from_name("keydown"), body)), 0);

        assert!(log.borrow().is_empty());
        assert!(rt.state(root).unwrap().is_empty());
        assert_eq!(rt.document().outer_html(body), html_before);
    }

    #[test]
    fn unknown_action_is_a_no_op() {
        let mut rt = Runtime::new(host_document(), AppContext::new());
        let link = rt.compose(|cx| cx.create_element("a", &props! { "dataAction" => "missing" }, &().into()));
        let app = find(&rt, ".app");
        rt.document_mut().append_child(app, link).unwrap();
        rt.install_delegation();

        assert_eq!(rt.dispatch(&Event::click(link)), 1);
    }

    #[test]
    fn delegation_installs_once() {
        let mut rt = Runtime::new(host_document(), AppContext::new());
        assert!(rt.install_delegation());
        assert!(!rt.install_delegation());
        let doc = rt.document().document_node();
        assert_eq!(rt.document().listener_count(doc), 3);
    }

    #[test]
    fn native_and_delegated_listeners_both_run() {
        let hits = Rc::new(RefCell::new(0));
        let mut rt = Runtime::new(host_document(), AppContext::new());
        struct Counter {
            hits: Rc<RefCell<i32>>,
        }
        impl Widget for Counter {
            fn build(&self, cx: &mut BuildCtx<'_>) -> NodeId {
                let hits = self.hits.clone();
                let pressed = handler(move |_, _| *hits.borrow_mut() += 1);
                elevated_button(cx, props! { "onPressed" => pressed, "id" => "b" }, "+".into())
            }
        }
        rt.create_root(Counter { hits: hits.clone() });
        rt.start().unwrap();

        // Native onClick on the button, then delegation on the document node
        // (which finds `onPressed` in no registry).
        assert_eq!(rt.dispatch(&Event::click(find(&rt, "#b"))), 2);
        assert_eq!(*hits.borrow(), 1);
    }
}
