use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use vortex_dom::Event;

use crate::runtime::EventCtx;

/// A callable bound to an event: explicit `on*` listeners, `onPressed`, and
/// named actions all share this shape.
///
/// The [`EventCtx`] is scoped to the widget instance that owns the handler,
/// so `cx.set_state(..)` updates that instance.
pub type Handler = Rc<dyn Fn(&mut EventCtx<'_>, &Event)>;

/// Wraps a closure as a [`Handler`].
pub fn handler(f: impl Fn(&mut EventCtx<'_>, &Event) + 'static) -> Handler {
    Rc::new(f)
}

/// Name → handler table.
///
/// Each widget instance has one (from [`Widget::actions`](crate::Widget::actions))
/// and the application context has one; delegated activation looks names up
/// in that order.
#[derive(Clone, Default)]
pub struct ActionRegistry {
    actions: HashMap<String, Handler>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, name: impl Into<String>, f: impl Fn(&mut EventCtx<'_>, &Event) + 'static) -> Self {
        self.register(name, f);
        self
    }

    /// Registers `f` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, f: impl Fn(&mut EventCtx<'_>, &Event) + 'static) {
        self.actions.insert(name.into(), Rc::new(f));
    }

    pub fn get(&self, name: &str) -> Option<Handler> {
        self.actions.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.actions.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("ActionRegistry").field("actions", &names).finish()
    }
}
