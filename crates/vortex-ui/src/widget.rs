use slotmap::new_key_type;
use vortex_dom::NodeId;

use crate::action::ActionRegistry;
use crate::runtime::BuildCtx;

new_key_type! {
    /// Identity of a widget instance registered with a [`Runtime`](crate::Runtime).
    pub struct WidgetId;
}

// ── Widget trait ──────────────────────────────────────────────────────────

/// A widget instance: something that can produce its output node on demand.
///
/// This is the only interface generated UI code has to target. Properties
/// and children live in the implementing type; view state lives in the
/// runtime and is read back through [`BuildCtx::state`].
///
/// # Example
///
/// ```rust,ignore
/// use vortex_ui::prelude::*;
///
/// struct Greeting { name: String }
///
/// impl Widget for Greeting {
///     fn build(&self, cx: &mut BuildCtx<'_>) -> NodeId {
///         let greeting = format!("Hello, {}!", self.name);
///         text(cx, greeting, Props::new())
///     }
/// }
/// ```
pub trait Widget: 'static {
    /// Produce a fresh output node. Called on every render of this instance;
    /// the previous node is discarded, never patched.
    fn build(&self, cx: &mut BuildCtx<'_>) -> NodeId;

    /// Named actions owned by this instance, consulted by delegated
    /// activation before the application-wide registry.
    ///
    /// Read once, when the instance is registered.
    fn actions(&self) -> ActionRegistry {
        ActionRegistry::new()
    }
}

/// Where an instance's last output currently lives.
///
/// Kept in a side table keyed by [`WidgetId`], never on the widget itself,
/// so the same instance can be referenced from several renders safely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountRecord {
    /// The node produced by the most recent `build`.
    pub rendered: NodeId,
    /// The container it was attached under, if any yet.
    pub parent: Option<NodeId>,
}
