//! Vortex UI: Flutter-style widgets, view state and event delegation on top
//! of `vortex-dom`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use vortex_ui::prelude::*;
//!
//! struct Counter;
//!
//! impl Widget for Counter {
//!     fn build(&self, cx: &mut BuildCtx<'_>) -> NodeId {
//!         let n = cx.state().get_num("counter").unwrap_or(0.0);
//!         let label = text(cx, format!("Pressed {n} times"), Props::new());
//!         let plus = elevated_button(cx, props! { "dataAction" => "increment" }, children!["+"]);
//!         column(cx, props! { "mainAxisAlignment" => "center" }, children![label, plus])
//!     }
//! }
//!
//! let mut rt = Application::new()
//!     .action("increment", |cx, _| {
//!         let n = cx.state().get_num("counter").unwrap_or(0.0);
//!         cx.set_state([("counter", n + 1.0)]);
//!     })
//!     .launch(host_document(), |rt| rt.create_widget(Counter));
//!
//! let button = rt.document().query_selector("button").unwrap();
//! rt.dispatch(&Event::click(button));
//! ```
//!
//! # Writing widgets
//!
//! Implement [`Widget`] for any type and register it with
//! [`Runtime::create_widget`]. The returned [`WidgetId`] can be placed in any
//! slot (`child`, `body`, `home`, …) or child list; the builders resolve it,
//! and the runtime remembers where its output was mounted so a state change
//! on that instance re-renders only its subtree.

pub mod action;
pub mod app;
pub mod dispatch;
pub mod element;
pub mod error;
pub mod runtime;
pub mod state;
pub mod stylesheet;
pub mod theme;
pub mod value;
pub mod widget;
pub mod widgets;

pub use action::{handler, ActionRegistry, Handler};
pub use app::{host_document, AppContext, Application};
pub use error::RenderError;
pub use runtime::{BuildCtx, Dom, EventCtx, Phase, Runtime};
pub use state::{StateValue, ViewState};
pub use value::{Child, Children, Props, Value};
pub use widget::{MountRecord, Widget, WidgetId};

/// Everything a widget file needs.
pub mod prelude {
    pub use crate::action::{handler, ActionRegistry, Handler};
    pub use crate::app::{host_document, AppContext, Application};
    pub use crate::runtime::{BuildCtx, Dom, EventCtx, Runtime};
    pub use crate::state::ViewState;
    pub use crate::value::{Children, Props, Value};
    pub use crate::widget::{Widget, WidgetId};
    pub use crate::widgets::{
        app_bar, center, column, container, elevated_button, floating_action_button, icon, material_app, row,
        scaffold, sized_box, text, MainAxisAlignment,
    };
    pub use crate::{children, props};

    pub use vortex_dom::{Event, EventKind, NodeId};
}
