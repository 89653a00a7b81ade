use vortex_dom::DomError;

use crate::widget::WidgetId;

/// Configuration errors surfaced by the render and dispatch paths.
///
/// Every variant is logged where it is detected; the `Result` is returned
/// so callers and tests can inspect it, never so they must handle it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("mount point `{0}` not found in document")]
    MissingMountPoint(String),
    #[error("no root widget has been designated")]
    NoRoot,
    #[error("widget {0:?} does not exist")]
    UnknownWidget(WidgetId),
    #[error("widget {0:?} is not mounted under any parent; nothing to re-render")]
    DetachedWidget(WidgetId),
    #[error("widget {0:?} is already being built; it cannot contain itself")]
    Reentrant(WidgetId),
    #[error(transparent)]
    Dom(#[from] DomError),
}
