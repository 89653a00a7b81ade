//! Vortex document crate.
//!
//! A small, single-threaded document tree (elements, text, inline style,
//! dataset markers, listeners) that the UI runtime mounts widgets into.
//! Nodes live in a generational arena, so a stale [`NodeId`] held after a
//! subtree was replaced resolves to nothing instead of aliasing a new node.
//!
//! The crate knows nothing about widgets: listeners are an opaque payload `L`
//! chosen by the layer above.

pub mod document;
pub mod error;
pub mod event;
pub mod html;
pub mod logging;
pub mod node;
pub mod selector;

pub use document::{Ancestors, Document};
pub use error::DomError;
pub use event::{Event, EventKind};
pub use node::{ElementData, Node, NodeId, NodeKind};
pub use selector::Selector;
