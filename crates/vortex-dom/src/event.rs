use std::fmt;

use crate::node::NodeId;

/// The DOM event types the runtime distinguishes.
///
/// Anything else is carried verbatim in [`EventKind::Other`] so explicit
/// `onSomething` handlers still bind to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Pointer activation.
    Click,
    /// Value edited (fires on every keystroke).
    Input,
    /// Value committed, or a checkbox toggled.
    Change,
    Other(String),
}

impl EventKind {
    /// Parses a DOM event name (`"click"`, `"Input"`, …). Case-insensitive.
    pub fn from_name(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        match lower.as_str() {
            "click" => EventKind::Click,
            "input" => EventKind::Input,
            "change" => EventKind::Change,
            _ => EventKind::Other(lower),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            EventKind::Click => "click",
            EventKind::Input => "input",
            EventKind::Change => "change",
            EventKind::Other(name) => name,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A raw event as delivered to listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    /// The node the event originated on.
    pub target: NodeId,
}

impl Event {
    pub fn new(kind: EventKind, target: NodeId) -> Self {
        Self { kind, target }
    }

    pub fn click(target: NodeId) -> Self {
        Self::new(EventKind::Click, target)
    }

    pub fn input(target: NodeId) -> Self {
        Self::new(EventKind::Input, target)
    }

    pub fn change(target: NodeId) -> Self {
        Self::new(EventKind::Change, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!(EventKind::from_name("Click"), EventKind::Click);
        assert_eq!(EventKind::from_name("INPUT"), EventKind::Input);
        assert_eq!(EventKind::from_name("change"), EventKind::Change);
        assert_eq!(EventKind::from_name("MouseOver"), EventKind::Other("mouseover".into()));
    }

    #[test]
    fn other_round_trips_its_name() {
        assert_eq!(EventKind::from_name("keydown").name(), "keydown");
    }
}
