use std::fmt;

use indexmap::IndexMap;

use crate::value::fmt_number;

/// A primitive view-state value.
#[derive(Debug, Clone, PartialEq)]
pub enum StateValue {
    Bool(bool),
    Num(f64),
    Str(String),
}

impl fmt::Display for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateValue::Bool(b) => write!(f, "{b}"),
            StateValue::Num(n) => f.write_str(&fmt_number(*n)),
            StateValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for StateValue {
    fn from(b: bool) -> Self {
        StateValue::Bool(b)
    }
}

impl From<f64> for StateValue {
    fn from(n: f64) -> Self {
        StateValue::Num(n)
    }
}

impl From<i32> for StateValue {
    fn from(n: i32) -> Self {
        StateValue::Num(f64::from(n))
    }
}

impl From<&str> for StateValue {
    fn from(s: &str) -> Self {
        StateValue::Str(s.to_owned())
    }
}

impl From<String> for StateValue {
    fn from(s: String) -> Self {
        StateValue::Str(s)
    }
}

/// Flat key → primitive mapping owned by one widget instance.
///
/// Only changed through [`merge`](Self::merge); the runtime decides what to
/// re-render afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState(IndexMap<String, StateValue>);

impl ViewState {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Builder-style insert, for writing partial updates inline.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StateValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Shallow merge: keys in `partial` overwrite ours, others are kept.
    pub fn merge(&mut self, partial: ViewState) {
        for (k, v) in partial.0 {
            self.0.insert(k, v);
        }
    }

    pub fn get(&self, key: &str) -> Option<&StateValue> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(StateValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    pub fn get_num(&self, key: &str) -> Option<f64> {
        match self.0.get(key) {
            Some(StateValue::Num(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.0.get(key) {
            Some(StateValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &StateValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<StateValue>> FromIterator<(K, V)> for ViewState {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<StateValue>, const N: usize> From<[(K, V); N]> for ViewState {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}
