use std::fmt;

use indexmap::IndexMap;
use vortex_dom::NodeId;

use crate::action::Handler;
use crate::state::StateValue;
use crate::widget::WidgetId;

// ── Value ─────────────────────────────────────────────────────────────────

/// One entry of a property bag.
///
/// Primitives (`Str`, `Num`, `Bool`) may become native attributes; the rest
/// are only meaningful to the keys that recognize them.
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Num(f64),
    Str(String),
    /// Nested mapping (`style`, `theme`).
    Map(Props),
    List(Vec<Value>),
    Handler(Handler),
    /// A nested widget instance, resolved by the slot that holds it.
    Widget(WidgetId),
    /// An already-built node.
    Node(NodeId),
}

impl Value {
    /// String form of a primitive; `None` for everything else.
    pub fn as_primitive(&self) -> Option<String> {
        match self {
            Value::Str(s) => Some(s.clone()),
            Value::Num(n) => Some(fmt_number(*n)),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_num(&self) -> Option<f64> {
        match self {
            Value::Num(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Props> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_handler(&self) -> Option<&Handler> {
        match self {
            Value::Handler(h) => Some(h),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Num(n) => write!(f, "Num({n})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::Map(m) => f.debug_tuple("Map").field(m).finish(),
            Value::List(l) => f.debug_tuple("List").field(l).finish(),
            Value::Handler(_) => f.write_str("Handler(..)"),
            Value::Widget(w) => write!(f, "Widget({w:?})"),
            Value::Node(n) => write!(f, "Node({n:?})"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Str(s.clone())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Num(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Num(f64::from(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Num(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Num(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Props> for Value {
    fn from(p: Props) -> Self {
        Value::Map(p)
    }
}

impl From<Handler> for Value {
    fn from(h: Handler) -> Self {
        Value::Handler(h)
    }
}

impl From<WidgetId> for Value {
    fn from(w: WidgetId) -> Self {
        Value::Widget(w)
    }
}

impl From<NodeId> for Value {
    fn from(n: NodeId) -> Self {
        Value::Node(n)
    }
}

impl From<StateValue> for Value {
    fn from(v: StateValue) -> Self {
        match v {
            StateValue::Bool(b) => Value::Bool(b),
            StateValue::Num(n) => Value::Num(n),
            StateValue::Str(s) => Value::Str(s),
        }
    }
}

impl From<Child> for Value {
    fn from(c: Child) -> Self {
        match c {
            Child::Node(n) => Value::Node(n),
            Child::Text(s) => Value::Str(s),
            Child::Num(n) => Value::Num(n),
            Child::Widget(w) => Value::Widget(w),
            Child::Empty => Value::Null,
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

/// Formats a number the way a script runtime prints it: integral values
/// without a fraction (`20`, not `20.0`).
pub fn fmt_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

// ── Props ─────────────────────────────────────────────────────────────────

/// An ordered property bag.
///
/// Builders never mutate a caller's bag: [`without`](Self::without) and
/// [`merged`](Self::merged) return new bags.
#[derive(Clone, Default)]
pub struct Props(IndexMap<String, Value>);

impl Props {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts or overwrites `key`, keeping its original position if present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Like [`get`](Self::get) but treats `Null` as absent.
    pub fn present(&self, key: &str) -> Option<&Value> {
        self.get(key).filter(|v| !v.is_null())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn num(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_num)
    }

    pub fn map(&self, key: &str) -> Option<&Props> {
        self.get(key).and_then(Value::as_map)
    }

    /// Copy of this bag minus `keys`.
    pub fn without(&self, keys: &[&str]) -> Props {
        Props(
            self.0
                .iter()
                .filter(|(k, _)| !keys.contains(&k.as_str()))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    /// Shallow right-biased merge: entries of `other` overwrite ours.
    pub fn merged(&self, other: Option<&Props>) -> Props {
        let mut out = self.clone();
        if let Some(other) = other {
            for (k, v) in other.iter() {
                out.0.insert(k.clone(), v.clone());
            }
        }
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Props {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Props::new();
        for (k, v) in iter {
            props.insert(k, v);
        }
        props
    }
}

/// Builds a [`Props`] bag: `props! { "className" => "primary", "width" => 20 }`.
#[macro_export]
macro_rules! props {
    () => { $crate::Props::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut props = $crate::Props::new();
        $( props.insert($key, $value); )+
        props
    }};
}

// ── Children ──────────────────────────────────────────────────────────────

/// One entry of a child list.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Node(NodeId),
    Text(String),
    Num(f64),
    /// Resolved by widget builders; ignored by the bare node builder.
    Widget(WidgetId),
    Empty,
}

impl From<NodeId> for Child {
    fn from(n: NodeId) -> Self {
        Child::Node(n)
    }
}

impl From<&str> for Child {
    fn from(s: &str) -> Self {
        Child::Text(s.to_owned())
    }
}

impl From<String> for Child {
    fn from(s: String) -> Self {
        Child::Text(s)
    }
}

impl From<f64> for Child {
    fn from(n: f64) -> Self {
        Child::Num(n)
    }
}

impl From<i32> for Child {
    fn from(n: i32) -> Self {
        Child::Num(f64::from(n))
    }
}

impl From<WidgetId> for Child {
    fn from(w: WidgetId) -> Self {
        Child::Widget(w)
    }
}

impl From<Value> for Child {
    fn from(v: Value) -> Self {
        match v {
            Value::Node(n) => Child::Node(n),
            Value::Str(s) => Child::Text(s),
            Value::Num(n) => Child::Num(n),
            Value::Widget(w) => Child::Widget(w),
            _ => Child::Empty,
        }
    }
}

impl<T: Into<Child>> From<Option<T>> for Child {
    fn from(c: Option<T>) -> Self {
        c.map_or(Child::Empty, Into::into)
    }
}

/// A child list: either bare text, or an ordered sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Children {
    Text(String),
    List(Vec<Child>),
}

impl Children {
    pub fn none() -> Self {
        Children::List(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Children::Text(_) => false,
            Children::List(l) => l.is_empty(),
        }
    }

    /// Interprets a property value as a child list (`children: [...]`).
    pub fn from_value(v: &Value) -> Option<Children> {
        match v {
            Value::List(items) => Some(Children::List(items.iter().cloned().map(Child::from).collect())),
            Value::Str(s) => Some(Children::Text(s.clone())),
            Value::Num(n) => Some(Children::Text(fmt_number(*n))),
            Value::Node(_) | Value::Widget(_) => Some(Children::List(vec![Child::from(v.clone())])),
            _ => None,
        }
    }
}

impl Default for Children {
    fn default() -> Self {
        Children::none()
    }
}

impl From<&str> for Children {
    fn from(s: &str) -> Self {
        Children::Text(s.to_owned())
    }
}

impl From<String> for Children {
    fn from(s: String) -> Self {
        Children::Text(s)
    }
}

impl From<f64> for Children {
    fn from(n: f64) -> Self {
        Children::Text(fmt_number(n))
    }
}

impl From<()> for Children {
    fn from(_: ()) -> Self {
        Children::none()
    }
}

impl<T: Into<Child>> From<Vec<T>> for Children {
    fn from(v: Vec<T>) -> Self {
        Children::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Child>, const N: usize> From<[T; N]> for Children {
    fn from(v: [T; N]) -> Self {
        Children::List(v.into_iter().map(Into::into).collect())
    }
}

/// Builds a heterogeneous [`Children`] list: `children![node, "text", widget_id]`.
#[macro_export]
macro_rules! children {
    () => { $crate::Children::none() };
    ($($child:expr),+ $(,)?) => {
        $crate::Children::List(vec![$($crate::Child::from($child)),+])
    };
}
