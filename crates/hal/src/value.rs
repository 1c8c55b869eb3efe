//! Tagged value model for HAL resources.
//!
//! Every property, link attribute and resource is a [`Value`]. Containers are
//! tagged explicitly as [`Value::List`] or [`Value::Map`] when they are built;
//! nothing downstream inspects key shapes to guess which one it is.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{self, Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Number;

/// A leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    /// Numbers keep the textual form they were parsed or built with.
    Number(Number),
    Bool(bool),
    Null,
}

/// A node in a HAL value tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    List(Vec<Value>),
    Map(Map),
    /// A host value with no document representation, such as a callback or
    /// an open resource handle. The string describes what it was.
    ///
    /// Conversions from JSON never produce this variant; renderers reject it
    /// with [`HalError::InvalidValue`](crate::HalError::InvalidValue).
    Opaque(String),
}

/// The shape of a [`Value`], without its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Scalar,
    List,
    Map,
    Opaque,
}

impl Value {
    /// The `null` scalar.
    pub fn null() -> Self {
        Value::Scalar(Scalar::Null)
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Scalar(_) => ValueKind::Scalar,
            Value::List(_) => ValueKind::List,
            Value::Map(_) => ValueKind::Map,
            Value::Opaque(_) => ValueKind::Opaque,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Scalar(Scalar::Null))
    }

    /// Short human-readable description used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Value::Scalar(Scalar::String(s)) => format!("string {:?}", s),
            Value::Scalar(Scalar::Number(n)) => format!("number {}", n),
            Value::Scalar(Scalar::Bool(b)) => format!("boolean {}", b),
            Value::Scalar(Scalar::Null) => "null".to_string(),
            Value::List(items) => format!("list of {} item(s)", items.len()),
            Value::Map(map) => format!("map of {} entr(ies)", map.len()),
            Value::Opaque(what) => format!("opaque value ({})", what),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Scalar => "scalar",
            ValueKind::List => "list",
            ValueKind::Map => "map",
            ValueKind::Opaque => "opaque",
        };
        f.write_str(name)
    }
}

/// Ordered string-keyed mapping with unique keys.
///
/// Iteration follows insertion order. Inserting an existing key replaces its
/// value without moving it. Two maps are equal only when their entries match
/// in order.
#[derive(Debug, Clone, Default)]
pub struct Map {
    entries: IndexMap<String, Value>,
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len() && self.entries.iter().eq(other.entries.iter())
    }
}

impl Map {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts `value` under `key`, returning the previous value if the key
    /// was already present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = Map::with_capacity(iter.size_hint().0);
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Value::Scalar(scalar)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(map)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(Scalar::String(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(Scalar::String(s))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(Scalar::Bool(b))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Scalar(Scalar::Number(n.into()))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Scalar(Scalar::Number(n.into()))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Scalar(Scalar::Number(n.into()))
    }
}

/// Non-finite floats have no JSON number form and become `null`.
impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Number::from_f64(n)
            .map(|n| Value::Scalar(Scalar::Number(n)))
            .unwrap_or_else(Value::null)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_else(Value::null)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::null(),
            serde_json::Value::Bool(b) => Value::Scalar(Scalar::Bool(b)),
            serde_json::Value::Number(n) => Value::Scalar(Scalar::Number(n)),
            serde_json::Value::String(s) => Value::Scalar(Scalar::String(s)),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(object) => Value::Map(
                object
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::String(s) => serializer.serialize_str(s),
            Scalar::Number(n) => n.serialize(serializer),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
            Scalar::Null => serializer.serialize_unit(),
        }
    }
}

impl Serialize for Map {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Scalar(scalar) => scalar.serialize(serializer),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(map) => map.serialize(serializer),
            Value::Opaque(_) => Err(ser::Error::custom(format!(
                "cannot serialize {}",
                self.describe()
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}
