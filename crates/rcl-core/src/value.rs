//! The configuration document tree: dynamically-typed nodes, insertion-ordered
//! objects, and the implicit-array mechanism for repeated keys.

use crate::error::Result;

/// A node of the configuration tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    /// A timestamp or duration in seconds. Rendered exactly like [`Value::Float`];
    /// kept as a distinct kind so builders can preserve the semantic difference.
    Time(f64),
    Boolean(bool),
    String(String),
    Object(Object),
    /// An explicit array: the node itself is tagged as an array and owns its
    /// elements. Contrast with the implicit array of [`Entry::Multi`].
    Array(Vec<Value>),
    /// An opaque payload owned by the embedding application. It has no
    /// textual form: every renderer emits zero bytes for it, while separators
    /// around it are still placed.
    UserData,
}

impl Value {
    /// Convert a parsed JSON document into a configuration tree.
    ///
    /// Two JSON shapes have no native counterpart here: `null` maps to
    /// [`Value::UserData`] (and therefore disappears from emitted output),
    /// and numbers outside the `i64` range fall back to [`Value::Float`].
    pub fn from_json(json: &serde_json::Value) -> Value {
        match json {
            serde_json::Value::Null => Value::UserData,
            serde_json::Value::Bool(b) => Value::Boolean(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => Value::Float(n.as_f64().unwrap_or(0.0)),
            },
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(items) => {
                Value::Array(items.iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(map) => {
                let mut obj = Object::new();
                for (key, val) in map {
                    obj.insert(key.clone(), Value::from_json(val));
                }
                Value::Object(obj)
            }
        }
    }

    /// Parse `input` as JSON and convert it into a tree. Member order is
    /// preserved (`serde_json` is compiled with `preserve_order`).
    pub fn from_json_str(input: &str) -> Result<Value> {
        let json: serde_json::Value = serde_json::from_str(input)?;
        Ok(Value::from_json(&json))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Value {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Value {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Value {
        Value::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Value {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Value {
        Value::String(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Value {
        Value::Object(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Value {
        Value::Array(v)
    }
}

/// What an object key maps to.
///
/// Inserting a second value under an existing key promotes the entry from
/// `Single` to `Multi` — the *implicit array* of the RCL data model. The
/// promotion happens once, at insertion time, so renderers never have to
/// re-derive "how many values share this key" during traversal. An implicit
/// array is orthogonal to an explicit [`Value::Array`]: any of the chained
/// values may itself be an array.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Single(Value),
    /// Invariant: holds at least two values, in insertion order.
    Multi(Vec<Value>),
}

impl Entry {
    /// All values of the entry, in insertion order.
    pub fn values(&self) -> &[Value] {
        match self {
            Entry::Single(value) => std::slice::from_ref(value),
            Entry::Multi(values) => values,
        }
    }
}

/// An insertion-ordered key→[`Entry`] map. Keys are unique at the map level;
/// repeated insertion chains values instead of overwriting (see [`Entry`]).
///
/// Member count in configuration documents is small, so lookup is a linear
/// scan rather than a hash table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    members: Vec<(String, Entry)>,
}

impl Object {
    pub fn new() -> Object {
        Object::default()
    }

    /// Insert `value` under `key`, preserving insertion order.
    ///
    /// A repeated key does not overwrite: the existing entry becomes (or
    /// extends) an implicit array, with the earlier values kept first.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.members.iter_mut().find(|(k, _)| *k == key) {
            Some((_, entry)) => {
                let prev = std::mem::replace(entry, Entry::Multi(Vec::new()));
                *entry = match prev {
                    Entry::Single(first) => Entry::Multi(vec![first, value]),
                    Entry::Multi(mut values) => {
                        values.push(value);
                        Entry::Multi(values)
                    }
                };
            }
            None => self.members.push((key, Entry::Single(value))),
        }
    }

    /// Look up the entry stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.members
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate members as `(key, entry)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.members.iter().map(|(k, e)| (k.as_str(), e))
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Object {
        let mut obj = Object::new();
        for (key, value) in iter {
            obj.insert(key, value);
        }
        obj
    }
}
