//! Ordered JSON fragments
//!
//! Every embed part renders into a [`Fragment`]: an ordered list of
//! key/value entries that the enclosing object splices into itself. An
//! empty fragment means the part contributes nothing. Entries keep their
//! insertion order and duplicate keys are written as-is, so a fragment
//! serializes exactly the way it was assembled. All text goes through
//! `serde_json`, which takes care of escaping.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// A value inside a fragment
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Plain JSON scalar (string, number, boolean)
    Value(Value),
    /// Nested object
    Object(Fragment),
    /// JSON array
    Array(Vec<Node>),
}

impl Node {
    /// String content if this node is a JSON string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Value(value) => value.as_str(),
            _ => None,
        }
    }

    /// Nested fragment if this node is an object
    pub fn as_object(&self) -> Option<&Fragment> {
        match self {
            Node::Object(fragment) => Some(fragment),
            _ => None,
        }
    }

    /// Items if this node is an array
    pub fn as_array(&self) -> Option<&[Node]> {
        match self {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Value(value) => value.serialize(serializer),
            Node::Object(fragment) => fragment.serialize(serializer),
            Node::Array(items) => items.serialize(serializer),
        }
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        Node::Value(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Value(Value::String(value.to_string()))
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Value(Value::String(value))
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Value(Value::Bool(value))
    }
}

impl From<u32> for Node {
    fn from(value: u32) -> Self {
        Node::Value(Value::from(value))
    }
}

impl From<Fragment> for Node {
    fn from(fragment: Fragment) -> Self {
        Node::Object(fragment)
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Node::Array(items)
    }
}

/// Ordered key/value entries of a JSON object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
    entries: Vec<(&'static str, Node)>,
}

impl Fragment {
    /// Create an empty fragment
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fragment holding a single entry
    pub fn single(key: &'static str, value: impl Into<Node>) -> Self {
        Self {
            entries: vec![(key, value.into())],
        }
    }

    /// Append an entry
    pub fn push(&mut self, key: &'static str, value: impl Into<Node>) {
        self.entries.push((key, value.into()));
    }

    /// Append an entry, builder style
    pub fn with(mut self, key: &'static str, value: impl Into<Node>) -> Self {
        self.push(key, value);
        self
    }

    /// Append every entry of another fragment
    pub fn extend(&mut self, other: Fragment) {
        self.entries.extend(other.entries);
    }

    /// Drop every entry stored under `key`
    pub fn remove(&mut self, key: &str) {
        self.entries.retain(|(k, _)| *k != key);
    }

    /// First value stored under `key`
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| value)
    }

    /// Keys in emission order, duplicates included
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Serialize as a compact JSON object (`{}` when empty)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Serialize for Fragment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
