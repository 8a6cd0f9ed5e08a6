use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// One record of a content type, as returned by the query engine.
///
/// The service never inspects an entry; it only passes it through or hands
/// it to a batch callback. The accessors below are conveniences for
/// callbacks and tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entry(Value);

impl Entry {
    /// Wraps a JSON value as an entry.
    #[must_use]
    pub fn new(data: Value) -> Self {
        Self(data)
    }

    /// The empty record `{}`, returned for unknown content types.
    #[must_use]
    pub fn empty() -> Self {
        Self(Value::Object(Map::new()))
    }

    /// Whether this is an empty record (or JSON `null`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Object(map) => map.is_empty(),
            Value::Null => true,
            _ => false,
        }
    }

    /// The entry's `id` field, if present.
    #[must_use]
    pub fn id(&self) -> Option<EntryId> {
        self.0.get("id").cloned().map(EntryId)
    }

    /// String field at `pointer`, such as `/title`.
    pub fn get_str(&self, pointer: &str) -> Option<&str> {
        self.0.pointer(pointer).and_then(|v| v.as_str())
    }

    /// Integer field at `pointer`.
    pub fn get_i64(&self, pointer: &str) -> Option<i64> {
        self.0.pointer(pointer).and_then(|v| v.as_i64())
    }

    /// Raw value at `pointer`; `None` when the path is absent.
    pub fn get(&self, pointer: &str) -> Option<&Value> {
        self.0.pointer(pointer)
    }

    /// Borrow the underlying JSON.
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume the entry, returning the underlying JSON.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for Entry {
    fn from(data: Value) -> Self {
        Self(data)
    }
}

impl From<Entry> for Value {
    fn from(entry: Entry) -> Self {
        entry.0
    }
}

/// Identifier of a single entry. Engines use numeric or string ids, so the
/// value is kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Value);

impl EntryId {
    /// Borrow the raw id value.
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}

impl From<i64> for EntryId {
    fn from(id: i64) -> Self {
        Self(Value::from(id))
    }
}

impl From<u64> for EntryId {
    fn from(id: u64) -> Self {
        Self(Value::from(id))
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        Self(Value::from(id))
    }
}

impl From<String> for EntryId {
    fn from(id: String) -> Self {
        Self(Value::from(id))
    }
}
