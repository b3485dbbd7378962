use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::ops::{Deref, DerefMut};

/// A monitor definition as stored by the server.
pub type Monitor = Document;

/// An event recorded by the server for a monitor.
pub type Event = Document;

/// JSON object passed through to and from the server without interpretation.
///
/// Monitors and events share this keyed-map type; the fields they carry
/// (`monitor`, `url`, `every`, `via`, `plugin`, `status_`, `_id`, ...) are
/// defined by the server and its plugins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` and return the document, for building request payloads.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Server-assigned identifier (`_id`).
    pub fn id(&self) -> Option<&str> {
        self.get_str("_id")
    }

    /// Monitor state (`status_`), e.g. `active` or `stopped`.
    pub fn status(&self) -> Option<&str> {
        self.get_str("status_")
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// True when every field of `other` is present here with an equal value.
    pub fn includes(&self, other: &Document) -> bool {
        other
            .0
            .iter()
            .all(|(key, value)| self.0.get(key) == Some(value))
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl Deref for Document {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Document {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Map<String, Value>> for Document {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        Value::Object(doc.0)
    }
}

impl TryFrom<Value> for Document {
    type Error = Value;

    /// Fails with the original value when it is not a JSON object.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
