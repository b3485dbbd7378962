use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Acknowledgement returned by stop, start, delete and test operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub ok: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Ack {
    pub fn is_ok(&self) -> bool {
        self.ok
    }
}
