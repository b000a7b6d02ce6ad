//! Write acknowledgement decoding.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of a write acknowledgement.
///
/// The bridge answers a state write with an array of entries, one per
/// attribute, each carrying either a `success` map from attribute path to the
/// applied value or an `error` object.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AckEntry {
    /// Applied attributes, keyed by path (e.g. `"/lights/1/state/on"`).
    #[serde(default)]
    pub success: HashMap<String, Value>,
    /// Error description for a rejected attribute, if any.
    #[serde(default)]
    pub error: Option<Value>,
}

impl AckEntry {
    /// Check whether this entry acknowledges an applied attribute.
    pub fn is_success(&self) -> bool {
        !self.success.is_empty()
    }
}

/// The ordered acknowledgement sequence for a state write.
///
/// Light and group writes share this shape; a group acknowledgement uses
/// `/groups/{id}/action/...` attribute paths instead of
/// `/lights/{id}/state/...`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(transparent)]
pub struct WriteAck(pub Vec<AckEntry>);

impl WriteAck {
    /// The individual acknowledgement entries, in bridge order.
    pub fn entries(&self) -> &[AckEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check whether the bridge rejected every attribute of the write.
    ///
    /// An empty acknowledgement is not a failure.
    pub fn is_fully_failed(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|entry| !entry.is_success())
    }
}
