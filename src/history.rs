//! Message history tracking for debugging and diagnostics.

use std::collections::HashMap;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Type of message in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageType {
    Request,
    Response,
}

/// A recorded message in the history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub msg_type: MessageType,
    pub path: String,
    pub message: Value,
    /// Seconds since history creation
    pub timestamp: f64,
}

/// Tracks the bodies exchanged with a bridge for debugging.
///
/// Each [`crate::BridgeClient`] owns one history. Request bodies and decoded
/// acknowledgements are recorded here in addition to the `log` facade, so
/// tests and diagnostics can inspect them without capturing process output.
#[derive(Debug, Clone)]
pub struct MessageHistory {
    latest: HashMap<MessageType, HashMap<String, Value>>,
    last_error: Option<String>,
    start_time: Instant,
    entries: Vec<HistoryEntry>,
    max_entries: usize,
}

impl Default for MessageHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageHistory {
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    pub fn new() -> Self {
        Self {
            latest: HashMap::from([
                (MessageType::Request, HashMap::new()),
                (MessageType::Response, HashMap::new()),
            ]),
            last_error: None,
            start_time: Instant::now(),
            entries: Vec::new(),
            max_entries: Self::DEFAULT_MAX_ENTRIES,
        }
    }

    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            max_entries,
            ..Self::new()
        }
    }

    pub fn record(&mut self, msg_type: MessageType, path: &str, message: &Value) {
        if let Some(type_map) = self.latest.get_mut(&msg_type) {
            type_map.insert(path.to_string(), message.clone());
        }

        self.entries.push(HistoryEntry {
            msg_type,
            path: path.to_string(),
            message: message.clone(),
            timestamp: self.start_time.elapsed().as_secs_f64(),
        });

        if self.entries.len() > self.max_entries {
            self.entries.remove(0);
        }
    }

    pub fn record_error(&mut self, error: &str) {
        self.last_error = Some(error.to_string());
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The most recent message of the given type for a request path.
    pub fn latest(&self, msg_type: MessageType, path: &str) -> Option<&Value> {
        self.latest.get(&msg_type).and_then(|m| m.get(path))
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.latest.values_mut().for_each(|m| m.clear());
        self.entries.clear();
        self.last_error = None;
    }

    pub fn summary(&self) -> HistorySummary {
        let count = |t: MessageType| self.latest.get(&t).map_or(0, |m| m.len());
        HistorySummary {
            request_count: count(MessageType::Request),
            response_count: count(MessageType::Response),
            total_entries: self.entries.len(),
            last_error: self.last_error.clone(),
        }
    }
}

/// Summary of message history for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistorySummary {
    pub request_count: usize,
    pub response_count: usize,
    pub total_entries: usize,
    pub last_error: Option<String>,
}
