use std::io;

/// All error types that can occur when talking to a Hue bridge.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to serialize a request body to JSON.
    #[error("failed to dump json: {0:?}")]
    JsonDump(serde_json::Error),

    /// Failed to deserialize JSON data from a response body.
    #[error("failed to load json: {0:?}")]
    JsonLoad(serde_json::Error),

    /// An HTTP operation failed while communicating with the bridge.
    #[error("http {action} error: {err:?}")]
    Transport { action: String, err: io::Error },

    /// Attempted to send a [`crate::LightState`] with no attributes set.
    #[error("invalid state; no attributes set")]
    NoAttribute,

    /// The bridge rejected every attribute of a state write.
    #[error("write failed; all {0} acknowledgement entries report errors")]
    WriteFailed(usize),
}

impl Error {
    /// Create a new transport error
    pub fn transport(action: &str, err: io::Error) -> Self {
        Error::Transport {
            action: action.to_string(),
            err,
        }
    }
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
