//! Bridge client.

use std::collections::HashMap;
use std::time::Duration;

use log::debug;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::ack::WriteAck;
use crate::errors::Error;
use crate::history::{MessageHistory, MessageType};
use crate::light::Light;
use crate::state::LightState;
use crate::transport::{HttpTransport, ReqwestTransport};

type Result<T> = std::result::Result<T, Error>;

/// A client for one Hue-compatible lighting bridge.
///
/// A `BridgeClient` is constructed once per bridge and shared between any
/// number of concurrent tasks. State writes are serialized through an
/// internal lock, because the bridge's embedded HTTP server is documented to
/// misbehave under concurrent writes; reads are not serialized. Clients
/// targeting different bridges never contend with each other.
///
/// # Example
///
/// ```ignore
/// use hue_bridge_rs::{BridgeClient, LightState};
///
/// async fn dim_hallway() -> Result<(), hue_bridge_rs::Error> {
///     let client = BridgeClient::new("192.168.1.10", "abc123");
///
///     for (id, light) in client.get_lights().await? {
///         println!("{id}: {}", light.name);
///     }
///
///     let mut state = LightState::new();
///     state.on(true);
///     state.brightness(80);
///     client.set_light_state("5", &state).await
/// }
/// ```
pub struct BridgeClient<T: HttpTransport = ReqwestTransport> {
    base_url: String,
    username: String,
    transport: T,
    write_lock: Mutex<()>,
    history: Mutex<MessageHistory>,
}

impl BridgeClient<ReqwestTransport> {
    /// Per-request timeout applied when none is configured.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Create a client for the bridge at `hostname` using an API `username`.
    ///
    /// `hostname` may carry a port (`"192.168.1.10:8080"`). Neither argument
    /// is validated and no network call is made.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_bridge_rs::BridgeClient;
    ///
    /// let client = BridgeClient::new("192.168.1.10", "abc123");
    /// assert_eq!(client.base_url(), "http://192.168.1.10/api/abc123");
    /// ```
    pub fn new(hostname: &str, username: &str) -> Self {
        Self::with_timeout(hostname, username, Self::DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom per-request timeout.
    pub fn with_timeout(hostname: &str, username: &str, timeout: Duration) -> Self {
        Self::with_transport(hostname, username, ReqwestTransport::new(timeout))
    }
}

impl<T: HttpTransport> BridgeClient<T> {
    /// Create a client using a custom [`HttpTransport`].
    pub fn with_transport(hostname: &str, username: &str, transport: T) -> Self {
        BridgeClient {
            base_url: format!("http://{hostname}/api/{username}"),
            username: username.to_string(),
            transport,
            write_lock: Mutex::new(()),
            history: Mutex::new(MessageHistory::new()),
        }
    }

    /// The composed base URL of the bridge API.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The API username this client was constructed with.
    pub fn username(&self) -> &str {
        &self.username
    }

    pub async fn history(&self) -> MessageHistory {
        self.history.lock().await.clone()
    }

    pub async fn clear_history(&self) {
        self.history.lock().await.clear();
    }

    /// Fetch all lights known to the bridge, keyed by device id.
    ///
    /// Reads are not serialized against writes; a listing may observe state
    /// concurrently with an in-flight write.
    pub async fn get_lights(&self) -> Result<HashMap<String, Light>> {
        let url = format!("{}/lights", self.base_url);

        let body = match self.transport.get(&url).await {
            Ok(body) => body,
            Err(e) => {
                self.history.lock().await.record_error(&e.to_string());
                return Err(e);
            }
        };

        let value: Value = serde_json::from_str(&body).map_err(Error::JsonLoad)?;
        debug!("GET {url} response: {value}");
        self.history
            .lock()
            .await
            .record(MessageType::Response, &url, &value);

        serde_json::from_value(value).map_err(Error::JsonLoad)
    }

    /// Apply a partial state to a single light.
    ///
    /// Only the attributes set on `state` are written; everything else is
    /// left untouched on the device. The acknowledgement is recorded in the
    /// history and discarded, unless the bridge rejected every attribute, in
    /// which case [`Error::WriteFailed`] is returned.
    pub async fn set_light_state(&self, light_id: &str, state: &LightState) -> Result<()> {
        let url = format!("{}/lights/{}/state", self.base_url, light_id);
        self.put_state(&url, state).await
    }

    /// Apply a partial state to every light in a group.
    ///
    /// Same contract as [`set_light_state`](Self::set_light_state), including
    /// the acknowledgement shape.
    pub async fn set_group_state(&self, group_id: &str, state: &LightState) -> Result<()> {
        let url = format!("{}/groups/{}/action", self.base_url, group_id);
        self.put_state(&url, state).await
    }

    async fn put_state(&self, url: &str, state: &LightState) -> Result<()> {
        if !state.is_valid() {
            return Err(Error::NoAttribute);
        }

        // Held across encode, request and decode so that at most one write
        // is in flight per client instance.
        let _guard = self.write_lock.lock().await;

        let msg = serde_json::to_value(state).map_err(Error::JsonDump)?;
        debug!("PUT {url} {msg}");
        self.history
            .lock()
            .await
            .record(MessageType::Request, url, &msg);

        let body = match self
            .transport
            .put(url, "application/json", msg.to_string())
            .await
        {
            Ok(body) => body,
            Err(e) => {
                debug!("PUT {url} failed: {e}");
                self.history.lock().await.record_error(&e.to_string());
                return Err(e);
            }
        };

        let value: Value = serde_json::from_str(&body).map_err(Error::JsonLoad)?;
        self.history
            .lock()
            .await
            .record(MessageType::Response, url, &value);

        let ack: WriteAck = serde_json::from_value(value).map_err(Error::JsonLoad)?;
        debug!("PUT {url} acknowledged: {ack:?}");

        if ack.is_fully_failed() {
            return Err(Error::WriteFailed(ack.len()));
        }
        Ok(())
    }
}
