//! # hue_bridge_rs
//!
//! An async Rust client for Philips Hue compatible lighting bridges.
//!
//! This crate talks to the bridge's local REST API over plain HTTP. It can
//! enumerate the lights a bridge knows about and apply partial state updates
//! (power, brightness, hue, saturation, effect, alert) to a single light or
//! to a whole group.
//!
//! ## Quick Start
//!
//! ```ignore
//! use hue_bridge_rs::{BridgeClient, LightState};
//!
//! async fn evening_scene() -> Result<(), hue_bridge_rs::Error> {
//!     // One client per bridge, shared between tasks.
//!     let client = BridgeClient::new("192.168.1.10", "abc123");
//!
//!     for (id, light) in client.get_lights().await? {
//!         println!("{id}: {} ({})", light.name, light.light_type);
//!     }
//!
//!     // Only the attributes set here are touched on the device.
//!     let mut state = LightState::new();
//!     state.on(true);
//!     state.brightness(120);
//!     client.set_group_state("1", &state).await
//! }
//! ```
//!
//! ## Partial updates
//!
//! [`LightState`] is a partial record: unset fields are omitted from the
//! request body entirely, never sent as `null`, so a write only changes the
//! attributes the caller explicitly set.
//!
//! ## Write serialization
//!
//! The bridge runs a single-threaded embedded HTTP server that misbehaves
//! under concurrent writes, so [`BridgeClient`] serializes all state writes
//! through an internal lock. Reads are not serialized. The lock is per
//! client instance; clients for different bridges never contend.
//!
//! ## Transports
//!
//! Network I/O goes through the [`HttpTransport`] trait, with a
//! reqwest-backed [`ReqwestTransport`] as the default. Tests can inject a
//! canned transport via [`BridgeClient::with_transport`].

mod ack;
mod bridge;
mod errors;
mod history;
mod light;
mod state;
mod transport;

// Re-export public API
pub use ack::{AckEntry, WriteAck};
pub use bridge::BridgeClient;
pub use errors::Error;
pub use history::{HistoryEntry, HistorySummary, MessageHistory, MessageType};
pub use light::Light;
pub use state::LightState;
pub use transport::{HttpTransport, ReqwestTransport};
