//! Partial light state for reads and writes.

use serde::{Deserialize, Serialize};

/// A partial state of a light.
///
/// `LightState` serves two roles. As a write body it carries only the
/// attributes the caller explicitly set; every unset field is omitted from
/// the serialized JSON entirely, so the bridge leaves the corresponding
/// device attribute untouched. As part of a [`Light`](crate::Light) snapshot
/// it carries whatever attributes the bridge reported, with unreported
/// attributes left unset.
///
/// # Creating states
///
/// Set fields directly or use the setter methods:
///
/// ```
/// use hue_bridge_rs::LightState;
///
/// let mut state = LightState::new();
/// state.on(true);
/// state.brightness(200);
/// assert_eq!(
///     serde_json::to_string(&state).unwrap(),
///     r#"{"on":true,"bri":200}"#
/// );
/// ```
#[serde_with::skip_serializing_none]
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LightState {
    /// Power state.
    pub on: Option<bool>,
    /// Brightness, 1-254.
    pub bri: Option<u8>,
    /// Hue, 0-65535.
    pub hue: Option<u16>,
    /// Saturation, 0-254.
    pub sat: Option<u8>,
    /// Dynamic effect, e.g. `"none"` or `"colorloop"`.
    pub effect: Option<String>,
    /// Alert mode, e.g. `"none"` or `"select"`.
    pub alert: Option<String>,
}

impl LightState {
    /// Create a new empty state.
    ///
    /// At least one attribute must be set before the state can be written
    /// to a bridge.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_bridge_rs::LightState;
    ///
    /// let state = LightState::new();
    /// assert_eq!(state.is_valid(), false);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if this state contains at least one attribute.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_bridge_rs::LightState;
    ///
    /// let mut state = LightState::new();
    /// assert_eq!(state.is_valid(), false);
    ///
    /// state.saturation(140);
    /// assert_eq!(state.is_valid(), true);
    /// ```
    pub fn is_valid(&self) -> bool {
        self.on.is_some()
            || self.bri.is_some()
            || self.hue.is_some()
            || self.sat.is_some()
            || self.effect.is_some()
            || self.alert.is_some()
    }

    /// Set the power state.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_bridge_rs::LightState;
    ///
    /// let mut state = LightState::new();
    /// state.on(false);
    /// assert_eq!(state.on, Some(false));
    /// ```
    pub fn on(&mut self, on: bool) {
        self.on = Some(on);
    }

    /// Set the brightness level.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_bridge_rs::LightState;
    ///
    /// let mut state = LightState::new();
    /// state.brightness(254);
    /// assert_eq!(state.is_valid(), true);
    /// ```
    pub fn brightness(&mut self, bri: u8) {
        self.bri = Some(bri);
    }

    /// Set the hue.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_bridge_rs::LightState;
    ///
    /// let mut state = LightState::new();
    /// state.hue(14956);
    /// assert_eq!(state.is_valid(), true);
    /// ```
    pub fn hue(&mut self, hue: u16) {
        self.hue = Some(hue);
    }

    /// Set the saturation.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_bridge_rs::LightState;
    ///
    /// let mut state = LightState::new();
    /// state.saturation(140);
    /// assert_eq!(state.sat, Some(140));
    /// ```
    pub fn saturation(&mut self, sat: u8) {
        self.sat = Some(sat);
    }

    /// Set the dynamic effect.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_bridge_rs::LightState;
    ///
    /// let mut state = LightState::new();
    /// state.effect("colorloop");
    /// assert_eq!(state.is_valid(), true);
    /// ```
    pub fn effect(&mut self, effect: &str) {
        self.effect = Some(effect.to_string());
    }

    /// Set the alert mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_bridge_rs::LightState;
    ///
    /// let mut state = LightState::new();
    /// state.alert("select");
    /// assert_eq!(state.is_valid(), true);
    /// ```
    pub fn alert(&mut self, alert: &str) {
        self.alert = Some(alert.to_string());
    }
}
