//! Light snapshots reported by the bridge.

use serde::{Deserialize, Serialize};

use crate::state::LightState;

/// Attributes of a single light as reported by the bridge.
///
/// Snapshots are produced by [`BridgeClient::get_lights`](crate::BridgeClient::get_lights)
/// and never constructed by the caller. Attributes the bridge did not report
/// are left at their defaults.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Light {
    /// State of the light at the time of the listing.
    #[serde(default)]
    pub state: LightState,
    /// Device class reported by the bridge, e.g. `"Extended color light"`.
    #[serde(rename = "type", default)]
    pub light_type: String,
    /// User-assigned name.
    #[serde(default)]
    pub name: String,
    /// Hardware model identifier.
    #[serde(default)]
    pub modelid: String,
    /// Unique identifier, usually the MAC address plus endpoint.
    #[serde(default)]
    pub uniqueid: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_snapshot() {
        let light: Light = serde_json::from_str(
            r#"{
                "state": {"on": true, "bri": 254, "hue": 14956, "sat": 140,
                          "effect": "none", "xy": [0.4571, 0.4097], "ct": 366,
                          "alert": "none", "colormode": "ct", "reachable": true},
                "type": "Extended color light",
                "name": "Living room",
                "modelid": "LCT007",
                "uniqueid": "00:17:88:01:00:b1:28:1a-0b"
            }"#,
        )
        .unwrap();

        assert_eq!(light.name, "Living room");
        assert_eq!(light.light_type, "Extended color light");
        assert_eq!(light.state.on, Some(true));
        assert_eq!(light.state.bri, Some(254));
        assert_eq!(light.state.hue, Some(14956));
    }

    #[test]
    fn test_decode_sparse_snapshot() {
        let light: Light =
            serde_json::from_str(r#"{"state": {"on": false}, "name": "Hallway"}"#).unwrap();

        assert_eq!(light.name, "Hallway");
        assert_eq!(light.modelid, "");
        assert_eq!(light.state.on, Some(false));
        assert_eq!(light.state.bri, None);
    }
}
