// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device-wide system settings.

use serde::{Deserialize, Serialize};

/// System settings as reported by the device.
///
/// The v1 API only reports `cloud_enabled`; the v2 API adds Wi-Fi details,
/// uptime and the status LED brightness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SystemConfig {
    /// SSID of the Wi-Fi network the device is connected to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi_ssid: Option<String>,
    /// Wi-Fi signal strength in dB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi_rssi_db: Option<i32>,
    /// Whether the device talks to the `HomeWizard` cloud.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_enabled: Option<bool>,
    /// Seconds since boot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime_s: Option<u64>,
    /// Status LED brightness in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_led_brightness_pct: Option<u8>,
    /// Whether the v1 API is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_v1_enabled: Option<bool>,
}

/// A partial system settings write.
///
/// An update without any field set is a no-op and does not reach the network.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SystemUpdate {
    /// Enable or disable the cloud connection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_enabled: Option<bool>,
    /// Status LED brightness in percent (v2 only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_led_brightness_pct: Option<u8>,
    /// Enable or disable the v1 API (v2 only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_v1_enabled: Option<bool>,
}

impl SystemUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the cloud connection.
    #[must_use]
    pub fn with_cloud_enabled(mut self, enabled: bool) -> Self {
        self.cloud_enabled = Some(enabled);
        self
    }

    /// Sets the status LED brightness.
    #[must_use]
    pub fn with_status_led_brightness_pct(mut self, pct: u8) -> Self {
        self.status_led_brightness_pct = Some(pct);
        self
    }

    /// Enables or disables the v1 API.
    #[must_use]
    pub fn with_api_v1_enabled(mut self, enabled: bool) -> Self {
        self.api_v1_enabled = Some(enabled);
        self
    }

    /// Returns whether no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cloud_enabled.is_none()
            && self.status_led_brightness_pct.is_none()
            && self.api_v1_enabled.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_v1_system() {
        let system: SystemConfig = serde_json::from_str(r#"{"cloud_enabled": false}"#).unwrap();
        assert_eq!(system.cloud_enabled, Some(false));
        assert_eq!(system.uptime_s, None);
    }

    #[test]
    fn parse_v2_system() {
        let json = r#"{
            "wifi_ssid": "My Wi-Fi",
            "wifi_rssi_db": -77,
            "cloud_enabled": true,
            "uptime_s": 356,
            "status_led_brightness_pct": 100,
            "api_v1_enabled": true
        }"#;
        let system: SystemConfig = serde_json::from_str(json).unwrap();
        assert_eq!(system.wifi_rssi_db, Some(-77));
        assert_eq!(system.uptime_s, Some(356));
        assert_eq!(system.api_v1_enabled, Some(true));
    }

    #[test]
    fn update_serializes_only_set_fields() {
        let update = SystemUpdate::new().with_cloud_enabled(true);
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"cloud_enabled":true}"#
        );
        assert!(SystemUpdate::new().is_empty());
        assert!(!update.is_empty());
    }
}
