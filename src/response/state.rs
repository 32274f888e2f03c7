// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Switchable state of an Energy Socket.

use serde::{Deserialize, Serialize};

/// State of a switchable device as reported by the device.
///
/// # Examples
///
/// ```
/// use homewizard_lib::response::SwitchState;
///
/// let json = r#"{"power_on": true, "switch_lock": false, "brightness": 255}"#;
/// let state: SwitchState = serde_json::from_str(json).unwrap();
/// assert_eq!(state.power_on, Some(true));
/// assert_eq!(state.brightness, Some(255));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SwitchState {
    /// Whether the relay is closed.
    pub power_on: Option<bool>,
    /// Whether the relay is locked in its current position.
    pub switch_lock: Option<bool>,
    /// Brightness of the status LED (0-255).
    pub brightness: Option<u8>,
}

/// A partial state write.
///
/// Only fields that are set are sent to the device. An update without any
/// field set is a no-op and does not reach the network.
///
/// # Examples
///
/// ```
/// use homewizard_lib::response::StateUpdate;
///
/// let update = StateUpdate::new().with_power_on(true);
/// assert_eq!(
///     serde_json::to_string(&update).unwrap(),
///     r#"{"power_on":true}"#
/// );
/// assert!(StateUpdate::new().is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StateUpdate {
    /// Desired relay state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_on: Option<bool>,
    /// Desired switch lock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_lock: Option<bool>,
    /// Desired status LED brightness (0-255).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<u8>,
}

impl StateUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the desired relay state.
    #[must_use]
    pub fn with_power_on(mut self, power_on: bool) -> Self {
        self.power_on = Some(power_on);
        self
    }

    /// Sets the desired switch lock.
    #[must_use]
    pub fn with_switch_lock(mut self, switch_lock: bool) -> Self {
        self.switch_lock = Some(switch_lock);
        self
    }

    /// Sets the desired status LED brightness.
    #[must_use]
    pub fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = Some(brightness);
        self
    }

    /// Returns whether no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.power_on.is_none() && self.switch_lock.is_none() && self.brightness.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_partial_state() {
        let state: SwitchState = serde_json::from_str(r#"{"power_on": false}"#).unwrap();
        assert_eq!(state.power_on, Some(false));
        assert_eq!(state.switch_lock, None);
        assert_eq!(state.brightness, None);
    }

    #[test]
    fn update_serializes_only_set_fields() {
        let update = StateUpdate::new()
            .with_switch_lock(true)
            .with_brightness(128);
        let json = serde_json::to_value(update).unwrap();
        assert_eq!(json, serde_json::json!({"switch_lock": true, "brightness": 128}));
    }

    #[test]
    fn empty_update() {
        assert!(StateUpdate::default().is_empty());
        assert!(!StateUpdate::new().with_power_on(false).is_empty());
        assert_eq!(serde_json::to_string(&StateUpdate::new()).unwrap(), "{}");
    }
}
