// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Measurement data parsing.
//!
//! The v1 API serves readings from `/api/v1/data` using names such as
//! `active_power_w` and `total_power_import_kwh`. The v2 API serves the same
//! readings from `/api/measurement` as `power_w` and `energy_import_kwh`.
//! [`DataSnapshot`] uses the v2 names and accepts the v1 names as aliases, so
//! callers see one shape regardless of the API generation.
//!
//! Which fields are present depends on the product type and firmware. A
//! missing reading is `None`, never zero.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::de;

/// A single set of meter readings.
///
/// # Examples
///
/// ```
/// use homewizard_lib::response::DataSnapshot;
///
/// // v1 payload of an Energy Socket
/// let json = r#"{
///     "wifi_ssid": "My Wi-Fi",
///     "wifi_strength": 92,
///     "total_power_import_t1_kwh": 30.511,
///     "active_power_w": 543
/// }"#;
/// let data: DataSnapshot = serde_json::from_str(json).unwrap();
/// assert_eq!(data.power_w, Some(543.0));
/// assert_eq!(data.energy_import_t1_kwh, Some(30.511));
/// assert_eq!(data.voltage_v, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DataSnapshot {
    // ---- v1 only; moved to the system endpoint in v2 ----
    /// SSID of the Wi-Fi network the device is connected to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi_ssid: Option<String>,
    /// Wi-Fi signal strength in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi_strength: Option<u8>,

    // ---- P1 meter ----
    /// DSMR protocol version of the smart meter.
    #[serde(alias = "smr_version", skip_serializing_if = "Option::is_none")]
    pub protocol_version: Option<u32>,
    /// Brand and type of the smart meter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meter_model: Option<String>,
    /// Unique identifier of the smart meter.
    #[serde(
        alias = "unique_meter_id",
        deserialize_with = "de::hex_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub unique_id: Option<String>,
    /// Timestamp of the telegram the readings were taken from.
    #[serde(deserialize_with = "de::timestamp", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<NaiveDateTime>,
    /// Currently active tariff.
    #[serde(alias = "active_tariff", skip_serializing_if = "Option::is_none")]
    pub tariff: Option<u8>,

    // ---- Energy ----
    /// Total imported energy in kWh.
    #[serde(alias = "total_power_import_kwh", skip_serializing_if = "Option::is_none")]
    pub energy_import_kwh: Option<f64>,
    /// Imported energy on tariff 1 in kWh.
    #[serde(alias = "total_power_import_t1_kwh", skip_serializing_if = "Option::is_none")]
    pub energy_import_t1_kwh: Option<f64>,
    /// Imported energy on tariff 2 in kWh.
    #[serde(alias = "total_power_import_t2_kwh", skip_serializing_if = "Option::is_none")]
    pub energy_import_t2_kwh: Option<f64>,
    /// Imported energy on tariff 3 in kWh.
    #[serde(alias = "total_power_import_t3_kwh", skip_serializing_if = "Option::is_none")]
    pub energy_import_t3_kwh: Option<f64>,
    /// Imported energy on tariff 4 in kWh.
    #[serde(alias = "total_power_import_t4_kwh", skip_serializing_if = "Option::is_none")]
    pub energy_import_t4_kwh: Option<f64>,
    /// Total exported energy in kWh.
    #[serde(alias = "total_power_export_kwh", skip_serializing_if = "Option::is_none")]
    pub energy_export_kwh: Option<f64>,
    /// Exported energy on tariff 1 in kWh.
    #[serde(alias = "total_power_export_t1_kwh", skip_serializing_if = "Option::is_none")]
    pub energy_export_t1_kwh: Option<f64>,
    /// Exported energy on tariff 2 in kWh.
    #[serde(alias = "total_power_export_t2_kwh", skip_serializing_if = "Option::is_none")]
    pub energy_export_t2_kwh: Option<f64>,
    /// Exported energy on tariff 3 in kWh.
    #[serde(alias = "total_power_export_t3_kwh", skip_serializing_if = "Option::is_none")]
    pub energy_export_t3_kwh: Option<f64>,
    /// Exported energy on tariff 4 in kWh.
    #[serde(alias = "total_power_export_t4_kwh", skip_serializing_if = "Option::is_none")]
    pub energy_export_t4_kwh: Option<f64>,

    // ---- Power ----
    /// Total active power in W.
    #[serde(alias = "active_power_w", skip_serializing_if = "Option::is_none")]
    pub power_w: Option<f64>,
    /// Active power on phase 1 in W.
    #[serde(alias = "active_power_l1_w", skip_serializing_if = "Option::is_none")]
    pub power_l1_w: Option<f64>,
    /// Active power on phase 2 in W.
    #[serde(alias = "active_power_l2_w", skip_serializing_if = "Option::is_none")]
    pub power_l2_w: Option<f64>,
    /// Active power on phase 3 in W.
    #[serde(alias = "active_power_l3_w", skip_serializing_if = "Option::is_none")]
    pub power_l3_w: Option<f64>,

    /// Voltage in V.
    #[serde(alias = "active_voltage_v", skip_serializing_if = "Option::is_none")]
    pub voltage_v: Option<f64>,
    /// Voltage on phase 1 in V.
    #[serde(alias = "active_voltage_l1_v", skip_serializing_if = "Option::is_none")]
    pub voltage_l1_v: Option<f64>,
    /// Voltage on phase 2 in V.
    #[serde(alias = "active_voltage_l2_v", skip_serializing_if = "Option::is_none")]
    pub voltage_l2_v: Option<f64>,
    /// Voltage on phase 3 in V.
    #[serde(alias = "active_voltage_l3_v", skip_serializing_if = "Option::is_none")]
    pub voltage_l3_v: Option<f64>,

    /// Current in A.
    #[serde(alias = "active_current_a", skip_serializing_if = "Option::is_none")]
    pub current_a: Option<f64>,
    /// Current on phase 1 in A.
    #[serde(alias = "active_current_l1_a", skip_serializing_if = "Option::is_none")]
    pub current_l1_a: Option<f64>,
    /// Current on phase 2 in A.
    #[serde(alias = "active_current_l2_a", skip_serializing_if = "Option::is_none")]
    pub current_l2_a: Option<f64>,
    /// Current on phase 3 in A.
    #[serde(alias = "active_current_l3_a", skip_serializing_if = "Option::is_none")]
    pub current_l3_a: Option<f64>,

    /// Apparent power in VA.
    #[serde(alias = "active_apparent_power_va", skip_serializing_if = "Option::is_none")]
    pub apparent_power_va: Option<f64>,
    /// Apparent power on phase 1 in VA.
    #[serde(alias = "active_apparent_power_l1_va", skip_serializing_if = "Option::is_none")]
    pub apparent_power_l1_va: Option<f64>,
    /// Apparent power on phase 2 in VA.
    #[serde(alias = "active_apparent_power_l2_va", skip_serializing_if = "Option::is_none")]
    pub apparent_power_l2_va: Option<f64>,
    /// Apparent power on phase 3 in VA.
    #[serde(alias = "active_apparent_power_l3_va", skip_serializing_if = "Option::is_none")]
    pub apparent_power_l3_va: Option<f64>,

    /// Reactive power in var.
    #[serde(alias = "active_reactive_power_var", skip_serializing_if = "Option::is_none")]
    pub reactive_power_var: Option<f64>,
    /// Reactive power on phase 1 in var.
    #[serde(alias = "active_reactive_power_l1_var", skip_serializing_if = "Option::is_none")]
    pub reactive_power_l1_var: Option<f64>,
    /// Reactive power on phase 2 in var.
    #[serde(alias = "active_reactive_power_l2_var", skip_serializing_if = "Option::is_none")]
    pub reactive_power_l2_var: Option<f64>,
    /// Reactive power on phase 3 in var.
    #[serde(alias = "active_reactive_power_l3_var", skip_serializing_if = "Option::is_none")]
    pub reactive_power_l3_var: Option<f64>,

    /// Power factor.
    #[serde(alias = "active_power_factor", skip_serializing_if = "Option::is_none")]
    pub power_factor: Option<f64>,
    /// Power factor on phase 1.
    #[serde(alias = "active_power_factor_l1", skip_serializing_if = "Option::is_none")]
    pub power_factor_l1: Option<f64>,
    /// Power factor on phase 2.
    #[serde(alias = "active_power_factor_l2", skip_serializing_if = "Option::is_none")]
    pub power_factor_l2: Option<f64>,
    /// Power factor on phase 3.
    #[serde(alias = "active_power_factor_l3", skip_serializing_if = "Option::is_none")]
    pub power_factor_l3: Option<f64>,

    /// Grid frequency in Hz.
    #[serde(alias = "active_frequency_hz", skip_serializing_if = "Option::is_none")]
    pub frequency_hz: Option<f64>,

    // ---- Power quality (P1) ----
    /// Number of voltage sags on phase 1.
    #[serde(deserialize_with = "de::count", skip_serializing_if = "Option::is_none")]
    pub voltage_sag_l1_count: Option<u32>,
    /// Number of voltage sags on phase 2.
    #[serde(deserialize_with = "de::count", skip_serializing_if = "Option::is_none")]
    pub voltage_sag_l2_count: Option<u32>,
    /// Number of voltage sags on phase 3.
    #[serde(deserialize_with = "de::count", skip_serializing_if = "Option::is_none")]
    pub voltage_sag_l3_count: Option<u32>,
    /// Number of voltage swells on phase 1.
    #[serde(deserialize_with = "de::count", skip_serializing_if = "Option::is_none")]
    pub voltage_swell_l1_count: Option<u32>,
    /// Number of voltage swells on phase 2.
    #[serde(deserialize_with = "de::count", skip_serializing_if = "Option::is_none")]
    pub voltage_swell_l2_count: Option<u32>,
    /// Number of voltage swells on phase 3.
    #[serde(deserialize_with = "de::count", skip_serializing_if = "Option::is_none")]
    pub voltage_swell_l3_count: Option<u32>,
    /// Number of power failures.
    #[serde(deserialize_with = "de::count", skip_serializing_if = "Option::is_none")]
    pub any_power_fail_count: Option<u32>,
    /// Number of long power failures.
    #[serde(deserialize_with = "de::count", skip_serializing_if = "Option::is_none")]
    pub long_power_fail_count: Option<u32>,

    // ---- Peak demand (P1, Belgium) ----
    /// Average power over the current 15 minute window in W.
    #[serde(alias = "active_power_average_w", skip_serializing_if = "Option::is_none")]
    pub average_power_15m_w: Option<f64>,
    /// Highest 15 minute average power this month in W.
    #[serde(alias = "montly_power_peak_w", skip_serializing_if = "Option::is_none")]
    pub monthly_power_peak_w: Option<f64>,
    /// When the monthly power peak was registered.
    #[serde(
        alias = "montly_power_peak_timestamp",
        deserialize_with = "de::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub monthly_power_peak_timestamp: Option<NaiveDateTime>,

    // ---- Gas (legacy v1 fields; see `external_devices`) ----
    /// Total gas consumption in m³.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_gas_m3: Option<f64>,
    /// When the gas reading was taken.
    #[serde(deserialize_with = "de::timestamp", skip_serializing_if = "Option::is_none")]
    pub gas_timestamp: Option<NaiveDateTime>,
    /// Unique identifier of the gas meter.
    #[serde(deserialize_with = "de::hex_text", skip_serializing_if = "Option::is_none")]
    pub gas_unique_id: Option<String>,

    /// Meters connected to the smart meter, keyed by `"{type}_{unique_id}"`.
    #[serde(
        rename = "external",
        deserialize_with = "external_devices",
        skip_serializing_if = "Option::is_none"
    )]
    pub external_devices: Option<BTreeMap<String, ExternalDevice>>,

    // ---- Watermeter ----
    /// Current water flow in liters per minute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_liter_lpm: Option<f64>,
    /// Total water usage in m³.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_liter_m3: Option<f64>,
    /// Offset configured in the app, in m³.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_liter_offset_m3: Option<f64>,

    // ---- Battery ----
    /// Number of full charge cycles.
    #[serde(deserialize_with = "de::count", skip_serializing_if = "Option::is_none")]
    pub cycles: Option<u32>,
    /// State of charge in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_of_charge_pct: Option<f64>,
}

impl DataSnapshot {
    /// Returns whether power is currently being exported to the grid.
    #[must_use]
    pub fn is_exporting(&self) -> bool {
        self.power_w.is_some_and(|p| p < 0.0)
    }

    /// Returns the first connected external device of the given type.
    #[must_use]
    pub fn external_device(&self, device_type: ExternalDeviceType) -> Option<&ExternalDevice> {
        self.external_devices
            .as_ref()?
            .values()
            .find(|d| d.device_type == Some(device_type))
    }
}

/// Kinds of meters that can be connected to a P1 smart meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExternalDeviceType {
    /// Gas meter.
    GasMeter,
    /// Heat meter.
    HeatMeter,
    /// Warm water meter.
    WarmWaterMeter,
    /// Water meter.
    WaterMeter,
    /// Inlet heat meter.
    InletHeatMeter,
}

impl ExternalDeviceType {
    /// Parses the type string used in payloads. Unknown types yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "gas_meter" => Some(Self::GasMeter),
            "heat_meter" => Some(Self::HeatMeter),
            "warm_water_meter" => Some(Self::WarmWaterMeter),
            "water_meter" => Some(Self::WaterMeter),
            "inlet_heat_meter" => Some(Self::InletHeatMeter),
            _ => None,
        }
    }

    /// Returns the type string used in payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GasMeter => "gas_meter",
            Self::HeatMeter => "heat_meter",
            Self::WarmWaterMeter => "warm_water_meter",
            Self::WaterMeter => "water_meter",
            Self::InletHeatMeter => "inlet_heat_meter",
        }
    }
}

/// A meter connected to the P1 smart meter, e.g. a gas meter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExternalDevice {
    /// Unique identifier, decoded to text when possible.
    pub unique_id: String,
    /// Meter type, `None` if the device reported a type this library does not know.
    pub device_type: Option<ExternalDeviceType>,
    /// Latest reading.
    pub value: f64,
    /// Unit of the reading, e.g. `m3` or `GJ`.
    pub unit: String,
    /// When the reading was taken.
    pub timestamp: Option<NaiveDateTime>,
}

#[derive(Deserialize)]
struct RawExternalDevice {
    #[serde(default)]
    unique_id: String,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    value: f64,
    #[serde(default)]
    unit: String,
    #[serde(default)]
    timestamp: Option<Value>,
}

fn external_devices<'de, D>(
    deserializer: D,
) -> Result<Option<BTreeMap<String, ExternalDevice>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(items) = Option::<Vec<Value>>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let mut devices = BTreeMap::new();
    for item in items {
        let raw = match serde_json::from_value::<RawExternalDevice>(item) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "Skipping malformed external device");
                continue;
            }
        };

        let kind = raw.kind.unwrap_or_default();
        let device = ExternalDevice {
            unique_id: de::hex_to_readable(&raw.unique_id),
            device_type: ExternalDeviceType::parse(&kind),
            value: raw.value,
            unit: raw.unit,
            timestamp: raw.timestamp.as_ref().and_then(de::timestamp_from_value),
        };
        devices.insert(format!("{kind}_{}", device.unique_id), device);
    }

    Ok(Some(devices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_v1_p1_payload() {
        let json = json!({
            "wifi_ssid": "My Wi-Fi",
            "wifi_strength": 100,
            "smr_version": 50,
            "meter_model": "ISKRA  2M550T-101",
            "unique_id": "4E47475955",
            "active_tariff": 2,
            "total_power_import_kwh": 13_779.338,
            "total_power_import_t1_kwh": 10_830.511,
            "total_power_import_t2_kwh": 2948.827,
            "total_power_export_kwh": 0.0,
            "active_power_w": -543,
            "active_power_l1_w": -676,
            "active_voltage_l1_v": 235.4,
            "active_current_l1_a": -4.0,
            "voltage_sag_l1_count": 1.0,
            "voltage_swell_l1_count": 0,
            "any_power_fail_count": 4,
            "long_power_fail_count": 5,
            "active_power_average_w": 123.0,
            "montly_power_peak_w": 1111.0,
            "montly_power_peak_timestamp": 230_101_080_010_u64,
            "total_gas_m3": 1122.333,
            "gas_timestamp": 210_314_112_233_u64,
            "gas_unique_id": "4E47475955",
            "external": [
                {
                    "unique_id": "4E47475955",
                    "type": "gas_meter",
                    "timestamp": 230_125_220_009_u64,
                    "value": 111.111,
                    "unit": "m3"
                },
                {
                    "unique_id": "3853414731323334",
                    "type": "heat_meter",
                    "timestamp": 230_125_220_009_u64,
                    "value": 444.444,
                    "unit": "GJ"
                }
            ]
        });

        let data: DataSnapshot = serde_json::from_value(json).unwrap();

        assert_eq!(data.protocol_version, Some(50));
        assert_eq!(data.unique_id.as_deref(), Some("NGGYU"));
        assert_eq!(data.tariff, Some(2));
        assert_eq!(data.energy_import_kwh, Some(13_779.338));
        assert_eq!(data.power_w, Some(-543.0));
        assert!(data.is_exporting());
        assert_eq!(data.voltage_l1_v, Some(235.4));
        assert_eq!(data.voltage_sag_l1_count, Some(1));
        assert_eq!(data.average_power_15m_w, Some(123.0));
        assert_eq!(data.monthly_power_peak_w, Some(1111.0));
        assert!(data.monthly_power_peak_timestamp.is_some());
        assert_eq!(data.gas_unique_id.as_deref(), Some("NGGYU"));

        let external = data.external_devices.as_ref().unwrap();
        assert_eq!(external.len(), 2);
        assert!(external.contains_key("gas_meter_NGGYU"));
        assert!(external.contains_key("heat_meter_8SAG1234"));

        let gas = data.external_device(ExternalDeviceType::GasMeter).unwrap();
        assert!((gas.value - 111.111).abs() < f64::EPSILON);
        assert_eq!(gas.unit, "m3");
    }

    #[test]
    fn parse_v2_measurement_payload() {
        let json = json!({
            "protocol_version": 50,
            "meter_model": "ISKRA 2M550T-101",
            "unique_id": "00112233445566778899AABBCCDDEEFF",
            "timestamp": "2024-06-28T14:12:34",
            "tariff": 2,
            "energy_import_kwh": 13_779.338,
            "energy_export_kwh": 1.5,
            "power_w": 543,
            "voltage_l1_v": 230.1,
            "current_a": 2.5,
            "voltage_sag_l1_count": 1,
            "average_power_15m_w": 200.0,
            "monthly_power_peak_w": 1111.0,
            "monthly_power_peak_timestamp": "2024-06-04T10:11:15",
            "external": [
                {
                    "unique_id": "4E47475955",
                    "type": "water_meter",
                    "timestamp": "2024-06-28T14:00:00",
                    "value": 123.456,
                    "unit": "m3"
                }
            ]
        });

        let data: DataSnapshot = serde_json::from_value(json).unwrap();

        assert_eq!(data.protocol_version, Some(50));
        assert_eq!(
            data.unique_id.as_deref(),
            Some("00112233445566778899AABBCCDDEEFF")
        );
        assert!(data.timestamp.is_some());
        assert_eq!(data.power_w, Some(543.0));
        assert!(!data.is_exporting());
        assert_eq!(data.wifi_ssid, None);
        assert!(
            data.external_device(ExternalDeviceType::WaterMeter)
                .unwrap()
                .timestamp
                .is_some()
        );
    }

    #[test]
    fn v1_and_v2_names_land_on_same_fields() {
        let v1: DataSnapshot = serde_json::from_value(json!({
            "total_power_import_kwh": 10.0,
            "active_power_w": 5.0,
            "active_frequency_hz": 50.0
        }))
        .unwrap();
        let v2: DataSnapshot = serde_json::from_value(json!({
            "energy_import_kwh": 10.0,
            "power_w": 5.0,
            "frequency_hz": 50.0
        }))
        .unwrap();

        assert_eq!(v1, v2);
    }

    #[test]
    fn empty_payload_yields_empty_snapshot() {
        let data: DataSnapshot = serde_json::from_value(json!({})).unwrap();
        assert_eq!(data, DataSnapshot::default());
        assert!(data.power_w.is_none());
        assert!(data.external_devices.is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let data: DataSnapshot = serde_json::from_value(json!({
            "active_power_w": 12.5,
            "some_future_field": [1, 2, 3]
        }))
        .unwrap();
        assert_eq!(data.power_w, Some(12.5));
    }

    #[test]
    fn malformed_external_device_is_skipped() {
        let data: DataSnapshot = serde_json::from_value(json!({
            "external": [
                { "unique_id": "DEF", "type": "gas_meter", "value": "lots" },
                "not an object",
                { "unique_id": "ABC", "type": "flux_capacitor", "value": 2.0, "unit": "GW" }
            ]
        }))
        .unwrap();

        let external = data.external_devices.unwrap();
        assert_eq!(external.len(), 1);
        let device = &external["flux_capacitor_ABC"];
        assert_eq!(device.device_type, None);
        assert!(device.timestamp.is_none());
    }

    #[test]
    fn external_device_without_fields_is_kept() {
        let data: DataSnapshot = serde_json::from_value(json!({
            "external": [
                { "type": "gas_meter", "value": 1.0 },
                {}
            ]
        }))
        .unwrap();

        let external = data.external_devices.unwrap();
        assert_eq!(external.len(), 2);

        let gas = &external["gas_meter_"];
        assert_eq!(gas.unique_id, "");
        assert_eq!(gas.device_type, Some(ExternalDeviceType::GasMeter));
        assert!((gas.value - 1.0).abs() < f64::EPSILON);

        let empty = &external["_"];
        assert_eq!(empty.device_type, None);
        assert_eq!(empty.unit, "");
    }

    #[test]
    fn watermeter_and_battery_fields() {
        let data: DataSnapshot = serde_json::from_value(json!({
            "active_liter_lpm": 7.2,
            "total_liter_m3": 123.456,
            "total_liter_offset_m3": 0.0,
            "cycles": 12.0,
            "state_of_charge_pct": 54.0
        }))
        .unwrap();

        assert_eq!(data.active_liter_lpm, Some(7.2));
        assert_eq!(data.total_liter_m3, Some(123.456));
        assert_eq!(data.cycles, Some(12));
        assert_eq!(data.state_of_charge_pct, Some(54.0));
    }

    #[test]
    fn external_device_type_strings() {
        for t in [
            ExternalDeviceType::GasMeter,
            ExternalDeviceType::HeatMeter,
            ExternalDeviceType::WarmWaterMeter,
            ExternalDeviceType::WaterMeter,
            ExternalDeviceType::InletHeatMeter,
        ] {
            assert_eq!(ExternalDeviceType::parse(t.as_str()), Some(t));
        }
        assert_eq!(ExternalDeviceType::parse("solar"), None);
    }
}
