// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lenient field deserializers shared by the response models.
//!
//! Device firmwares are not consistent about number types (counters are
//! sometimes sent as `13.0`) or timestamp formats (v1 sends `YYMMDDhhmmss`
//! integers, v2 sends ISO-8601 strings). A value that cannot be interpreted
//! is treated as absent instead of failing the whole payload.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes a non-negative counter sent as an integer or a float.
pub(crate) fn count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(count_from_value))
}

fn count_from_value(value: &Value) -> Option<u32> {
    if let Some(n) = value.as_u64() {
        return u32::try_from(n).ok();
    }

    let f = value.as_f64()?;
    if f.is_finite() && f >= 0.0 && f.fract().abs() < f64::EPSILON && f <= f64::from(u32::MAX) {
        // Range and integrality checked above
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let n = f as u32;
        Some(n)
    } else {
        None
    }
}

/// Deserializes a timestamp in either the v1 or the v2 representation.
pub(crate) fn timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(timestamp_from_value))
}

pub(crate) fn timestamp_from_value(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::Number(n) => n.as_u64().and_then(parse_dsmr_timestamp),
        Value::String(s) => parse_iso_timestamp(s),
        _ => None,
    }
}

/// Parses a DSMR `YYMMDDhhmmss` timestamp, e.g. `210314112233`.
fn parse_dsmr_timestamp(raw: u64) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&format!("{raw:012}"), "%y%m%d%H%M%S").ok()
}

fn parse_iso_timestamp(raw: &str) -> Option<NaiveDateTime> {
    raw.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.naive_local())
        })
}

/// Deserializes an identifier that may be hex encoded text.
pub(crate) fn hex_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.map(|s| hex_to_readable(&s)))
}

/// Decodes a hex string like `4E47475955` into readable text.
///
/// Returns the input unchanged when it is not valid hex or does not decode
/// to UTF-8.
pub(crate) fn hex_to_readable(value: &str) -> String {
    decode_hex(value)
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .unwrap_or_else(|| value.to_string())
}

fn decode_hex(value: &str) -> Option<Vec<u8>> {
    if value.is_empty() || value.len() % 2 != 0 {
        return None;
    }

    value
        .as_bytes()
        .chunks(2)
        .map(|pair| {
            let hi = char::from(pair[0]).to_digit(16)?;
            let lo = char::from(pair[1]).to_digit(16)?;
            u8::try_from(hi * 16 + lo).ok()
        })
        .collect()
}
