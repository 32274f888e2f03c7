// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device identity parsing.

use serde::{Deserialize, Serialize};

use crate::capabilities::{Capabilities, Product, ProductType, get_verification_hostname};
use crate::protocol::ApiVersion;

/// Identity of a device, as served by `GET /api`.
///
/// # Examples
///
/// ```
/// use homewizard_lib::response::DeviceInfo;
///
/// let json = r#"{
///     "product_type": "HWE-P1",
///     "product_name": "P1 Meter",
///     "serial": "3c39e7aabbcc",
///     "firmware_version": "2.11",
///     "api_version": "v1"
/// }"#;
/// let device: DeviceInfo = serde_json::from_str(json).unwrap();
/// assert_eq!(device.product_type, "HWE-P1");
/// assert_eq!(device.verification_id().unwrap(), "appliance/p1dongle/3c39e7aabbcc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DeviceInfo {
    /// Product type code, e.g. `HWE-P1`.
    pub product_type: String,
    /// Human readable product name.
    #[serde(default)]
    pub product_name: String,
    /// Serial number; the MAC address of the device.
    pub serial: String,
    /// Firmware version.
    pub firmware_version: String,
    /// API version string as reported (`v1`, or `2.0.0` for the v2 API).
    pub api_version: String,
}

impl DeviceInfo {
    /// Returns the parsed product type, if it is a known one.
    #[must_use]
    pub fn parsed_product_type(&self) -> Option<ProductType> {
        ProductType::from_code(&self.product_type)
    }

    /// Returns the catalogue entry for this device, if known.
    #[must_use]
    pub fn product(&self) -> Option<Product> {
        Product::from_type(&self.product_type)
    }

    /// Returns the optional features this device supports.
    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        Capabilities::for_product_type(&self.product_type)
    }

    /// Returns the API generation this device reports, if supported.
    #[must_use]
    pub fn api_generation(&self) -> Option<ApiVersion> {
        ApiVersion::from_reported(&self.api_version)
    }

    /// Returns the identifier used to verify the device's TLS certificate.
    ///
    /// `None` for product types this library does not know.
    #[must_use]
    pub fn verification_id(&self) -> Option<String> {
        get_verification_hostname(&self.product_type, &self.serial).ok()
    }
}
