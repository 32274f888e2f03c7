// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Product catalogue and capability lookup.
//!
//! `HomeWizard` devices identify themselves with a product type code such as
//! `HWE-P1` or `HWE-SKT`. The code determines which endpoints are meaningful:
//! only the Energy Socket has a switchable state, only the P1 meter exposes
//! the raw DSMR telegram, and so on.
//!
//! Every known code must be listed in [`ProductType`]. Unknown codes are not
//! an error on their own; they simply have no capabilities.

use std::fmt;

use crate::error::Error;

/// Known `HomeWizard` product types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductType {
    /// Wi-Fi P1 Meter (`HWE-P1`).
    P1Meter,
    /// Wi-Fi Energy Socket (`HWE-SKT`).
    EnergySocket,
    /// Wi-Fi Watermeter (`HWE-WTR`).
    WaterMeter,
    /// Energy Display (`HWE-DSP`).
    Display,
    /// Wi-Fi kWh Meter 1-phase (`HWE-KWH1`).
    KwhMeter1Phase,
    /// Wi-Fi kWh Meter 1-phase, SDM230 based (`SDM230-wifi`).
    Sdm230,
    /// Wi-Fi kWh Meter 3-phase (`HWE-KWH3`).
    KwhMeter3Phase,
    /// Wi-Fi kWh Meter 3-phase, SDM630 based (`SDM630-wifi`).
    Sdm630,
    /// Plug-In Battery (`HWE-BAT`).
    Battery,
}

impl ProductType {
    /// All known product types.
    pub const ALL: [Self; 9] = [
        Self::P1Meter,
        Self::EnergySocket,
        Self::WaterMeter,
        Self::Display,
        Self::KwhMeter1Phase,
        Self::Sdm230,
        Self::KwhMeter3Phase,
        Self::Sdm630,
        Self::Battery,
    ];

    /// Looks up a product type by the code the device reports.
    ///
    /// The comparison is exact; `"hwe-p1"` is not a known code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }

    /// Returns the product type code as reported by the device.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::P1Meter => "HWE-P1",
            Self::EnergySocket => "HWE-SKT",
            Self::WaterMeter => "HWE-WTR",
            Self::Display => "HWE-DSP",
            Self::KwhMeter1Phase => "HWE-KWH1",
            Self::Sdm230 => "SDM230-wifi",
            Self::KwhMeter3Phase => "HWE-KWH3",
            Self::Sdm630 => "SDM630-wifi",
            Self::Battery => "HWE-BAT",
        }
    }

    /// Returns the appliance category used in verification identifiers.
    #[must_use]
    pub const fn verification_slug(self) -> &'static str {
        match self {
            Self::P1Meter => "p1dongle",
            Self::EnergySocket => "energysocket",
            Self::WaterMeter => "watermeter",
            Self::Display => "display",
            Self::KwhMeter1Phase | Self::Sdm230 | Self::KwhMeter3Phase | Self::Sdm630 => {
                "energymeter"
            }
            Self::Battery => "battery",
        }
    }

    /// Returns the catalogue entry for this product, if one exists.
    #[must_use]
    pub const fn product(self) -> Option<Product> {
        let (name, url, description) = match self {
            Self::P1Meter => (
                "Wi-Fi P1 Meter",
                "https://www.homewizard.com/p1-meter/",
                "The HomeWizard P1 Meter gives you detailed insight in your electricity-, gas consumption and solar surplus.",
            ),
            Self::EnergySocket => (
                "Wi-Fi Energy Socket",
                "https://www.homewizard.com/energy-socket/",
                "Measure and switch every device.",
            ),
            Self::WaterMeter => (
                "Wi-Fi Watermeter",
                "https://www.homewizard.com/watermeter/",
                "Real-time water consumption insights",
            ),
            Self::KwhMeter1Phase | Self::Sdm230 => (
                "Wi-Fi kWh Meter 1-phase",
                "https://www.homewizard.com/kwh-meter/",
                "Measure solar panels, car chargers and more.",
            ),
            Self::KwhMeter3Phase | Self::Sdm630 => (
                "Wi-Fi kWh Meter 3-phase",
                "https://www.homewizard.com/kwh-meter/",
                "Measure solar panels, car chargers and more.",
            ),
            Self::Battery => (
                "Plug-In Battery",
                "https://www.homewizard.com/plug-in-battery/",
                "Solar energy, day and night.",
            ),
            Self::Display => return None,
        };

        Some(Product {
            model: self.code(),
            name,
            url,
            description,
        })
    }

    /// Returns the capabilities of this product type.
    #[must_use]
    pub const fn capabilities(self) -> Capabilities {
        match self {
            Self::EnergySocket => Capabilities {
                state: true,
                identify: true,
                telegram: false,
            },
            Self::P1Meter => Capabilities {
                state: false,
                identify: true,
                telegram: true,
            },
            Self::WaterMeter => Capabilities {
                state: false,
                identify: true,
                telegram: false,
            },
            _ => Capabilities::none(),
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Marketing information about a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Product {
    /// Product type code, e.g. `HWE-P1`.
    pub model: &'static str,
    /// Human readable product name.
    pub name: &'static str,
    /// Product page.
    pub url: &'static str,
    /// Short description.
    pub description: &'static str,
}

impl Product {
    /// Returns the catalogue entry for a product type code.
    ///
    /// # Examples
    ///
    /// ```
    /// use homewizard_lib::Product;
    ///
    /// let product = Product::from_type("HWE-SKT").unwrap();
    /// assert_eq!(product.to_string(), "HomeWizard Wi-Fi Energy Socket - HWE-SKT");
    /// assert!(Product::from_type("HWE-P2").is_none());
    /// ```
    #[must_use]
    pub fn from_type(product_type: &str) -> Option<Self> {
        ProductType::from_code(product_type).and_then(ProductType::product)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HomeWizard {} - {}", self.name, self.model)
    }
}

/// Optional features of a device, derived from its product type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// Has a switchable state (power, switch lock, LED brightness).
    pub state: bool,

    /// Can blink its status LED on request.
    pub identify: bool,

    /// Exposes the raw smart meter telegram.
    pub telegram: bool,
}

impl Capabilities {
    /// Capabilities of a device without any optional feature.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            state: false,
            identify: false,
            telegram: false,
        }
    }

    /// Returns the capabilities for a product type code.
    ///
    /// Unknown codes yield [`Capabilities::none`].
    #[must_use]
    pub fn for_product_type(product_type: &str) -> Self {
        ProductType::from_code(product_type).map_or_else(Self::none, ProductType::capabilities)
    }

    /// Returns whether the device has a switchable state.
    #[must_use]
    pub fn supports_state(&self) -> bool {
        self.state
    }

    /// Returns whether the device supports the identify command.
    #[must_use]
    pub fn supports_identify(&self) -> bool {
        self.identify
    }

    /// Returns whether the device exposes a smart meter telegram.
    #[must_use]
    pub fn supports_telegram(&self) -> bool {
        self.telegram
    }
}

/// Builds the identifier used to verify a device's TLS certificate.
///
/// # Examples
///
/// ```
/// use homewizard_lib::get_verification_hostname;
///
/// let id = get_verification_hostname("HWE-P1", "ABC123").unwrap();
/// assert_eq!(id, "appliance/p1dongle/ABC123");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `model` is not a known product type.
pub fn get_verification_hostname(model: &str, serial_number: &str) -> Result<String, Error> {
    let product = ProductType::from_code(model)
        .ok_or_else(|| Error::InvalidArgument(format!("unsupported model: {model}")))?;

    Ok(format!(
        "appliance/{}/{serial_number}",
        product.verification_slug()
    ))
}
