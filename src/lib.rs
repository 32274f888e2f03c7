// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `HomeWizard` Lib - A Rust client for the local API of `HomeWizard` Energy
//! devices.
//!
//! This library provides async APIs to read measurements from, and control,
//! `HomeWizard` P1 meters, energy sockets, water meters, kWh meters and
//! batteries on the local network.
//!
//! # Supported Features
//!
//! - **Identity**: Product type, serial and firmware, cached after first use
//! - **Measurements**: Power, energy, voltage, gas and water readings
//! - **Switch control**: Power, switch lock and LED brightness of sockets
//! - **System settings**: Cloud connection, status LED, v1 API toggle
//! - **Maintenance**: Identify (blink LED), reboot, raw P1 telegram
//!
//! # API Generations
//!
//! Devices expose a v1 API over plain HTTP and, on newer firmware, a v2 API
//! over HTTPS that requires a bearer token. A client without a token talks
//! v1; setting a token switches to v2. Use [`has_v2_api`] to find out which
//! one a device offers.
//!
//! # Quick Start
//!
//! ## v1 Device
//!
//! ```no_run
//! use homewizard_lib::HomeWizardEnergy;
//!
//! #[tokio::main]
//! async fn main() -> homewizard_lib::Result<()> {
//!     let device = HomeWizardEnergy::builder("192.168.1.10").build()?;
//!
//!     let data = device.get_data().await?;
//!     println!("importing {:?} kWh", data.energy_import_kwh);
//!
//!     device.close();
//!     Ok(())
//! }
//! ```
//!
//! ## v2 Device
//!
//! ```no_run
//! use homewizard_lib::{HomeWizardEnergy, has_v2_api};
//!
//! #[tokio::main]
//! async fn main() -> homewizard_lib::Result<()> {
//!     if has_v2_api("192.168.1.10").await {
//!         let (device, info) = HomeWizardEnergy::builder("192.168.1.10")
//!             .with_token("2D8A16A1ABCD1234")
//!             .build_and_identify()
//!             .await?;
//!
//!         println!("{} ({})", info.product_name, info.serial);
//!         device.identify().await?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Switching an Energy Socket
//!
//! ```no_run
//! use homewizard_lib::HomeWizardEnergy;
//! use homewizard_lib::response::StateUpdate;
//!
//! #[tokio::main]
//! async fn main() -> homewizard_lib::Result<()> {
//!     let device = HomeWizardEnergy::builder("192.168.1.11").build()?;
//!
//!     if let Some(state) = device.get_state().await? {
//!         let update = StateUpdate::new().with_power_on(state.power_on != Some(true));
//!         device.set_state(update).await?;
//!     }
//!     Ok(())
//! }
//! ```

mod capabilities;
mod device;
pub mod error;
pub mod protocol;
pub mod response;

pub use capabilities::{Capabilities, Product, ProductType, get_verification_hostname};
pub use device::{HomeWizardEnergy, HomeWizardEnergyBuilder};
pub use error::{Error, RequestError, Result};
pub use protocol::{ApiResponse, ApiVersion, HttpConfig, has_v2_api, has_v2_api_with_timeout};
pub use response::{
    DataSnapshot, DeviceInfo, ExternalDevice, ExternalDeviceType, StateUpdate, SwitchState,
    SystemConfig, SystemUpdate,
};
