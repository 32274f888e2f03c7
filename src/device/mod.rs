// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Version-aware facade for `HomeWizard` devices.
//!
//! [`HomeWizardEnergy`] is the single entry point for talking to a device.
//! It learns the device identity once, routes each logical operation to the
//! endpoint of the configured API generation, and refuses operations the
//! product does not support.
//!
//! # Identity Cache
//!
//! Read operations ([`get_data`](HomeWizardEnergy::get_data),
//! [`get_state`](HomeWizardEnergy::get_state), ...) make sure the device
//! identity is known, fetching it on first use. The identity is cached for
//! the lifetime of the client, or until
//! [`clear_identity`](HomeWizardEnergy::clear_identity) is called.
//!
//! Write operations never fetch the identity, but when it is cached they
//! reject writes the product cannot honor.
//!
//! ```no_run
//! use homewizard_lib::HomeWizardEnergy;
//! use homewizard_lib::response::StateUpdate;
//!
//! # async fn example() -> homewizard_lib::Result<()> {
//! let device = HomeWizardEnergy::builder("192.168.1.10").build()?;
//!
//! let info = device.get_device().await?;
//! println!("{} running firmware {}", info.product_type, info.firmware_version);
//!
//! let data = device.get_data().await?;
//! println!("power: {:?} W", data.power_w);
//!
//! if device.get_state().await?.is_some() {
//!     device.set_state(StateUpdate::new().with_power_on(true)).await?;
//! }
//! # Ok(())
//! # }
//! ```

mod builder;

pub use builder::HomeWizardEnergyBuilder;

use parking_lot::RwLock;

use crate::error::{Error, RequestError};
use crate::protocol::{ApiVersion, Endpoint, HttpClient, HttpConfig};
use crate::response::{
    DataSnapshot, DeviceInfo, StateUpdate, SwitchState, SystemConfig, SystemUpdate,
};

/// A `HomeWizard` Energy device reachable over its local API.
///
/// Create one with [`HomeWizardEnergy::builder`].
#[derive(Debug)]
pub struct HomeWizardEnergy {
    http: HttpClient,
    identity: RwLock<Option<DeviceInfo>>,
}

impl HomeWizardEnergy {
    /// Starts building a client for the device at `host`.
    ///
    /// Without a token the client talks to the v1 API; see
    /// [`HomeWizardEnergyBuilder::with_token`].
    #[must_use]
    pub fn builder(host: impl Into<String>) -> HomeWizardEnergyBuilder {
        HomeWizardEnergyBuilder::new(HttpConfig::new(host))
    }

    /// Starts building a client from an existing configuration.
    #[must_use]
    pub fn from_config(config: HttpConfig) -> HomeWizardEnergyBuilder {
        HomeWizardEnergyBuilder::new(config)
    }

    pub(crate) fn new(http: HttpClient, identity: Option<DeviceInfo>) -> Self {
        Self {
            http,
            identity: RwLock::new(identity),
        }
    }

    /// Returns the host of the device.
    #[must_use]
    pub fn host(&self) -> &str {
        self.http.config().host()
    }

    /// Returns the API generation this client is configured for.
    #[must_use]
    pub fn api_version(&self) -> ApiVersion {
        self.http.api_version()
    }

    /// Returns the request dispatcher.
    #[must_use]
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Returns the API generation reported by the device, once known.
    #[must_use]
    pub fn detected_api_version(&self) -> Option<ApiVersion> {
        self.identity
            .read()
            .as_ref()
            .and_then(DeviceInfo::api_generation)
    }

    /// Returns the product type reported by the device, once known.
    #[must_use]
    pub fn detected_product_type(&self) -> Option<String> {
        self.identity
            .read()
            .as_ref()
            .map(|device| device.product_type.clone())
    }

    /// Forgets the cached device identity.
    ///
    /// The next read operation fetches it again.
    pub fn clear_identity(&self) {
        self.identity.write().take();
    }

    /// Releases the transport if this client owns it.
    pub fn close(&self) {
        self.http.close();
    }

    /// Checks a device identity against what this client can talk to.
    pub(crate) fn validate_identity(
        device: &DeviceInfo,
        configured: ApiVersion,
    ) -> Result<(), Error> {
        let reported = device.api_generation().ok_or_else(|| {
            Error::Unsupported(format!(
                "API version '{}' reported by {} is not supported",
                device.api_version, device.product_type
            ))
        })?;

        if reported != configured {
            return Err(Error::InvalidState(format!(
                "device reports API {reported} but the client is configured for {configured}"
            )));
        }

        Ok(())
    }

    fn cached_identity(&self) -> Option<DeviceInfo> {
        self.identity.read().clone()
    }

    fn path(&self, endpoint: Endpoint) -> Result<&'static str, Error> {
        let version = self.api_version();
        version.path(endpoint).ok_or_else(|| {
            Error::Unsupported(format!("{endpoint:?} is not available on the {version} API"))
        })
    }

    // ========== Identity ==========

    /// Returns the device identity, fetching it on first use.
    ///
    /// Once fetched, the identity is cached and later calls do not reach the
    /// network.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`] if the device reports an API version
    /// this library does not know, [`Error::InvalidState`] if it reports a
    /// different generation than the client is configured for, and
    /// [`Error::Request`] or [`Error::Disabled`] if the request fails.
    pub async fn get_device(&self) -> Result<DeviceInfo, Error> {
        if let Some(device) = self.cached_identity() {
            return Ok(device);
        }

        let device: DeviceInfo = self
            .http
            .get(self.path(Endpoint::Device)?)
            .await?
            .into_model()?;

        Self::validate_identity(&device, self.api_version())?;

        let mut cached = self.identity.write();
        if cached.is_none() {
            tracing::debug!(
                product_type = %device.product_type,
                api_version = %device.api_version,
                "Detected device identity"
            );
            *cached = Some(device.clone());
        }

        Ok(device)
    }

    /// Rejects a write the cached identity says the device cannot honor.
    fn check_cached(
        &self,
        supported: impl Fn(&DeviceInfo) -> bool,
        what: &str,
    ) -> Result<(), Error> {
        match self.cached_identity() {
            Some(device) if !supported(&device) => Err(Error::InvalidState(format!(
                "{} does not support {what}",
                device.product_type
            ))),
            _ => Ok(()),
        }
    }

    // ========== Measurements ==========

    /// Fetches the latest measurement.
    ///
    /// Readings the device does not report are `None`.
    ///
    /// # Errors
    ///
    /// Returns error if the identity cannot be established or the request
    /// fails.
    pub async fn get_data(&self) -> Result<DataSnapshot, Error> {
        self.get_device().await?;

        self.http
            .get(self.path(Endpoint::Data)?)
            .await?
            .into_model()
    }

    /// Fetches the raw smart meter telegram (P1 meter only).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`] without a request if the device is not
    /// a P1 meter.
    pub async fn telegram(&self) -> Result<String, Error> {
        let device = self.get_device().await?;
        if !device.capabilities().supports_telegram() {
            return Err(Error::Unsupported(format!(
                "{} does not expose a telegram",
                device.product_type
            )));
        }

        Ok(self
            .http
            .get(self.path(Endpoint::Telegram)?)
            .await?
            .into_text())
    }

    // ========== Switch State ==========

    /// Fetches the switchable state.
    ///
    /// Returns `Ok(None)` without a request if the device has no switchable
    /// state.
    ///
    /// # Errors
    ///
    /// Returns error if the identity cannot be established or the request
    /// fails.
    pub async fn get_state(&self) -> Result<Option<SwitchState>, Error> {
        let device = self.get_device().await?;
        if !device.capabilities().supports_state() {
            tracing::debug!(product_type = %device.product_type, "Device has no switchable state");
            return Ok(None);
        }

        let state = self
            .http
            .get(self.path(Endpoint::State)?)
            .await?
            .into_model()?;
        Ok(Some(state))
    }

    /// Writes the fields set in `update` and returns the acknowledged state.
    ///
    /// Returns `Ok(None)` without a request if `update` sets no field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if the cached identity has no
    /// switchable state, or error if the request fails.
    pub async fn set_state(&self, update: StateUpdate) -> Result<Option<SwitchState>, Error> {
        if update.is_empty() {
            return Ok(None);
        }

        self.check_cached(|d| d.capabilities().supports_state(), "a switchable state")?;

        let body = serde_json::to_value(update).map_err(RequestError::InvalidJson)?;
        let state = self
            .http
            .put(self.path(Endpoint::State)?, Some(&body))
            .await?
            .into_model()?;
        Ok(Some(state))
    }

    // ========== System ==========

    /// Fetches the system settings.
    ///
    /// # Errors
    ///
    /// Returns error if the identity cannot be established or the request
    /// fails.
    pub async fn get_system(&self) -> Result<SystemConfig, Error> {
        self.get_device().await?;

        self.http
            .get(self.path(Endpoint::System)?)
            .await?
            .into_model()
    }

    /// Writes the fields set in `update` and returns the acknowledged settings.
    ///
    /// Returns `Ok(None)` without a request if `update` sets no field.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_system(&self, update: SystemUpdate) -> Result<Option<SystemConfig>, Error> {
        if update.is_empty() {
            return Ok(None);
        }

        let body = serde_json::to_value(update).map_err(RequestError::InvalidJson)?;
        let system = self
            .http
            .put(self.path(Endpoint::System)?, Some(&body))
            .await?
            .into_model()?;
        Ok(Some(system))
    }

    /// Blinks the status LED so the device can be found.
    ///
    /// Returns `Ok(false)` without a request if the device does not support
    /// identification.
    ///
    /// # Errors
    ///
    /// Returns error if the identity cannot be established or the request
    /// fails.
    pub async fn identify(&self) -> Result<bool, Error> {
        let device = self.get_device().await?;
        if !device.capabilities().supports_identify() {
            return Ok(false);
        }

        self.http.put(self.path(Endpoint::Identify)?, None).await?;
        Ok(true)
    }

    /// Restarts the device (v2 only).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`] without a request on the v1 API, or
    /// error if the request fails.
    pub async fn reboot(&self) -> Result<(), Error> {
        let path = self.path(Endpoint::Reboot)?;
        self.http.put(path, None).await?;
        Ok(())
    }
}
