// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Builder for [`HomeWizardEnergy`].

use std::time::Duration;

use reqwest::{Certificate, Client};

use crate::device::HomeWizardEnergy;
use crate::error::Error;
use crate::protocol::{HttpClient, HttpConfig};
use crate::response::DeviceInfo;

/// Builder for creating [`HomeWizardEnergy`] clients.
///
/// This builder can be created in two ways:
/// - `HomeWizardEnergy::builder("host")` - Simple host string
/// - `HomeWizardEnergy::from_config(HttpConfig::new("host").with_token("..."))` - Advanced configuration
///
/// # Examples
///
/// ```no_run
/// use homewizard_lib::HomeWizardEnergy;
///
/// # async fn example() -> homewizard_lib::Result<()> {
/// // v1 API, identity fetched on first use
/// let device = HomeWizardEnergy::builder("192.168.1.10").build()?;
///
/// // v2 API with a token
/// let device = HomeWizardEnergy::builder("192.168.1.10")
///     .with_token("2D8A16A1ABCD1234")
///     .build()?;
///
/// // Fetch the identity right away
/// let (device, info) = HomeWizardEnergy::builder("192.168.1.10")
///     .build_and_identify()
///     .await?;
/// println!("connected to {}", info.product_type);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HomeWizardEnergyBuilder {
    config: HttpConfig,
    client: Option<Client>,
    device: Option<DeviceInfo>,
}

impl HomeWizardEnergyBuilder {
    pub(crate) fn new(config: HttpConfig) -> Self {
        Self {
            config,
            client: None,
            device: None,
        }
    }

    /// Sets the bearer token, which selects the v2 API over HTTPS.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.config = self.config.with_token(token);
        self
    }

    /// Sets the request timeout of the transport this client creates.
    ///
    /// Ignored when a transport is supplied with
    /// [`with_client`](Self::with_client).
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Trusts `certificate` when validating the device's TLS certificate.
    #[must_use]
    pub fn with_root_certificate(mut self, certificate: Certificate) -> Self {
        self.config = self.config.with_root_certificate(certificate);
        self
    }

    /// Uses a caller-owned transport.
    ///
    /// The transport is shared, so [`HomeWizardEnergy::close`] leaves it
    /// alone.
    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Seeds the identity cache with a known device (skips the first
    /// `GET /api`).
    #[must_use]
    pub fn with_device(mut self, device: DeviceInfo) -> Self {
        self.device = Some(device);
        self
    }

    /// Returns the configuration built so far.
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Builds the client without any network access.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unsupported`] or [`Error::InvalidState`] if a device
    /// seeded with [`with_device`](Self::with_device) reports an unknown API
    /// version or a different generation than configured.
    pub fn build(self) -> Result<HomeWizardEnergy, Error> {
        if let Some(device) = &self.device {
            HomeWizardEnergy::validate_identity(device, self.config.api_version())?;
        }

        let http = match self.client {
            Some(client) => HttpClient::with_client(self.config, client),
            None => HttpClient::new(self.config),
        };

        tracing::debug!(
            base_url = %http.base_url(),
            api_version = %http.api_version(),
            "Created HomeWizard client"
        );

        Ok(HomeWizardEnergy::new(http, self.device))
    }

    /// Builds the client and fetches the device identity.
    ///
    /// # Errors
    ///
    /// Returns error if building fails or the identity cannot be fetched.
    pub async fn build_and_identify(self) -> Result<(HomeWizardEnergy, DeviceInfo), Error> {
        let energy = self.build()?;
        let device = energy.get_device().await?;
        Ok((energy, device))
    }
}
