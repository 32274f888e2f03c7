// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP request dispatcher for `HomeWizard` devices.

use std::fmt;
use std::time::Duration;

use parking_lot::Mutex;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Certificate, Client, Method, StatusCode};
use serde_json::Value;

use crate::error::{Error, RequestError};
use crate::protocol::{ApiResponse, ApiVersion};

// ============================================================================
// HttpConfig - Connection parameters
// ============================================================================

/// Configuration for a `HomeWizard` device connection.
///
/// A configuration without a token talks to the v1 API over plain HTTP.
/// Setting a token switches to the v2 API over HTTPS.
///
/// # Examples
///
/// ```
/// use homewizard_lib::protocol::{ApiVersion, HttpConfig};
/// use std::time::Duration;
///
/// let config = HttpConfig::new("192.168.1.10");
/// assert_eq!(config.api_version(), ApiVersion::V1);
/// assert_eq!(config.base_url(), "http://192.168.1.10");
///
/// let config = HttpConfig::new("192.168.1.10")
///     .with_token("ABCDEF0123456789")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.api_version(), ApiVersion::V2);
/// assert_eq!(config.base_url(), "https://192.168.1.10");
/// ```
#[derive(Clone)]
pub struct HttpConfig {
    host: String,
    token: Option<String>,
    timeout: Duration,
    root_certificate: Option<Certificate>,
}

impl HttpConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a new configuration for the specified host.
    ///
    /// The host may carry an explicit `http://` or `https://` prefix, which
    /// then takes precedence over the scheme of the API generation.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            token: None,
            timeout: Self::DEFAULT_TIMEOUT,
            root_certificate: None,
        }
    }

    /// Sets the bearer token and selects the v2 API.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets the request timeout of the owned transport.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Trusts the given CA when validating the device certificate (v2 only).
    ///
    /// Without a root certificate, the v2 transport does not validate the
    /// device certificate at all.
    #[must_use]
    pub fn with_root_certificate(mut self, certificate: Certificate) -> Self {
        self.root_certificate = Some(certificate);
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the bearer token, if set.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the API generation this configuration talks to.
    #[must_use]
    pub fn api_version(&self) -> ApiVersion {
        if self.token.is_some() {
            ApiVersion::V2
        } else {
            ApiVersion::V1
        }
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("{}://{host}", self.api_version().scheme())
        }
    }

    /// Builds a transport tuned for this configuration.
    fn build_transport(&self) -> Result<Client, Error> {
        let mut builder = Client::builder().timeout(self.timeout);

        if self.api_version() == ApiVersion::V2 {
            builder = match &self.root_certificate {
                Some(certificate) => builder.add_root_certificate(certificate.clone()),
                None => {
                    tracing::warn!(
                        host = %self.host,
                        "No root certificate provided, skipping certificate validation"
                    );
                    builder.danger_accept_invalid_certs(true)
                }
            };
        }

        builder.build().map_err(|source| {
            Error::Request(RequestError::Http {
                url: self.base_url(),
                source,
            })
        })
    }
}

impl fmt::Debug for HttpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpConfig")
            .field("host", &self.host)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("root_certificate", &self.root_certificate.is_some())
            .finish()
    }
}

// ============================================================================
// HttpClient - Single request dispatcher
// ============================================================================

/// Performs HTTP requests against a `HomeWizard` device.
///
/// Each call issues exactly one request; there are no retries and no caching.
/// The outcome is classified as follows:
///
/// | Outcome                              | Result                         |
/// |--------------------------------------|--------------------------------|
/// | transport failure                    | [`Error::Request`]             |
/// | `403 Forbidden`                      | [`Error::Disabled`]            |
/// | `204 No Content`                     | [`ApiResponse::Empty`]         |
/// | other non-2xx status                 | [`Error::Request`] with status |
/// | 2xx with a JSON content type         | [`ApiResponse::Json`]          |
/// | 2xx with any other content type      | [`ApiResponse::Text`]          |
///
/// The transport is created on first use unless one was supplied with
/// [`HttpClient::with_client`]. Only an owned transport is released by
/// [`HttpClient::close`].
///
/// # Examples
///
/// ```no_run
/// use homewizard_lib::protocol::{HttpClient, HttpConfig};
///
/// # async fn example() -> homewizard_lib::Result<()> {
/// let client = HttpClient::new(HttpConfig::new("192.168.1.10"));
/// let response = client.get("/api").await?;
/// println!("{:?}", response.as_json());
/// client.close();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HttpClient {
    config: HttpConfig,
    base_url: String,
    transport: Mutex<Option<Client>>,
    owns_transport: bool,
}

impl HttpClient {
    /// Creates a dispatcher that owns its transport.
    #[must_use]
    pub fn new(config: HttpConfig) -> Self {
        Self {
            base_url: config.base_url(),
            config,
            transport: Mutex::new(None),
            owns_transport: true,
        }
    }

    /// Creates a dispatcher on top of a caller-supplied transport.
    ///
    /// The caller keeps responsibility for the transport's TLS settings and
    /// lifetime.
    #[must_use]
    pub fn with_client(config: HttpConfig, client: Client) -> Self {
        Self {
            base_url: config.base_url(),
            config,
            transport: Mutex::new(Some(client)),
            owns_transport: false,
        }
    }

    /// Returns the base URL of the device.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Returns the API generation this dispatcher talks to.
    #[must_use]
    pub fn api_version(&self) -> ApiVersion {
        self.config.api_version()
    }

    /// Returns whether the transport is owned by this dispatcher.
    #[must_use]
    pub fn owns_transport(&self) -> bool {
        self.owns_transport
    }

    /// Returns whether a transport is currently held.
    #[must_use]
    pub fn has_transport(&self) -> bool {
        self.transport.lock().is_some()
    }

    /// Releases the owned transport.
    ///
    /// A caller-supplied transport is left untouched. A later request on an
    /// owned dispatcher creates a fresh transport.
    pub fn close(&self) {
        if self.owns_transport && self.transport.lock().take().is_some() {
            tracing::debug!(base_url = %self.base_url, "Closed HTTP transport");
        }
    }

    fn transport(&self) -> Result<Client, Error> {
        let mut guard = self.transport.lock();
        if let Some(client) = guard.as_ref() {
            return Ok(client.clone());
        }

        let client = self.config.build_transport()?;
        *guard = Some(client.clone());
        Ok(client)
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn get(&self, path: &str) -> Result<ApiResponse, Error> {
        self.request(path, Method::GET, None, &[]).await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn put(&self, path: &str, body: Option<&Value>) -> Result<ApiResponse, Error> {
        self.request(path, Method::PUT, body, &[]).await
    }

    /// Performs one HTTP request.
    ///
    /// # Arguments
    ///
    /// * `path` - Path relative to the device root, e.g. `/api/v1/data`
    /// * `method` - HTTP method
    /// * `body` - Optional JSON body
    /// * `query` - Query parameters, may be empty
    ///
    /// # Errors
    ///
    /// Returns [`Error::Disabled`] on HTTP 403 and [`Error::Request`] for
    /// transport failures, other non-success statuses and undecodable JSON.
    pub async fn request(
        &self,
        path: &str,
        method: Method,
        body: Option<&Value>,
        query: &[(&str, &str)],
    ) -> Result<ApiResponse, Error> {
        let url = format!("{}{path}", self.base_url);
        let client = self.transport()?;

        tracing::debug!(method = %method, url = %url, body = ?body, "Sending HTTP request");

        let mut builder = client.request(method, &url);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(token) = self.config.token() {
            builder = builder.bearer_auth(token).header("X-Api-Version", "2");
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|source| RequestError::Http {
            url: url.clone(),
            source,
        })?;

        let status = response.status();

        if status == StatusCode::FORBIDDEN {
            return Err(Error::Disabled(format!(
                "the API of the device at {} is disabled",
                self.config.host()
            )));
        }

        if status == StatusCode::NO_CONTENT {
            tracing::debug!(status = status.as_u16(), "Received empty HTTP response");
            return Ok(ApiResponse::Empty);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RequestError::Status {
                url,
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let text = response.text().await.map_err(|source| RequestError::Http {
            url: url.clone(),
            source,
        })?;

        tracing::debug!(status = status.as_u16(), body = %text, "Received HTTP response");

        if content_type.contains("json") {
            let value = serde_json::from_str(&text).map_err(RequestError::InvalidJson)?;
            Ok(ApiResponse::Json(value))
        } else {
            Ok(ApiResponse::Text(text))
        }
    }
}
