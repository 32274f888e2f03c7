// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Protocol plumbing for the `HomeWizard` local API.
//!
//! - [`HttpClient`]: performs single HTTP requests and classifies the outcome
//! - [`ApiVersion`]: the API generation, which decides scheme, paths and auth
//! - [`has_v2_api`]: a best-effort probe for v2 support
//!
//! # API Generations
//!
//! | Generation | Transport | Auth          | Data endpoint      |
//! |------------|-----------|---------------|--------------------|
//! | v1         | HTTP      | none          | `/api/v1/data`     |
//! | v2         | HTTPS     | bearer token  | `/api/measurement` |

mod http;
mod probe;

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

pub use http::{HttpClient, HttpConfig};
pub use probe::{PROBE_TIMEOUT, has_v2_api, has_v2_api_with_timeout};

use crate::error::{Error, RequestError};

/// Logical endpoints of the local API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Device identity.
    Device,
    /// Latest measurement.
    Data,
    /// Switchable state.
    State,
    /// System settings.
    System,
    /// Blink the status LED.
    Identify,
    /// Restart the device.
    Reboot,
    /// Raw smart meter telegram.
    Telegram,
}

/// API generation spoken by a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// Plain HTTP, unauthenticated.
    V1,
    /// HTTPS with a bearer token.
    V2,
}

impl ApiVersion {
    /// Interprets the `api_version` string a device reports.
    ///
    /// v1 devices report `"v1"`; v2 devices report a semantic version such as
    /// `"2.0.0"`. Anything else is unsupported.
    ///
    /// # Examples
    ///
    /// ```
    /// use homewizard_lib::protocol::ApiVersion;
    ///
    /// assert_eq!(ApiVersion::from_reported("v1"), Some(ApiVersion::V1));
    /// assert_eq!(ApiVersion::from_reported("2.0.0"), Some(ApiVersion::V2));
    /// assert_eq!(ApiVersion::from_reported("v3"), None);
    /// ```
    #[must_use]
    pub fn from_reported(reported: &str) -> Option<Self> {
        match reported {
            "v1" => Some(Self::V1),
            "v2" | "2" => Some(Self::V2),
            s if s.starts_with("2.") => Some(Self::V2),
            _ => None,
        }
    }

    /// Returns the URL scheme used by this generation.
    #[must_use]
    pub const fn scheme(self) -> &'static str {
        match self {
            Self::V1 => "http",
            Self::V2 => "https",
        }
    }

    /// Returns whether requests must carry a bearer token.
    #[must_use]
    pub const fn requires_token(self) -> bool {
        matches!(self, Self::V2)
    }

    /// Returns the path of an endpoint, or `None` if this generation lacks it.
    #[must_use]
    pub const fn path(self, endpoint: Endpoint) -> Option<&'static str> {
        let path = match (self, endpoint) {
            (_, Endpoint::Device) => "/api",
            (Self::V1, Endpoint::Data) => "/api/v1/data",
            (Self::V1, Endpoint::State) => "/api/v1/state",
            (Self::V1, Endpoint::System) => "/api/v1/system",
            (Self::V1, Endpoint::Identify) => "/api/v1/identify",
            (Self::V1, Endpoint::Telegram) => "/api/v1/telegram",
            (Self::V1, Endpoint::Reboot) => return None,
            (Self::V2, Endpoint::Data) => "/api/measurement",
            (Self::V2, Endpoint::State) => "/api/state",
            (Self::V2, Endpoint::System) => "/api/system",
            (Self::V2, Endpoint::Identify) => "/api/system/identify",
            (Self::V2, Endpoint::Reboot) => "/api/system/reboot",
            (Self::V2, Endpoint::Telegram) => "/api/telegram",
        };
        Some(path)
    }

    /// Returns the short name, `v1` or `v2`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a successful response.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// The response was declared as JSON and parsed.
    Json(Value),
    /// Any other content type, returned verbatim.
    Text(String),
    /// The device answered `204 No Content`.
    Empty,
}

impl ApiResponse {
    /// Returns the JSON value, if this is a JSON response.
    #[must_use]
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the raw text, if this is a non-JSON response.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Maps a JSON response onto a typed record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Request`] if the response is not JSON or does not
    /// fit the record.
    pub fn into_model<T: DeserializeOwned>(self) -> Result<T, Error> {
        match self {
            Self::Json(value) => serde_json::from_value(value)
                .map_err(|e| Error::Request(RequestError::InvalidJson(e))),
            Self::Text(text) => Err(RequestError::UnexpectedResponse(format!(
                "expected JSON, got text: {text}"
            ))
            .into()),
            Self::Empty => Err(RequestError::UnexpectedResponse(
                "expected JSON, got an empty response".to_string(),
            )
            .into()),
        }
    }

    /// Returns the body as text. JSON responses are re-serialized.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Json(value) => value.to_string(),
            Self::Text(text) => text,
            Self::Empty => String::new(),
        }
    }
}
