// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `HomeWizard` library.
//!
//! Every public operation fails with [`Error`]. Callers can tell apart a
//! failed request, an API that was switched off on the device, a device or
//! API generation this library does not know, and a call that conflicts with
//! what the client already learned about the device.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be completed.
    ///
    /// Covers transport failures, unexpected HTTP status codes and payloads
    /// that cannot be interpreted. The caller may retry at its discretion.
    #[error("request failed: {0}")]
    Request(#[from] RequestError),

    /// The local API is disabled in the device settings (HTTP 403).
    #[error("API is disabled on the device: {0}")]
    Disabled(String),

    /// The device or its API generation is not supported by this library.
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// The operation conflicts with the identity already known for the device.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// An argument was outside the set of accepted values.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Returns the HTTP status code if the device answered with an
    /// unexpected status.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request(RequestError::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }

    /// Returns whether the device rejected the bearer token (HTTP 401).
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Details of a failed request.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The HTTP transport failed (connection refused, timeout, TLS, ...).
    #[error("HTTP request to {url} failed: {source}")]
    Http {
        /// The URL that was requested.
        url: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The device answered with a non-success status code.
    #[error("HTTP {status} from {url}: {body}")]
    Status {
        /// The URL that was requested.
        url: String,
        /// The HTTP status code.
        status: u16,
        /// The response body, as returned by the device.
        body: String,
    },

    /// The response claimed to be JSON but could not be decoded.
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The response had an unexpected shape.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
