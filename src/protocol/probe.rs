// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Best-effort detection of v2 API support.

use std::time::Duration;

use reqwest::{Client, StatusCode};

/// Upper bound for a single probe.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(15);

/// Checks whether the device at `host` speaks the v2 API.
///
/// The v2 API is served over HTTPS only and answers `401 Unauthorized` when
/// no token is presented, so a 401 on `https://{host}/api` identifies it.
/// Any other status, a connection failure or a timeout yields `false`. A
/// transient network problem is therefore indistinguishable from a device
/// without v2 support.
///
/// The probe uses its own transport without certificate validation, as
/// devices present certificates signed by the `HomeWizard` CA.
///
/// # Examples
///
/// ```no_run
/// # async fn example() {
/// if homewizard_lib::has_v2_api("192.168.1.10").await {
///     println!("device speaks v2");
/// }
/// # }
/// ```
pub async fn has_v2_api(host: &str) -> bool {
    has_v2_api_with_timeout(host, PROBE_TIMEOUT).await
}

/// Like [`has_v2_api`], bounded by `limit` instead of [`PROBE_TIMEOUT`].
pub async fn has_v2_api_with_timeout(host: &str, limit: Duration) -> bool {
    let client = match probe_transport(limit) {
        Ok(client) => client,
        Err(e) => {
            tracing::debug!(error = %e, "Failed to build probe transport");
            return false;
        }
    };

    probe(&client, &probe_url(host), limit).await
}

fn probe_transport(limit: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .danger_accept_invalid_certs(true)
        .timeout(limit)
        .build()
}

/// Always HTTPS; an explicit scheme on `host` is dropped.
fn probe_url(host: &str) -> String {
    let host = host
        .strip_prefix("https://")
        .or_else(|| host.strip_prefix("http://"))
        .unwrap_or(host)
        .trim_end_matches('/');
    format!("https://{host}/api")
}

async fn probe(client: &Client, url: &str, limit: Duration) -> bool {
    tracing::debug!(url = %url, "Probing for v2 API");

    match tokio::time::timeout(limit, client.get(url).send()).await {
        Ok(Ok(response)) => {
            let status = response.status();
            tracing::debug!(status = status.as_u16(), "v2 probe answered");
            status == StatusCode::UNAUTHORIZED
        }
        Ok(Err(e)) => {
            tracing::debug!(error = %e, "v2 probe failed");
            false
        }
        Err(_) => {
            tracing::debug!(timeout_ms = limit.as_millis(), "v2 probe timed out");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn probe_url_is_always_https() {
        assert_eq!(probe_url("192.168.1.10"), "https://192.168.1.10/api");
        assert_eq!(probe_url("https://192.168.1.10/"), "https://192.168.1.10/api");
        assert_eq!(probe_url("http://127.0.0.1:1234/"), "https://127.0.0.1:1234/api");
    }

    #[test]
    fn probe_transport_builds() {
        assert!(probe_transport(PROBE_TIMEOUT).is_ok());
    }

    #[tokio::test]
    async fn stalled_handshake_is_bounded() {
        // Accepts connections but never answers the TLS handshake.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let accept = tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        let started = std::time::Instant::now();
        let host = format!("127.0.0.1:{port}");
        assert!(!has_v2_api_with_timeout(&host, Duration::from_millis(200)).await);
        assert!(started.elapsed() < Duration::from_secs(5));

        accept.abort();
    }

    #[tokio::test]
    async fn plain_http_server_is_not_v2() {
        // A plain HTTP 401 must not count: the probe speaks TLS to it.
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        assert!(!has_v2_api_with_timeout(&mock_server.uri(), Duration::from_secs(2)).await);
    }

    #[tokio::test]
    async fn unauthorized_means_v2() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let url = format!("{}/api", mock_server.uri());
        assert!(probe(&Client::new(), &url, PROBE_TIMEOUT).await);
    }

    #[tokio::test]
    async fn other_status_means_not_v2() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let url = format!("{}/api", mock_server.uri());
        assert!(!probe(&Client::new(), &url, PROBE_TIMEOUT).await);
    }

    #[tokio::test]
    async fn timeout_means_not_v2() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api"))
            .respond_with(ResponseTemplate::new(401).set_delay(Duration::from_secs(2)))
            .mount(&mock_server)
            .await;

        let url = format!("{}/api", mock_server.uri());
        assert!(!probe(&Client::new(), &url, Duration::from_millis(100)).await);
    }

    #[tokio::test]
    async fn refused_connection_means_not_v2() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let url = format!("http://127.0.0.1:{port}/api");
        assert!(!probe(&Client::new(), &url, PROBE_TIMEOUT).await);
    }
}
