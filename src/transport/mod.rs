//! HTTP transport against the ledger REST service.
//!
//! # Responsibilities
//! - Issue GET/POST requests against `base_url + path`
//! - Map unexpected statuses to RemoteService errors
//! - Expose the two documented 404-is-not-an-error lookups
//!
//! # Design Decisions
//! - No retries here; retry policy belongs to callers
//! - One reqwest client per transport, reused for connection pooling

use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::types::{ClientError, ClientResult};

/// Thin request/response wrapper around the configured service endpoint.
#[derive(Debug, Clone)]
pub struct RestTransport {
    http: reqwest::Client,
    base_url: String,
}

impl RestTransport {
    /// Build a transport from a validated configuration.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self {
            http,
            base_url: config.node_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a transport against an arbitrary base URL with the config's
    /// timeout. Used by the faucet client, which talks to a second service.
    pub fn with_base_url(config: &ClientConfig, base_url: &str) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The service endpoint this transport talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a path, expecting 200 with a JSON body.
    pub async fn get_json(&self, path: &str) -> ClientResult<Value> {
        let response = self.http.get(self.url(path)).send().await?;
        Self::expect(response, StatusCode::OK).await
    }

    /// GET a path where 404 is a normal "not found" outcome.
    ///
    /// Returns `None` on 404, the body on 200, and a RemoteService error
    /// on anything else.
    pub async fn get_json_optional(&self, path: &str) -> ClientResult<Option<Value>> {
        let response = self.http.get(self.url(path)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::expect(response, StatusCode::OK).await.map(Some)
    }

    /// POST a JSON body, expecting the given success status.
    ///
    /// Reads expect 200; transaction submission expects 202 Accepted.
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        expected: StatusCode,
    ) -> ClientResult<Value> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::expect(response, expected).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn expect(response: reqwest::Response, expected: StatusCode) -> ClientResult<Value> {
        let status = response.status();
        if status != expected {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                status = status.as_u16(),
                expected = expected.as_u16(),
                "Unexpected status from ledger service"
            );
            return Err(ClientError::RemoteService {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }
}
