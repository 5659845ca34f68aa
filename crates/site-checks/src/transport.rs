//! Transport to the scoring service.
//!
//! One POST per evaluation, no retries, no timeout. Any non-success status,
//! network fault, or non-object body is reported as a [`TransportError`].

use async_trait::async_trait;
use serde_json::Value;

use crate::types::{CheckRequest, CheckResponse, TransportError, TransportResult};

/// Path of the analyze endpoint, relative to the backend base address.
pub const ANALYZE_PATH: &str = "/api/checks/analyze";

/// Anything that can turn a check request into a check response.
#[async_trait]
pub trait CheckTransport: Send + Sync {
    async fn analyze(&self, request: &CheckRequest) -> TransportResult<CheckResponse>;
}

/// HTTP transport backed by reqwest.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Create a transport for the given base address. The endpoint URL is
    /// fixed here and not re-evaluated per call.
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        let endpoint = format!("{}{ANALYZE_PATH}", base_url.trim_end_matches('/'));
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CheckTransport for HttpTransport {
    async fn analyze(&self, request: &CheckRequest) -> TransportResult<CheckResponse> {
        tracing::debug!(endpoint = %self.endpoint, "Sending check request");

        let resp = self.client.post(&self.endpoint).json(request).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = resp.bytes().await?;
        parse_response(&body)
    }
}

/// Parse a response body. The top level must be a JSON object.
pub fn parse_response(body: &[u8]) -> TransportResult<CheckResponse> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| TransportError::MalformedBody(e.to_string()))?;

    if !value.is_object() {
        return Err(TransportError::MalformedBody(
            "expected a JSON object".to_string(),
        ));
    }

    serde_json::from_value(value).map_err(|e| TransportError::MalformedBody(e.to_string()))
}
