//! HTTP transport for WADO-RS frame requests.
//!
//! # Responsibilities
//! - Issue a GET with the requested `Accept` header
//! - Forward the caller's correlation ID
//! - Enforce the request timeout
//! - Return the complete body as a shared buffer

use bytes::Bytes;
use reqwest::header::{HeaderName, HeaderValue, ACCEPT};
use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;
use url::Url;

use crate::config::TransportConfig;
use crate::retrieval::types::{RequestHeaders, TransportError, TransportResult};

/// Source of raw response bodies.
pub trait Transport: Send + Sync {
    /// Fetch the full body of `uri`.
    fn fetch(
        &self,
        uri: &str,
        correlation_id: &str,
        headers: &RequestHeaders,
    ) -> impl Future<Output = TransportResult<Bytes>> + Send;
}

/// `reqwest`-backed transport.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    correlation_header: HeaderName,
    request_timeout_secs: u64,
}

impl HttpTransport {
    /// Build a transport from configuration.
    pub fn new(config: &TransportConfig) -> TransportResult<Self> {
        let correlation_header = HeaderName::from_bytes(config.correlation_header.as_bytes())
            .map_err(|e| {
                TransportError::InvalidHeader(format!("{}: {}", config.correlation_header, e))
            })?;

        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            correlation_header,
            request_timeout_secs: config.request_timeout_secs,
        })
    }

    async fn send(&self, url: Url, request: reqwest::RequestBuilder) -> TransportResult<Bytes> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                uri: url.to_string(),
            });
        }
        Ok(response.bytes().await?)
    }
}

impl Transport for HttpTransport {
    async fn fetch(
        &self,
        uri: &str,
        correlation_id: &str,
        headers: &RequestHeaders,
    ) -> TransportResult<Bytes> {
        let url: Url = uri.parse().map_err(|e: url::ParseError| TransportError::InvalidUri {
            uri: uri.to_string(),
            reason: e.to_string(),
        })?;
        let accept = HeaderValue::from_str(&headers.accept)
            .map_err(|_| TransportError::InvalidHeader(format!("accept: {}", headers.accept)))?;

        let mut request = self.client.get(url.clone()).header(ACCEPT, accept);
        if !correlation_id.is_empty() {
            let value = HeaderValue::from_str(correlation_id).map_err(|_| {
                TransportError::InvalidHeader(format!("{}: {}", self.correlation_header, correlation_id))
            })?;
            request = request.header(self.correlation_header.clone(), value);
        }

        match timeout(
            Duration::from_secs(self.request_timeout_secs),
            self.send(url, request),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(TransportError::Timeout(self.request_timeout_secs)),
        }
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("correlation_header", &self.correlation_header)
            .field("timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}
