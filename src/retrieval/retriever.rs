//! Pixel frame retrieval.
//!
//! Suspends only on the transport. Parsing and decompression of the
//! returned buffer run synchronously. Dropping the returned future cancels
//! the in-flight request.

use std::time::Instant;
use tracing::Instrument;

use crate::config::{FrameConfig, RetrievalConfig};
use crate::multipart::{self, RetrievedFrame};
use crate::observability::metrics;
use crate::retrieval::transport::{HttpTransport, Transport};
use crate::retrieval::types::{RequestHeaders, RetrievalError, RetrievalResult, TransportResult};

/// Fetches single frames from a WADO-RS endpoint.
#[derive(Debug, Clone)]
pub struct FrameRetriever<T> {
    transport: T,
    default_media_type: String,
}

impl FrameRetriever<HttpTransport> {
    /// Build an HTTP retriever from configuration.
    pub fn from_config(config: &FrameConfig) -> TransportResult<Self> {
        let transport = HttpTransport::new(&config.transport)?;
        Ok(Self::new(transport, &config.retrieval))
    }
}

impl<T: Transport> FrameRetriever<T> {
    pub fn new(transport: T, config: &RetrievalConfig) -> Self {
        Self {
            transport,
            default_media_type: config.default_media_type.clone(),
        }
    }

    #[cfg(test)]
    fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch and decode one pixel frame.
    ///
    /// `media_type` becomes the `Accept` header; `None` uses the
    /// configured default.
    pub async fn fetch_pixel_frame(
        &self,
        uri: &str,
        correlation_id: &str,
        media_type: Option<&str>,
    ) -> RetrievalResult<RetrievedFrame> {
        let accept = media_type.unwrap_or(&self.default_media_type);
        let span = tracing::info_span!("fetch_pixel_frame", %uri, %correlation_id, %accept);

        async move {
            let start_time = Instant::now();
            let headers = RequestHeaders::accept(accept);

            let result = self.fetch_and_decode(uri, correlation_id, &headers).await;
            match &result {
                Ok(frame) => {
                    let pixel_data = &frame.image_frame.pixel_data;
                    tracing::debug!(
                        content_type = ?frame.content_type,
                        pixel_bytes = pixel_data.len(),
                        inflated = pixel_data.is_inflated(),
                        "Frame decoded"
                    );
                    metrics::record_frame(pixel_data.is_inflated(), pixel_data.len(), start_time);
                }
                Err(e) => {
                    tracing::warn!(error = %e, reason = e.reason(), "Frame retrieval failed");
                    metrics::record_failure(e.reason());
                }
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn fetch_and_decode(
        &self,
        uri: &str,
        correlation_id: &str,
        headers: &RequestHeaders,
    ) -> RetrievalResult<RetrievedFrame> {
        let body = self.transport.fetch(uri, correlation_id, headers).await?;
        tracing::debug!(response_bytes = body.len(), "Response received");

        multipart::decode_response(body).map_err(RetrievalError::from)
    }
}
