//! Retrieval request types and error definitions.

use thiserror::Error;

use crate::multipart::FrameError;

/// Outbound request headers handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHeaders {
    /// Value of the `Accept` header.
    pub accept: String,
}

impl RequestHeaders {
    pub fn accept(media_type: impl Into<String>) -> Self {
        Self {
            accept: media_type.into(),
        }
    }
}

/// Errors raised by the transport layer.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection or protocol failure.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("HTTP {status} from {uri}")]
    Status { status: u16, uri: String },

    /// No complete response within the request timeout.
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// URI could not be parsed.
    #[error("invalid URI '{uri}': {reason}")]
    InvalidUri { uri: String, reason: String },

    /// Header name or value not representable on the wire.
    #[error("invalid header: {0}")]
    InvalidHeader(String),
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors returned from a frame retrieval.
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// Transport failures are passed through unchanged.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body was not a well-formed single-part envelope.
    #[error(transparent)]
    Malformed(#[from] FrameError),
}

impl RetrievalError {
    /// Short label used for metrics and logs.
    pub fn reason(&self) -> &'static str {
        match self {
            RetrievalError::Transport(TransportError::Timeout(_)) => "transport_timeout",
            RetrievalError::Transport(TransportError::Status { .. }) => "transport_status",
            RetrievalError::Transport(_) => "transport",
            RetrievalError::Malformed(err) => err.reason(),
        }
    }
}

/// Result type for frame retrieval.
pub type RetrievalResult<T> = Result<T, RetrievalError>;
