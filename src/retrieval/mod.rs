//! Frame retrieval subsystem.
//!
//! # Data Flow
//! ```text
//! fetch_pixel_frame(uri, correlation_id, media_type)
//!     → transport.rs (GET with Accept header, timeout)
//!     → multipart (envelope parse, inflate)
//!     → RetrievedFrame
//! ```
//!
//! # Design Decisions
//! - No retries and no caching; every call issues one request
//! - Transport errors are passed through unchanged
//! - Retrievers hold no mutable state and can be shared across tasks

pub mod retriever;
pub mod transport;
pub mod types;

pub use retriever::FrameRetriever;
pub use transport::{HttpTransport, Transport};
pub use types::{RequestHeaders, RetrievalError, RetrievalResult, TransportError, TransportResult};
