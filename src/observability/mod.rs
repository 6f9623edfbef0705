//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! retrieval:
//!     → logging.rs (structured log events, one span per fetch)
//!     → metrics.rs (counters, histograms)
//! ```
//!
//! # Design Decisions
//! - Correlation ID is recorded on the fetch span
//! - The pure multipart parser does not log; the retriever does

pub mod logging;
pub mod metrics;
