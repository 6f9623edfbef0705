//! WADO-RS pixel frame retrieval library.
//!
//! Fetches a single frame from a DICOMweb endpoint, unwraps the
//! `multipart/related` envelope and inflates zlib-compressed payloads.

pub mod compression;
pub mod config;
pub mod multipart;
pub mod observability;
pub mod retrieval;

pub use config::schema::FrameConfig;
pub use multipart::{decode_frame, decode_response, FrameError, PixelData, RetrievedFrame};
pub use retrieval::{FrameRetriever, HttpTransport, RetrievalError, Transport};
