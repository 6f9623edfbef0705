//! Multipart MIME envelope parsing.
//!
//! # Data Flow
//! ```text
//! response bytes
//!     → locator.rs (find \r\n\r\n)
//!     → header.rs (decode header, split lines)
//!     → boundary.rs (boundary marker, content type)
//!     → locator.rs (terminal boundary after the header)
//!     → decoder.rs (slice frame, inflate if zlib)
//! ```
//!
//! # Design Decisions
//! - Only a single body part is supported
//! - Every structural check fails fast
//! - Uncompressed frames are never copied

pub mod boundary;
pub mod decoder;
pub mod header;
pub mod locator;
pub mod types;

pub use decoder::{decode_frame, decode_response, parse_envelope};
pub use types::{
    DecodedFrame, FrameError, FrameRange, FrameResult, ImageFrame, MultipartEnvelope, PixelData,
    RetrievedFrame,
};
