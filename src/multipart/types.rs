//! Multipart frame types and error definitions.

use bytes::Bytes;
use std::borrow::Cow;
use std::ops::{Deref, Range};
use thiserror::Error;

/// Errors raised while decoding a multipart response.
#[derive(Debug, Error)]
pub enum FrameError {
    /// No `\r\n\r\n` header/body separator.
    #[error("invalid response - no multipart mime header")]
    NoMimeHeader,

    /// No header line starts with `--`.
    #[error("invalid response - no boundary marker")]
    NoBoundaryMarker,

    /// The boundary does not reappear after the header.
    #[error("invalid response - terminating boundary not found")]
    NoTerminalBoundary,

    /// The terminal boundary leaves no room for the line terminator.
    #[error("invalid response - frame range {offset}..{end} outside buffer")]
    InvalidFrameRange { offset: usize, end: usize },

    /// Frame carried a zlib signature but did not inflate.
    #[error("invalid response - decompression failed: {0}")]
    DecompressionFailure(#[source] std::io::Error),
}

impl FrameError {
    /// Short label used for metrics and logs.
    pub fn reason(&self) -> &'static str {
        match self {
            FrameError::NoMimeHeader => "no_mime_header",
            FrameError::NoBoundaryMarker => "no_boundary_marker",
            FrameError::NoTerminalBoundary => "no_terminal_boundary",
            FrameError::InvalidFrameRange { .. } => "invalid_frame_range",
            FrameError::DecompressionFailure(_) => "decompression_failure",
        }
    }
}

/// Result type for frame decoding.
pub type FrameResult<T> = Result<T, FrameError>;

/// Byte range of the frame payload inside the response buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRange {
    pub offset: usize,
    pub length: usize,
}

impl FrameRange {
    /// Exclusive end of the range.
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    pub fn as_range(&self) -> Range<usize> {
        self.offset..self.end()
    }
}

/// Parsed multipart envelope, before the payload is inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartEnvelope {
    /// Boundary line exactly as found, including the `--` prefix.
    pub boundary: String,
    /// Declared content type, if the header carried one.
    pub content_type: Option<String>,
    /// Location of the payload.
    pub frame: FrameRange,
}

/// Frame decoded from a borrowed buffer.
///
/// `pixel_data` borrows from the input unless it had to be inflated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFrame<'a> {
    pub content_type: Option<String>,
    pub pixel_data: Cow<'a, [u8]>,
}

impl DecodedFrame<'_> {
    pub fn is_inflated(&self) -> bool {
        matches!(self.pixel_data, Cow::Owned(_))
    }
}

/// Pixel bytes of one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelData {
    /// Zero-copy view into the response buffer.
    View(Bytes),
    /// Newly allocated output of decompression.
    Inflated(Vec<u8>),
}

impl PixelData {
    pub fn is_inflated(&self) -> bool {
        matches!(self, PixelData::Inflated(_))
    }
}

impl Deref for PixelData {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            PixelData::View(bytes) => bytes,
            PixelData::Inflated(data) => data,
        }
    }
}

impl AsRef<[u8]> for PixelData {
    fn as_ref(&self) -> &[u8] {
        self
    }
}

/// Image frame wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFrame {
    pub pixel_data: PixelData,
}

/// Outcome of a successful retrieval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievedFrame {
    pub content_type: Option<String>,
    pub image_frame: ImageFrame,
}
