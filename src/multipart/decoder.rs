//! Single-part multipart frame decoding.
//!
//! # Layout
//! ```text
//! <header lines>\r\n\r\n<frame bytes>\r\n<boundary>...
//! ```
//!
//! The boundary is the first header line starting with `--`. The frame
//! ends two bytes before its next occurrence after the header.

use bytes::Bytes;
use std::borrow::Cow;

use crate::compression;
use crate::multipart::boundary::{find_boundary, find_content_type};
use crate::multipart::header::HeaderText;
use crate::multipart::locator::{find_pattern, latin1_bytes};
use crate::multipart::types::{
    DecodedFrame, FrameError, FrameRange, FrameResult, ImageFrame, MultipartEnvelope, PixelData,
    RetrievedFrame,
};

/// Separator between the MIME header and the frame payload.
pub const HEADER_SEPARATOR: &[u8] = b"\r\n\r\n";

/// Bytes of `\r\n` preceding the terminal boundary line.
const TRAILING_CRLF_LEN: usize = 2;

/// Locate header, boundary, content type and payload range.
pub fn parse_envelope(response: &[u8]) -> FrameResult<MultipartEnvelope> {
    let separator = find_pattern(response, HEADER_SEPARATOR, 0).ok_or(FrameError::NoMimeHeader)?;

    let header = HeaderText::from_bytes(response, separator);
    let lines = header.lines();
    let boundary = find_boundary(&lines).ok_or(FrameError::NoBoundaryMarker)?;

    let offset = separator + HEADER_SEPARATOR.len();

    let pattern = latin1_bytes(boundary).ok_or(FrameError::NoTerminalBoundary)?;
    let end_index =
        find_pattern(response, &pattern, offset).ok_or(FrameError::NoTerminalBoundary)?;

    let length = end_index
        .checked_sub(offset + TRAILING_CRLF_LEN)
        .ok_or(FrameError::InvalidFrameRange {
            offset,
            end: end_index.saturating_sub(TRAILING_CRLF_LEN),
        })?;

    Ok(MultipartEnvelope {
        boundary: boundary.to_string(),
        content_type: find_content_type(&lines),
        frame: FrameRange { offset, length },
    })
}

/// Decode the frame of a borrowed response buffer.
///
/// Uncompressed payloads borrow from `response`.
pub fn decode_frame(response: &[u8]) -> FrameResult<DecodedFrame<'_>> {
    let envelope = parse_envelope(response)?;
    let frame = &response[envelope.frame.as_range()];

    let pixel_data = match inflate_if_deflated(frame)? {
        Some(inflated) => Cow::Owned(inflated),
        None => Cow::Borrowed(frame),
    };

    Ok(DecodedFrame {
        content_type: envelope.content_type,
        pixel_data,
    })
}

/// Decode the frame of a shared response buffer.
///
/// Uncompressed payloads are returned as a view sharing `response`.
pub fn decode_response(response: Bytes) -> FrameResult<RetrievedFrame> {
    let envelope = parse_envelope(&response)?;
    let frame = response.slice(envelope.frame.as_range());

    let pixel_data = match inflate_if_deflated(&frame)? {
        Some(inflated) => PixelData::Inflated(inflated),
        None => PixelData::View(frame),
    };

    Ok(RetrievedFrame {
        content_type: envelope.content_type,
        image_frame: ImageFrame { pixel_data },
    })
}

fn inflate_if_deflated(frame: &[u8]) -> FrameResult<Option<Vec<u8>>> {
    if !compression::is_deflated(frame) {
        return Ok(None);
    }
    compression::inflate(frame)
        .map(Some)
        .map_err(FrameError::DecompressionFailure)
}
