//! Decoding of complete multipart response bodies.

use std::io::Write;

use bytes::Bytes;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use wado_frame::{decode_frame, decode_response, FrameError};

#[test]
fn test_octet_stream_frame() {
    let mut response = b"\r\n--AAA\r\nContent-Type: application/octet-stream\r\n\r\n".to_vec();
    response.extend_from_slice(&[0x01, 0x02, 0x03]);
    response.extend_from_slice(b"\r\n--AAA");

    let frame = decode_frame(&response).unwrap();
    assert_eq!(frame.content_type.as_deref(), Some("application/octet-stream"));
    assert_eq!(frame.pixel_data.as_ref(), &[0x01, 0x02, 0x03]);
}

#[test]
fn test_no_header_separator() {
    let response = b"--AAA\r\nContent-Type: application/octet-stream\r\n\x01\x02\r\n--AAA";
    let err = decode_frame(response).unwrap_err();
    assert!(matches!(err, FrameError::NoMimeHeader));
    assert_eq!(err.to_string(), "invalid response - no multipart mime header");
}

#[test]
fn test_no_boundary_in_header() {
    let response = b"Content-Type: image/jp2\r\n\r\n\x01\x02\r\n--AAA";
    let err = decode_frame(response).unwrap_err();
    assert!(matches!(err, FrameError::NoBoundaryMarker));
}

#[test]
fn test_boundary_never_reappears() {
    let response = b"--AAA\r\n\r\n\x01\x02\x03\r\n--BBB";
    let err = decode_frame(response).unwrap_err();
    assert!(matches!(err, FrameError::NoTerminalBoundary));
}

#[test]
fn test_zlib_frame_known_plaintext() {
    let plain = b"The quick brown fox jumps over the lazy dog";
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(plain).unwrap();
    let compressed = encoder.finish().unwrap();
    assert_eq!(&compressed[..2], &[0x78, 0x9C]);

    let mut response = b"--AAA\r\nContent-Type: application/octet-stream\r\n\r\n".to_vec();
    response.extend_from_slice(&compressed);
    response.extend_from_slice(b"\r\n--AAA--");

    let frame = decode_response(Bytes::from(response)).unwrap();
    assert!(frame.image_frame.pixel_data.is_inflated());
    assert_eq!(&*frame.image_frame.pixel_data, plain);
}
