//! zlib decompression.

use flate2::read::ZlibDecoder;
use std::io::{self, Read};

/// Inflate a complete zlib stream into a new buffer.
pub fn inflate(compressed: &[u8]) -> io::Result<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(compressed);
    // Pixel data usually compresses 2-4x.
    let mut out = Vec::with_capacity(compressed.len().saturating_mul(3));
    decoder.read_to_end(&mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::ZlibEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn zlib(data: &[u8], level: Compression) -> Vec<u8> {
        let mut encoder = ZlibEncoder::new(Vec::new(), level);
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn test_inflate_roundtrip() {
        let plain = b"pixel pixel pixel pixel".repeat(16);
        let compressed = zlib(&plain, Compression::default());
        assert_eq!(inflate(&compressed).unwrap(), plain);
    }

    #[test]
    fn test_inflate_rejects_garbage() {
        assert!(inflate(&[0x78, 0x9C, 0xFF, 0xFF, 0xFF, 0xFF]).is_err());
    }
}
