//! zlib signature detection.

/// zlib CMF byte for DEFLATE with a 32K window.
const ZLIB_CMF: u8 = 0x78;

/// FLG bytes emitted for no, default and best compression.
const ZLIB_FLG: [u8; 3] = [0x01, 0x9C, 0xDA];

/// Check whether a frame starts with a zlib stream header.
pub fn is_deflated(buf: &[u8]) -> bool {
    match buf {
        [cmf, flg, ..] => *cmf == ZLIB_CMF && ZLIB_FLG.contains(flg),
        _ => false,
    }
}
