//! Byte-pattern search over response buffers.

/// Find the first occurrence of `pattern` in `haystack` at or after `start`.
///
/// Scans forward only. Returns `None` when the pattern does not occur or
/// `start` lies past the end of the buffer.
pub fn find_pattern(haystack: &[u8], pattern: &[u8], start: usize) -> Option<usize> {
    if start > haystack.len() {
        return None;
    }
    if pattern.is_empty() {
        return Some(start);
    }

    haystack[start..]
        .windows(pattern.len())
        .position(|window| window == pattern)
        .map(|idx| start + idx)
}

/// Find a text pattern, comparing each character as a single byte code.
///
/// Characters above U+00FF cannot occur in a byte buffer, so such a
/// pattern never matches.
pub fn find_str(haystack: &[u8], pattern: &str, start: usize) -> Option<usize> {
    let bytes = latin1_bytes(pattern)?;
    find_pattern(haystack, &bytes, start)
}

/// Encode text back to the byte codes it was decoded from.
pub(crate) fn latin1_bytes(text: &str) -> Option<Vec<u8>> {
    text.chars().map(|c| u8::try_from(u32::from(c)).ok()).collect()
}
