//! MIME header text extraction.
//!
//! Header bytes are decoded one byte per character. Multi-byte decoding
//! would shift the byte offsets computed from the same buffer, so it is
//! never attempted.

/// Line terminator used by multipart envelopes.
pub const CRLF: &str = "\r\n";

/// Header block decoded from the start of a response buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderText {
    text: String,
}

impl HeaderText {
    /// Decode the first `len` bytes of `buf`. A length past the end of the
    /// buffer is clamped.
    pub fn from_bytes(buf: &[u8], len: usize) -> Self {
        let end = len.min(buf.len());
        let text = buf[..end].iter().map(|&b| char::from(b)).collect();
        Self { text }
    }

    #[cfg(test)]
    fn as_str(&self) -> &str {
        &self.text
    }

    /// Split into lines on `\r\n`, keeping empty leading and trailing segments.
    pub fn lines(&self) -> Vec<&str> {
        self.text.split(CRLF).collect()
    }
}
