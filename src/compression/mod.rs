//! Frame compression handling.
//!
//! WADO-RS servers may return frames as a raw zlib stream. Detection looks
//! at the two-byte zlib header only; anything else is passed through.

pub mod detect;
pub mod inflate;

pub use detect::is_deflated;
pub use inflate::inflate;
