//! Retrieval metrics.
//!
//! # Metrics
//! - `wado_frames_retrieved_total` (counter): decoded frames by `compressed`
//! - `wado_frame_failures_total` (counter): failed retrievals by `reason`
//! - `wado_frame_bytes` (histogram): decoded pixel data size
//! - `wado_fetch_duration_seconds` (histogram): transport + decode latency
//!
//! No exporter is installed here; embedding applications choose one.

use std::time::Instant;

/// Record a successfully decoded frame.
pub fn record_frame(compressed: bool, pixel_bytes: usize, start_time: Instant) {
    ::metrics::counter!(
        "wado_frames_retrieved_total",
        "compressed" => if compressed { "true" } else { "false" }
    )
    .increment(1);
    ::metrics::histogram!("wado_frame_bytes").record(pixel_bytes as f64);
    ::metrics::histogram!("wado_fetch_duration_seconds").record(start_time.elapsed().as_secs_f64());
}

/// Record a failed retrieval.
pub fn record_failure(reason: &'static str) {
    ::metrics::counter!("wado_frame_failures_total", "reason" => reason).increment(1);
}
