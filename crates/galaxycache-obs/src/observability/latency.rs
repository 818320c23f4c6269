use std::time::{Duration, Instant};

/// Milliseconds elapsed since `start`, with sub-millisecond precision.
///
/// This is the value recorded against `roundtrip_latency`.
pub fn since_in_milliseconds(start: Instant) -> f64 {
    duration_as_milliseconds(start.elapsed())
}

pub fn duration_as_milliseconds(d: Duration) -> f64 {
    d.as_nanos() as f64 / 1e6
}
