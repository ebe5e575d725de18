//! Time helpers shared by the scroll engine and the tween timelines.
//!
//! Timestamps are milliseconds as delivered by `requestAnimationFrame`;
//! `std::time::Instant` is not available on wasm32.

/// Progress of an animation that started at `start_ms` and lasts `duration_ms`.
#[inline]
pub fn progress(start_ms: f64, now_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    ((now_ms - start_ms) / duration_ms).clamp(0.0, 1.0)
}

#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Maps `value` from the range `[start, end]` onto [0, 1].
#[inline]
pub fn normalize(value: f64, start: f64, end: f64) -> f64 {
    if end <= start {
        return if value >= end { 1.0 } else { 0.0 };
    }
    ((value - start) / (end - start)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 1e-9);
        assert!((lerp(40.0, 0.0, 1.0)).abs() < 1e-9);
    }

    #[test]
    fn test_progress_zero_duration() {
        assert_eq!(progress(10.0, 10.0, 0.0), 1.0);
    }

    #[test]
    fn test_progress_clamps() {
        assert_eq!(progress(100.0, 50.0, 200.0), 0.0);
        assert_eq!(progress(100.0, 200.0, 200.0), 0.5);
        assert_eq!(progress(100.0, 900.0, 200.0), 1.0);
    }

    #[test]
    fn test_normalize_degenerate_range() {
        assert_eq!(normalize(5.0, 10.0, 10.0), 0.0);
        assert_eq!(normalize(10.0, 10.0, 10.0), 1.0);
        assert_eq!(normalize(15.0, 10.0, 20.0), 0.5);
    }
}
