//! Timing curves for animated transitions.

use std::time::Duration;

/// Cubic ease-out: fast start, gentle settle.
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Linear progress (0.0 - 1.0) of a transition that started at `started`
/// and lasts `duration`, observed at `now`.
pub fn transition_progress(started: Duration, duration: Duration, now: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_sub(started);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
}
