//! Tunable animation parameters.

use std::time::Duration;

use nash_core::Point;

/// Parameters of the animation loop.
///
/// The defaults reproduce the stock look: a 30 Hz tick and a reference
/// center in the middle of an 800x600 point surface.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationParams {
    /// Interval between ticks.
    pub tick_interval: Duration,
    /// Phase accumulator increment per tick.
    pub phase_step: f64,
    /// Pointer-wave accumulator increment per pointer move.
    pub pointer_wave_step: f64,
    /// Reference point the pointer displacement is measured from.
    pub center: Point,
    /// Duration of the ease-out transition applied to gradient offset changes.
    pub gradient_transition: Duration,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(33),
            phase_step: 0.02,
            pointer_wave_step: 0.05,
            center: Point::new(400.0, 300.0),
            gradient_transition: Duration::from_millis(800),
        }
    }
}
