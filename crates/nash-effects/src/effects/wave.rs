//! Expanding radial glow.

use std::time::Duration;

use nash_core::{EffectId, Point, ease_out, transition_progress};

use crate::collection::Effect;

const INITIAL_RADIUS: f64 = 50.0;
const TARGET_RADIUS: f64 = 250.0;
const RADIUS_STEP: f64 = 0.8;
const OPACITY_DECAY: f64 = 0.998;

/// Length of the spawn transition, and the delay before deferred removal.
pub const WAVE_LIFETIME: Duration = Duration::from_secs(3);

/// State of a single radial glow.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveEffect {
    pub id: EffectId,
    pub position: Point,
    /// Glow radius in points.
    pub radius: f64,
    pub opacity: f64,
    pub spawned_at: Duration,
}

/// What the renderer draws for a wave at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveSnapshot {
    pub position: Point,
    pub radius: f64,
    pub opacity: f64,
}

impl WaveEffect {
    pub fn new(id: EffectId, position: Point, spawned_at: Duration) -> Self {
        Self {
            id,
            position,
            radius: INITIAL_RADIUS,
            opacity: 1.0,
            spawned_at,
        }
    }

    pub fn presented(&self, now: Duration) -> WaveSnapshot {
        let t = ease_out(transition_progress(self.spawned_at, WAVE_LIFETIME, now));
        WaveSnapshot {
            position: self.position,
            radius: self.radius + (TARGET_RADIUS - self.radius) * t,
            opacity: self.opacity * (1.0 - t),
        }
    }
}

impl Effect for WaveEffect {
    fn id(&self) -> EffectId {
        self.id
    }

    fn opacity(&self) -> f64 {
        self.opacity
    }

    fn advance(&mut self) {
        self.radius += RADIUS_STEP;
        self.opacity *= OPACITY_DECAY;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_grows_and_fades() {
        let mut w = WaveEffect::new(EffectId::FIRST, Point::default(), Duration::ZERO);
        w.advance();
        assert!((w.radius - 50.8).abs() < 1e-9);
        assert_eq!(w.opacity, 0.998);
    }

    #[test]
    fn test_presented_endpoints() {
        let w = WaveEffect::new(EffectId::FIRST, Point::default(), Duration::from_secs(1));
        let start = w.presented(Duration::from_secs(1));
        assert_eq!(start.radius, 50.0);
        assert_eq!(start.opacity, 1.0);
        let end = w.presented(Duration::from_secs(4));
        assert_eq!(end.radius, 250.0);
        assert_eq!(end.opacity, 0.0);
    }
}
