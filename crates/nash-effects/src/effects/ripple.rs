//! Expanding ring spawned by a tap.

use std::time::Duration;

use nash_core::{EffectId, Point, ease_out, transition_progress};

use crate::collection::Effect;

/// Ring diameter at spawn, in points.
const INITIAL_SIZE: f64 = 20.0;
/// Ring diameter the spawn transition eases toward.
const TARGET_SIZE: f64 = 150.0;
/// Scale the spawn transition eases toward.
const TARGET_SCALE: f64 = 2.0;
/// Per-tick diameter growth.
const SIZE_STEP: f64 = 1.0;
/// Per-tick opacity decay factor.
const OPACITY_DECAY: f64 = 0.99;

/// Length of the spawn transition, and the delay before deferred removal.
pub const RIPPLE_LIFETIME: Duration = Duration::from_millis(1500);

/// State of a single ripple ring.
#[derive(Debug, Clone, PartialEq)]
pub struct RippleEffect {
    pub id: EffectId,
    /// Ring center, fixed at spawn.
    pub position: Point,
    /// Ring diameter in points.
    pub size: f64,
    pub opacity: f64,
    pub scale: f64,
    /// Logical time the spawn transition started.
    pub spawned_at: Duration,
}

/// What the renderer draws for a ripple at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleSnapshot {
    pub position: Point,
    /// Ring radius in points, scale applied.
    pub radius: f64,
    pub opacity: f64,
}

impl RippleEffect {
    pub fn new(id: EffectId, position: Point, spawned_at: Duration) -> Self {
        Self {
            id,
            position,
            size: INITIAL_SIZE,
            opacity: 1.0,
            scale: 1.0,
            spawned_at,
        }
    }

    /// Model values eased toward the transition targets as of `now`.
    pub fn presented(&self, now: Duration) -> RippleSnapshot {
        let t = ease_out(transition_progress(self.spawned_at, RIPPLE_LIFETIME, now));
        let size = self.size + (TARGET_SIZE - self.size) * t;
        let scale = self.scale + (TARGET_SCALE - self.scale) * t;
        RippleSnapshot {
            position: self.position,
            radius: size * scale / 2.0,
            opacity: self.opacity * (1.0 - t),
        }
    }
}

impl Effect for RippleEffect {
    fn id(&self) -> EffectId {
        self.id
    }

    fn opacity(&self) -> f64 {
        self.opacity
    }

    fn advance(&mut self) {
        self.size += SIZE_STEP;
        self.opacity *= OPACITY_DECAY;
    }
}
