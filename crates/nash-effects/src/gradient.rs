//! Gradient control point derivation.

use std::time::Duration;

use nash_core::{Point, UnitPoint, Vector, ease_out, transition_progress};

/// How strongly the offset (in points) shifts the control points.
const OFFSET_SCALE: f64 = 0.0003;

/// Start and end of the linear gradient axis, in unit space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientPoints {
    pub start: UnitPoint,
    pub end: UnitPoint,
}

impl GradientPoints {
    /// Position of a unit-space point along the gradient axis, clamped to
    /// 0.0 (start color) - 1.0 (end color).
    pub fn project(&self, p: UnitPoint) -> f64 {
        let ax = self.end.x - self.start.x;
        let ay = self.end.y - self.start.y;
        let len_sq = ax * ax + ay * ay;
        if len_sq <= f64::EPSILON {
            return 0.0;
        }
        (((p.x - self.start.x) * ax + (p.y - self.start.y) * ay) / len_sq).clamp(0.0, 1.0)
    }
}

/// Offset while the pointer is over the surface: displacement from the
/// reference center plus a phase-driven wobble.
pub fn active_offset(pointer: Point, center: Point, phase: f64) -> Vector {
    pointer - center + Vector::new((phase * 1.2).sin() * 30.0, (phase * 0.9).cos() * 20.0)
}

/// Offset after the pointer left: a slow drift around the center that
/// depends on phase alone.
pub fn idle_offset(phase: f64) -> Vector {
    Vector::new((phase * 0.8).sin() * 15.0, (phase * 0.6).cos() * 10.0)
}

/// Derive both control points from the phase, the (presented) offset and the
/// persistent pointer-wave accumulator.
pub fn derive_gradient(phase: f64, offset: Vector, pointer_wave: f64) -> GradientPoints {
    let w = pointer_wave;
    let dx = offset.x * OFFSET_SCALE;
    let dy = offset.y * OFFSET_SCALE;
    GradientPoints {
        start: UnitPoint::new(
            1.0 + dx + (phase + w).sin() * 0.08,
            dy + (phase * 0.7 + w).cos() * 0.06,
        ),
        end: UnitPoint::new(
            -dx + (phase * 0.5 + w).cos() * 0.07,
            1.0 - dy + (phase * 0.8 + w).sin() * 0.05,
        ),
    }
}

/// Ease-out transition between two offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct OffsetTransition {
    from: Vector,
    to: Vector,
    started_at: Duration,
    duration: Duration,
}

impl OffsetTransition {
    pub fn settled(at: Vector) -> Self {
        Self {
            from: at,
            to: at,
            started_at: Duration::ZERO,
            duration: Duration::ZERO,
        }
    }

    /// Offset shown at `now`.
    pub fn value(&self, now: Duration) -> Vector {
        let t = ease_out(transition_progress(self.started_at, self.duration, now));
        self.from.lerp(self.to, t)
    }

    /// Retarget toward `to`, starting from wherever the transition is at `now`.
    pub fn retarget(&mut self, to: Vector, now: Duration, duration: Duration) {
        self.from = self.value(now);
        self.to = to;
        self.started_at = now;
        self.duration = duration;
    }
}
