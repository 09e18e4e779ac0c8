//! Core types shared by the nash crates.
//!
//! Geometry is expressed in logical points (the pixel-like unit pointer
//! events arrive in), gradient control points in unit space, and colors as
//! straight-alpha RGBA.

mod color;
mod easing;
mod geometry;

pub use color::Rgba;
pub use easing::{ease_out, transition_progress};
pub use geometry::{Point, UnitPoint, Vector};

/// Identity of a spawned effect.
///
/// Handed out from a monotonically increasing counter, so ids are never
/// reused within one animation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EffectId(u64);

impl EffectId {
    /// The first id a fresh counter hands out.
    pub const FIRST: EffectId = EffectId(0);

    /// Return this id and advance the counter past it.
    pub fn take_next(counter: &mut EffectId) -> EffectId {
        let id = *counter;
        counter.0 += 1;
        id
    }

    /// Raw counter value, used for logging.
    pub fn get(self) -> u64 {
        self.0
    }
}
