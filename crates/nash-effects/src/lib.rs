//! Animated backdrop for the nash terminal.
//!
//! This crate owns the animation loop: a phase-driven two-color gradient that
//! follows the pointer, and the transient ripple rings and radial glows
//! spawned by pointer taps. [`AnimationState`] is mutated by the host on each
//! tick and input event, and [`Backdrop`] draws a snapshot of it.

mod chars;
mod collection;
mod effects;
mod gradient;
mod params;
mod removal;
mod render;
mod state;

pub use collection::{Effect, EffectSet, VISIBILITY_THRESHOLD};
pub use effects::{RippleEffect, RippleSnapshot, WaveEffect, WaveSnapshot};
pub use gradient::{GradientPoints, active_offset, derive_gradient, idle_offset};
pub use params::AnimationParams;
pub use removal::EffectKind;
pub use render::{Backdrop, Palette};
pub use state::AnimationState;
