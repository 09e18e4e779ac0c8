//! Pointer-spawned effects.

pub mod ripple;
pub mod wave;

pub use ripple::{RippleEffect, RippleSnapshot};
pub use wave::{WaveEffect, WaveSnapshot};
