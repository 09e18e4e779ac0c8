//! Character constants for backdrop rendering.

/// Shade ramp for the gradient layer in transparent mode, light to dense.
pub const GRADIENT_SHADES: &[char] = &[' ', '·', '░', '▒'];

/// Glyph drawn on a ripple ring.
pub const RING_CHAR: char = '○';

/// Glyphs for wave glow intensity when no background color is drawn.
pub const GLOW_CHARS: &[char] = &['·', '∙', '•', '●'];
