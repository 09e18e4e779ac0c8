//! Straight-alpha RGBA colors and compositing.

use ratatui::style::Color;

/// A color with channels in 0.0 - 1.0 and straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::rgb(
            channel(0)? as f32 / 255.0,
            channel(2)? as f32 / 255.0,
            channel(4)? as f32 / 255.0,
        ))
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Channel-wise interpolation, alpha included.
    pub fn lerp(self, to: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Rgba::new(
            mix(self.r, to.r),
            mix(self.g, to.g),
            mix(self.b, to.b),
            mix(self.a, to.a),
        )
    }

    /// Source-over compositing of `self` onto an opaque `backdrop`.
    pub fn over(self, backdrop: Rgba) -> Rgba {
        let a = self.a.clamp(0.0, 1.0);
        let mix = |src: f32, dst: f32| src * a + dst * (1.0 - a);
        Rgba::rgb(
            mix(self.r, backdrop.r),
            mix(self.g, backdrop.g),
            mix(self.b, backdrop.b),
        )
    }

    /// Additive blending of `self` (weighted by its alpha) onto `backdrop`.
    ///
    /// Overlapping effects commute under this operation.
    pub fn add_onto(self, backdrop: Rgba) -> Rgba {
        let a = self.a.clamp(0.0, 1.0);
        Rgba::new(
            (backdrop.r + self.r * a).min(1.0),
            (backdrop.g + self.g * a).min(1.0),
            (backdrop.b + self.b * a).min(1.0),
            backdrop.a,
        )
    }

    /// Convert to a terminal color, dropping alpha.
    pub fn to_color(self) -> Color {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color::Rgb(byte(self.r), byte(self.g), byte(self.b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let pink = Rgba::from_hex("#FF9CFD").unwrap();
        assert_eq!(pink.to_color(), Color::Rgb(255, 156, 253));
        assert_eq!(
            Rgba::from_hex("afeeff").unwrap().to_color(),
            Color::Rgb(175, 238, 255)
        );
        assert!(Rgba::from_hex("#FFF").is_none());
        assert!(Rgba::from_hex("#GG0000").is_none());
        assert!(Rgba::from_hex("#ÿÿÿ").is_none());
        assert!(Rgba::from_hex("#+F+F+F").is_none());
        assert!(Rgba::from_hex("-1-1-1").is_none());
    }

    #[test]
    fn test_over_respects_alpha() {
        let black = Rgba::rgb(0.0, 0.0, 0.0);
        assert_eq!(Rgba::WHITE.with_alpha(0.0).over(black), black);
        assert_eq!(Rgba::WHITE.over(black), Rgba::WHITE);
        let half = Rgba::WHITE.with_alpha(0.5).over(black);
        assert_eq!(half.to_color(), Color::Rgb(128, 128, 128));
    }

    #[test]
    fn test_additive_blending_commutes() {
        let base = Rgba::rgb(0.2, 0.1, 0.3);
        let a = Rgba::WHITE.with_alpha(0.1);
        let b = Rgba::rgb(0.5, 0.0, 1.0).with_alpha(0.3);
        assert_eq!(
            a.add_onto(b.add_onto(base)).to_color(),
            b.add_onto(a.add_onto(base)).to_color()
        );
    }
}
