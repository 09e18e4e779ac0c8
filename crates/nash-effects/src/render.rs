//! Drawing a snapshot of the animation state.

use nash_core::{Point, Rgba, UnitPoint};
use ratatui::{
    Frame,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::chars::{GLOW_CHARS, GRADIENT_SHADES, RING_CHAR};
use crate::collection::VISIBILITY_THRESHOLD;
use crate::effects::{RippleSnapshot, WaveSnapshot};
use crate::gradient::GradientPoints;
use crate::state::AnimationState;

/// Ring stroke color before opacity is applied.
const RING_ALPHA: f32 = 0.3;
/// Glow alpha at the center of a wave.
const GLOW_CENTER_ALPHA: f32 = 0.2;
/// Glow alpha halfway to the edge of a wave.
const GLOW_MID_ALPHA: f32 = 0.05;

/// Colors and geometry the backdrop is drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Gradient color at the start control point, alpha included.
    pub start: Rgba,
    /// Gradient color at the end control point, alpha included.
    pub end: Rgba,
    /// Opaque color the translucent layers are composited over.
    pub backdrop: Rgba,
    /// Leave cell backgrounds unset so the terminal's own background shows.
    pub transparent: bool,
    /// Width of one terminal cell in logical points.
    pub cell_width: f64,
    /// Height of one terminal cell in logical points.
    pub cell_height: f64,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            // #FF9CFD and #AFEEFF at 25%, over #101018
            start: Rgba::rgb(255.0 / 255.0, 156.0 / 255.0, 253.0 / 255.0).with_alpha(0.25),
            end: Rgba::rgb(175.0 / 255.0, 238.0 / 255.0, 255.0 / 255.0).with_alpha(0.25),
            backdrop: Rgba::rgb(16.0 / 255.0, 16.0 / 255.0, 24.0 / 255.0),
            transparent: false,
            cell_width: 10.0,
            cell_height: 20.0,
        }
    }
}

impl Palette {
    /// Logical point at the center of a terminal cell.
    pub fn cell_center(&self, x: u16, y: u16) -> Point {
        Point::new(
            (x as f64 + 0.5) * self.cell_width,
            (y as f64 + 0.5) * self.cell_height,
        )
    }
}

/// Renders the gradient layer with the ripple rings and wave glows on top.
#[derive(Debug, Clone, Default)]
pub struct Backdrop {
    palette: Palette,
}

impl Backdrop {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn set_transparent(&mut self, transparent: bool) {
        self.palette.transparent = transparent;
    }

    /// Render the backdrop to the whole frame.
    pub fn render(&self, frame: &mut Frame, state: &AnimationState) {
        let area = frame.area();
        if area.width == 0 || area.height == 0 {
            return;
        }

        let layers = FrameLayers::capture(state, area.width, area.height);
        let lines: Vec<Line> = (0..area.height)
            .map(|y| {
                let spans: Vec<Span> = (0..area.width)
                    .map(|x| self.render_cell(x, y, &layers))
                    .collect();
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }

    /// Render a single backdrop cell.
    fn render_cell(&self, x: u16, y: u16, layers: &FrameLayers) -> Span<'static> {
        let unit = UnitPoint::new(
            (x as f64 + 0.5) / layers.width as f64,
            (y as f64 + 0.5) / layers.height as f64,
        );
        let t = layers.gradient.project(unit) as f32;
        let tint = self.palette.start.lerp(self.palette.end, t);

        let point = self.palette.cell_center(x, y);
        // A ring covers cells whose center lies within half a cell of it.
        let stroke = self.palette.cell_width.max(self.palette.cell_height) / 2.0;

        let glow: f32 = layers.waves.iter().map(|w| glow_alpha(w, point)).sum();
        let ring: f32 = layers
            .ripples
            .iter()
            .filter(|r| (point.distance(r.position) - r.radius).abs() <= stroke)
            .map(|r| RING_ALPHA * r.opacity as f32)
            .sum();

        if self.palette.transparent {
            // Only glyphs are drawn; their color carries the tint.
            let fg = tint.with_alpha(1.0);
            if ring > 0.0 {
                let color = Rgba::WHITE.with_alpha(ring).add_onto(fg);
                return Span::styled(RING_CHAR.to_string(), Style::new().fg(color.to_color()));
            }
            if glow > 0.0 {
                let ch = glyph_for(GLOW_CHARS, glow / GLOW_CENTER_ALPHA);
                let color = Rgba::WHITE.with_alpha(glow).add_onto(fg);
                return Span::styled(ch.to_string(), Style::new().fg(color.to_color()));
            }
            let ch = glyph_for(GRADIENT_SHADES, tint.a);
            if ch == ' ' {
                return Span::raw(" ");
            }
            return Span::styled(ch.to_string(), Style::new().fg(fg.to_color()));
        }

        let mut color = tint.over(self.palette.backdrop);
        color = Rgba::WHITE.with_alpha(glow).add_onto(color);
        if ring > 0.0 {
            let fg = Rgba::WHITE.with_alpha(ring).add_onto(color);
            return Span::styled(
                RING_CHAR.to_string(),
                Style::new().fg(fg.to_color()).bg(color.to_color()),
            );
        }
        Span::styled(" ", Style::new().bg(color.to_color()))
    }
}

/// Everything a frame draws, captured once before the cells are visited.
#[derive(Debug, Clone)]
struct FrameLayers {
    width: u16,
    height: u16,
    gradient: GradientPoints,
    /// Visible ripples in spawn order.
    ripples: Vec<RippleSnapshot>,
    /// Visible waves in spawn order.
    waves: Vec<WaveSnapshot>,
}

impl FrameLayers {
    fn capture(state: &AnimationState, width: u16, height: u16) -> Self {
        let now = state.elapsed();
        Self {
            width,
            height,
            gradient: state.gradient(),
            ripples: state
                .ripples()
                .iter()
                .map(|r| r.presented(now))
                .filter(|s| s.opacity >= VISIBILITY_THRESHOLD)
                .collect(),
            waves: state
                .waves()
                .iter()
                .map(|w| w.presented(now))
                .filter(|s| s.opacity >= VISIBILITY_THRESHOLD)
                .collect(),
        }
    }
}

/// Radial glow alpha of a wave at `point`: strongest at the center, fading
/// through a mid stop to clear at the edge.
fn glow_alpha(wave: &WaveSnapshot, point: Point) -> f32 {
    if wave.radius <= 0.0 {
        return 0.0;
    }
    let frac = (point.distance(wave.position) / wave.radius) as f32;
    let alpha = if frac < 0.5 {
        GLOW_CENTER_ALPHA + (GLOW_MID_ALPHA - GLOW_CENTER_ALPHA) * (frac * 2.0)
    } else if frac < 1.0 {
        GLOW_MID_ALPHA * (1.0 - (frac - 0.5) * 2.0)
    } else {
        0.0
    };
    alpha * wave.opacity as f32
}

/// Pick a glyph from a light-to-dense ramp for an intensity in 0.0 - 1.0.
fn glyph_for(ramp: &[char], intensity: f32) -> char {
    let last = ramp.len() - 1;
    let idx = (intensity.clamp(0.0, 1.0) * last as f32).round() as usize;
    ramp[idx.min(last)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};

    fn draw(backdrop: &Backdrop, state: &AnimationState) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| backdrop.render(f, state)).unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_opaque_gradient_fills_background() {
        let buffer = draw(&Backdrop::default(), &AnimationState::default());
        let top_right = buffer[(79, 0)].bg;
        let bottom_left = buffer[(0, 29)].bg;
        assert!(matches!(top_right, Color::Rgb(..)));
        assert_ne!(top_right, bottom_left);
        assert_eq!(buffer[(40, 15)].symbol(), " ");
    }

    #[test]
    fn test_start_color_dominates_near_start_point() {
        let buffer = draw(&Backdrop::default(), &AnimationState::default());
        let palette = Palette::default();
        let pinkish = palette.start.over(palette.backdrop).to_color();
        let Color::Rgb(r, _, _) = buffer[(79, 0)].bg else {
            panic!("expected rgb background");
        };
        let Color::Rgb(pr, _, _) = pinkish else {
            unreachable!()
        };
        assert!(r.abs_diff(pr) <= 3);
    }

    #[test]
    fn test_ripple_draws_ring() {
        let mut state = AnimationState::default();
        state.tap(Point::new(400.0, 300.0));
        let buffer = draw(&Backdrop::default(), &state);
        // presented radius is 10 points at spawn
        let ring_cells = buffer
            .content()
            .iter()
            .filter(|c| c.symbol() == RING_CHAR.to_string())
            .count();
        assert!(ring_cells > 0);
    }

    #[test]
    fn test_wave_brightens_center() {
        let mut state = AnimationState::default();
        let plain = draw(&Backdrop::default(), &state);
        state.create_wave(Point::new(405.0, 310.0));
        let lit = draw(&Backdrop::default(), &state);
        let (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) =
            (plain[(40, 15)].bg, lit[(40, 15)].bg)
        else {
            panic!("expected rgb backgrounds");
        };
        assert!(r1 >= r0 && g1 >= g0 && b1 > b0);
    }

    #[test]
    fn test_transparent_leaves_background_unset() {
        let mut backdrop = Backdrop::default();
        backdrop.set_transparent(true);
        let buffer = draw(&backdrop, &AnimationState::default());
        assert!(buffer.content().iter().all(|c| c.bg == Color::Reset));
        assert_eq!(buffer[(10, 10)].symbol(), "·");
    }

    #[test]
    fn test_frame_layers_skip_invisible_effects() {
        let mut state = AnimationState::default();
        state.create_ripple(Point::new(100.0, 100.0));
        state.create_wave(Point::new(200.0, 200.0));
        let layers = FrameLayers::capture(&state, 80, 30);
        assert_eq!((layers.width, layers.height), (80, 30));
        assert_eq!(layers.ripples.len(), 1);
        assert_eq!(layers.waves.len(), 1);
        assert_eq!(layers.gradient, state.gradient());

        // the ripple fades out well before the wave does
        for _ in 0..60 {
            state.tick();
        }
        let layers = FrameLayers::capture(&state, 80, 30);
        assert!(layers.ripples.is_empty());
        assert_eq!(layers.waves.len(), 1);
    }

    #[test]
    fn test_glow_alpha_profile() {
        let wave = WaveSnapshot {
            position: Point::new(0.0, 0.0),
            radius: 100.0,
            opacity: 1.0,
        };
        assert_eq!(glow_alpha(&wave, Point::new(0.0, 0.0)), GLOW_CENTER_ALPHA);
        assert!((glow_alpha(&wave, Point::new(50.0, 0.0)) - GLOW_MID_ALPHA).abs() < 1e-6);
        assert_eq!(glow_alpha(&wave, Point::new(100.0, 0.0)), 0.0);
        assert_eq!(glow_alpha(&wave, Point::new(300.0, 0.0)), 0.0);
    }

    #[test]
    fn test_glyph_for_ramp() {
        assert_eq!(glyph_for(GRADIENT_SHADES, 0.0), ' ');
        assert_eq!(glyph_for(GRADIENT_SHADES, 0.25), '·');
        assert_eq!(glyph_for(GRADIENT_SHADES, 1.0), '▒');
        assert_eq!(glyph_for(GLOW_CHARS, 5.0), '●');
    }
}
