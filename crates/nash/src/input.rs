//! Mapping terminal events onto pointer input.

use std::time::{Duration, Instant};

use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use nash_core::Point;
use nash_effects::Palette;

/// Pointer input the animation reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer moved to a new position.
    Moved(Point),
    /// Pointer left the surface.
    Idle,
    /// Primary button pressed.
    Tap(Point),
    /// Secondary button pressed.
    SecondaryTap(Point),
}

/// Translate a crossterm event into pointer input. Cell coordinates become
/// the logical point at the cell center.
pub fn map_event(event: &Event, palette: &Palette) -> Option<PointerEvent> {
    match event {
        Event::FocusLost => Some(PointerEvent::Idle),
        Event::Mouse(MouseEvent {
            kind, column, row, ..
        }) => {
            let at = palette.cell_center(*column, *row);
            match kind {
                MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(PointerEvent::Moved(at)),
                MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::Tap(at)),
                MouseEventKind::Down(MouseButton::Right) => Some(PointerEvent::SecondaryTap(at)),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Declares the pointer gone after a stretch without movement. Terminals
/// report no event when the pointer leaves the window, so this stands in
/// for one.
#[derive(Debug, Clone)]
pub struct IdleTracker {
    idle_after: Option<Duration>,
    last_move: Option<Instant>,
}

impl IdleTracker {
    /// `None` disables the timeout.
    pub fn new(idle_after: Option<Duration>) -> Self {
        Self {
            idle_after,
            last_move: None,
        }
    }

    pub fn observe_move(&mut self, now: Instant) {
        self.last_move = Some(now);
    }

    /// Mark the pointer idle so the timeout does not fire again.
    pub fn mark_idle(&mut self) {
        self.last_move = None;
    }

    /// Returns true once when the pointer has been still for long enough.
    pub fn poll(&mut self, now: Instant) -> bool {
        match (self.idle_after, self.last_move) {
            (Some(after), Some(last)) if now.saturating_duration_since(last) >= after => {
                self.last_move = None;
                true
            }
            _ => false,
        }
    }
}
