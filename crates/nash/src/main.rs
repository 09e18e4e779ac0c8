use std::time::{Duration, Instant};

use color_eyre::eyre::WrapErr;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use nash_config::Config;
use nash_core::Point;
use nash_effects::{AnimationParams, AnimationState, Backdrop, Palette};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::Stylize,
    text::Line,
};
use tracing::{info, warn};

mod input;
mod logging;
mod window;

use input::{IdleTracker, PointerEvent};
use window::WindowPresentation;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load().wrap_err("failed to load configuration")?;
    // Logging is best effort; the backdrop runs without it.
    if let Ok(path) = logging::init(&config) {
        info!(log = %path.display(), ?config, "starting");
    }

    let app = App::new(&config)?;
    let presentation = WindowPresentation::from_config(&config.window);

    let terminal = ratatui::init();
    let result = presentation
        .apply()
        .wrap_err("failed to configure terminal")
        .and_then(|()| app.run(terminal));
    if let Err(e) = presentation.restore() {
        warn!(error = %e, "failed to reset terminal input modes");
    }
    ratatui::restore();
    result
}

/// Animation parameters from the configuration.
fn animation_params(config: &Config) -> AnimationParams {
    AnimationParams {
        tick_interval: Duration::from_millis(config.animation.tick_interval_ms),
        phase_step: config.animation.phase_step,
        pointer_wave_step: config.animation.pointer_wave_step,
        center: Point::new(config.pointer.center_x, config.pointer.center_y),
        gradient_transition: Duration::from_millis(config.animation.gradient_transition_ms),
    }
}

/// Backdrop palette from the configuration.
fn palette(config: &Config) -> color_eyre::Result<Palette> {
    let colors = config.colors.resolve()?;
    Ok(Palette {
        start: colors.start,
        end: colors.end,
        backdrop: colors.backdrop,
        transparent: config.window.transparent,
        cell_width: config.window.cell_width,
        cell_height: config.window.cell_height,
    })
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Animated gradient and effects.
    state: AnimationState,
    /// Draws the animation state.
    backdrop: Backdrop,
    /// Turns a still pointer into an idle one.
    idle: IdleTracker,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: &Config) -> color_eyre::Result<Self> {
        let idle_after = match config.pointer.idle_after_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        };
        Ok(Self {
            running: false,
            state: AnimationState::new(animation_params(config)),
            backdrop: Backdrop::new(palette(config)?),
            idle: IdleTracker::new(idle_after),
        })
    }

    /// Run the application's main loop.
    ///
    /// Ticks fire on a fixed schedule; events arriving in between are handled
    /// as they come and the frame is redrawn after each batch.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let interval = self.state.params().tick_interval;
        let mut next_tick = Instant::now() + interval;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            let timeout = next_tick.saturating_duration_since(Instant::now());
            self.handle_crossterm_events(timeout)?;

            let now = Instant::now();
            if self.idle.poll(now) {
                self.state.pointer_idle();
            }
            if now >= next_tick {
                self.state.tick();
                next_tick += interval;
                // After a stall, resume from now instead of replaying missed ticks.
                if next_tick < now {
                    next_tick = now + interval;
                }
            }
        }
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        self.backdrop.render(frame, &self.state);

        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Content placeholder
            Constraint::Length(1), // Help text
        ])
        .split(frame.area());

        let help = Line::from(vec![
            "q".bold(),
            " quit  ".dark_gray(),
            "t".bold(),
            " transparency  ".dark_gray(),
            "w".bold(),
            " wave  ".dark_gray(),
            "c".bold(),
            " clear".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[1]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits up to `timeout` for the first event, then drains whatever else
    /// is already queued.
    fn handle_crossterm_events(&mut self, timeout: Duration) -> color_eyre::Result<()> {
        let mut wait = timeout;
        while event::poll(wait)? {
            let event = event::read()?;
            match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                other => {
                    if let Some(pointer) = input::map_event(&other, self.backdrop.palette()) {
                        self.on_pointer_event(pointer, Instant::now());
                    }
                }
            }
            wait = Duration::ZERO;
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('t')) => self.toggle_transparency(),
            (_, KeyCode::Char('w')) => {
                self.state.create_wave(self.state.pointer());
            }
            (_, KeyCode::Char('c')) => self.state.clear_effects(),
            _ => {}
        }
    }

    /// Feed pointer input into the animation state.
    fn on_pointer_event(&mut self, event: PointerEvent, now: Instant) {
        match event {
            PointerEvent::Moved(at) => {
                self.idle.observe_move(now);
                self.state.pointer_moved(at);
            }
            PointerEvent::Idle => {
                self.idle.mark_idle();
                self.state.pointer_idle();
            }
            PointerEvent::Tap(at) => {
                self.state.tap(at);
            }
            PointerEvent::SecondaryTap(at) => {
                self.state.create_wave(at);
            }
        }
    }

    /// Toggle between drawing the backdrop color and leaving it to the terminal.
    fn toggle_transparency(&mut self) {
        let transparent = !self.backdrop.palette().transparent;
        self.backdrop.set_transparent(transparent);
        info!(transparent, "transparency toggled");
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
