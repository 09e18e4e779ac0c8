//! Terminal presentation setup.

use std::io::{self, stdout};

use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::SetTitle,
};
use nash_config::WindowConfig;

/// One-time terminal configuration applied after the terminal is
/// initialized and undone before it is restored.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowPresentation {
    title: String,
}

impl WindowPresentation {
    pub fn from_config(config: &WindowConfig) -> Self {
        let title = if config.hide_title {
            String::new()
        } else {
            config.title.clone()
        };
        Self { title }
    }

    /// Title set while running. Empty when hidden.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Enable mouse and focus reporting and set the title.
    pub fn apply(&self) -> io::Result<()> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableFocusChange,
            SetTitle(&self.title)
        )
    }

    /// Turn mouse and focus reporting back off.
    pub fn restore(&self) -> io::Result<()> {
        execute!(stdout(), DisableMouseCapture, DisableFocusChange)
    }
}
