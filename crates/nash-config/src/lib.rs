//! Configuration for the nash backdrop.
//!
//! Settings live in `config.toml` under the platform config directory
//! (`~/.config/nash/` on Linux). Every key is optional; anything missing
//! falls back to the stock look.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use nash_core::Rgba;
use serde::Deserialize;
use thiserror::Error;

/// File name of the configuration inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid color {value:?} for `{key}`, expected #RRGGBB")]
    InvalidColor { key: &'static str, value: String },
    #[error("invalid value for `{key}`: {reason}")]
    InvalidValue {
        key: &'static str,
        reason: &'static str,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub animation: AnimationConfig,
    pub pointer: PointerConfig,
    pub window: WindowConfig,
    pub colors: ColorConfig,
    pub logging: LoggingConfig,
}

/// Animation timing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    /// Milliseconds between ticks.
    pub tick_interval_ms: u64,
    /// Phase accumulator increment per tick.
    pub phase_step: f64,
    /// Pointer-wave accumulator increment per pointer move.
    pub pointer_wave_step: f64,
    /// Ease-out duration for gradient offset changes.
    pub gradient_transition_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 33,
            phase_step: 0.02,
            pointer_wave_step: 0.05,
            gradient_transition_ms: 800,
        }
    }
}

/// Pointer tracking.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PointerConfig {
    /// Reference center the pointer displacement is measured from, in points.
    pub center_x: f64,
    pub center_y: f64,
    /// Treat the pointer as gone after this long without movement.
    /// Zero disables the timeout; focus loss still counts.
    pub idle_after_ms: u64,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            center_x: 400.0,
            center_y: 300.0,
            idle_after_ms: 1500,
        }
    }
}

/// Terminal presentation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    /// Leave cell backgrounds unset so a translucent terminal shows through.
    pub transparent: bool,
    /// Blank the terminal title while running.
    pub hide_title: bool,
    /// Title to set when `hide_title` is off.
    pub title: String,
    /// Size of one terminal cell in logical points.
    pub cell_width: f64,
    pub cell_height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            transparent: false,
            hide_title: true,
            title: "nash".to_string(),
            cell_width: 10.0,
            cell_height: 20.0,
        }
    }
}

/// Gradient colors.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Color at the gradient start point.
    pub start: String,
    /// Color at the gradient end point.
    pub end: String,
    /// Opacity applied to both gradient colors.
    pub opacity: f32,
    /// Opaque color behind the gradient when not transparent.
    pub backdrop: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            start: "#FF9CFD".to_string(),
            end: "#AFEEFF".to_string(),
            opacity: 0.25,
            backdrop: "#101018".to_string(),
        }
    }
}

/// Resolved gradient colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colors {
    pub start: Rgba,
    pub end: Rgba,
    pub backdrop: Rgba,
}

impl ColorConfig {
    /// Parse the hex strings and apply the opacity to the gradient colors.
    pub fn resolve(&self) -> Result<Colors, ConfigError> {
        let parse = |key: &'static str, value: &str| {
            Rgba::from_hex(value).ok_or_else(|| ConfigError::InvalidColor {
                key,
                value: value.to_string(),
            })
        };
        Ok(Colors {
            start: parse("colors.start", &self.start)?.with_alpha(self.opacity),
            end: parse("colors.end", &self.end)?.with_alpha(self.opacity),
            backdrop: parse("colors.backdrop", &self.backdrop)?,
        })
    }
}

/// Log output.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `nash_effects=debug`.
    pub level: String,
    /// Log file path. Defaults to `nash.log` in the platform data directory.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Load from the platform config directory. A missing file yields the
    /// defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Parse and validate TOML contents.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges and colors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.animation.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "animation.tick_interval_ms",
                reason: "must be greater than zero",
            });
        }
        let step_ok = |v: f64| v.is_finite() && v >= 0.0;
        if !step_ok(self.animation.phase_step) {
            return Err(ConfigError::InvalidValue {
                key: "animation.phase_step",
                reason: "must be finite and not negative",
            });
        }
        if !step_ok(self.animation.pointer_wave_step) {
            return Err(ConfigError::InvalidValue {
                key: "animation.pointer_wave_step",
                reason: "must be finite and not negative",
            });
        }
        if !(self.pointer.center_x.is_finite() && self.pointer.center_y.is_finite()) {
            return Err(ConfigError::InvalidValue {
                key: "pointer.center_x / pointer.center_y",
                reason: "must be finite",
            });
        }
        if !(self.window.cell_width > 0.0 && self.window.cell_height > 0.0) {
            return Err(ConfigError::InvalidValue {
                key: "window.cell_width / window.cell_height",
                reason: "must be positive",
            });
        }
        if !(0.0..=1.0).contains(&self.colors.opacity) {
            return Err(ConfigError::InvalidValue {
                key: "colors.opacity",
                reason: "must be between 0.0 and 1.0",
            });
        }
        self.colors.resolve()?;
        Ok(())
    }

    /// Path of the config file, if a home directory can be determined.
    pub fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Log file to write to: the configured one, or `nash.log` in the
    /// platform data directory.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.logging
            .file
            .clone()
            .or_else(|| project_dirs().map(|dirs| dirs.data_local_dir().join("nash.log")))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "nash")
}
