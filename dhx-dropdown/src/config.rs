//! Configuration for the dhx-dropdown demo.
//!
//! Configuration is loaded from `<config dir>/dhx-dropdown.toml` (for
//! example `~/.config/dhx-dropdown.toml`) and provides window, dropdown and
//! logging settings.

use std::path::{Path, PathBuf};

use anyhow::Result;
use etcetera::BaseStrategy;
use serde::Deserialize;

use crate::position::Placement;
use crate::style::DEFAULT_ANIMATION;

/// File name looked up in the user config directory.
pub const CONFIG_FILE: &str = "dhx-dropdown.toml";

/// Demo configuration loaded from `dhx-dropdown.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DropdownConfig {
    pub window: WindowConfig,
    pub dropdown: DropdownSettings,
    pub logging: LoggingConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Widget settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DropdownSettings {
    /// `[anchor h, anchor v, panel h, panel v]`.
    pub position: Placement,
    pub animation: String,
    /// Whether the panel starts open.
    pub visible: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_file: Option<PathBuf>,
    pub level: String,
    pub suppressed_patterns: Vec<String>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "dhx-dropdown".to_string(),
            width: 480.0,
            height: 360.0,
        }
    }
}

impl Default for DropdownSettings {
    fn default() -> Self {
        Self {
            position: Placement::default(),
            animation: DEFAULT_ANIMATION.to_string(),
            visible: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_file: Some(std::env::temp_dir().join("dhx-dropdown.log")),
            level: "info".to_string(),
            suppressed_patterns: vec![
                "SelectionDidChange".to_string(),
                "Dispatched unknown event".to_string(),
                "mousemove".to_string(),
                "mouseenter".to_string(),
                "mouseleave".to_string(),
                "pointermove".to_string(),
                "pointerenter".to_string(),
                "pointerleave".to_string(),
            ],
        }
    }
}

impl DropdownConfig {
    /// Default config file location, if a config directory can be resolved.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        etcetera::choose_base_strategy()
            .ok()
            .map(|strategy| strategy.config_dir().join(CONFIG_FILE))
    }

    /// Load configuration from the default location.
    ///
    /// Falls back to defaults if the file doesn't exist.
    /// Returns an error only if the file exists but is malformed.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str::<DropdownConfig>(&content)?;
        Ok(config)
    }

    /// Set the window title.
    #[must_use]
    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    /// Set the window dimensions.
    #[must_use]
    pub fn with_window_size(mut self, width: f64, height: f64) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    /// Set the anchor/panel placement.
    #[must_use]
    pub fn with_position(mut self, position: Placement) -> Self {
        self.dropdown.position = position;
        self
    }

    /// Set the animation class.
    #[must_use]
    pub fn with_animation(mut self, animation: impl Into<String>) -> Self {
        self.dropdown.animation = animation.into();
        self
    }

    /// Start with the panel open.
    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.dropdown.visible = visible;
        self
    }

    /// Set the log file path.
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.logging.log_file = Some(path.into());
        self
    }

    /// Set the log level (e.g., "info", "debug", "warn").
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }
}
