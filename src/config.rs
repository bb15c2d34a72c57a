//! Page configuration.
//!
//! Every field has a default matching the stock portfolio markup, so the host
//! only needs to pass the keys it wants to change. Parsed from JSON with
//! `serde_json`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{REVEAL_THRESHOLD, SCROLL_MARGIN_PX, STAGGER_STEP_MS};
use crate::error::PageError;

/// Selectors, class names, and tuning knobs for the page controller.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Selector for page sections (revealed and used for nav highlighting).
    pub section_selector: String,
    /// Selector for project cards (revealed with stagger, tilted on hover).
    pub card_selector: String,
    /// Selector for navigation links.
    pub nav_link_selector: String,
    /// Element id of the optional theme toggle control.
    pub theme_toggle_id: String,
    /// `localStorage` key holding the theme preference.
    pub storage_key: String,
    pub reveal_class: String,
    pub active_class: String,
    /// Class set on `<body>` while the light theme is applied.
    pub light_class: String,
    pub reveal_threshold: f64,
    pub stagger_step_ms: u32,
    pub scroll_margin_px: f64,
    pub log_level: LogLevel,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            section_selector: "section".into(),
            card_selector: ".project-card".into(),
            nav_link_selector: ".nav-link".into(),
            theme_toggle_id: "theme-toggle".into(),
            storage_key: "theme".into(),
            reveal_class: "reveal".into(),
            active_class: "active".into(),
            light_class: "light".into(),
            reveal_threshold: REVEAL_THRESHOLD,
            stagger_step_ms: STAGGER_STEP_MS,
            scroll_margin_px: SCROLL_MARGIN_PX,
            log_level: LogLevel::default(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON object, filling missing keys from the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Config`] if the input is not valid JSON or a key
    /// has the wrong type.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.reveal_threshold = config.reveal_threshold.clamp(0.0, 1.0);
        Ok(config)
    }
}

/// Console log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}
