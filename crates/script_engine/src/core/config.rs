//! # Engine Configuration
//!
//! Settings the host applies around a script: the window it opens for the
//! script's viewport and how long a session runs. The viewport size itself
//! always comes from the script.

use serde::{Serialize, Deserialize};

pub use crate::config::{Config, ConfigError};

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Stop the session when Escape is pressed
    pub exit_on_esc: bool,
}

impl WindowConfig {
    /// Create a window configuration with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
    
    /// Enable or disable exit on Escape
    pub fn with_exit_on_esc(mut self, enabled: bool) -> Self {
        self.exit_on_esc = enabled;
        self
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "script_engine".to_string(),
            exit_on_esc: true,
        }
    }
}

/// Session run configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Stop after this many ticks; unlimited when absent
    pub max_ticks: Option<u64>,
}

/// # Engine Configuration
///
/// Top-level host configuration, loadable from TOML or RON through [`Config`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Window settings
    pub window: WindowConfig,
    /// Run limits
    pub run: RunConfig,
}

impl EngineConfig {
    /// Create a new engine configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Replace the window configuration
    pub fn with_window(mut self, window: WindowConfig) -> Self {
        self.window = window;
        self
    }
    
    /// Limit the session to `ticks` ticks
    pub fn with_max_ticks(mut self, ticks: u64) -> Self {
        self.run.max_ticks = Some(ticks);
        self
    }
}

impl Config for EngineConfig {}
