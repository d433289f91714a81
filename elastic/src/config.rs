//! Engine configuration, loaded from a TOML file.
//!
//! ```toml
//! enabled = true
//! min_tab_width = 32
//! tab_padding = 12
//! char_width = 8
//! ```
//!
//! Every key is optional. Unknown keys are rejected so typos do not go unnoticed.

use crate::{
    metrics::{TabMetrics, MIN_TAB_WIDTH, TAB_PADDING},
    text_buffer::DEFAULT_CHAR_WIDTH,
};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Initial value of the feature preference.
    pub enabled: bool,

    /// Narrowest content width of a tab-terminated cell, in pixels.
    pub min_tab_width: u32,

    /// Gap after every tab-terminated cell, in pixels.
    pub tab_padding: u32,

    /// Width of one column for monospace measurement, in pixels.
    ///
    /// Only used by [`crate::TextBuffer`]; a host editor measures with its own fonts.
    pub char_width: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: true,
            min_tab_width: MIN_TAB_WIDTH,
            tab_padding: TAB_PADDING,
            char_width: DEFAULT_CHAR_WIDTH,
        }
    }
}

impl Config {
    /// Read and deserialize a TOML config file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse(source: &str) -> Result<Self> {
        let config: Config = toml::from_str(source)?;
        anyhow::ensure!(config.char_width > 0, "char_width must be greater than zero");
        Ok(config)
    }

    /// Load `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn metrics(&self) -> TabMetrics {
        TabMetrics::new(self.min_tab_width, self.tab_padding)
    }
}
