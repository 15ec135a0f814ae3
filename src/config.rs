//! Application configuration.
//!
//! Resolution order, highest priority first:
//!
//! 1. CLI flags (applied by [`AppConfig::apply`])
//! 2. JSON config file given with `--config`
//! 3. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Incorrect guesses allowed per round unless configured otherwise
pub const DEFAULT_MAX_GUESSES: u32 = 10;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub max_guesses: u32,
    /// One word per line; the built-in list is used when unset
    pub words_file: Option<PathBuf>,
    /// Eight-line drawings; the built-in set is used when unset
    pub diagrams_file: Option<PathBuf>,
    /// Log destination. The full-screen UI only logs when this is set.
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_guesses: DEFAULT_MAX_GUESSES,
            words_file: None,
            diagrams_file: None,
            log_file: None,
        }
    }
}

/// Per-invocation overrides, usually straight from the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub max_guesses: Option<u32>,
    pub words_file: Option<PathBuf>,
    pub diagrams_file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    /// Load from `path`, or fall back to defaults when no path was given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config file {}", path.display()))?;
                Self::from_json(&text)
                    .with_context(|| format!("parsing config file {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(max) = overrides.max_guesses {
            self.max_guesses = max;
        }
        if overrides.words_file.is_some() {
            self.words_file = overrides.words_file;
        }
        if overrides.diagrams_file.is_some() {
            self.diagrams_file = overrides.diagrams_file;
        }
        if overrides.log_file.is_some() {
            self.log_file = overrides.log_file;
        }
        self
    }
}
