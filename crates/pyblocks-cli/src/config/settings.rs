//! Configuration settings
//!
//! Mirrors the editor-extension settings: which execution engine a
//! selection is sent to, whether selection is block-aware or plain-line,
//! whether the cursor steps to the next statement afterwards, and how long
//! to wait before submitting.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Execution engine a selection is handed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// The standard Python REPL
    #[default]
    Python,
    /// An interactive Jupyter window
    Jupyter,
}

/// Top-level settings structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Execution engine for selected code
    pub engine: Engine,
    /// Block-aware selection; false selects the current line only
    pub block_select: bool,
    /// Move the cursor to the next statement after execution
    pub step: bool,
    /// Delay before submitting a selection, in milliseconds
    pub delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            engine: Engine::Python,
            block_select: true,
            step: true,
            delay_ms: 0,
        }
    }
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load settings from `pyblocks.toml` under `root`; defaults when the
    /// file is missing or malformed.
    pub fn load(root: &Path) -> Self {
        let path = root.join("pyblocks.toml");
        match std::fs::read_to_string(&path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(settings) => settings,
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "invalid settings file, using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
