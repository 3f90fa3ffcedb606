//! Configuration for the model endpoint and local storage

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// A report needs at least this many items; config can raise it, never lower it
pub const MIN_REPORT_ITEMS: usize = 2;

/// Environment variables consulted for the API key, first match wins
pub const API_KEY_VARS: [&str; 3] = ["FEEDBACKSENSE_API_KEY", "GEMINI_API_KEY", "API_KEY"];
pub const MODEL_VAR: &str = "FEEDBACKSENSE_MODEL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Model identifier passed to the generateContent endpoint
    pub model: String,

    /// Base URL of the model API (no trailing path)
    pub api_base: String,

    /// API key; usually supplied through the environment
    pub api_key: Option<String>,

    /// Per-request timeout
    pub request_timeout_secs: u64,

    /// Where feedback_items / batch_insights live (defaults to the app data dir)
    pub data_dir: Option<PathBuf>,

    /// Minimum number of items before a report may be requested
    pub min_report_items: usize,
}

impl Config {
    pub fn new() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: None,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            data_dir: None,
            min_report_items: MIN_REPORT_ITEMS,
        }
    }

    /// Read a JSON config file. A missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) {
        self.apply_env_from(|name| std::env::var(name).ok());
    }

    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = API_KEY_VARS.iter().find_map(|name| non_empty(name)) {
            self.api_key = Some(key);
        }
        if let Some(model) = non_empty(MODEL_VAR) {
            self.model = model;
        }
    }

    pub fn report_threshold(&self) -> usize {
        self.min_report_items.max(MIN_REPORT_ITEMS)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
