//! Path resolution for the data directory

use std::path::{Path, PathBuf};

/// Environment variable that relocates the whole data directory
pub const DATA_DIR_VAR: &str = "FEEDBACKSENSE_DATA_DIR";

const APP_DIR: &str = "feedbacksense";

/// Resolves standard paths for config and persisted entries
#[derive(Debug, Clone)]
pub struct Paths {
    pub root: PathBuf,
}

impl Paths {
    /// Resolve the data directory: `$FEEDBACKSENSE_DATA_DIR`, else the platform data dir
    pub fn new() -> std::io::Result<Self> {
        if let Some(dir) = std::env::var_os(DATA_DIR_VAR).filter(|v| !v.is_empty()) {
            return Ok(Self::at(dir));
        }

        let data = dirs::data_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "data directory not found")
        })?;
        Ok(Self::at(data.join(APP_DIR)))
    }

    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get config.json path
    pub fn config_file(&self) -> PathBuf {
        self.root.join("config.json")
    }

    /// Directory holding persisted entries, honoring a configured override
    pub fn store_dir(&self, configured: Option<&Path>) -> PathBuf {
        configured
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.clone())
    }
}
