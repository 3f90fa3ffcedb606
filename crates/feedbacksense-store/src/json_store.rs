//! JSON-file persistence: one file per key in the data directory

use crate::io::{atomic_write, read_optional, remove_if_exists};
use feedbacksense_core::{
    decode_entry, encode_entry, BatchAnalysisResult, FeedbackItem, PersistedState, Persistence,
    PersistenceError, ITEMS_KEY, REPORT_KEY,
};
use std::path::PathBuf;

/// Stores `feedback_items.json` and `batch_insights.json` side by side
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn items_path(&self) -> PathBuf {
        self.entry_path(ITEMS_KEY)
    }

    pub fn report_path(&self) -> PathBuf {
        self.entry_path(REPORT_KEY)
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn read_entry(&self, key: &'static str) -> Option<Vec<u8>> {
        let path = self.entry_path(key);
        match read_optional(&path) {
            Ok(data) => data,
            Err(source) => {
                let err = PersistenceError::Io { key, source };
                tracing::warn!(error = %err, path = %path.display(), "treating entry as absent");
                None
            }
        }
    }
}

impl Persistence for JsonFileStore {
    fn load(&self) -> PersistedState {
        let items = self
            .read_entry(ITEMS_KEY)
            .and_then(|raw| decode_entry(ITEMS_KEY, &raw))
            .unwrap_or_default();
        let report = self
            .read_entry(REPORT_KEY)
            .and_then(|raw| decode_entry(REPORT_KEY, &raw));

        PersistedState { items, report }
    }

    fn save_items(&self, items: &[FeedbackItem]) -> Result<(), PersistenceError> {
        let data = encode_entry(ITEMS_KEY, items)?;
        atomic_write(&self.items_path(), &data)
            .map_err(|source| PersistenceError::Io { key: ITEMS_KEY, source })
    }

    fn save_report(&self, report: Option<&BatchAnalysisResult>) -> Result<(), PersistenceError> {
        let path = self.report_path();
        let result = match report {
            Some(report) => {
                let data = encode_entry(REPORT_KEY, report)?;
                atomic_write(&path, &data)
            }
            None => remove_if_exists(&path),
        };
        result.map_err(|source| PersistenceError::Io { key: REPORT_KEY, source })
    }
}
