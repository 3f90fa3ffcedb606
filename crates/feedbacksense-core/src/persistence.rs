//! Durable-store port used by the feedback store

use crate::error::PersistenceError;
use crate::types::{BatchAnalysisResult, FeedbackItem};
use serde::de::DeserializeOwned;
use std::sync::{Arc, Mutex};

/// Key holding the JSON array of feedback items
pub const ITEMS_KEY: &str = "feedback_items";

/// Key holding the current batch report; absent when no report is current
pub const REPORT_KEY: &str = "batch_insights";

/// Everything restored at startup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistedState {
    pub items: Vec<FeedbackItem>,
    pub report: Option<BatchAnalysisResult>,
}

/// Two-key key/value persistence for items and the report
pub trait Persistence: Send + Sync {
    /// Restore both keys independently. Never fails: an unreadable or
    /// corrupt key comes back absent and is logged.
    fn load(&self) -> PersistedState;

    /// Replace the persisted item list
    fn save_items(&self, items: &[FeedbackItem]) -> Result<(), PersistenceError>;

    /// Write the report, or remove the persisted entry when `None`
    fn save_report(&self, report: Option<&BatchAnalysisResult>) -> Result<(), PersistenceError>;
}

impl<T: Persistence + ?Sized> Persistence for Arc<T> {
    fn load(&self) -> PersistedState {
        (**self).load()
    }

    fn save_items(&self, items: &[FeedbackItem]) -> Result<(), PersistenceError> {
        (**self).save_items(items)
    }

    fn save_report(&self, report: Option<&BatchAnalysisResult>) -> Result<(), PersistenceError> {
        (**self).save_report(report)
    }
}

/// Decode a raw persisted entry, logging and discarding anything malformed
pub fn decode_entry<T: DeserializeOwned>(key: &'static str, raw: &[u8]) -> Option<T> {
    match serde_json::from_slice(raw) {
        Ok(value) => Some(value),
        Err(source) => {
            let err = PersistenceError::Parse { key, source };
            tracing::warn!(error = %err, "discarding unreadable persisted entry");
            None
        }
    }
}

/// Encode a value for persistence
pub fn encode_entry<T: serde::Serialize + ?Sized>(
    key: &'static str,
    value: &T,
) -> Result<Vec<u8>, PersistenceError> {
    serde_json::to_vec_pretty(value).map_err(|source| PersistenceError::Encode { key, source })
}

/// In-memory persistence holding raw JSON bytes per key, like a browser's local storage
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    items: Mutex<Option<Vec<u8>>>,
    report: Mutex<Option<Vec<u8>>>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed raw entries, e.g. to simulate corrupt data
    pub fn with_raw(items: Option<&str>, report: Option<&str>) -> Self {
        Self {
            items: Mutex::new(items.map(|s| s.as_bytes().to_vec())),
            report: Mutex::new(report.map(|s| s.as_bytes().to_vec())),
        }
    }

    pub fn raw_items(&self) -> Option<Vec<u8>> {
        lock(&self.items).clone()
    }

    pub fn raw_report(&self) -> Option<Vec<u8>> {
        lock(&self.report).clone()
    }
}

impl Persistence for MemoryPersistence {
    fn load(&self) -> PersistedState {
        let items = lock(&self.items)
            .as_deref()
            .and_then(|raw| decode_entry(ITEMS_KEY, raw))
            .unwrap_or_default();
        let report = lock(&self.report)
            .as_deref()
            .and_then(|raw| decode_entry(REPORT_KEY, raw));
        PersistedState { items, report }
    }

    fn save_items(&self, items: &[FeedbackItem]) -> Result<(), PersistenceError> {
        let bytes = encode_entry(ITEMS_KEY, items)?;
        *lock(&self.items) = Some(bytes);
        Ok(())
    }

    fn save_report(&self, report: Option<&BatchAnalysisResult>) -> Result<(), PersistenceError> {
        let bytes = report.map(|r| encode_entry(REPORT_KEY, r)).transpose()?;
        *lock(&self.report) = bytes;
        Ok(())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
