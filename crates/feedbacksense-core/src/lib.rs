//! Core feedback types, the feedback store and its invalidation protocol

mod client;
mod config;
mod error;
mod persistence;
mod stats;
mod store;
mod types;

pub use client::AnalysisClient;
pub use config::{
    Config, API_KEY_VARS, DEFAULT_API_BASE, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS,
    MIN_REPORT_ITEMS, MODEL_VAR,
};
pub use error::{AnalysisError, ConfigError, PersistenceError, StoreError};
pub use persistence::{
    decode_entry, encode_entry, MemoryPersistence, PersistedState, Persistence, ITEMS_KEY,
    REPORT_KEY,
};
pub use stats::{FeedbackStats, PriorityBreakdown, SentimentBreakdown};
pub use store::{FeedbackStore, ReportOutcome, StoreSnapshot};
pub use types::{AnalysisResult, BatchAnalysisResult, FeedbackItem, Priority, Sentiment, ThemeGroup};
