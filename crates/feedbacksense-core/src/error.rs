//! Error types for classification, report synthesis, persistence and config

use thiserror::Error;

/// Failure of a single call to the remote model.
///
/// Transport, auth and schema problems all land here; callers only tell them
/// apart through the message.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no API key configured")]
    MissingApiKey,

    #[error("request to model failed: {0}")]
    Request(String),

    #[error("failed to encode model input: {0}")]
    Encode(String),

    #[error("model API returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("model returned an empty response")]
    EmptyResponse,

    #[error("model response did not match the expected schema: {0}")]
    MalformedResponse(String),
}

/// Failure of a feedback store operation
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to analyze feedback: {0}")]
    Classification(#[source] AnalysisError),

    #[error("failed to generate insights report: {0}")]
    ReportSynthesis(#[source] AnalysisError),

    #[error("at least {required} feedback items are needed for a report, found {available}")]
    InsufficientData { required: usize, available: usize },
}

impl StoreError {
    /// Message shown to the person driving the dashboard
    pub fn user_message(&self) -> String {
        match self {
            StoreError::Classification(_) => {
                "Failed to analyze feedback. Please check your API key or try again later."
                    .to_string()
            }
            StoreError::ReportSynthesis(_) => {
                "Failed to generate insights report. The model might be busy.".to_string()
            }
            StoreError::InsufficientData { required, .. } => format!(
                "Please analyze at least {} feedback items to generate a report.",
                required
            ),
        }
    }
}

/// Failure reading or writing a persisted entry
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error on {key}: {source}")]
    Io {
        key: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse persisted {key}: {source}")]
    Parse {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode {key}: {source}")]
    Encode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
