//! Feedback schema types shared by the classifier, the store and the CLI

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Polarity of a piece of feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Urgency assigned by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured classification of a single feedback text.
///
/// All six fields are required on the wire; a response missing any of them,
/// or carrying a sentiment/priority outside the enumerations, fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub sentiment: Sentiment,
    pub pain_point: String,
    pub feature_request: String,
    pub priority: Priority,
    pub summary: String,
    pub tags: Vec<String>,
}

/// An analyzed feedback entry (compatible with the persisted `feedback_items` JSON)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub id: String,
    #[serde(rename = "originalText")]
    pub original_text: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    pub source: String,
    pub sentiment: Sentiment,
    pub pain_point: String,
    pub feature_request: String,
    pub priority: Priority,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl FeedbackItem {
    /// Build a new item from a classification, stamping a fresh id and the current time
    pub fn from_analysis(analysis: AnalysisResult, original_text: &str, source: &str) -> Self {
        Self::with_identity(
            uuid::Uuid::new_v4().to_string(),
            original_text.to_string(),
            Utc::now().timestamp_millis(),
            source.to_string(),
            analysis,
        )
    }

    pub fn with_identity(
        id: String,
        original_text: String,
        timestamp: i64,
        source: String,
        analysis: AnalysisResult,
    ) -> Self {
        Self {
            id,
            original_text,
            timestamp,
            source,
            sentiment: analysis.sentiment,
            pain_point: analysis.pain_point,
            feature_request: analysis.feature_request,
            priority: analysis.priority,
            summary: analysis.summary,
            tags: analysis.tags,
        }
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }

    /// Calendar day (UTC) the item was created on
    pub fn date(&self) -> Option<NaiveDate> {
        self.created_at().map(|dt| dt.date_naive())
    }
}

/// One recurring theme found across a batch of feedback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeGroup {
    pub theme_name: String,
    #[serde(deserialize_with = "deserialize_count")]
    pub count: u32,
    pub description: String,
}

/// Cross-item report synthesized from a snapshot of the item list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchAnalysisResult {
    pub sentiment_trend_analysis: String,
    pub top_themes: Vec<ThemeGroup>,
}

impl BatchAnalysisResult {
    pub fn total_theme_count(&self) -> u64 {
        self.top_themes.iter().map(|t| u64::from(t.count)).sum()
    }
}

// The model schema declares counts as NUMBER, so integral floats like 3.0 show up.
fn deserialize_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(serde::de::Error::custom(format!(
            "theme count must be a non-negative integer, got {}",
            value
        )));
    }
    Ok(value as u32)
}
