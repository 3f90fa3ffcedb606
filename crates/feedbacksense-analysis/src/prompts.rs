//! Prompt construction for classification and report synthesis

use feedbacksense_core::{FeedbackItem, Sentiment};
use serde::Serialize;

pub fn build_classification_prompt(text: &str) -> String {
    format!(
        "Analyze the following customer feedback ticket or review. \
         Extract the sentiment, identify the core pain point, suggest a feature request \
         or solution based on the text, and assign a priority level for the product team. \
         Also generate 3-5 relevant tags based on the extracted pain_point and feature_request.\n\
         \n\
         Examples of tags:\n\
         - \"The app keeps crashing when I log in\" -> [\"login issue\", \"bug\", \"crashing\"]\n\
         - \"Please add a dark mode\" -> [\"UI request\", \"dark mode\", \"enhancement\"]\n\
         \n\
         Feedback: \"{}\"",
        text
    )
}

/// Per-item projection sent to the model for report synthesis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportInputItem {
    /// Calendar date (UTC) of the submission, `YYYY-MM-DD`
    pub date: String,
    pub sentiment: Sentiment,
    pub pain_point: String,
    pub feature_request: String,
    pub tags: Vec<String>,
}

impl ReportInputItem {
    pub fn from_item(item: &FeedbackItem) -> Self {
        let date = item
            .date()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        Self {
            date,
            sentiment: item.sentiment,
            pain_point: item.pain_point.clone(),
            feature_request: item.feature_request.clone(),
            tags: item.tags.clone(),
        }
    }
}

pub fn project_items(items: &[FeedbackItem]) -> Vec<ReportInputItem> {
    items.iter().map(ReportInputItem::from_item).collect()
}

pub fn build_report_prompt(items: &[FeedbackItem]) -> Result<String, serde_json::Error> {
    let data = serde_json::to_string(&project_items(items))?;
    Ok(format!(
        "Analyze the following list of customer feedback data.\n\
         1. Analyze the 'sentiment' field over time. Identify trends (improving, declining, stable) \
         and highlight any shifts.\n\
         2. Identify recurring themes in 'pain_point' and 'feature_request'. \
         Group similar issues and count them.\n\
         \n\
         Data: {}",
        data
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedbacksense_core::{AnalysisResult, Priority};

    fn item(timestamp: i64, sentiment: Sentiment) -> FeedbackItem {
        FeedbackItem::with_identity(
            "id-1".to_string(),
            "It loads very slowly on my Android device".to_string(),
            timestamp,
            "Play Store".to_string(),
            AnalysisResult {
                sentiment,
                pain_point: "Slow on Android".to_string(),
                feature_request: "Optimize mobile performance".to_string(),
                priority: Priority::Medium,
                summary: "Slow app.".to_string(),
                tags: vec!["performance".to_string(), "android".to_string()],
            },
        )
    }

    #[test]
    fn test_classification_prompt_embeds_text() {
        let prompt = build_classification_prompt("Dark mode please");
        assert!(prompt.contains("Feedback: \"Dark mode please\""));
        assert!(prompt.contains("priority"));
    }

    #[test]
    fn test_projection_drops_identity_fields() {
        // 2024-06-10T06:13:20Z
        let projected = ReportInputItem::from_item(&item(1_718_000_000_000, Sentiment::Neutral));
        assert_eq!(projected.date, "2024-06-10");

        let value = serde_json::to_value(&projected).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys.len(), 5);
        assert!(value.get("originalText").is_none());
        assert!(value.get("id").is_none());
        assert_eq!(value["sentiment"], "Neutral");
    }

    #[test]
    fn test_report_prompt_contains_projected_data() {
        let items = vec![
            item(1_718_000_000_000, Sentiment::Negative),
            item(1_717_000_000_000, Sentiment::Positive),
        ];
        let prompt = build_report_prompt(&items).unwrap();

        assert!(prompt.contains("\"date\":\"2024-06-10\""));
        assert!(prompt.contains("\"sentiment\":\"Positive\""));
        assert!(prompt.contains("recurring themes"));
        assert!(!prompt.contains("loads very slowly"));
    }
}
