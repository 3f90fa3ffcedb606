//! Response schemas handed to the model so it returns parseable JSON

use feedbacksense_core::{Priority, Sentiment};
use serde_json::{json, Value};

pub fn classification_schema() -> Value {
    let sentiments: Vec<&str> = Sentiment::ALL.iter().map(Sentiment::as_str).collect();
    let priorities: Vec<&str> = Priority::ALL.iter().map(Priority::as_str).collect();

    json!({
        "type": "OBJECT",
        "properties": {
            "sentiment": {
                "type": "STRING",
                "enum": sentiments,
                "description": "The overall sentiment of the feedback."
            },
            "pain_point": {
                "type": "STRING",
                "description": "A concise summary of the specific problem or issue the customer is facing."
            },
            "feature_request": {
                "type": "STRING",
                "description": "A suggested feature or solution derived from the feedback."
            },
            "priority": {
                "type": "STRING",
                "enum": priorities,
                "description": "The urgency of addressing this issue based on severity and sentiment."
            },
            "summary": {
                "type": "STRING",
                "description": "A very short one-sentence summary of the feedback."
            },
            "tags": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "List of 3-5 keywords describing the issue and request."
            }
        },
        "required": ["sentiment", "pain_point", "feature_request", "priority", "summary", "tags"]
    })
}

pub fn report_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "sentiment_trend_analysis": {
                "type": "STRING",
                "description": "A paragraph describing the sentiment trend over time, noting any shifts."
            },
            "top_themes": {
                "type": "ARRAY",
                "description": "List of recurring themes found in the feedback.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "theme_name": { "type": "STRING" },
                        "count": { "type": "NUMBER" },
                        "description": { "type": "STRING" }
                    },
                    "required": ["theme_name", "count", "description"]
                }
            }
        },
        "required": ["sentiment_trend_analysis", "top_themes"]
    })
}
