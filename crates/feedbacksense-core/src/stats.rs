//! Dashboard aggregates over the current item list

use crate::types::{FeedbackItem, Priority, Sentiment};
use serde::Serialize;

/// Share of feedback assumed to be actionable in the overview estimate
const ACTIONABLE_RATIO: f64 = 0.8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentBreakdown {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentBreakdown {
    pub fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriorityBreakdown {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl PriorityBreakdown {
    pub fn get(&self, priority: Priority) -> usize {
        match priority {
            Priority::Low => self.low,
            Priority::Medium => self.medium,
            Priority::High => self.high,
        }
    }
}

/// Overview numbers shown above the feedback stream
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FeedbackStats {
    pub total: usize,
    pub sentiment: SentimentBreakdown,
    pub priority: PriorityBreakdown,
    pub high_priority: usize,
    pub negative_sentiment: usize,
    /// Rough estimate, not derived from the classification
    pub actionable_estimate: usize,
}

impl FeedbackStats {
    pub fn from_items(items: &[FeedbackItem]) -> Self {
        let mut sentiment = SentimentBreakdown::default();
        let mut priority = PriorityBreakdown::default();

        for item in items {
            match item.sentiment {
                Sentiment::Positive => sentiment.positive += 1,
                Sentiment::Neutral => sentiment.neutral += 1,
                Sentiment::Negative => sentiment.negative += 1,
            }
            match item.priority {
                Priority::Low => priority.low += 1,
                Priority::Medium => priority.medium += 1,
                Priority::High => priority.high += 1,
            }
        }

        let total = items.len();
        Self {
            total,
            sentiment,
            priority,
            high_priority: priority.high,
            negative_sentiment: sentiment.negative,
            actionable_estimate: (total as f64 * ACTIONABLE_RATIO).round() as usize,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(sentiment: Sentiment, priority: Priority) -> FeedbackItem {
        FeedbackItem {
            id: uuid::Uuid::new_v4().to_string(),
            original_text: "text".to_string(),
            timestamp: 0,
            source: "Manual Entry".to_string(),
            sentiment,
            pain_point: String::new(),
            feature_request: String::new(),
            priority,
            summary: String::new(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_empty_stats() {
        let stats = FeedbackStats::from_items(&[]);
        assert!(stats.is_empty());
        assert_eq!(stats.actionable_estimate, 0);
        assert_eq!(stats.priority, PriorityBreakdown::default());
    }

    #[test]
    fn test_counts_by_sentiment_and_priority() {
        let items = vec![
            item(Sentiment::Negative, Priority::High),
            item(Sentiment::Negative, Priority::High),
            item(Sentiment::Positive, Priority::Low),
            item(Sentiment::Neutral, Priority::Medium),
            item(Sentiment::Negative, Priority::Medium),
        ];
        let stats = FeedbackStats::from_items(&items);

        assert_eq!(stats.total, 5);
        assert_eq!(stats.negative_sentiment, 3);
        assert_eq!(stats.high_priority, 2);
        assert_eq!(stats.sentiment.get(Sentiment::Positive), 1);
        assert_eq!(stats.priority.get(Priority::Medium), 2);
        assert_eq!(stats.actionable_estimate, 4);
    }

    #[test]
    fn test_actionable_estimate_rounds() {
        let items: Vec<_> = (0..3)
            .map(|_| item(Sentiment::Neutral, Priority::Low))
            .collect();
        // 3 * 0.8 = 2.4
        assert_eq!(FeedbackStats::from_items(&items).actionable_estimate, 2);
    }
}
