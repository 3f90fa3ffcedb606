//! Analysis client port: the remote model as an opaque function

use crate::error::AnalysisError;
use crate::types::{AnalysisResult, BatchAnalysisResult, FeedbackItem};
use async_trait::async_trait;

/// Backend that classifies feedback and synthesizes reports.
///
/// One attempt per call; implementations must not retry.
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    /// Classify a single feedback text
    async fn classify_feedback(&self, text: &str) -> Result<AnalysisResult, AnalysisError>;

    /// Synthesize a trend/theme report over a snapshot of items (at least one)
    async fn synthesize_report(
        &self,
        items: &[FeedbackItem],
    ) -> Result<BatchAnalysisResult, AnalysisError>;
}

#[async_trait]
impl<T: AnalysisClient + ?Sized> AnalysisClient for Box<T> {
    async fn classify_feedback(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        (**self).classify_feedback(text).await
    }

    async fn synthesize_report(
        &self,
        items: &[FeedbackItem],
    ) -> Result<BatchAnalysisResult, AnalysisError> {
        (**self).synthesize_report(items).await
    }
}

#[async_trait]
impl<T: AnalysisClient + ?Sized> AnalysisClient for std::sync::Arc<T> {
    async fn classify_feedback(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        (**self).classify_feedback(text).await
    }

    async fn synthesize_report(
        &self,
        items: &[FeedbackItem],
    ) -> Result<BatchAnalysisResult, AnalysisError> {
        (**self).synthesize_report(items).await
    }
}
