use async_trait::async_trait;
use feedbacksense_analysis::GeminiClient;
use feedbacksense_core::{
    AnalysisClient, AnalysisError, AnalysisResult, BatchAnalysisResult, Config, FeedbackItem,
};

/// Model client chosen from config.
///
/// Commands that never call the model (list, stats, delete) must work
/// without an API key, so a missing key only surfaces as a call failure.
pub enum ConfiguredClient {
    Gemini(GeminiClient),
    Unconfigured,
}

impl ConfiguredClient {
    pub fn from_config(config: &Config) -> Self {
        match GeminiClient::from_config(config) {
            Ok(client) => ConfiguredClient::Gemini(client),
            Err(AnalysisError::MissingApiKey) => ConfiguredClient::Unconfigured,
            Err(e) => {
                tracing::warn!(error = %e, "could not build model client");
                ConfiguredClient::Unconfigured
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, ConfiguredClient::Gemini(_))
    }
}

#[async_trait]
impl AnalysisClient for ConfiguredClient {
    async fn classify_feedback(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        match self {
            ConfiguredClient::Gemini(client) => client.classify_feedback(text).await,
            ConfiguredClient::Unconfigured => Err(AnalysisError::MissingApiKey),
        }
    }

    async fn synthesize_report(
        &self,
        items: &[FeedbackItem],
    ) -> Result<BatchAnalysisResult, AnalysisError> {
        match self {
            ConfiguredClient::Gemini(client) => client.synthesize_report(items).await,
            ConfiguredClient::Unconfigured => Err(AnalysisError::MissingApiKey),
        }
    }
}
