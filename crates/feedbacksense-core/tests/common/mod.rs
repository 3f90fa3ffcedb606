use async_trait::async_trait;
use feedbacksense_core::{
    AnalysisClient, AnalysisError, AnalysisResult, BatchAnalysisResult, FeedbackItem, Priority,
    Sentiment, ThemeGroup,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::oneshot;

/// Scriptable stand-in for the remote model.
///
/// Reports echo the ids they were computed from in `sentiment_trend_analysis`,
/// so tests can check a report against the item list.
#[derive(Default)]
pub struct MockClient {
    pub fail_classify: AtomicBool,
    pub fail_report: AtomicBool,
    pub classify_calls: AtomicUsize,
    pub report_calls: AtomicUsize,
    responses: Mutex<HashMap<String, AnalysisResult>>,
    classify_gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
    report_gate: Mutex<Option<oneshot::Receiver<()>>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `result` whenever `text` is classified
    pub fn respond_to(&self, text: &str, result: AnalysisResult) {
        self.responses
            .lock()
            .unwrap()
            .insert(text.to_string(), result);
    }

    /// Hold classification of `text` until the returned sender fires
    pub fn gate_classification(&self, text: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.classify_gates
            .lock()
            .unwrap()
            .insert(text.to_string(), rx);
        tx
    }

    /// Hold the next report synthesis until the returned sender fires
    pub fn gate_report(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.report_gate.lock().unwrap() = Some(rx);
        tx
    }

    pub fn set_fail_classify(&self, fail: bool) {
        self.fail_classify.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_report(&self, fail: bool) {
        self.fail_report.store(fail, Ordering::SeqCst);
    }

    pub fn report_calls(&self) -> usize {
        self.report_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnalysisClient for MockClient {
    async fn classify_feedback(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        self.classify_calls.fetch_add(1, Ordering::SeqCst);

        let gate = self.classify_gates.lock().unwrap().remove(text);
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        if self.fail_classify.load(Ordering::SeqCst) {
            return Err(AnalysisError::Api {
                status: 429,
                message: "quota exceeded".to_string(),
            });
        }

        let scripted = self.responses.lock().unwrap().get(text).cloned();
        Ok(scripted.unwrap_or_else(|| neutral_analysis(text)))
    }

    async fn synthesize_report(
        &self,
        items: &[FeedbackItem],
    ) -> Result<BatchAnalysisResult, AnalysisError> {
        self.report_calls.fetch_add(1, Ordering::SeqCst);

        let gate = self.report_gate.lock().unwrap().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        if self.fail_report.load(Ordering::SeqCst) {
            return Err(AnalysisError::MalformedResponse("missing top_themes".to_string()));
        }

        Ok(report_for(items))
    }
}

pub fn neutral_analysis(text: &str) -> AnalysisResult {
    AnalysisResult {
        sentiment: Sentiment::Neutral,
        pain_point: format!("pain point in '{}'", text),
        feature_request: "make it better".to_string(),
        priority: Priority::Medium,
        summary: "Customer shared feedback.".to_string(),
        tags: vec!["general".to_string(), "feedback".to_string(), "ux".to_string()],
    }
}

/// The report the mock produces for exactly these items
pub fn report_for(items: &[FeedbackItem]) -> BatchAnalysisResult {
    BatchAnalysisResult {
        sentiment_trend_analysis: ids_of(items).join(","),
        top_themes: vec![ThemeGroup {
            theme_name: "General".to_string(),
            count: items.len() as u32,
            description: "All feedback".to_string(),
        }],
    }
}

pub fn ids_of(items: &[FeedbackItem]) -> Vec<String> {
    items.iter().map(|i| i.id.clone()).collect()
}
