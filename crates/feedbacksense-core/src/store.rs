//! Feedback store: owns the item list and the derived report.
//!
//! Every item mutation discards the current report. State changes only after
//! a remote call has definitively succeeded, and the state lock is never held
//! across an await point, so the store stays usable while a call is pending.

use crate::client::AnalysisClient;
use crate::config::MIN_REPORT_ITEMS;
use crate::error::StoreError;
use crate::persistence::Persistence;
use crate::types::{BatchAnalysisResult, FeedbackItem};
use std::sync::{Mutex, MutexGuard};

/// Observable state handed to the presentation layer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreSnapshot {
    pub items: Vec<FeedbackItem>,
    pub report: Option<BatchAnalysisResult>,
    pub is_analyzing: bool,
    pub is_generating_report: bool,
    pub last_error: Option<String>,
}

/// What happened to a successfully synthesized report
#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    /// The report now reflects the current item list
    Committed(BatchAnalysisResult),
    /// Items changed while the report was being generated; the result was dropped
    Discarded,
}

#[derive(Debug, Default)]
struct StoreState {
    items: Vec<FeedbackItem>,
    report: Option<BatchAnalysisResult>,
    /// Bumped on every item-list mutation
    generation: u64,
    analyzing: usize,
    generating_report: usize,
    last_error: Option<String>,
}

#[derive(Debug, Clone, Copy)]
enum Activity {
    Analyzing,
    GeneratingReport,
}

/// Marks an in-flight remote call; decrements on drop so cancelled calls clear their flag
struct InFlight<'a> {
    state: &'a Mutex<StoreState>,
    activity: Activity,
}

impl<'a> InFlight<'a> {
    fn start(state: &'a Mutex<StoreState>, activity: Activity) -> Self {
        let mut guard = lock(state);
        match activity {
            Activity::Analyzing => guard.analyzing += 1,
            Activity::GeneratingReport => guard.generating_report += 1,
        }
        guard.last_error = None;
        Self { state, activity }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut guard = lock(self.state);
        match self.activity {
            Activity::Analyzing => guard.analyzing = guard.analyzing.saturating_sub(1),
            Activity::GeneratingReport => {
                guard.generating_report = guard.generating_report.saturating_sub(1)
            }
        }
    }
}

pub struct FeedbackStore<C, P> {
    client: C,
    persistence: P,
    min_report_items: usize,
    state: Mutex<StoreState>,
}

impl<C, P> FeedbackStore<C, P>
where
    C: AnalysisClient,
    P: Persistence,
{
    /// Build a store, restoring items and report from `persistence`
    pub fn open(client: C, persistence: P) -> Self {
        let restored = persistence.load();
        tracing::debug!(
            items = restored.items.len(),
            has_report = restored.report.is_some(),
            "restored feedback state"
        );

        Self {
            client,
            persistence,
            min_report_items: MIN_REPORT_ITEMS,
            state: Mutex::new(StoreState {
                items: restored.items,
                report: restored.report,
                ..StoreState::default()
            }),
        }
    }

    /// Raise the number of items a report needs (never below two)
    pub fn with_min_report_items(mut self, min: usize) -> Self {
        self.min_report_items = min.max(MIN_REPORT_ITEMS);
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        let state = self.lock();
        StoreSnapshot {
            items: state.items.clone(),
            report: state.report.clone(),
            is_analyzing: state.analyzing > 0,
            is_generating_report: state.generating_report > 0,
            last_error: state.last_error.clone(),
        }
    }

    pub fn items(&self) -> Vec<FeedbackItem> {
        self.lock().items.clone()
    }

    pub fn report(&self) -> Option<BatchAnalysisResult> {
        self.lock().report.clone()
    }

    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Classify `text` and prepend the resulting item.
    ///
    /// Any existing report is discarded on success. On failure nothing changes.
    pub async fn submit(&self, text: &str, source: &str) -> Result<FeedbackItem, StoreError> {
        let _in_flight = InFlight::start(&self.state, Activity::Analyzing);

        let analysis = match self.client.classify_feedback(text).await {
            Ok(analysis) => analysis,
            Err(e) => {
                tracing::error!(error = %e, "feedback classification failed");
                return Err(self.fail(StoreError::Classification(e)));
            }
        };

        let item = FeedbackItem::from_analysis(analysis, text, source);

        let mut state = self.lock();
        state.items.insert(0, item.clone());
        state.report = None;
        state.generation += 1;
        self.persist_items(&state.items);
        self.persist_report(None);

        tracing::debug!(id = %item.id, items = state.items.len(), "feedback added");
        Ok(item)
    }

    /// Synthesize a report over the full current item list.
    ///
    /// Rejected without any remote call when there are too few items. A
    /// failed synthesis leaves the existing report untouched.
    pub async fn request_report(&self) -> Result<ReportOutcome, StoreError> {
        let (items, generation) = {
            let state = self.lock();
            if state.items.len() < self.min_report_items {
                return Err(StoreError::InsufficientData {
                    required: self.min_report_items,
                    available: state.items.len(),
                });
            }
            (state.items.clone(), state.generation)
        };

        let _in_flight = InFlight::start(&self.state, Activity::GeneratingReport);

        let report = match self.client.synthesize_report(&items).await {
            Ok(report) => report,
            Err(e) => {
                tracing::error!(error = %e, "report synthesis failed");
                return Err(self.fail(StoreError::ReportSynthesis(e)));
            }
        };

        let theme_total = report.total_theme_count();
        if theme_total > items.len() as u64 {
            tracing::warn!(
                theme_total,
                items = items.len(),
                "theme counts exceed the number of analyzed items"
            );
        }

        let mut state = self.lock();
        if state.generation != generation {
            tracing::warn!("items changed during report generation, discarding report");
            return Ok(ReportOutcome::Discarded);
        }
        state.report = Some(report.clone());
        self.persist_report(Some(&report));

        Ok(ReportOutcome::Committed(report))
    }

    /// Remove the item with `id`. Returns whether an item was removed.
    ///
    /// The report is discarded either way.
    pub fn delete(&self, id: &str) -> bool {
        let mut state = self.lock();
        let before = state.items.len();
        state.items.retain(|item| item.id != id);
        let removed = state.items.len() != before;

        state.report = None;
        state.generation += 1;
        if removed {
            self.persist_items(&state.items);
        }
        self.persist_report(None);

        removed
    }

    pub fn clear_all(&self) {
        let mut state = self.lock();
        state.items.clear();
        state.report = None;
        state.generation += 1;
        self.persist_items(&state.items);
        self.persist_report(None);
    }

    /// Drop the current report without touching items
    pub fn dismiss_report(&self) {
        let mut state = self.lock();
        state.report = None;
        self.persist_report(None);
    }

    fn fail(&self, err: StoreError) -> StoreError {
        self.lock().last_error = Some(err.user_message());
        err
    }

    // Persistence is fire-and-forget: a failed write is logged, the in-memory
    // commit stands.
    fn persist_items(&self, items: &[FeedbackItem]) {
        if let Err(e) = self.persistence.save_items(items) {
            tracing::warn!(error = %e, "failed to persist feedback items");
        }
    }

    fn persist_report(&self, report: Option<&BatchAnalysisResult>) {
        if let Err(e) = self.persistence.save_report(report) {
            tracing::warn!(error = %e, "failed to persist batch report");
        }
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        lock(&self.state)
    }
}

fn lock(state: &Mutex<StoreState>) -> MutexGuard<'_, StoreState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
