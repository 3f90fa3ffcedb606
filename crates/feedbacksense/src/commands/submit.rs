use crate::context::{block_on, AppContext};
use feedbacksense_core::{AnalysisClient, FeedbackItem, FeedbackStore, Persistence};

pub const SAMPLE_SOURCE: &str = "Simulated Ticket";

pub const SAMPLE_FEEDBACKS: [&str; 4] = [
    "I love the new update! The interface is much cleaner, but I'm struggling to find the export button now. Can you make it more visible?",
    "This app crashes every time I try to upload a photo larger than 5MB. It's incredibly frustrating and I might cancel my subscription if not fixed.",
    "The customer support team was helpful, but the billing process is too confusing. Why are there so many hidden fees?",
    "Great potential, but it loads very slowly on my Android device. Please optimize for mobile performance.",
];

pub fn run(text: &str, source: &str, json: bool) -> anyhow::Result<()> {
    let text = non_blank(text)?;
    let ctx = AppContext::load()?;
    submit_with(&ctx.open_store(), text, source, json)
}

/// Reject whitespace-only input; the text itself is stored exactly as given
fn non_blank(text: &str) -> anyhow::Result<&str> {
    if text.trim().is_empty() {
        anyhow::bail!("Feedback text is empty.");
    }
    Ok(text)
}

pub fn run_sample(index: Option<usize>, json: bool) -> anyhow::Result<()> {
    let ctx = AppContext::load()?;
    let store = ctx.open_store();
    let text = pick_sample(index, store.len())?;
    submit_with(&store, text, SAMPLE_SOURCE, json)
}

fn submit_with<C, P>(
    store: &FeedbackStore<C, P>,
    text: &str,
    source: &str,
    json: bool,
) -> anyhow::Result<()>
where
    C: AnalysisClient,
    P: Persistence,
{
    let item = block_on(store.submit(text, source))?
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&item)?);
    } else {
        println!("{}", render_item(&item));
    }
    Ok(())
}

/// Explicit index, or cycle through samples by current stream length
fn pick_sample(index: Option<usize>, stream_len: usize) -> anyhow::Result<&'static str> {
    match index {
        Some(i) => SAMPLE_FEEDBACKS.get(i).copied().ok_or_else(|| {
            anyhow::anyhow!(
                "Sample index {} out of range (0..{})",
                i,
                SAMPLE_FEEDBACKS.len()
            )
        }),
        None => Ok(SAMPLE_FEEDBACKS[stream_len % SAMPLE_FEEDBACKS.len()]),
    }
}

pub fn render_item(item: &FeedbackItem) -> String {
    let mut lines = vec![
        format!("{} [{} | {} priority]", item.summary, item.sentiment, item.priority),
        format!("  Pain point: {}", item.pain_point),
        format!("  Suggested:  {}", item.feature_request),
    ];
    if !item.tags.is_empty() {
        lines.push(format!("  Tags:       {}", item.tags.join(", ")));
    }
    lines.push(format!("  Source:     {}", item.source));
    lines.push(format!("  Id:         {}", item.id));
    lines.join("\n")
}
