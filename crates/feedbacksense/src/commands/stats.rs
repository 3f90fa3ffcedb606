use crate::context::AppContext;
use feedbacksense_core::{FeedbackStats, Priority, Sentiment};

pub fn run(json: bool) -> anyhow::Result<()> {
    let ctx = AppContext::load()?;
    let stats = FeedbackStats::from_items(&ctx.open_store().items());

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", build_overview(&stats));
    }
    Ok(())
}

fn build_overview(stats: &FeedbackStats) -> String {
    if stats.is_empty() {
        return "No feedback analyzed yet.".to_string();
    }

    let mut sections = vec![format!(
        "Overview\n========\n\
         Total feedback:   {}\n\
         High priority:    {}\n\
         Negative:         {}\n\
         Actionable (est): {}",
        stats.total, stats.high_priority, stats.negative_sentiment, stats.actionable_estimate
    )];

    let sentiment: Vec<String> = Sentiment::ALL
        .iter()
        .map(|s| format!("{:<9} {}", s.as_str(), stats.sentiment.get(*s)))
        .collect();
    sections.push(format!(
        "\nSentiment\n---------\n{}",
        sentiment.join("\n")
    ));

    let priority: Vec<String> = Priority::ALL
        .iter()
        .map(|p| format!("{:<9} {}", p.as_str(), stats.priority.get(*p)))
        .collect();
    sections.push(format!("\nPriority\n--------\n{}", priority.join("\n")));

    sections.join("\n")
}
