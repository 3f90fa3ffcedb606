use crate::context::AppContext;
use feedbacksense_core::FeedbackItem;

const SNIPPET_CHARS: usize = 80;

pub fn run(limit: Option<usize>, json: bool) -> anyhow::Result<()> {
    let ctx = AppContext::load()?;
    let items = ctx.open_store().items();
    let shown = &items[..limit.unwrap_or(items.len()).min(items.len())];

    if json {
        println!("{}", serde_json::to_string_pretty(shown)?);
    } else {
        println!("{}", build_listing(shown, items.len()));
    }
    Ok(())
}

fn build_listing(shown: &[FeedbackItem], total: usize) -> String {
    if shown.is_empty() {
        return "No feedback yet. Add some with `feedbacksense submit`.".to_string();
    }

    let mut out = vec![format!("Feedback Stream ({} items)", total)];
    out.push("=".repeat(out[0].len()));

    for item in shown {
        let when = item
            .created_at()
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "unknown date".to_string());
        out.push(format!(
            "\n{}  {:<8} {:<6}  {}",
            when, item.sentiment, item.priority, item.summary
        ));
        out.push(format!("  \"{}\"", snippet(&item.original_text)));
        if !item.tags.is_empty() {
            out.push(format!("  #{}", item.tags.join(" #")));
        }
        out.push(format!("  {} | {}", item.source, item.id));
    }

    if shown.len() < total {
        out.push(format!("\n... {} more", total - shown.len()));
    }
    out.join("\n")
}

fn snippet(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() > SNIPPET_CHARS {
        let cut: String = flat.chars().take(SNIPPET_CHARS - 3).collect();
        format!("{}...", cut)
    } else {
        flat
    }
}
