use crate::context::{block_on, AppContext};
use feedbacksense_core::{BatchAnalysisResult, ReportOutcome};

const BAR_WIDTH: usize = 20;

pub fn run(json: bool) -> anyhow::Result<()> {
    let ctx = AppContext::load()?;
    let store = ctx.open_store();

    let outcome = block_on(store.request_report())?
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    match outcome {
        ReportOutcome::Committed(report) => print_report(&report, json)?,
        ReportOutcome::Discarded => {
            println!("Feedback changed while the report was generated; run `feedbacksense report` again.")
        }
    }
    Ok(())
}

pub fn run_insights(json: bool) -> anyhow::Result<()> {
    let ctx = AppContext::load()?;
    let store = ctx.open_store();

    match store.report() {
        Some(report) => print_report(&report, json)?,
        None if json => println!("null"),
        None => println!(
            "No insights report. Run `feedbacksense report` once at least {} items are analyzed ({} so far).",
            ctx.config.report_threshold(),
            store.len()
        ),
    }
    Ok(())
}

pub fn run_dismiss() -> anyhow::Result<()> {
    let ctx = AppContext::load()?;
    let store = ctx.open_store();

    if store.report().is_none() {
        println!("No report to dismiss.");
        return Ok(());
    }
    store.dismiss_report();
    println!("Report dismissed.");
    Ok(())
}

fn print_report(report: &BatchAnalysisResult, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", build_report(report));
    }
    Ok(())
}

fn build_report(report: &BatchAnalysisResult) -> String {
    let mut sections = vec![format!(
        "Insights Report\n===============\n\nSentiment Trend\n---------------\n{}",
        report.sentiment_trend_analysis
    )];

    if report.top_themes.is_empty() {
        sections.push("\nNo recurring themes found.".to_string());
        return sections.join("\n");
    }

    let max = report
        .top_themes
        .iter()
        .map(|t| t.count)
        .max()
        .unwrap_or(0);
    let name_width = report
        .top_themes
        .iter()
        .map(|t| t.theme_name.chars().count())
        .max()
        .unwrap_or(0);

    let mut themes = Vec::new();
    for (i, theme) in report.top_themes.iter().enumerate() {
        themes.push(format!(
            "{:>2}. {:<width$}  {:>3}  {}",
            i + 1,
            theme.theme_name,
            theme.count,
            bar(theme.count, max),
            width = name_width
        ));
        themes.push(format!("    {}", theme.description));
    }
    sections.push(format!("\nTop Themes\n----------\n{}", themes.join("\n")));

    sections.join("\n")
}

/// Bar scaled so the largest theme fills the full width
fn bar(count: u32, max: u32) -> String {
    if max == 0 {
        return String::new();
    }
    let len = (count as f64 / max as f64 * BAR_WIDTH as f64).round() as usize;
    "#".repeat(len.max(usize::from(count > 0)))
}
