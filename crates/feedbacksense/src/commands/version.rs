pub fn run() -> anyhow::Result<()> {
    println!("{}", version_line());
    println!("AI-assisted triage for customer feedback");
    Ok(())
}

fn version_line() -> String {
    format!("feedbacksense {}", env!("CARGO_PKG_VERSION"))
}
