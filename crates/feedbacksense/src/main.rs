mod cli;
mod client;
mod commands;
mod context;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let json = cli.json;
    match cli.command {
        Commands::Submit { text, source } => commands::submit::run(&text, &source, json),
        Commands::Sample { index } => commands::submit::run_sample(index, json),
        Commands::List { limit } => commands::list::run(limit, json),
        Commands::Stats => commands::stats::run(json),
        Commands::Report => commands::report::run(json),
        Commands::Insights => commands::report::run_insights(json),
        Commands::Dismiss => commands::report::run_dismiss(),
        Commands::Delete { id } => commands::delete::run(&id),
        Commands::Clear { yes } => commands::delete::run_clear(yes),
        Commands::Version => commands::version::run(),
    }
}
