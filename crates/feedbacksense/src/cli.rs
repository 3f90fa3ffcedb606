use clap::{Parser, Subcommand};

pub const DEFAULT_SOURCE: &str = "Manual Entry";

#[derive(Parser)]
#[command(name = "feedbacksense")]
#[command(version)]
#[command(about = "Turn raw customer feedback into prioritized, tagged product insights")]
pub struct Cli {
    /// Print JSON instead of text (list, stats, insights, submit, report)
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a piece of feedback and add it to the stream
    Submit {
        /// Feedback text (ticket, review, message)
        text: String,

        /// Where the feedback came from
        #[arg(short, long, default_value = DEFAULT_SOURCE)]
        source: String,
    },

    /// Submit one of the built-in sample feedbacks
    Sample {
        /// Which sample to use (0-based); cycles through them if omitted
        #[arg(short, long)]
        index: Option<usize>,
    },

    /// Show the feedback stream, newest first
    List {
        /// Show at most N items
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show dashboard statistics
    Stats,

    /// Generate a sentiment trend and theme report over all feedback
    Report,

    /// Show the current report, if any
    Insights,

    /// Dismiss the current report
    Dismiss,

    /// Delete a feedback item by id
    Delete { id: String },

    /// Delete all feedback and the report
    Clear {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },

    /// Print version information
    Version,
}
