//! Analytics CLI commands.

use clap::{Parser, Subcommand};

/// Analytics commands.
#[derive(Debug, Parser)]
pub struct AnalyticsCommand {
    #[command(subcommand)]
    pub action: AnalyticsAction,
}

/// Available analytics actions.
#[derive(Debug, Subcommand)]
pub enum AnalyticsAction {
    /// Progress, completion and emotional trend across all courses.
    Summary {
        /// Number of recent reviews in the emotional trend.
        #[arg(long)]
        window: Option<usize>,
    },
}
