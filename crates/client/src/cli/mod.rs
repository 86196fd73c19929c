//! CLI command definitions.

pub mod actions;
pub mod analytics;
pub mod auth;
pub mod courses;
pub mod knowledge;
pub mod reviews;
pub mod tags;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Parser, Subcommand, ValueEnum};
use studytrack_core::analytics::MonthRange;

pub use studytrack_core::tracker::Priority as CorePriority;

/// CLI client for the studytrack API.
#[derive(Debug, Parser)]
#[command(name = "studytrack-client")]
#[command(about = "CLI client for the studytrack API", long_about = None)]
pub struct Cli {
    /// Server base URL, including the `/api` prefix.
    #[arg(long, env = "STUDYTRACK_URL", default_value = "http://localhost:8000/api")]
    pub base_url: String,

    /// Bearer token to use instead of the saved session.
    #[arg(long, env = "STUDYTRACK_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Output format.
    #[arg(long, env = "STUDYTRACK_FORMAT", default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Register, log in and out.
    Auth(auth::AuthCommand),
    /// Course management.
    Courses(courses::CoursesCommand),
    /// Knowledge points of a course.
    Knowledge(knowledge::KnowledgeCommand),
    /// Action item management.
    Actions(actions::ActionsCommand),
    /// Review logs and the review calendar.
    Reviews(reviews::ReviewsCommand),
    /// Tags and course tag associations.
    Tags(tags::TagsCommand),
    /// Learning analytics.
    Analytics(analytics::AnalyticsCommand),
}

/// CLI priority (with clap ValueEnum).
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl From<Priority> for CorePriority {
    fn from(p: Priority) -> Self {
        match p {
            Priority::High => CorePriority::High,
            Priority::Medium => CorePriority::Medium,
            Priority::Low => CorePriority::Low,
        }
    }
}

/// Dates are entered as days; the server stores midnight of that day.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Parses `YYYY-MM` into the month it names.
pub fn parse_month(value: &str) -> Result<MonthRange, String> {
    let invalid = || format!("invalid month `{value}`, expected YYYY-MM");
    let (year, month) = value.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    MonthRange::new(year, month).ok_or_else(invalid)
}
