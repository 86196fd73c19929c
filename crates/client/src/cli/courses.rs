//! Course CLI commands.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use studytrack_core::tracker::{CourseFilter, CreateCourseRequest, Id, UpdateCourseRequest};

pub use studytrack_core::tracker::CourseStatus as CoreCourseStatus;

use super::{start_of_day, Priority};

/// Course management commands.
#[derive(Debug, Parser)]
pub struct CoursesCommand {
    #[command(subcommand)]
    pub action: CoursesAction,
}

/// CLI course status (with clap ValueEnum).
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Status {
    NotStarted,
    InProgress,
    Completed,
}

impl From<Status> for CoreCourseStatus {
    fn from(s: Status) -> Self {
        match s {
            Status::NotStarted => CoreCourseStatus::NotStarted,
            Status::InProgress => CoreCourseStatus::InProgress,
            Status::Completed => CoreCourseStatus::Completed,
        }
    }
}

/// Completed and total chapter counts, entered as `completed/total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chapters {
    pub completed: u32,
    pub total: u32,
}

fn parse_chapters(value: &str) -> Result<Chapters, String> {
    let invalid = || format!("invalid chapters `{value}`, expected COMPLETED/TOTAL");
    let (completed, total) = value.split_once('/').ok_or_else(invalid)?;
    Ok(Chapters {
        completed: completed.trim().parse().map_err(|_| invalid())?,
        total: total.trim().parse().map_err(|_| invalid())?,
    })
}

/// Flags for `courses create`.
#[derive(Debug, Args)]
pub struct CreateCourseArgs {
    /// Course title.
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub platform: Option<String>,
    #[arg(long)]
    pub instructor: Option<String>,
    /// Link to the course page.
    #[arg(long)]
    pub url: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Purchase date (YYYY-MM-DD).
    #[arg(long)]
    pub purchase_date: Option<NaiveDate>,
    #[arg(long)]
    pub total_chapters: Option<u32>,
}

impl From<CreateCourseArgs> for CreateCourseRequest {
    fn from(args: CreateCourseArgs) -> Self {
        CreateCourseRequest {
            title: args.title,
            platform: args.platform,
            instructor: args.instructor,
            purchase_date: args.purchase_date.map(start_of_day),
            course_url: args.url,
            description: args.description,
            total_chapters: args.total_chapters,
        }
    }
}

/// Flags for `courses update`. Unset flags leave the field unchanged.
#[derive(Debug, Default, Args)]
pub struct UpdateCourseArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub platform: Option<String>,
    #[arg(long)]
    pub instructor: Option<String>,
    #[arg(long, value_enum)]
    pub status: Option<Status>,
    #[arg(long, value_enum)]
    pub priority: Option<Priority>,
    /// Chapter progress as COMPLETED/TOTAL; also sets the percentage.
    #[arg(long, value_parser = parse_chapters, conflicts_with = "progress")]
    pub chapters: Option<Chapters>,
    /// Progress percentage (0-100).
    #[arg(long)]
    pub progress: Option<f64>,
    #[arg(long)]
    pub url: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
}

impl From<UpdateCourseArgs> for UpdateCourseRequest {
    fn from(args: UpdateCourseArgs) -> Self {
        let request = UpdateCourseRequest {
            title: args.title,
            platform: args.platform,
            instructor: args.instructor,
            status: args.status.map(Into::into),
            progress_percentage: args.progress,
            priority: args.priority.map(Into::into),
            description: args.description,
            course_url: args.url,
            ..UpdateCourseRequest::default()
        };
        match args.chapters {
            Some(Chapters { completed, total }) => request.with_chapters(completed, total),
            None => request,
        }
    }
}

/// Available course actions.
#[derive(Debug, Subcommand)]
pub enum CoursesAction {
    /// List courses, optionally filtered.
    List {
        /// Match title, platform or instructor (case-insensitive).
        #[arg(long)]
        search: Option<String>,
        /// Only courses with this status.
        #[arg(long, value_enum)]
        status: Option<Status>,
        /// Only courses with this priority.
        #[arg(long, value_enum)]
        priority: Option<Priority>,
    },
    /// Get a course by ID.
    Get {
        /// Course ID.
        id: Id,
    },
    /// Create a new course.
    Create(CreateCourseArgs),
    /// Update a course.
    Update {
        /// Course ID.
        id: Id,
        #[command(flatten)]
        changes: UpdateCourseArgs,
    },
    /// Delete a course.
    Delete {
        /// Course ID.
        id: Id,
    },
    /// Show course counts by status.
    Stats,
}

/// Builds the course list filter from the `list` flags.
pub fn list_filter(
    search: Option<String>,
    status: Option<Status>,
    priority: Option<Priority>,
) -> CourseFilter {
    CourseFilter {
        search,
        status: status.map(Into::into),
        priority: priority.map(Into::into),
    }
}
