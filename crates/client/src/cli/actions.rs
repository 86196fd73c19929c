//! Action item CLI commands.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use studytrack_core::tracker::{
    CompletionFilter, CreateActionItemRequest, Id, UpdateActionItemRequest,
};

use super::{start_of_day, Priority};

/// Action item management commands.
#[derive(Debug, Parser)]
pub struct ActionsCommand {
    #[command(subcommand)]
    pub action: ActionsAction,
}

/// CLI completion filter (with clap ValueEnum).
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Completion {
    #[default]
    All,
    Completed,
    Pending,
}

impl From<Completion> for CompletionFilter {
    fn from(c: Completion) -> Self {
        match c {
            Completion::All => CompletionFilter::All,
            Completion::Completed => CompletionFilter::Completed,
            Completion::Pending => CompletionFilter::Pending,
        }
    }
}

/// Flags for `actions create`.
#[derive(Debug, Args)]
pub struct CreateActionArgs {
    /// Course ID.
    #[arg(long)]
    pub course: Id,
    /// Knowledge point the item came from.
    #[arg(long)]
    pub knowledge_point: Option<Id>,
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long, value_enum)]
    pub priority: Option<Priority>,
    /// Due date (YYYY-MM-DD).
    #[arg(long)]
    pub due: Option<NaiveDate>,
}

impl From<CreateActionArgs> for CreateActionItemRequest {
    fn from(args: CreateActionArgs) -> Self {
        CreateActionItemRequest {
            course_id: args.course,
            knowledge_point_id: args.knowledge_point,
            title: args.title,
            description: args.description,
            priority: args.priority.map(Into::into),
            due_date: args.due.map(start_of_day),
        }
    }
}

/// Flags for `actions update`. Completion is changed with `toggle`.
#[derive(Debug, Default, Args)]
pub struct UpdateActionArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long, value_enum)]
    pub priority: Option<Priority>,
    /// Due date (YYYY-MM-DD).
    #[arg(long)]
    pub due: Option<NaiveDate>,
}

impl From<UpdateActionArgs> for UpdateActionItemRequest {
    fn from(args: UpdateActionArgs) -> Self {
        UpdateActionItemRequest {
            title: args.title,
            description: args.description,
            priority: args.priority.map(Into::into),
            completed: None,
            due_date: args.due.map(start_of_day),
        }
    }
}

/// Available action item actions.
#[derive(Debug, Subcommand)]
pub enum ActionsAction {
    /// List action items grouped by priority.
    List {
        /// Only items with this priority.
        #[arg(long, value_enum)]
        priority: Option<Priority>,
        /// Completion status to show.
        #[arg(long, value_enum, default_value = "all")]
        status: Completion,
        /// List the items of one course instead of all of them.
        #[arg(long)]
        course: Option<Id>,
    },
    /// Create an action item.
    Create(CreateActionArgs),
    /// Update an action item.
    Update {
        /// Action item ID.
        id: Id,
        #[command(flatten)]
        changes: UpdateActionArgs,
    },
    /// Flip an action item between completed and pending.
    Toggle {
        /// Action item ID.
        id: Id,
    },
    /// Delete an action item.
    Delete {
        /// Action item ID.
        id: Id,
    },
    /// Show completed and pending counts.
    Stats,
}
