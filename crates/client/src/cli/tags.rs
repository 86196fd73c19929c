//! Tag CLI commands.

use clap::{Parser, Subcommand};
use studytrack_core::tracker::Id;

/// Tag commands.
#[derive(Debug, Parser)]
pub struct TagsCommand {
    #[command(subcommand)]
    pub action: TagsAction,
}

/// Available tag actions.
#[derive(Debug, Subcommand)]
pub enum TagsAction {
    /// List your tags, or the tags attached to one course.
    List {
        /// Course ID.
        #[arg(long)]
        course: Option<Id>,
    },
    /// Create a tag.
    Create {
        /// Tag name, unique per user.
        #[arg(long)]
        name: String,
        /// Display color, e.g. `#3b82f6`.
        #[arg(long)]
        color: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Delete a tag.
    Delete {
        /// Tag ID.
        id: Id,
    },
    /// Attach a tag to a course.
    Attach {
        /// Course ID.
        #[arg(long)]
        course: Id,
        /// Tag ID.
        #[arg(long)]
        tag: Id,
    },
    /// Detach a tag from a course.
    Detach {
        /// Course ID.
        #[arg(long)]
        course: Id,
        /// Tag ID.
        #[arg(long)]
        tag: Id,
    },
}
