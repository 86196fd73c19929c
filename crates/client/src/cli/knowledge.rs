//! Knowledge point CLI commands.

use clap::{Args, Parser, Subcommand};
use studytrack_core::tracker::{CreateKnowledgePointRequest, Id, UpdateKnowledgePointRequest};

/// Knowledge point commands.
#[derive(Debug, Parser)]
pub struct KnowledgeCommand {
    #[command(subcommand)]
    pub action: KnowledgeAction,
}

/// Text fields shared by `create` and `update`.
#[derive(Debug, Default, Args)]
pub struct KnowledgeFields {
    #[arg(long)]
    pub content: Option<String>,
    #[arg(long)]
    pub summary: Option<String>,
    /// Personal notes.
    #[arg(long)]
    pub notes: Option<String>,
}

/// Available knowledge point actions.
#[derive(Debug, Subcommand)]
pub enum KnowledgeAction {
    /// List the knowledge points of a course.
    List {
        /// Course ID.
        #[arg(long)]
        course: Id,
    },
    /// Add a knowledge point to a course.
    Create {
        /// Course ID.
        #[arg(long)]
        course: Id,
        #[arg(long)]
        title: String,
        #[command(flatten)]
        fields: KnowledgeFields,
    },
    /// Update a knowledge point.
    Update {
        /// Knowledge point ID.
        id: Id,
        /// Course the point belongs to.
        #[arg(long)]
        course: Id,
        #[arg(long)]
        title: Option<String>,
        #[command(flatten)]
        fields: KnowledgeFields,
    },
    /// Delete a knowledge point.
    Delete {
        /// Knowledge point ID.
        id: Id,
        /// Course the point belongs to.
        #[arg(long)]
        course: Id,
    },
}

pub fn create_request(
    course: Id,
    title: String,
    fields: KnowledgeFields,
) -> CreateKnowledgePointRequest {
    CreateKnowledgePointRequest {
        content: fields.content,
        summary: fields.summary,
        personal_notes: fields.notes,
        ..CreateKnowledgePointRequest::new(course, title)
    }
}

pub fn update_request(
    title: Option<String>,
    fields: KnowledgeFields,
) -> UpdateKnowledgePointRequest {
    UpdateKnowledgePointRequest {
        title,
        content: fields.content,
        summary: fields.summary,
        personal_notes: fields.notes,
    }
}
