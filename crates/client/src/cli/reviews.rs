//! Review log CLI commands.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use studytrack_core::analytics::MonthRange;
use studytrack_core::tracker::{CreateReviewLogRequest, Id, UpdateReviewLogRequest};

use super::{parse_month, start_of_day};

/// Review log commands.
#[derive(Debug, Parser)]
pub struct ReviewsCommand {
    #[command(subcommand)]
    pub action: ReviewsAction,
}

/// Reflection fields shared by `create` and `update`.
#[derive(Debug, Default, Args)]
pub struct ReflectionFields {
    #[arg(long)]
    pub reflection: Option<String>,
    /// How the material applies in practice.
    #[arg(long)]
    pub insights: Option<String>,
    #[arg(long)]
    pub takeaways: Option<String>,
    /// How the session felt, from 1 to 5; higher is better.
    #[arg(long)]
    pub emotion: Option<i32>,
}

/// Available review log actions.
#[derive(Debug, Subcommand)]
pub enum ReviewsAction {
    /// List review logs, newest first.
    List {
        /// Only logs of this course.
        #[arg(long)]
        course: Option<Id>,
    },
    /// Record a review.
    Create {
        /// Course ID.
        #[arg(long)]
        course: Id,
        #[arg(long)]
        title: String,
        /// Review date (YYYY-MM-DD); the server uses today when omitted.
        #[arg(long)]
        date: Option<NaiveDate>,
        #[command(flatten)]
        fields: ReflectionFields,
    },
    /// Update a review log.
    Update {
        /// Review log ID.
        id: Id,
        #[arg(long)]
        title: Option<String>,
        #[command(flatten)]
        fields: ReflectionFields,
    },
    /// Delete a review log.
    Delete {
        /// Review log ID.
        id: Id,
    },
    /// Show which days of a month have reviews.
    Calendar {
        /// Month to show (YYYY-MM); defaults to the current month.
        #[arg(long, value_parser = parse_month)]
        month: Option<MonthRange>,
    },
}

pub fn create_request(
    course: Id,
    title: String,
    date: Option<NaiveDate>,
    fields: ReflectionFields,
) -> CreateReviewLogRequest {
    CreateReviewLogRequest {
        reflection: fields.reflection,
        application_insights: fields.insights,
        key_takeaways: fields.takeaways,
        emotional_indicator: fields.emotion,
        review_date: date.map(start_of_day),
        ..CreateReviewLogRequest::new(course, title)
    }
}

pub fn update_request(title: Option<String>, fields: ReflectionFields) -> UpdateReviewLogRequest {
    UpdateReviewLogRequest {
        title,
        reflection: fields.reflection,
        application_insights: fields.insights,
        key_takeaways: fields.takeaways,
        emotional_indicator: fields.emotion,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_calendar_month_is_parsed() {
        let cli =
            Cli::try_parse_from(["studytrack-client", "reviews", "calendar", "--month", "2024-03"])
                .unwrap();

        let Commands::Reviews(ReviewsCommand {
            action: ReviewsAction::Calendar { month: Some(month) },
        }) = cli.command
        else {
            panic!("expected reviews calendar");
        };
        assert_eq!(month.first, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_create_request_leaves_unset_fields_for_server_defaults() {
        let request = create_request(1, "Week 1".to_string(), None, ReflectionFields::default());

        assert_eq!(request.emotional_indicator, None);
        assert_eq!(request.review_date, None);
    }
}
