//! API request types for tracker operations.
//!
//! These types are shared between the mutation layer and the HTTP gateway.
//! Following the Functional Core pattern, these are pure data types with no I/O.
//! Optional fields are omitted from the JSON body so that PATCH requests only
//! touch what the caller set.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::types::{CourseStatus, Id, Priority};

/// Credentials for registering a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Credentials for logging in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request payload for creating a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCourseRequest {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_chapters: Option<u32>,
}

impl CreateCourseRequest {
    /// Create a new request with just a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            platform: None,
            instructor: None,
            purchase_date: None,
            course_url: None,
            description: None,
            total_chapters: None,
        }
    }

    /// Set the platform.
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// Set the instructor.
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = Some(instructor.into());
        self
    }

    /// Set the total number of chapters.
    pub fn with_total_chapters(mut self, total: u32) -> Self {
        self.total_chapters = Some(total);
        self
    }
}

/// Request payload for a partial course update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCourseRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CourseStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_chapters: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_chapters: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_url: Option<String>,
}

impl UpdateCourseRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the status.
    pub fn with_status(mut self, status: CourseStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set both chapter counts together with the progress percentage they imply.
    ///
    /// The server stores the percentage as sent, so it is always derived here
    /// rather than left for the caller to compute.
    pub fn with_chapters(mut self, completed: u32, total: u32) -> Self {
        self.completed_chapters = Some(completed);
        self.total_chapters = Some(total);
        self.progress_percentage = Some(f64::from(super::progress_percentage(completed, total)));
        self
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Request payload for creating a knowledge point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateKnowledgePointRequest {
    pub course_id: Id,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_notes: Option<String>,
}

impl CreateKnowledgePointRequest {
    /// Create a new request with a course and title.
    pub fn new(course_id: Id, title: impl Into<String>) -> Self {
        Self {
            course_id,
            title: title.into(),
            content: None,
            summary: None,
            personal_notes: None,
        }
    }
}

/// Request payload for a partial knowledge point update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateKnowledgePointRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_notes: Option<String>,
}

/// Request payload for creating an action item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateActionItemRequest {
    pub course_id: Id,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knowledge_point_id: Option<Id>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDateTime>,
}

impl CreateActionItemRequest {
    /// Create a new request with a course and title.
    pub fn new(course_id: Id, title: impl Into<String>) -> Self {
        Self {
            course_id,
            knowledge_point_id: None,
            title: title.into(),
            description: None,
            priority: None,
            due_date: None,
        }
    }

    /// Set the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Request payload for a partial action item update.
///
/// `completed` is only set through the toggle mutation; see
/// [`UpdateActionItemRequest::toggled`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateActionItemRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDateTime>,
}

impl UpdateActionItemRequest {
    /// Builds the body that flips completion from `currently_completed`.
    pub fn toggled(currently_completed: bool) -> Self {
        Self {
            completed: Some(!currently_completed),
            ..Self::default()
        }
    }
}

/// Request payload for creating a review log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateReviewLogRequest {
    pub course_id: Id,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_insights: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_takeaways: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotional_indicator: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_date: Option<NaiveDateTime>,
}

impl CreateReviewLogRequest {
    /// Create a new request with a course and title.
    pub fn new(course_id: Id, title: impl Into<String>) -> Self {
        Self {
            course_id,
            title: title.into(),
            reflection: None,
            application_insights: None,
            key_takeaways: None,
            emotional_indicator: None,
            review_date: None,
        }
    }

    /// Set the emotional indicator (1 to 5).
    pub fn with_emotional_indicator(mut self, indicator: i32) -> Self {
        self.emotional_indicator = Some(indicator);
        self
    }

    /// Set the review date.
    pub fn with_review_date(mut self, date: NaiveDateTime) -> Self {
        self.review_date = Some(date);
        self
    }
}

/// Request payload for a partial review log update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateReviewLogRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_insights: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_takeaways: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotional_indicator: Option<i32>,
}

/// Request payload for creating a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTagRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl CreateTagRequest {
    /// Create a new request with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
            category: None,
        }
    }
}

/// Request payload for attaching a tag to a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseTagRequest {
    pub course_id: Id,
    pub tag_id: Id,
}
