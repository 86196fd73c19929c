use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::serde::{deserialize_datetime, deserialize_decimal, deserialize_optional_datetime};

/// Server-assigned entity identifier.
pub type Id = i64;

/// Learning status of a course. Set explicitly by the user, never derived from progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CourseStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl CourseStatus {
    /// Returns the wire value (`not-started`, `in-progress`, `completed`).
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseStatus::NotStarted => "not-started",
            CourseStatus::InProgress => "in-progress",
            CourseStatus::Completed => "completed",
        }
    }

    /// Returns the human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            CourseStatus::NotStarted => "Not started",
            CourseStatus::InProgress => "In progress",
            CourseStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority shared by courses and action items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// All priorities, highest first.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Returns the wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Returns the human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High priority",
            Priority::Medium => "Medium priority",
            Priority::Low => "Low priority",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    pub email: String,
    pub name: String,
}

/// Response of the register and login endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

/// A purchased or followed course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: Id,
    #[serde(default)]
    pub user_id: Id,
    pub title: String,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub course_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub purchase_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub status: CourseStatus,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub progress_percentage: f64,
    #[serde(default)]
    pub completed_chapters: u32,
    #[serde(default)]
    pub total_chapters: u32,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub updated_at: Option<NaiveDateTime>,
}

impl Course {
    /// Creates a course with the given id and title and default everything else.
    pub fn new(id: Id, title: impl Into<String>) -> Self {
        Self {
            id,
            user_id: 0,
            title: title.into(),
            platform: None,
            instructor: None,
            description: None,
            course_url: None,
            purchase_date: None,
            status: CourseStatus::NotStarted,
            progress_percentage: 0.0,
            completed_chapters: 0,
            total_chapters: 0,
            priority: Priority::Medium,
            created_at: None,
            updated_at: None,
        }
    }

    /// Sets the platform.
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: CourseStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets chapter counts and the matching progress percentage.
    pub fn with_chapters(mut self, completed: u32, total: u32) -> Self {
        self.completed_chapters = completed;
        self.total_chapters = total;
        self.progress_percentage = f64::from(super::progress_percentage(completed, total));
        self
    }
}

/// A unit of knowledge noted while following a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgePoint {
    pub id: Id,
    pub course_id: Id,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub personal_notes: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub updated_at: Option<NaiveDateTime>,
}

/// Something the learner intends to do with what a course taught.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub id: Id,
    pub course_id: Id,
    #[serde(default)]
    pub knowledge_point_id: Option<Id>,
    #[serde(default)]
    pub user_id: Id,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub due_date: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub completed_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub updated_at: Option<NaiveDateTime>,
}

impl ActionItem {
    /// Creates a pending, medium-priority action item.
    pub fn new(id: Id, course_id: Id, title: impl Into<String>) -> Self {
        Self {
            id,
            course_id,
            knowledge_point_id: None,
            user_id: 0,
            title: title.into(),
            description: None,
            priority: Priority::Medium,
            completed: false,
            due_date: None,
            completed_at: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due date.
    pub fn with_due_date(mut self, due_date: NaiveDateTime) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Marks the item as completed.
    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }
}

/// Action item joined with its course, as returned by the per-user listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionItemWithCourse {
    pub action_item: ActionItem,
    #[serde(default)]
    pub course: Option<Course>,
}

/// A dated reflection on a study session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewLog {
    pub id: Id,
    pub course_id: Id,
    #[serde(default)]
    pub user_id: Id,
    pub title: String,
    #[serde(default)]
    pub reflection: Option<String>,
    #[serde(default)]
    pub application_insights: Option<String>,
    #[serde(default)]
    pub key_takeaways: Option<String>,
    pub emotional_indicator: i32,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub review_date: NaiveDateTime,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub updated_at: Option<NaiveDateTime>,
}

impl ReviewLog {
    /// Creates a review log with the given indicator and date.
    pub fn new(
        id: Id,
        course_id: Id,
        title: impl Into<String>,
        emotional_indicator: i32,
        review_date: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            course_id,
            user_id: 0,
            title: title.into(),
            reflection: None,
            application_insights: None,
            key_takeaways: None,
            emotional_indicator,
            review_date,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Review log joined with its course, as returned by the per-user listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewLogWithCourse {
    pub review_log: ReviewLog,
    #[serde(default)]
    pub course: Option<Course>,
}

/// A user-defined label attachable to courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: Id,
    #[serde(default)]
    pub user_id: Id,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub created_at: Option<NaiveDateTime>,
}

/// A tag attached to a course, carrying the id of the association record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseTag {
    pub course_tag_id: Id,
    pub tag: Tag,
}

/// Course counts by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub not_started: usize,
}

/// Action item counts by completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItemStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

/// Body of delete and association endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&CourseStatus::InProgress).unwrap(),
            r#""in-progress""#
        );
        let status: CourseStatus = serde_json::from_str(r#""not-started""#).unwrap();
        assert_eq!(status, CourseStatus::NotStarted);
    }

    #[test]
    fn test_priority_ordering_is_highest_first() {
        let mut priorities = vec![Priority::Low, Priority::High, Priority::Medium];
        priorities.sort();
        assert_eq!(priorities, Priority::ALL.to_vec());
    }

    #[test]
    fn test_course_from_server_payload() {
        let json = r#"{
            "id": 7,
            "user_id": 1,
            "title": "Rust in Action",
            "platform": "Udemy",
            "instructor": null,
            "description": null,
            "course_url": null,
            "purchase_date": null,
            "status": "in-progress",
            "progress_percentage": "40.00",
            "completed_chapters": 4,
            "total_chapters": 10,
            "priority": "high",
            "created_at": "2025-01-02T09:00:00",
            "updated_at": "2025-01-03T09:00:00.512000"
        }"#;

        let course: Course = serde_json::from_str(json).unwrap();

        assert_eq!(course.id, 7);
        assert_eq!(course.status, CourseStatus::InProgress);
        assert_eq!(course.priority, Priority::High);
        assert_eq!(course.progress_percentage, 40.0);
        assert_eq!(course.platform.as_deref(), Some("Udemy"));
    }

    #[test]
    fn test_review_log_with_course_payload() {
        let json = r#"{
            "review_log": {
                "id": 3,
                "course_id": 7,
                "user_id": 1,
                "title": "Week 1",
                "emotional_indicator": 4,
                "review_date": "2025-02-28T20:15:00"
            },
            "course": null
        }"#;

        let item: ReviewLogWithCourse = serde_json::from_str(json).unwrap();

        assert_eq!(item.review_log.emotional_indicator, 4);
        assert_eq!(
            item.review_log.review_date.date(),
            chrono::NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
        assert!(item.course.is_none());
    }

    #[test]
    fn test_course_builder_keeps_progress_consistent() {
        let course = Course::new(1, "X").with_chapters(4, 10);
        assert_eq!(course.progress_percentage, 40.0);
        assert_eq!(course.completed_chapters, 4);
        assert_eq!(course.total_chapters, 10);
    }
}
