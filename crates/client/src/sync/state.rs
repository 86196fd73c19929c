use std::sync::Arc;

use serde::Serialize;
use studytrack_core::gateway::GatewayError;
use studytrack_core::tracker::{
    ActionItem, ActionItemStats, ActionItemWithCourse, Course, CourseStats, CourseTag,
    KnowledgePoint, ReviewLog, ReviewLogWithCourse, Tag, User,
};

/// Payload cached under one query key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryData {
    CurrentUser(User),
    Courses(Vec<Course>),
    Course(Course),
    CourseStats(CourseStats),
    KnowledgePoints(Vec<KnowledgePoint>),
    ActionItems(Vec<ActionItemWithCourse>),
    CourseActionItems(Vec<ActionItem>),
    ActionItemStats(ActionItemStats),
    ReviewLogs(Vec<ReviewLogWithCourse>),
    CourseReviewLogs(Vec<ReviewLog>),
    Tags(Vec<Tag>),
    CourseTags(Vec<CourseTag>),
}

/// Snapshot of one cache slot as seen by subscribers.
///
/// A failed fetch leaves only the error: `data` is dropped, so nothing fetched
/// before an invalidation is served once the refetch fails.
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    pub data: Option<Arc<QueryData>>,
    pub error: Option<GatewayError>,
    pub is_loading: bool,
    pub is_stale: bool,
}

impl QueryState {
    pub(crate) fn ready(data: QueryData) -> Self {
        Self {
            data: Some(Arc::new(data)),
            ..Self::default()
        }
    }

    pub(crate) fn failed(error: GatewayError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    /// True once a fetch for the current generation has resolved.
    pub fn is_settled(&self) -> bool {
        !self.is_loading && !self.is_stale && (self.data.is_some() || self.error.is_some())
    }

    /// Converts a settled state into a result, preferring the error.
    pub fn into_result(self) -> Result<Arc<QueryData>, GatewayError> {
        match (self.error, self.data) {
            (Some(error), _) => Err(error),
            (None, Some(data)) => Ok(data),
            (None, None) => Err(GatewayError::InvalidResponse(
                "query resolved without data".to_string(),
            )),
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        match self.data.as_deref() {
            Some(QueryData::CurrentUser(user)) => Some(user),
            _ => None,
        }
    }

    /// Cached courses; empty while absent.
    pub fn courses(&self) -> &[Course] {
        match self.data.as_deref() {
            Some(QueryData::Courses(courses)) => courses,
            _ => &[],
        }
    }

    pub fn course(&self) -> Option<&Course> {
        match self.data.as_deref() {
            Some(QueryData::Course(course)) => Some(course),
            _ => None,
        }
    }

    pub fn course_stats(&self) -> Option<CourseStats> {
        match self.data.as_deref() {
            Some(QueryData::CourseStats(stats)) => Some(*stats),
            _ => None,
        }
    }

    pub fn knowledge_points(&self) -> &[KnowledgePoint] {
        match self.data.as_deref() {
            Some(QueryData::KnowledgePoints(points)) => points,
            _ => &[],
        }
    }

    pub fn action_items(&self) -> &[ActionItemWithCourse] {
        match self.data.as_deref() {
            Some(QueryData::ActionItems(items)) => items,
            _ => &[],
        }
    }

    pub fn course_action_items(&self) -> &[ActionItem] {
        match self.data.as_deref() {
            Some(QueryData::CourseActionItems(items)) => items,
            _ => &[],
        }
    }

    pub fn action_item_stats(&self) -> Option<ActionItemStats> {
        match self.data.as_deref() {
            Some(QueryData::ActionItemStats(stats)) => Some(*stats),
            _ => None,
        }
    }

    pub fn review_logs(&self) -> &[ReviewLogWithCourse] {
        match self.data.as_deref() {
            Some(QueryData::ReviewLogs(logs)) => logs,
            _ => &[],
        }
    }

    pub fn course_review_logs(&self) -> &[ReviewLog] {
        match self.data.as_deref() {
            Some(QueryData::CourseReviewLogs(logs)) => logs,
            _ => &[],
        }
    }

    pub fn tags(&self) -> &[Tag] {
        match self.data.as_deref() {
            Some(QueryData::Tags(tags)) => tags,
            _ => &[],
        }
    }

    pub fn course_tags(&self) -> &[CourseTag] {
        match self.data.as_deref() {
            Some(QueryData::CourseTags(tags)) => tags,
            _ => &[],
        }
    }
}
