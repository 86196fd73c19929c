use async_trait::async_trait;

use crate::tracker::{
    ActionItem, ActionItemStats, ActionItemWithCourse, AuthResponse, Course, CourseStats,
    CourseTag, CreateActionItemRequest, CreateCourseRequest, CreateKnowledgePointRequest,
    CreateReviewLogRequest, CreateTagRequest, Id, KnowledgePoint, LoginRequest, RegisterRequest,
    ReviewLog, ReviewLogWithCourse, Tag, UpdateActionItemRequest, UpdateCourseRequest,
    UpdateKnowledgePointRequest, UpdateReviewLogRequest, User,
};

use super::Result;

/// Account endpoints.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Registers a new account and returns its session token.
    async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse>;

    /// Logs in and returns a session token.
    async fn login(&self, req: &LoginRequest) -> Result<AuthResponse>;

    /// Returns the user owning the current token.
    async fn current_user(&self) -> Result<User>;
}

/// Course endpoints.
#[async_trait]
pub trait CourseGateway: Send + Sync {
    /// Lists the user's courses, most recently updated first.
    async fn list_courses(&self) -> Result<Vec<Course>>;

    /// Gets a course by its ID.
    async fn get_course(&self, id: Id) -> Result<Course>;

    /// Returns server-side course counts by status.
    async fn course_stats(&self) -> Result<CourseStats>;

    /// Creates a course.
    async fn create_course(&self, req: &CreateCourseRequest) -> Result<Course>;

    /// Applies a partial update to a course.
    async fn update_course(&self, id: Id, req: &UpdateCourseRequest) -> Result<Course>;

    /// Deletes a course.
    async fn delete_course(&self, id: Id) -> Result<()>;
}

/// Knowledge point endpoints.
#[async_trait]
pub trait KnowledgePointGateway: Send + Sync {
    /// Lists the knowledge points of a course.
    async fn list_knowledge_points(&self, course_id: Id) -> Result<Vec<KnowledgePoint>>;

    /// Creates a knowledge point.
    async fn create_knowledge_point(
        &self,
        req: &CreateKnowledgePointRequest,
    ) -> Result<KnowledgePoint>;

    /// Applies a partial update to a knowledge point.
    async fn update_knowledge_point(
        &self,
        id: Id,
        req: &UpdateKnowledgePointRequest,
    ) -> Result<KnowledgePoint>;

    /// Deletes a knowledge point.
    async fn delete_knowledge_point(&self, id: Id) -> Result<()>;
}

/// Action item endpoints.
#[async_trait]
pub trait ActionItemGateway: Send + Sync {
    /// Lists every action item of the user, joined with its course.
    async fn list_action_items(&self) -> Result<Vec<ActionItemWithCourse>>;

    /// Lists the action items of one course.
    async fn list_course_action_items(&self, course_id: Id) -> Result<Vec<ActionItem>>;

    /// Returns server-side action item counts.
    async fn action_item_stats(&self) -> Result<ActionItemStats>;

    /// Creates an action item.
    async fn create_action_item(&self, req: &CreateActionItemRequest) -> Result<ActionItem>;

    /// Applies a partial update to an action item.
    async fn update_action_item(&self, id: Id, req: &UpdateActionItemRequest)
        -> Result<ActionItem>;

    /// Deletes an action item.
    async fn delete_action_item(&self, id: Id) -> Result<()>;
}

/// Review log endpoints.
#[async_trait]
pub trait ReviewLogGateway: Send + Sync {
    /// Lists every review log of the user, newest first, joined with its course.
    async fn list_review_logs(&self) -> Result<Vec<ReviewLogWithCourse>>;

    /// Lists the review logs of one course.
    async fn list_course_review_logs(&self, course_id: Id) -> Result<Vec<ReviewLog>>;

    /// Creates a review log.
    async fn create_review_log(&self, req: &CreateReviewLogRequest) -> Result<ReviewLog>;

    /// Applies a partial update to a review log.
    async fn update_review_log(&self, id: Id, req: &UpdateReviewLogRequest) -> Result<ReviewLog>;

    /// Deletes a review log.
    async fn delete_review_log(&self, id: Id) -> Result<()>;
}

/// Tag endpoints, including course associations.
#[async_trait]
pub trait TagGateway: Send + Sync {
    /// Lists the user's tags, sorted by name.
    async fn list_tags(&self) -> Result<Vec<Tag>>;

    /// Creates a tag.
    async fn create_tag(&self, req: &CreateTagRequest) -> Result<Tag>;

    /// Deletes a tag.
    async fn delete_tag(&self, id: Id) -> Result<()>;

    /// Lists the tags attached to a course.
    async fn list_course_tags(&self, course_id: Id) -> Result<Vec<CourseTag>>;

    /// Attaches a tag to a course.
    async fn add_tag_to_course(&self, course_id: Id, tag_id: Id) -> Result<()>;

    /// Detaches a tag from a course.
    async fn remove_tag_from_course(&self, course_id: Id, tag_id: Id) -> Result<()>;
}

/// Combined trait for gateways covering every resource.
pub trait TrackerGateway:
    AuthGateway + CourseGateway + KnowledgePointGateway + ActionItemGateway + ReviewLogGateway + TagGateway
{
}

impl<T> TrackerGateway for T where
    T: AuthGateway
        + CourseGateway
        + KnowledgePointGateway
        + ActionItemGateway
        + ReviewLogGateway
        + TagGateway
{
}
