mod error;
mod operations;
mod requests;
mod types;

pub use error::ValidationError;
pub use operations::{
    filter_action_items, filter_courses, filter_review_logs_by_course,
    group_action_items_by_priority, is_overdue, percentage, progress_percentage,
    validate_create_action_item, validate_create_course, validate_create_knowledge_point,
    validate_create_review_log, validate_create_tag, validate_emotional_indicator,
    validate_update_course, validate_update_review_log, CompletionFilter, CourseFilter,
    EMOTIONAL_INDICATOR_RANGE,
};
pub use requests::{
    CourseTagRequest, CreateActionItemRequest, CreateCourseRequest, CreateKnowledgePointRequest,
    CreateReviewLogRequest, CreateTagRequest, LoginRequest, RegisterRequest,
    UpdateActionItemRequest, UpdateCourseRequest, UpdateKnowledgePointRequest,
    UpdateReviewLogRequest,
};
pub use types::{
    ActionItem, ActionItemStats, ActionItemWithCourse, AuthResponse, Course, CourseStats,
    CourseStatus, CourseTag, Id, KnowledgePoint, Priority, ReviewLog, ReviewLogWithCourse,
    SuccessResponse, Tag, User,
};
