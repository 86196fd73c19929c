//! Write operations and the cache keys each one declares stale on success.
//!
//! The table here is fixed and static. Notably, action item and review log
//! writes never touch the per-course lists (`action-items:course:{id}`,
//! `review-logs:course:{id}`), tag writes never touch the per-course tag lists,
//! and association writes never touch the global tag list.

use crate::tracker::{
    validate_create_action_item, validate_create_course, validate_create_knowledge_point,
    validate_create_review_log, validate_create_tag, validate_update_course,
    validate_update_review_log, CreateActionItemRequest, CreateCourseRequest,
    CreateKnowledgePointRequest, CreateReviewLogRequest, CreateTagRequest, Id,
    UpdateActionItemRequest, UpdateCourseRequest, UpdateKnowledgePointRequest,
    UpdateReviewLogRequest, ValidationError,
};

use super::QueryKey;

/// A write against the remote tracker.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    CreateCourse(CreateCourseRequest),
    UpdateCourse {
        id: Id,
        request: UpdateCourseRequest,
    },
    DeleteCourse {
        id: Id,
    },
    CreateKnowledgePoint(CreateKnowledgePointRequest),
    /// `course_id` is carried only to scope invalidation; it is not sent.
    UpdateKnowledgePoint {
        id: Id,
        course_id: Id,
        request: UpdateKnowledgePointRequest,
    },
    DeleteKnowledgePoint {
        id: Id,
        course_id: Id,
    },
    CreateActionItem(CreateActionItemRequest),
    UpdateActionItem {
        id: Id,
        request: UpdateActionItemRequest,
    },
    /// Flips completion. `completed` is the current state before the flip.
    ToggleActionItem {
        id: Id,
        completed: bool,
    },
    DeleteActionItem {
        id: Id,
    },
    CreateReviewLog(CreateReviewLogRequest),
    UpdateReviewLog {
        id: Id,
        request: UpdateReviewLogRequest,
    },
    DeleteReviewLog {
        id: Id,
    },
    CreateTag(CreateTagRequest),
    DeleteTag {
        id: Id,
    },
    AddTagToCourse {
        course_id: Id,
        tag_id: Id,
    },
    RemoveTagFromCourse {
        course_id: Id,
        tag_id: Id,
    },
}

impl Mutation {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::CreateCourse(_) => "create_course",
            Mutation::UpdateCourse { .. } => "update_course",
            Mutation::DeleteCourse { .. } => "delete_course",
            Mutation::CreateKnowledgePoint(_) => "create_knowledge_point",
            Mutation::UpdateKnowledgePoint { .. } => "update_knowledge_point",
            Mutation::DeleteKnowledgePoint { .. } => "delete_knowledge_point",
            Mutation::CreateActionItem(_) => "create_action_item",
            Mutation::UpdateActionItem { .. } => "update_action_item",
            Mutation::ToggleActionItem { .. } => "toggle_action_item",
            Mutation::DeleteActionItem { .. } => "delete_action_item",
            Mutation::CreateReviewLog(_) => "create_review_log",
            Mutation::UpdateReviewLog { .. } => "update_review_log",
            Mutation::DeleteReviewLog { .. } => "delete_review_log",
            Mutation::CreateTag(_) => "create_tag",
            Mutation::DeleteTag { .. } => "delete_tag",
            Mutation::AddTagToCourse { .. } => "add_tag_to_course",
            Mutation::RemoveTagFromCourse { .. } => "remove_tag_from_course",
        }
    }

    /// Checks the payload before it is sent.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Mutation::CreateCourse(req) => validate_create_course(req),
            Mutation::UpdateCourse { request, .. } => validate_update_course(request),
            Mutation::CreateKnowledgePoint(req) => validate_create_knowledge_point(req),
            Mutation::UpdateKnowledgePoint { request, .. } => match &request.title {
                Some(title) if title.trim().is_empty() => {
                    Err(ValidationError::EmptyTitle("Knowledge point"))
                }
                _ => Ok(()),
            },
            Mutation::CreateActionItem(req) => validate_create_action_item(req),
            Mutation::UpdateActionItem { request, .. } => match &request.title {
                Some(title) if title.trim().is_empty() => {
                    Err(ValidationError::EmptyTitle("Action item"))
                }
                _ => Ok(()),
            },
            Mutation::CreateReviewLog(req) => validate_create_review_log(req),
            Mutation::UpdateReviewLog { request, .. } => validate_update_review_log(request),
            Mutation::CreateTag(req) => validate_create_tag(req),
            Mutation::DeleteCourse { .. }
            | Mutation::DeleteKnowledgePoint { .. }
            | Mutation::ToggleActionItem { .. }
            | Mutation::DeleteActionItem { .. }
            | Mutation::DeleteReviewLog { .. }
            | Mutation::DeleteTag { .. }
            | Mutation::AddTagToCourse { .. }
            | Mutation::RemoveTagFromCourse { .. } => Ok(()),
        }
    }

    /// Returns the keys this mutation marks stale once the server accepts it.
    ///
    /// # Examples
    ///
    /// ```
    /// use studytrack_core::cache::{Mutation, QueryKey};
    ///
    /// let keys = Mutation::DeleteActionItem { id: 4 }.invalidates();
    /// assert_eq!(keys, vec![QueryKey::ActionItems, QueryKey::ActionItemStats]);
    /// ```
    pub fn invalidates(&self) -> Vec<QueryKey> {
        match self {
            Mutation::CreateCourse(_) => vec![QueryKey::CourseList, QueryKey::CourseStats],
            Mutation::UpdateCourse { id, .. } | Mutation::DeleteCourse { id } => vec![
                QueryKey::CourseList,
                QueryKey::Course { id: *id },
                QueryKey::CourseStats,
            ],
            Mutation::CreateKnowledgePoint(req) => vec![QueryKey::KnowledgePoints {
                course_id: req.course_id,
            }],
            Mutation::UpdateKnowledgePoint { course_id, .. }
            | Mutation::DeleteKnowledgePoint { course_id, .. } => vec![QueryKey::KnowledgePoints {
                course_id: *course_id,
            }],
            Mutation::CreateActionItem(_)
            | Mutation::UpdateActionItem { .. }
            | Mutation::ToggleActionItem { .. }
            | Mutation::DeleteActionItem { .. } => {
                vec![QueryKey::ActionItems, QueryKey::ActionItemStats]
            }
            Mutation::CreateReviewLog(_)
            | Mutation::UpdateReviewLog { .. }
            | Mutation::DeleteReviewLog { .. } => vec![QueryKey::ReviewLogs],
            Mutation::CreateTag(_) | Mutation::DeleteTag { .. } => vec![QueryKey::TagList],
            Mutation::AddTagToCourse { course_id, .. }
            | Mutation::RemoveTagFromCourse { course_id, .. } => vec![QueryKey::CourseTags {
                course_id: *course_id,
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_writes_invalidate_list_and_stats() {
        assert_eq!(
            Mutation::CreateCourse(CreateCourseRequest::new("Rust")).invalidates(),
            vec![QueryKey::CourseList, QueryKey::CourseStats]
        );
        assert_eq!(
            Mutation::UpdateCourse {
                id: 5,
                request: UpdateCourseRequest::new().with_title("Renamed"),
            }
            .invalidates(),
            vec![
                QueryKey::CourseList,
                QueryKey::Course { id: 5 },
                QueryKey::CourseStats
            ]
        );
        assert!(Mutation::DeleteCourse { id: 5 }
            .invalidates()
            .contains(&QueryKey::Course { id: 5 }));
    }

    #[test]
    fn test_knowledge_point_writes_are_course_scoped() {
        let keys = Mutation::CreateKnowledgePoint(CreateKnowledgePointRequest::new(3, "Ownership"))
            .invalidates();
        assert_eq!(keys, vec![QueryKey::KnowledgePoints { course_id: 3 }]);

        let keys = Mutation::DeleteKnowledgePoint { id: 9, course_id: 3 }.invalidates();
        assert_eq!(keys, vec![QueryKey::KnowledgePoints { course_id: 3 }]);
    }

    #[test]
    fn test_action_item_writes_skip_per_course_list() {
        let mutations = [
            Mutation::CreateActionItem(CreateActionItemRequest::new(2, "Ship it")),
            Mutation::UpdateActionItem {
                id: 1,
                request: UpdateActionItemRequest::default(),
            },
            Mutation::ToggleActionItem {
                id: 1,
                completed: false,
            },
            Mutation::DeleteActionItem { id: 1 },
        ];

        for mutation in mutations {
            let keys = mutation.invalidates();
            assert_eq!(
                keys,
                vec![QueryKey::ActionItems, QueryKey::ActionItemStats],
                "{}",
                mutation.name()
            );
            assert!(!keys.contains(&QueryKey::CourseActionItems { course_id: 2 }));
        }
    }

    #[test]
    fn test_review_log_writes_only_touch_global_list() {
        let keys = Mutation::CreateReviewLog(CreateReviewLogRequest::new(2, "Week 1")).invalidates();
        assert_eq!(keys, vec![QueryKey::ReviewLogs]);
        assert_eq!(
            Mutation::DeleteReviewLog { id: 1 }.invalidates(),
            vec![QueryKey::ReviewLogs]
        );
    }

    #[test]
    fn test_tag_and_association_writes_are_disjoint() {
        assert_eq!(
            Mutation::DeleteTag { id: 8 }.invalidates(),
            vec![QueryKey::TagList]
        );
        assert_eq!(
            Mutation::AddTagToCourse {
                course_id: 2,
                tag_id: 8
            }
            .invalidates(),
            vec![QueryKey::CourseTags { course_id: 2 }]
        );
        assert_eq!(
            Mutation::RemoveTagFromCourse {
                course_id: 2,
                tag_id: 8
            }
            .invalidates(),
            vec![QueryKey::CourseTags { course_id: 2 }]
        );
    }

    #[test]
    fn test_validate_rejects_bad_payloads() {
        assert_eq!(
            Mutation::CreateCourse(CreateCourseRequest::new(" ")).validate(),
            Err(ValidationError::EmptyTitle("Course"))
        );
        assert_eq!(
            Mutation::CreateReviewLog(
                CreateReviewLogRequest::new(1, "Week 1").with_emotional_indicator(0)
            )
            .validate(),
            Err(ValidationError::EmotionalIndicatorOutOfRange(0))
        );
        assert_eq!(
            Mutation::UpdateActionItem {
                id: 1,
                request: UpdateActionItemRequest {
                    title: Some(String::new()),
                    ..Default::default()
                },
            }
            .validate(),
            Err(ValidationError::EmptyTitle("Action item"))
        );
        assert!(Mutation::DeleteTag { id: 1 }.validate().is_ok());
    }

    #[test]
    fn test_no_mutation_invalidates_current_user() {
        let mutations = [
            Mutation::CreateCourse(CreateCourseRequest::new("Rust")),
            Mutation::CreateTag(CreateTagRequest::new("systems")),
            Mutation::DeleteReviewLog { id: 1 },
        ];
        for mutation in mutations {
            assert!(!mutation.invalidates().contains(&QueryKey::CurrentUser));
        }
    }
}
