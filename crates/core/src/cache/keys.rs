use std::fmt;

use crate::tracker::Id;

/// Identifies one cacheable query result: a resource tag plus its scope.
///
/// Scoped variants (e.g. [`QueryKey::CourseActionItems`]) are distinct cache
/// slots from their unscoped siblings; invalidating one never touches the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QueryKey {
    /// `GET /auth/me`
    CurrentUser,
    /// `GET /courses`
    CourseList,
    /// `GET /courses/{id}`
    Course { id: Id },
    /// `GET /courses/stats`
    CourseStats,
    /// `GET /knowledge-points/course/{course_id}`
    KnowledgePoints { course_id: Id },
    /// `GET /action-items`
    ActionItems,
    /// `GET /action-items/course/{course_id}`
    CourseActionItems { course_id: Id },
    /// `GET /action-items/stats`
    ActionItemStats,
    /// `GET /review-logs`
    ReviewLogs,
    /// `GET /review-logs/course/{course_id}`
    CourseReviewLogs { course_id: Id },
    /// `GET /tags`
    TagList,
    /// `GET /tags/course/{course_id}`
    CourseTags { course_id: Id },
}

impl QueryKey {
    /// Returns the resource tag shared by every scope of this key.
    pub fn resource(&self) -> &'static str {
        match self {
            QueryKey::CurrentUser => "user",
            QueryKey::CourseList | QueryKey::Course { .. } | QueryKey::CourseStats => "courses",
            QueryKey::KnowledgePoints { .. } => "knowledge-points",
            QueryKey::ActionItems
            | QueryKey::CourseActionItems { .. }
            | QueryKey::ActionItemStats => "action-items",
            QueryKey::ReviewLogs | QueryKey::CourseReviewLogs { .. } => "review-logs",
            QueryKey::TagList | QueryKey::CourseTags { .. } => "tags",
        }
    }

    /// Returns the course this key is scoped to, if any.
    pub fn course_scope(&self) -> Option<Id> {
        match self {
            QueryKey::Course { id } => Some(*id),
            QueryKey::KnowledgePoints { course_id }
            | QueryKey::CourseActionItems { course_id }
            | QueryKey::CourseReviewLogs { course_id }
            | QueryKey::CourseTags { course_id } => Some(*course_id),
            _ => None,
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKey::CurrentUser => write!(f, "user:me"),
            QueryKey::CourseList => write!(f, "courses"),
            QueryKey::Course { id } => write!(f, "courses:{}", id),
            QueryKey::CourseStats => write!(f, "courses:stats"),
            QueryKey::KnowledgePoints { course_id } => {
                write!(f, "knowledge-points:course:{}", course_id)
            }
            QueryKey::ActionItems => write!(f, "action-items"),
            QueryKey::CourseActionItems { course_id } => {
                write!(f, "action-items:course:{}", course_id)
            }
            QueryKey::ActionItemStats => write!(f, "action-items:stats"),
            QueryKey::ReviewLogs => write!(f, "review-logs"),
            QueryKey::CourseReviewLogs { course_id } => {
                write!(f, "review-logs:course:{}", course_id)
            }
            QueryKey::TagList => write!(f, "tags"),
            QueryKey::CourseTags { course_id } => write!(f, "tags:course:{}", course_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_display() {
        assert_eq!(QueryKey::CourseList.to_string(), "courses");
        assert_eq!(QueryKey::Course { id: 7 }.to_string(), "courses:7");
        assert_eq!(QueryKey::CourseStats.to_string(), "courses:stats");
        assert_eq!(
            QueryKey::KnowledgePoints { course_id: 3 }.to_string(),
            "knowledge-points:course:3"
        );
        assert_eq!(
            QueryKey::CourseActionItems { course_id: 3 }.to_string(),
            "action-items:course:3"
        );
        assert_eq!(QueryKey::CourseTags { course_id: 9 }.to_string(), "tags:course:9");
    }

    #[test]
    fn test_scoped_keys_are_distinct_slots() {
        let mut keys = HashSet::new();
        keys.insert(QueryKey::ActionItems);
        keys.insert(QueryKey::CourseActionItems { course_id: 1 });
        keys.insert(QueryKey::CourseActionItems { course_id: 2 });
        keys.insert(QueryKey::CourseActionItems { course_id: 1 });

        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn test_resource_groups_scopes() {
        assert_eq!(QueryKey::ActionItems.resource(), "action-items");
        assert_eq!(
            QueryKey::CourseActionItems { course_id: 1 }.resource(),
            QueryKey::ActionItemStats.resource()
        );
        assert_eq!(QueryKey::Course { id: 1 }.resource(), "courses");
    }

    #[test]
    fn test_course_scope() {
        assert_eq!(QueryKey::Course { id: 4 }.course_scope(), Some(4));
        assert_eq!(QueryKey::CourseTags { course_id: 5 }.course_scope(), Some(5));
        assert_eq!(QueryKey::TagList.course_scope(), None);
        assert_eq!(QueryKey::ReviewLogs.course_scope(), None);
    }
}
