use chrono::NaiveDateTime;

use super::error::ValidationError;
use super::requests::{
    CreateActionItemRequest, CreateCourseRequest, CreateKnowledgePointRequest,
    CreateReviewLogRequest, CreateTagRequest, UpdateCourseRequest, UpdateReviewLogRequest,
};
use super::types::{
    ActionItem, ActionItemWithCourse, Course, CourseStatus, Id, Priority, ReviewLogWithCourse,
};

/// Lowest and highest emotional indicator accepted by the server.
pub const EMOTIONAL_INDICATOR_RANGE: std::ops::RangeInclusive<i32> = 1..=5;

/// Returns `part / total` as a whole percentage, rounded half up.
///
/// A zero total yields 0 instead of dividing by zero.
pub fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u32
}

/// Progress percentage implied by chapter counts.
pub fn progress_percentage(completed_chapters: u32, total_chapters: u32) -> u32 {
    percentage(completed_chapters as usize, total_chapters as usize)
}

/// Validates a course before creation.
pub fn validate_create_course(req: &CreateCourseRequest) -> Result<(), ValidationError> {
    require_title("Course", &req.title)
}

/// Validates a partial course update.
pub fn validate_update_course(req: &UpdateCourseRequest) -> Result<(), ValidationError> {
    if let Some(title) = &req.title {
        require_title("Course", title)?;
    }
    if let (Some(completed), Some(total)) = (req.completed_chapters, req.total_chapters) {
        if completed > total {
            return Err(ValidationError::ChaptersExceedTotal { completed, total });
        }
    }
    if let Some(progress) = req.progress_percentage {
        if !(0.0..=100.0).contains(&progress) {
            return Err(ValidationError::ProgressOutOfRange);
        }
    }
    Ok(())
}

/// Validates a knowledge point before creation.
pub fn validate_create_knowledge_point(
    req: &CreateKnowledgePointRequest,
) -> Result<(), ValidationError> {
    require_title("Knowledge point", &req.title)
}

/// Validates an action item before creation.
pub fn validate_create_action_item(req: &CreateActionItemRequest) -> Result<(), ValidationError> {
    require_title("Action item", &req.title)
}

/// Validates a review log before creation.
pub fn validate_create_review_log(req: &CreateReviewLogRequest) -> Result<(), ValidationError> {
    require_title("Review log", &req.title)?;
    if let Some(indicator) = req.emotional_indicator {
        validate_emotional_indicator(indicator)?;
    }
    Ok(())
}

/// Validates a partial review log update.
pub fn validate_update_review_log(req: &UpdateReviewLogRequest) -> Result<(), ValidationError> {
    if let Some(title) = &req.title {
        require_title("Review log", title)?;
    }
    if let Some(indicator) = req.emotional_indicator {
        validate_emotional_indicator(indicator)?;
    }
    Ok(())
}

/// Validates a tag before creation.
pub fn validate_create_tag(req: &CreateTagRequest) -> Result<(), ValidationError> {
    if req.name.trim().is_empty() {
        return Err(ValidationError::EmptyTagName);
    }
    Ok(())
}

/// Checks an emotional indicator is within 1..=5.
pub fn validate_emotional_indicator(indicator: i32) -> Result<(), ValidationError> {
    if EMOTIONAL_INDICATOR_RANGE.contains(&indicator) {
        Ok(())
    } else {
        Err(ValidationError::EmotionalIndicatorOutOfRange(indicator))
    }
}

fn require_title(entity: &'static str, title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle(entity));
    }
    Ok(())
}

/// Filter applied to the course list view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilter {
    /// Case-insensitive match against title, platform, or instructor.
    pub search: Option<String>,
    pub status: Option<CourseStatus>,
    pub priority: Option<Priority>,
}

impl CourseFilter {
    /// Returns true if the course passes every set criterion.
    pub fn matches(&self, course: &Course) -> bool {
        let matches_search = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(query) => {
                let query = query.to_lowercase();
                let contains = |field: Option<&str>| {
                    field.is_some_and(|value| value.to_lowercase().contains(&query))
                };
                contains(Some(&course.title))
                    || contains(course.platform.as_deref())
                    || contains(course.instructor.as_deref())
            }
        };

        matches_search
            && self.status.is_none_or(|status| course.status == status)
            && self.priority.is_none_or(|priority| course.priority == priority)
    }
}

/// Filters courses for the list view.
pub fn filter_courses<'a>(courses: &'a [Course], filter: &CourseFilter) -> Vec<&'a Course> {
    courses.iter().filter(|course| filter.matches(course)).collect()
}

/// Completion filter for action items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompletionFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl CompletionFilter {
    pub fn matches(&self, completed: bool) -> bool {
        match self {
            CompletionFilter::All => true,
            CompletionFilter::Completed => completed,
            CompletionFilter::Pending => !completed,
        }
    }
}

/// Filters the per-user action item list by priority and completion.
pub fn filter_action_items<'a>(
    items: &'a [ActionItemWithCourse],
    priority: Option<Priority>,
    completion: CompletionFilter,
) -> Vec<&'a ActionItemWithCourse> {
    items
        .iter()
        .filter(|item| {
            priority.is_none_or(|p| item.action_item.priority == p)
                && completion.matches(item.action_item.completed)
        })
        .collect()
}

/// Groups action items by priority, highest first, skipping empty groups.
pub fn group_action_items_by_priority<'a, I>(items: I) -> Vec<(Priority, Vec<&'a ActionItemWithCourse>)>
where
    I: IntoIterator<Item = &'a ActionItemWithCourse>,
{
    let mut groups: Vec<(Priority, Vec<&'a ActionItemWithCourse>)> =
        Priority::ALL.iter().map(|p| (*p, Vec::new())).collect();

    for item in items {
        if let Some((_, group)) = groups
            .iter_mut()
            .find(|(p, _)| *p == item.action_item.priority)
        {
            group.push(item);
        }
    }

    groups.retain(|(_, group)| !group.is_empty());
    groups
}

/// An action item is overdue when its due date has passed and it is not completed.
pub fn is_overdue(item: &ActionItem, now: NaiveDateTime) -> bool {
    !item.completed && item.due_date.is_some_and(|due| due < now)
}

/// Keeps review logs belonging to `course_id`, or all of them when `None`.
pub fn filter_review_logs_by_course(
    logs: &[ReviewLogWithCourse],
    course_id: Option<Id>,
) -> Vec<&ReviewLogWithCourse> {
    logs.iter()
        .filter(|item| course_id.is_none_or(|id| item.review_log.course_id == id))
        .collect()
}
