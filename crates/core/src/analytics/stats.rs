use crate::tracker::{percentage, ActionItem, ActionItemStats, Course, CourseStats, CourseStatus};

impl CourseStats {
    /// Completed courses as a whole percentage of the total; 0 when empty.
    pub fn completion_rate(&self) -> u32 {
        percentage(self.completed, self.total)
    }
}

impl ActionItemStats {
    /// Completed items as a whole percentage of the total; 0 when empty.
    pub fn completion_rate(&self) -> u32 {
        percentage(self.completed, self.total)
    }
}

/// Counts courses by status.
pub fn course_stats<'a, I>(courses: I) -> CourseStats
where
    I: IntoIterator<Item = &'a Course>,
{
    courses
        .into_iter()
        .fold(CourseStats::default(), |mut stats, course| {
            stats.total += 1;
            match course.status {
                CourseStatus::Completed => stats.completed += 1,
                CourseStatus::InProgress => stats.in_progress += 1,
                CourseStatus::NotStarted => stats.not_started += 1,
            }
            stats
        })
}

/// Counts action items by completion.
pub fn action_item_stats<'a, I>(items: I) -> ActionItemStats
where
    I: IntoIterator<Item = &'a ActionItem>,
{
    let mut stats = ActionItemStats::default();
    for item in items {
        stats.total += 1;
        if item.completed {
            stats.completed += 1;
        }
    }
    stats.pending = stats.total - stats.completed;
    stats
}

/// Mean progress percentage across courses, rounded; 0 when empty.
pub fn average_progress<'a, I>(courses: I) -> u32
where
    I: IntoIterator<Item = &'a Course>,
{
    let (sum, count) = courses
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), course| {
            (sum + course.progress_percentage, count + 1)
        });
    if count == 0 {
        return 0;
    }
    (sum / count as f64).round() as u32
}

/// Mean emotional indicator rounded to one decimal; `None` when there are no logs.
pub fn average_emotional_score<I>(indicators: I) -> Option<f64>
where
    I: IntoIterator<Item = i32>,
{
    let (sum, count) = indicators
        .into_iter()
        .fold((0i64, 0usize), |(sum, count), indicator| {
            (sum + i64::from(indicator), count + 1)
        });
    if count == 0 {
        return None;
    }
    let mean = sum as f64 / count as f64;
    Some((mean * 10.0).round() / 10.0)
}
