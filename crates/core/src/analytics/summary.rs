//! Everything the analytics page shows, derived in one pass over the cached lists.

use serde::Serialize;

use crate::tracker::{
    ActionItemStats, ActionItemWithCourse, Course, CourseStats, ReviewLogWithCourse,
};

use super::{
    action_item_stats, average_emotional_score, average_progress, course_progress_series,
    course_stats, emotional_trend, platform_distribution, status_distribution, ProgressBar, Slice,
    TrendPoint,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsSummary {
    pub courses: CourseStats,
    pub average_progress: u32,
    pub action_items: ActionItemStats,
    pub review_count: usize,
    pub average_emotional_score: Option<f64>,
    pub status_distribution: Vec<Slice>,
    pub platform_distribution: Vec<Slice>,
    pub course_progress: Vec<ProgressBar>,
    pub emotional_trend: Vec<TrendPoint>,
}

impl AnalyticsSummary {
    /// Builds the summary from the user's course, action item and review log lists.
    ///
    /// `trend_window` caps how many recent reviews feed the emotional trend.
    pub fn build(
        courses: &[Course],
        action_items: &[ActionItemWithCourse],
        review_logs: &[ReviewLogWithCourse],
        trend_window: usize,
    ) -> Self {
        let course_counts = course_stats(courses);
        let logs = review_logs.iter().map(|item| &item.review_log);

        Self {
            courses: course_counts,
            average_progress: average_progress(courses),
            action_items: action_item_stats(action_items.iter().map(|item| &item.action_item)),
            review_count: review_logs.len(),
            average_emotional_score: average_emotional_score(
                review_logs
                    .iter()
                    .map(|item| item.review_log.emotional_indicator),
            ),
            status_distribution: status_distribution(&course_counts),
            platform_distribution: platform_distribution(courses),
            course_progress: course_progress_series(courses),
            emotional_trend: emotional_trend(logs, trend_window),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::{ActionItem, CourseStatus, ReviewLog};
    use chrono::NaiveDate;

    fn log(id: i64, day: u32, indicator: i32) -> ReviewLogWithCourse {
        let date = NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        ReviewLogWithCourse {
            review_log: ReviewLog::new(id, 1, format!("Review {id}"), indicator, date),
            course: None,
        }
    }

    #[test]
    fn test_empty_collections_give_zeroed_summary() {
        let summary = AnalyticsSummary::build(&[], &[], &[], 10);

        assert_eq!(summary.courses, CourseStats::default());
        assert_eq!(summary.average_progress, 0);
        assert_eq!(summary.action_items.completion_rate(), 0);
        assert_eq!(summary.average_emotional_score, None);
        assert!(summary.platform_distribution.is_empty());
        assert!(summary.emotional_trend.is_empty());
        assert_eq!(summary.status_distribution.len(), 3);
    }

    #[test]
    fn test_summary_combines_every_aggregate() {
        let courses = vec![
            Course::new(1, "Rust")
                .with_platform("Udemy")
                .with_status(CourseStatus::Completed)
                .with_chapters(10, 10),
            Course::new(2, "Go").with_chapters(0, 10),
        ];
        let items = vec![
            ActionItemWithCourse {
                action_item: ActionItem::new(1, 1, "Read").completed(),
                course: None,
            },
            ActionItemWithCourse {
                action_item: ActionItem::new(2, 1, "Write"),
                course: None,
            },
        ];
        let logs = vec![log(1, 1, 5), log(2, 3, 4), log(3, 2, 3)];

        let summary = AnalyticsSummary::build(&courses, &items, &logs, 2);

        assert_eq!(summary.courses.total, 2);
        assert_eq!(summary.courses.completed, 1);
        assert_eq!(summary.average_progress, 50);
        assert_eq!(summary.action_items.pending, 1);
        assert_eq!(summary.review_count, 3);
        assert_eq!(summary.average_emotional_score, Some(4.0));
        assert_eq!(summary.platform_distribution[1].name, "Uncategorized");

        let scores: Vec<i32> = summary.emotional_trend.iter().map(|p| p.score).collect();
        assert_eq!(scores, vec![3, 4]);
    }
}
