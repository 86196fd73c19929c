//! Chart-ready series derived from cached collections.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::tracker::{Course, CourseStats, CourseStatus, ReviewLog};

use super::EmotionalBucket;

/// Number of most recent reviews shown in the emotional trend.
pub const EMOTIONAL_TREND_WINDOW: usize = 10;

/// Label for courses without a platform.
pub const UNCATEGORIZED_PLATFORM: &str = "Uncategorized";

/// Number of courses shown in the progress chart.
pub const PROGRESS_CHART_LIMIT: usize = 8;

const PROGRESS_TITLE_MAX_CHARS: usize = 15;

/// One point of the emotional trend, oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDateTime,
    pub score: i32,
    pub bucket: EmotionalBucket,
}

/// A named count for pie and bar charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slice {
    pub name: String,
    pub value: usize,
}

/// A course and its progress for the progress bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressBar {
    pub name: String,
    pub progress: f64,
}

/// The `window` most recent reviews in chronological order.
///
/// Reviews sharing a date keep their relative input order.
pub fn emotional_trend<'a, I>(logs: I, window: usize) -> Vec<TrendPoint>
where
    I: IntoIterator<Item = &'a ReviewLog>,
{
    let mut recent: Vec<&ReviewLog> = logs.into_iter().collect();
    recent.sort_by(|a, b| b.review_date.cmp(&a.review_date));
    recent.truncate(window);
    recent.reverse();

    recent
        .into_iter()
        .map(|log| TrendPoint {
            date: log.review_date,
            score: log.emotional_indicator,
            bucket: EmotionalBucket::from_indicator(log.emotional_indicator),
        })
        .collect()
}

/// Course counts per platform, in first-seen order.
pub fn platform_distribution<'a, I>(courses: I) -> Vec<Slice>
where
    I: IntoIterator<Item = &'a Course>,
{
    let mut slices: Vec<Slice> = Vec::new();
    for course in courses {
        let name = course
            .platform
            .as_deref()
            .map(str::trim)
            .filter(|platform| !platform.is_empty())
            .unwrap_or(UNCATEGORIZED_PLATFORM);

        match slices.iter_mut().find(|slice| slice.name == name) {
            Some(slice) => slice.value += 1,
            None => slices.push(Slice {
                name: name.to_string(),
                value: 1,
            }),
        }
    }
    slices
}

/// Completed, in-progress and not-started counts as chart slices.
pub fn status_distribution(stats: &CourseStats) -> Vec<Slice> {
    [
        (CourseStatus::Completed, stats.completed),
        (CourseStatus::InProgress, stats.in_progress),
        (CourseStatus::NotStarted, stats.not_started),
    ]
    .into_iter()
    .map(|(status, value)| Slice {
        name: status.label().to_string(),
        value,
    })
    .collect()
}

/// Progress of the first courses, with long titles shortened.
pub fn course_progress_series<'a, I>(courses: I) -> Vec<ProgressBar>
where
    I: IntoIterator<Item = &'a Course>,
{
    courses
        .into_iter()
        .take(PROGRESS_CHART_LIMIT)
        .map(|course| ProgressBar {
            name: truncate_title(&course.title),
            progress: course.progress_percentage,
        })
        .collect()
}

fn truncate_title(title: &str) -> String {
    if title.chars().count() > PROGRESS_TITLE_MAX_CHARS {
        let mut short: String = title.chars().take(PROGRESS_TITLE_MAX_CHARS).collect();
        short.push_str("...");
        short
    } else {
        title.to_string()
    }
}
