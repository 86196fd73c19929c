//! Derived aggregators: pure functions over cached collections.
//!
//! Nothing here fetches. Callers pass whatever the cache currently holds and an
//! absent collection is passed as an empty one.

mod calendar;
mod charts;
mod emotion;
mod stats;
mod summary;

pub use calendar::{
    month_review_count, review_dates, review_dates_in_month, CalendarDay, MonthRange, MonthView,
};
pub use charts::{
    course_progress_series, emotional_trend, platform_distribution, status_distribution,
    ProgressBar, Slice, TrendPoint, EMOTIONAL_TREND_WINDOW, PROGRESS_CHART_LIMIT,
    UNCATEGORIZED_PLATFORM,
};
pub use emotion::EmotionalBucket;
pub use stats::{action_item_stats, average_emotional_score, average_progress, course_stats};
pub use summary::AnalyticsSummary;
