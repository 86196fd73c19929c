//! Pretty output formatting.

use chrono::NaiveDateTime;
use studytrack_core::analytics::{AnalyticsSummary, EmotionalBucket, MonthView};
use studytrack_core::tracker::{
    is_overdue, ActionItem, ActionItemStats, ActionItemWithCourse, Course, CourseStats, CourseTag,
    KnowledgePoint, Priority, ReviewLog, ReviewLogWithCourse, Tag, User,
};

use crate::sync::MutationOutcome;

const RULE_WIDTH: usize = 40;

fn header(title: &str, count: usize) -> String {
    let mut output = format!("{} ({})\n", title, count);
    output.push_str(&"-".repeat(RULE_WIDTH));
    output
}

fn push_optional(output: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        output.push_str(&format!("\n  {}: {}", label, value));
    }
}

/// Format a user for display.
pub fn format_user(user: &User) -> String {
    format!("{}\n  ID: {}\n  Email: {}", user.name, user.id, user.email)
}

/// Format a course for display.
pub fn format_course(course: &Course) -> String {
    let mut output = format!(
        "{} [{}]\n  ID: {}\n  Priority: {}\n  Progress: {}% ({}/{} chapters)",
        course.title,
        course.status.label(),
        course.id,
        course.priority.label(),
        course.progress_percentage,
        course.completed_chapters,
        course.total_chapters,
    );
    push_optional(&mut output, "Platform", course.platform.as_deref());
    push_optional(&mut output, "Instructor", course.instructor.as_deref());
    push_optional(&mut output, "URL", course.course_url.as_deref());
    push_optional(&mut output, "Description", course.description.as_deref());
    output
}

/// Format courses for display.
pub fn format_courses(courses: &[&Course]) -> String {
    if courses.is_empty() {
        return "No courses found.".to_string();
    }
    let mut output = header("COURSES", courses.len());
    for course in courses {
        output.push_str(&format!("\n{}", format_course(course)));
        output.push('\n');
    }
    output
}

pub fn format_course_stats(stats: &CourseStats) -> String {
    format!(
        "COURSES\n  Total: {}\n  Completed: {}\n  In progress: {}\n  Not started: {}\n  Completion rate: {}%",
        stats.total,
        stats.completed,
        stats.in_progress,
        stats.not_started,
        stats.completion_rate()
    )
}

/// Format a knowledge point for display.
pub fn format_knowledge_point(point: &KnowledgePoint) -> String {
    let mut output = format!(
        "{}\n  ID: {}\n  Course: {}",
        point.title, point.id, point.course_id
    );
    push_optional(&mut output, "Summary", point.summary.as_deref());
    push_optional(&mut output, "Content", point.content.as_deref());
    push_optional(&mut output, "Notes", point.personal_notes.as_deref());
    output
}

pub fn format_knowledge_points(points: &[KnowledgePoint]) -> String {
    if points.is_empty() {
        return "No knowledge points found.".to_string();
    }
    let mut output = header("KNOWLEDGE POINTS", points.len());
    for point in points {
        output.push_str(&format!("\n{}", format_knowledge_point(point)));
        output.push('\n');
    }
    output
}

/// Format an action item for display, marking it overdue relative to `now`.
pub fn format_action_item(item: &ActionItem, now: NaiveDateTime) -> String {
    let check = if item.completed { "[x]" } else { "[ ]" };
    let mut output = format!(
        "{} {}\n  ID: {}\n  Course: {}\n  Priority: {}",
        check,
        item.title,
        item.id,
        item.course_id,
        item.priority.label()
    );
    if let Some(due) = item.due_date {
        let overdue = if is_overdue(item, now) {
            " (overdue)"
        } else {
            ""
        };
        output.push_str(&format!("\n  Due: {}{}", due.date(), overdue));
    }
    push_optional(&mut output, "Description", item.description.as_deref());
    output
}

/// Format priority groups of action items, each item with its course title.
pub fn format_action_groups(
    groups: &[(Priority, Vec<&ActionItemWithCourse>)],
    now: NaiveDateTime,
) -> String {
    if groups.is_empty() {
        return "No action items found.".to_string();
    }
    let mut output = String::new();
    for (priority, items) in groups {
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&header(
            &format!("{} PRIORITY", priority.label().to_uppercase()),
            items.len(),
        ));
        for item in items {
            output.push_str(&format!("\n{}", format_action_item(&item.action_item, now)));
            if let Some(course) = &item.course {
                output.push_str(&format!("\n  Course title: {}", course.title));
            }
            output.push('\n');
        }
    }
    output
}

pub fn format_course_action_items(items: &[ActionItem], now: NaiveDateTime) -> String {
    if items.is_empty() {
        return "No action items found.".to_string();
    }
    let mut output = header("ACTION ITEMS", items.len());
    for item in items {
        output.push_str(&format!("\n{}", format_action_item(item, now)));
        output.push('\n');
    }
    output
}

pub fn format_action_item_stats(stats: &ActionItemStats) -> String {
    format!(
        "ACTION ITEMS\n  Total: {}\n  Completed: {}\n  Pending: {}\n  Completion rate: {}%",
        stats.total,
        stats.completed,
        stats.pending,
        stats.completion_rate()
    )
}

/// Format a review log for display.
pub fn format_review_log(log: &ReviewLog) -> String {
    let mut output = format!(
        "{}\n  ID: {}\n  Course: {}\n  Date: {}\n  Feeling: {}",
        log.title,
        log.id,
        log.course_id,
        log.review_date.date(),
        EmotionalBucket::from_indicator(log.emotional_indicator)
    );
    push_optional(&mut output, "Reflection", log.reflection.as_deref());
    push_optional(&mut output, "Insights", log.application_insights.as_deref());
    push_optional(&mut output, "Takeaways", log.key_takeaways.as_deref());
    output
}

pub fn format_review_logs(logs: &[&ReviewLogWithCourse]) -> String {
    if logs.is_empty() {
        return "No review logs found.".to_string();
    }
    let mut output = header("REVIEW LOGS", logs.len());
    for item in logs {
        output.push_str(&format!("\n{}", format_review_log(&item.review_log)));
        if let Some(course) = &item.course {
            output.push_str(&format!("\n  Course title: {}", course.title));
        }
        output.push('\n');
    }
    output
}

pub fn format_course_review_logs(logs: &[ReviewLog]) -> String {
    if logs.is_empty() {
        return "No review logs found.".to_string();
    }
    let mut output = header("REVIEW LOGS", logs.len());
    for log in logs {
        output.push_str(&format!("\n{}", format_review_log(log)));
        output.push('\n');
    }
    output
}

/// Format a tag for display.
pub fn format_tag(tag: &Tag) -> String {
    let mut output = format!("{}\n  ID: {}", tag.name, tag.id);
    push_optional(&mut output, "Color", tag.color.as_deref());
    push_optional(&mut output, "Category", tag.category.as_deref());
    output
}

pub fn format_tags(tags: &[Tag]) -> String {
    if tags.is_empty() {
        return "No tags found.".to_string();
    }
    let mut output = header("TAGS", tags.len());
    for tag in tags {
        output.push_str(&format!("\n{}", format_tag(tag)));
        output.push('\n');
    }
    output
}

pub fn format_course_tags(tags: &[CourseTag]) -> String {
    if tags.is_empty() {
        return "No tags attached.".to_string();
    }
    let mut output = header("COURSE TAGS", tags.len());
    for course_tag in tags {
        output.push_str(&format!("\n{}", format_tag(&course_tag.tag)));
        output.push('\n');
    }
    output
}

/// Format the entity a mutation returned, if any.
pub fn format_outcome(outcome: &MutationOutcome, now: NaiveDateTime) -> String {
    match outcome {
        MutationOutcome::Course(course) => format_course(course),
        MutationOutcome::KnowledgePoint(point) => format_knowledge_point(point),
        MutationOutcome::ActionItem(item) => format_action_item(item, now),
        MutationOutcome::ReviewLog(log) => format_review_log(log),
        MutationOutcome::Tag(tag) => format_tag(tag),
        MutationOutcome::Done => "Done.".to_string(),
    }
}

/// Format a month as a Sunday-first grid.
///
/// Days with a review are starred; today is bracketed.
pub fn format_month(view: &MonthView) -> String {
    let mut output = format!(
        "{}\n Su  Mo  Tu  We  Th  Fr  Sa",
        view.month.first.format("%B %Y")
    );
    for week in &view.weeks {
        output.push('\n');
        for cell in week {
            let text = match cell {
                None => "    ".to_string(),
                Some(day) => {
                    let mark = if day.has_review { '*' } else { ' ' };
                    let number = day.date.format("%e").to_string();
                    if day.is_today {
                        format!("[{}]", number.trim())
                    } else {
                        format!("{}{}", number, mark)
                    }
                }
            };
            output.push_str(&format!("{:<4}", text));
        }
        let trimmed = output.trim_end().len();
        output.truncate(trimmed);
    }
    output.push_str(&format!("\n\nReviews this month: {}", view.review_count));
    output
}

/// Format the analytics summary.
pub fn format_summary(summary: &AnalyticsSummary) -> String {
    let mut output = String::from("ANALYTICS\n");
    output.push_str(&"-".repeat(RULE_WIDTH));
    output.push_str(&format!(
        "\nCourses: {} ({} completed, {} in progress, {} not started)",
        summary.courses.total,
        summary.courses.completed,
        summary.courses.in_progress,
        summary.courses.not_started
    ));
    output.push_str(&format!("\nAverage progress: {}%", summary.average_progress));
    output.push_str(&format!(
        "\nAction items: {}/{} completed ({}%)",
        summary.action_items.completed,
        summary.action_items.total,
        summary.action_items.completion_rate()
    ));
    output.push_str(&format!("\nReviews: {}", summary.review_count));
    match summary.average_emotional_score {
        Some(score) => output.push_str(&format!("\nAverage feeling: {:.1}", score)),
        None => output.push_str("\nAverage feeling: n/a"),
    }

    if !summary.platform_distribution.is_empty() {
        output.push_str("\n\nPlatforms:");
        for slice in &summary.platform_distribution {
            output.push_str(&format!("\n  {}: {}", slice.name, slice.value));
        }
    }

    if !summary.course_progress.is_empty() {
        output.push_str("\n\nProgress:");
        for bar in &summary.course_progress {
            let filled = (bar.progress / 10.0).round().clamp(0.0, 10.0) as usize;
            output.push_str(&format!(
                "\n  {:<18} {}{} {}%",
                bar.name,
                "#".repeat(filled),
                ".".repeat(10 - filled),
                bar.progress
            ));
        }
    }

    if !summary.emotional_trend.is_empty() {
        output.push_str("\n\nEmotional trend:");
        for point in &summary.emotional_trend {
            output.push_str(&format!(
                "\n  {}  {} ({})",
                point.date.date(),
                point.bucket,
                point.score
            ));
        }
    }
    output
}
