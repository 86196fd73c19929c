//! Routes a query key to the gateway call that produces its data.

use studytrack_core::cache::QueryKey;
use studytrack_core::gateway::{
    ActionItemGateway, AuthGateway, CourseGateway, KnowledgePointGateway, Result,
    ReviewLogGateway, TagGateway, TrackerGateway,
};

use super::QueryData;

pub(crate) async fn fetch_query(gateway: &dyn TrackerGateway, key: QueryKey) -> Result<QueryData> {
    let data = match key {
        QueryKey::CurrentUser => QueryData::CurrentUser(gateway.current_user().await?),
        QueryKey::CourseList => QueryData::Courses(gateway.list_courses().await?),
        QueryKey::Course { id } => QueryData::Course(gateway.get_course(id).await?),
        QueryKey::CourseStats => QueryData::CourseStats(gateway.course_stats().await?),
        QueryKey::KnowledgePoints { course_id } => {
            QueryData::KnowledgePoints(gateway.list_knowledge_points(course_id).await?)
        }
        QueryKey::ActionItems => QueryData::ActionItems(gateway.list_action_items().await?),
        QueryKey::CourseActionItems { course_id } => {
            QueryData::CourseActionItems(gateway.list_course_action_items(course_id).await?)
        }
        QueryKey::ActionItemStats => QueryData::ActionItemStats(gateway.action_item_stats().await?),
        QueryKey::ReviewLogs => QueryData::ReviewLogs(gateway.list_review_logs().await?),
        QueryKey::CourseReviewLogs { course_id } => {
            QueryData::CourseReviewLogs(gateway.list_course_review_logs(course_id).await?)
        }
        QueryKey::TagList => QueryData::Tags(gateway.list_tags().await?),
        QueryKey::CourseTags { course_id } => {
            QueryData::CourseTags(gateway.list_course_tags(course_id).await?)
        }
    };
    Ok(data)
}
