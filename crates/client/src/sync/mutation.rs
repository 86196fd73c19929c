//! Writes through the gateway, then invalidates the keys each write declares.

use std::sync::Arc;

use serde::Serialize;
use studytrack_core::cache::Mutation;
use studytrack_core::gateway::{
    ActionItemGateway, CourseGateway, KnowledgePointGateway, ReviewLogGateway, TagGateway,
    TrackerGateway,
};
use studytrack_core::tracker::{
    ActionItem, Course, KnowledgePoint, ReviewLog, Tag, UpdateActionItemRequest,
};

use super::QueryCache;
use crate::error::Result;

/// What the server returned for a successful mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MutationOutcome {
    Course(Course),
    KnowledgePoint(KnowledgePoint),
    ActionItem(ActionItem),
    ReviewLog(ReviewLog),
    Tag(Tag),
    /// Deletes and tag associations return no entity.
    Done,
}

impl MutationOutcome {
    pub fn into_course(self) -> Option<Course> {
        match self {
            MutationOutcome::Course(course) => Some(course),
            _ => None,
        }
    }

    pub fn into_knowledge_point(self) -> Option<KnowledgePoint> {
        match self {
            MutationOutcome::KnowledgePoint(point) => Some(point),
            _ => None,
        }
    }

    pub fn into_action_item(self) -> Option<ActionItem> {
        match self {
            MutationOutcome::ActionItem(item) => Some(item),
            _ => None,
        }
    }

    pub fn into_review_log(self) -> Option<ReviewLog> {
        match self {
            MutationOutcome::ReviewLog(log) => Some(log),
            _ => None,
        }
    }

    pub fn into_tag(self) -> Option<Tag> {
        match self {
            MutationOutcome::Tag(tag) => Some(tag),
            _ => None,
        }
    }
}

/// Performs writes and keeps the [`QueryCache`] honest about them.
///
/// A failed write invalidates nothing and is never retried.
#[derive(Clone)]
pub struct MutationDispatcher {
    gateway: Arc<dyn TrackerGateway>,
    cache: QueryCache,
}

impl MutationDispatcher {
    pub fn new(gateway: Arc<dyn TrackerGateway>, cache: QueryCache) -> Self {
        Self { gateway, cache }
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Validates, sends and, on success, invalidates `mutation`'s keys.
    ///
    /// The invalidation has completed by the time this returns, so any read
    /// issued afterwards observes post-write data.
    pub async fn dispatch(&self, mutation: Mutation) -> Result<MutationOutcome> {
        mutation.validate()?;
        let name = mutation.name();
        let keys = mutation.invalidates();

        match execute(self.gateway.as_ref(), mutation).await {
            Ok(outcome) => {
                self.cache.invalidate(&keys).await;
                tracing::info!(mutation = name, invalidated = keys.len(), "Mutation applied");
                Ok(outcome)
            }
            Err(error) => {
                tracing::warn!(mutation = name, error = %error, "Mutation failed");
                Err(error.into())
            }
        }
    }
}

async fn execute(
    gateway: &dyn TrackerGateway,
    mutation: Mutation,
) -> studytrack_core::gateway::Result<MutationOutcome> {
    let outcome = match mutation {
        Mutation::CreateCourse(req) => MutationOutcome::Course(gateway.create_course(&req).await?),
        Mutation::UpdateCourse { id, request } => {
            MutationOutcome::Course(gateway.update_course(id, &request).await?)
        }
        Mutation::DeleteCourse { id } => {
            gateway.delete_course(id).await?;
            MutationOutcome::Done
        }
        Mutation::CreateKnowledgePoint(req) => {
            MutationOutcome::KnowledgePoint(gateway.create_knowledge_point(&req).await?)
        }
        Mutation::UpdateKnowledgePoint { id, request, .. } => {
            MutationOutcome::KnowledgePoint(gateway.update_knowledge_point(id, &request).await?)
        }
        Mutation::DeleteKnowledgePoint { id, .. } => {
            gateway.delete_knowledge_point(id).await?;
            MutationOutcome::Done
        }
        Mutation::CreateActionItem(req) => {
            MutationOutcome::ActionItem(gateway.create_action_item(&req).await?)
        }
        Mutation::UpdateActionItem { id, request } => {
            MutationOutcome::ActionItem(gateway.update_action_item(id, &request).await?)
        }
        Mutation::ToggleActionItem { id, completed } => {
            let request = UpdateActionItemRequest::toggled(completed);
            MutationOutcome::ActionItem(gateway.update_action_item(id, &request).await?)
        }
        Mutation::DeleteActionItem { id } => {
            gateway.delete_action_item(id).await?;
            MutationOutcome::Done
        }
        Mutation::CreateReviewLog(req) => {
            MutationOutcome::ReviewLog(gateway.create_review_log(&req).await?)
        }
        Mutation::UpdateReviewLog { id, request } => {
            MutationOutcome::ReviewLog(gateway.update_review_log(id, &request).await?)
        }
        Mutation::DeleteReviewLog { id } => {
            gateway.delete_review_log(id).await?;
            MutationOutcome::Done
        }
        Mutation::CreateTag(req) => MutationOutcome::Tag(gateway.create_tag(&req).await?),
        Mutation::DeleteTag { id } => {
            gateway.delete_tag(id).await?;
            MutationOutcome::Done
        }
        Mutation::AddTagToCourse { course_id, tag_id } => {
            gateway.add_tag_to_course(course_id, tag_id).await?;
            MutationOutcome::Done
        }
        Mutation::RemoveTagFromCourse { course_id, tag_id } => {
            gateway.remove_tag_from_course(course_id, tag_id).await?;
            MutationOutcome::Done
        }
    };
    Ok(outcome)
}
