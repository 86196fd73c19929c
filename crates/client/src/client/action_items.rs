//! Action item API operations.

use async_trait::async_trait;
use reqwest::Method;
use studytrack_core::gateway::{ActionItemGateway, Result};
use studytrack_core::tracker::{
    ActionItem, ActionItemStats, ActionItemWithCourse, CreateActionItemRequest, Id,
    UpdateActionItemRequest,
};

use super::StudytrackClient;

#[async_trait]
impl ActionItemGateway for StudytrackClient {
    async fn list_action_items(&self) -> Result<Vec<ActionItemWithCourse>> {
        self.send(self.request(Method::GET, "/action-items")).await
    }

    async fn list_course_action_items(&self, course_id: Id) -> Result<Vec<ActionItem>> {
        self.send(self.request(Method::GET, &format!("/action-items/course/{}", course_id)))
            .await
    }

    async fn action_item_stats(&self) -> Result<ActionItemStats> {
        self.send(self.request(Method::GET, "/action-items/stats"))
            .await
    }

    async fn create_action_item(&self, req: &CreateActionItemRequest) -> Result<ActionItem> {
        self.send(self.request(Method::POST, "/action-items").json(req))
            .await
    }

    async fn update_action_item(
        &self,
        id: Id,
        req: &UpdateActionItemRequest,
    ) -> Result<ActionItem> {
        self.send(
            self.request(Method::PATCH, &format!("/action-items/{}", id))
                .json(req),
        )
        .await
    }

    async fn delete_action_item(&self, id: Id) -> Result<()> {
        self.send_for_success(self.request(Method::DELETE, &format!("/action-items/{}", id)))
            .await
    }
}
