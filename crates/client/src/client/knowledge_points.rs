//! Knowledge point API operations.

use async_trait::async_trait;
use reqwest::Method;
use studytrack_core::gateway::{KnowledgePointGateway, Result};
use studytrack_core::tracker::{
    CreateKnowledgePointRequest, Id, KnowledgePoint, UpdateKnowledgePointRequest,
};

use super::StudytrackClient;

#[async_trait]
impl KnowledgePointGateway for StudytrackClient {
    async fn list_knowledge_points(&self, course_id: Id) -> Result<Vec<KnowledgePoint>> {
        self.send(self.request(
            Method::GET,
            &format!("/knowledge-points/course/{}", course_id),
        ))
        .await
    }

    async fn create_knowledge_point(
        &self,
        req: &CreateKnowledgePointRequest,
    ) -> Result<KnowledgePoint> {
        self.send(self.request(Method::POST, "/knowledge-points").json(req))
            .await
    }

    async fn update_knowledge_point(
        &self,
        id: Id,
        req: &UpdateKnowledgePointRequest,
    ) -> Result<KnowledgePoint> {
        self.send(
            self.request(Method::PATCH, &format!("/knowledge-points/{}", id))
                .json(req),
        )
        .await
    }

    async fn delete_knowledge_point(&self, id: Id) -> Result<()> {
        self.send_for_success(self.request(Method::DELETE, &format!("/knowledge-points/{}", id)))
            .await
    }
}
