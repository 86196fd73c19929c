//! Tag API operations, including course associations.

use async_trait::async_trait;
use reqwest::Method;
use studytrack_core::gateway::{Result, TagGateway};
use studytrack_core::tracker::{CourseTag, CourseTagRequest, CreateTagRequest, Id, Tag};

use super::StudytrackClient;

#[async_trait]
impl TagGateway for StudytrackClient {
    async fn list_tags(&self) -> Result<Vec<Tag>> {
        self.send(self.request(Method::GET, "/tags")).await
    }

    async fn create_tag(&self, req: &CreateTagRequest) -> Result<Tag> {
        self.send(self.request(Method::POST, "/tags").json(req)).await
    }

    async fn delete_tag(&self, id: Id) -> Result<()> {
        self.send_for_success(self.request(Method::DELETE, &format!("/tags/{}", id)))
            .await
    }

    async fn list_course_tags(&self, course_id: Id) -> Result<Vec<CourseTag>> {
        self.send(self.request(Method::GET, &format!("/tags/course/{}", course_id)))
            .await
    }

    async fn add_tag_to_course(&self, course_id: Id, tag_id: Id) -> Result<()> {
        let req = CourseTagRequest { course_id, tag_id };
        self.send_for_success(self.request(Method::POST, "/tags/course").json(&req))
            .await
    }

    async fn remove_tag_from_course(&self, course_id: Id, tag_id: Id) -> Result<()> {
        self.send_for_success(self.request(
            Method::DELETE,
            &format!("/tags/course/{}/tag/{}", course_id, tag_id),
        ))
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::extract::Path;
    use axum::routing::{delete, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use studytrack_core::gateway::TagGateway;

    use super::super::test_server;
    use crate::client::StudytrackClient;
    use crate::session::MemorySession;

    #[tokio::test]
    async fn test_course_tag_association_endpoints() {
        let router = Router::new()
            .route(
                "/api/tags/course",
                post(|Json(body): Json<Value>| async move {
                    assert_eq!(body, json!({ "course_id": 3, "tag_id": 8 }));
                    Json(json!({ "success": true }))
                }),
            )
            .route(
                "/api/tags/course/{course_id}/tag/{tag_id}",
                delete(|Path((course_id, tag_id)): Path<(i64, i64)>| async move {
                    assert_eq!((course_id, tag_id), (3, 8));
                    Json(json!({ "success": true }))
                }),
            );
        let base_url = test_server::spawn(router).await;
        let client = StudytrackClient::new(base_url, Arc::new(MemorySession::new()));

        client.add_tag_to_course(3, 8).await.unwrap();
        client.remove_tag_from_course(3, 8).await.unwrap();
    }
}
