//! Review log API operations.

use async_trait::async_trait;
use reqwest::Method;
use studytrack_core::gateway::{Result, ReviewLogGateway};
use studytrack_core::tracker::{
    CreateReviewLogRequest, Id, ReviewLog, ReviewLogWithCourse, UpdateReviewLogRequest,
};

use super::StudytrackClient;

#[async_trait]
impl ReviewLogGateway for StudytrackClient {
    async fn list_review_logs(&self) -> Result<Vec<ReviewLogWithCourse>> {
        self.send(self.request(Method::GET, "/review-logs")).await
    }

    async fn list_course_review_logs(&self, course_id: Id) -> Result<Vec<ReviewLog>> {
        self.send(self.request(Method::GET, &format!("/review-logs/course/{}", course_id)))
            .await
    }

    async fn create_review_log(&self, req: &CreateReviewLogRequest) -> Result<ReviewLog> {
        self.send(self.request(Method::POST, "/review-logs").json(req))
            .await
    }

    async fn update_review_log(&self, id: Id, req: &UpdateReviewLogRequest) -> Result<ReviewLog> {
        self.send(
            self.request(Method::PATCH, &format!("/review-logs/{}", id))
                .json(req),
        )
        .await
    }

    async fn delete_review_log(&self, id: Id) -> Result<()> {
        self.send_for_success(self.request(Method::DELETE, &format!("/review-logs/{}", id)))
            .await
    }
}
