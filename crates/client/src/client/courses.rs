//! Course API operations.

use async_trait::async_trait;
use reqwest::Method;
use studytrack_core::gateway::{CourseGateway, Result};
use studytrack_core::tracker::{
    Course, CourseStats, CreateCourseRequest, Id, UpdateCourseRequest,
};

use super::StudytrackClient;

#[async_trait]
impl CourseGateway for StudytrackClient {
    async fn list_courses(&self) -> Result<Vec<Course>> {
        self.send(self.request(Method::GET, "/courses")).await
    }

    async fn get_course(&self, id: Id) -> Result<Course> {
        self.send(self.request(Method::GET, &format!("/courses/{}", id)))
            .await
    }

    async fn course_stats(&self) -> Result<CourseStats> {
        self.send(self.request(Method::GET, "/courses/stats")).await
    }

    async fn create_course(&self, req: &CreateCourseRequest) -> Result<Course> {
        self.send(self.request(Method::POST, "/courses").json(req))
            .await
    }

    async fn update_course(&self, id: Id, req: &UpdateCourseRequest) -> Result<Course> {
        self.send(
            self.request(Method::PATCH, &format!("/courses/{}", id))
                .json(req),
        )
        .await
    }

    async fn delete_course(&self, id: Id) -> Result<()> {
        self.send_for_success(self.request(Method::DELETE, &format!("/courses/{}", id)))
            .await
    }
}
