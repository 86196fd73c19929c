//! Account API operations.

use async_trait::async_trait;
use reqwest::Method;
use studytrack_core::gateway::{AuthGateway, Result};
use studytrack_core::tracker::{AuthResponse, LoginRequest, RegisterRequest, User};

use super::StudytrackClient;

#[async_trait]
impl AuthGateway for StudytrackClient {
    async fn register(&self, req: &RegisterRequest) -> Result<AuthResponse> {
        self.send(self.request(Method::POST, "/auth/register").json(req))
            .await
    }

    async fn login(&self, req: &LoginRequest) -> Result<AuthResponse> {
        self.send(self.request(Method::POST, "/auth/login").json(req))
            .await
    }

    async fn current_user(&self) -> Result<User> {
        self.send(self.request(Method::GET, "/auth/me")).await
    }
}
