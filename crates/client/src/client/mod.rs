//! HTTP gateway for the studytrack API.
//!
//! Every resource file implements one of the gateway traits from
//! `studytrack_core::gateway` for [`StudytrackClient`].

pub mod action_items;
pub mod auth;
pub mod courses;
pub mod knowledge_points;
pub mod review_logs;
pub mod tags;

use std::fmt;
use std::sync::Arc;

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use studytrack_core::gateway::{error_from_response, GatewayError, Result};
use studytrack_core::tracker::SuccessResponse;

use crate::session::SessionProvider;

/// HTTP client for the studytrack API.
#[derive(Clone)]
pub struct StudytrackClient {
    client: reqwest::Client,
    base_url: String,
    session: Arc<dyn SessionProvider>,
}

impl fmt::Debug for StudytrackClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StudytrackClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.session.token().is_some())
            .finish()
    }
}

impl StudytrackClient {
    /// Create a new client with the given base URL (including the `/api` prefix).
    pub fn new(base_url: impl Into<String>, session: Arc<dyn SessionProvider>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a request, attaching the bearer token when the session has one.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and decode the JSON body.
    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await.map_err(transport_error)?;
        self.handle_response(response).await
    }

    /// Send a request whose body is `{"success": true}`.
    async fn send_for_success(&self, builder: RequestBuilder) -> Result<()> {
        let response: SuccessResponse = self.send(builder).await?;
        if response.success {
            Ok(())
        } else {
            Err(GatewayError::InvalidResponse(
                "server reported success: false".to_string(),
            ))
        }
    }

    /// Handle error responses.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| GatewayError::InvalidResponse(e.to_string()));
        }

        let body = response.text().await.unwrap_or_default();
        let error = error_from_response(status.as_u16(), &body);
        if error.is_unauthorized() {
            tracing::warn!(status = status.as_u16(), "Credential rejected by server");
            self.session.on_auth_failure();
        } else {
            tracing::debug!(status = status.as_u16(), error = %error, "Request rejected");
        }
        Err(error)
    }
}

fn transport_error(err: reqwest::Error) -> GatewayError {
    GatewayError::Transport(err.to_string())
}

#[cfg(test)]
pub(crate) mod test_server {
    use axum::Router;

    /// Serves `router` on an ephemeral port and returns its `/api` base URL.
    pub async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/api", addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySession;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use studytrack_core::gateway::{AuthGateway, CourseGateway};

    fn bearer(headers: &HeaderMap) -> Option<String> {
        headers
            .get("authorization")
            .and_then(|value| value.to_str().ok())
            .map(String::from)
    }

    fn router() -> Router {
        Router::new()
            .route(
                "/api/courses",
                get(|headers: HeaderMap| async move {
                    match bearer(&headers).as_deref() {
                        Some("Bearer secret") => (
                            StatusCode::OK,
                            Json(json!([{ "id": 1, "title": "Rust", "status": "in-progress" }])),
                        ),
                        _ => (
                            StatusCode::UNAUTHORIZED,
                            Json(json!({ "detail": "Not authenticated" })),
                        ),
                    }
                }),
            )
            .route(
                "/api/courses/{id}",
                get(|| async {
                    (
                        StatusCode::NOT_FOUND,
                        Json(json!({ "detail": "Course not found" })),
                    )
                })
                .delete(|| async { Json(json!({ "success": true })) }),
            )
            .route(
                "/api/auth/me",
                get(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
            )
    }

    #[tokio::test]
    async fn test_attaches_bearer_token() {
        let base_url = test_server::spawn(router()).await;
        let session = Arc::new(MemorySession::with_token("secret"));
        let client = StudytrackClient::new(base_url, session.clone());

        let courses = client.list_courses().await.unwrap();

        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].title, "Rust");
        assert_eq!(session.token().as_deref(), Some("secret"));
    }

    #[tokio::test]
    async fn test_unauthorized_clears_session() {
        let base_url = test_server::spawn(router()).await;
        let session = Arc::new(MemorySession::with_token("expired"));
        let mut failures = session.subscribe();
        let client = StudytrackClient::new(base_url, session.clone());

        let error = client.list_courses().await.unwrap_err();

        assert!(error.is_unauthorized());
        assert_eq!(error.to_string(), "Not authenticated");
        assert_eq!(session.token(), None);
        assert!(failures.try_recv().is_ok());
    }

    #[tokio::test]
    async fn test_no_token_means_no_header() {
        let base_url = test_server::spawn(router()).await;
        let client = StudytrackClient::new(base_url, Arc::new(MemorySession::new()));

        let error = client.list_courses().await.unwrap_err();

        assert!(error.is_unauthorized());
    }

    #[tokio::test]
    async fn test_detail_is_surfaced_verbatim() {
        let base_url = test_server::spawn(router()).await;
        let client = StudytrackClient::new(base_url, Arc::new(MemorySession::new()));

        let error = client.get_course(42).await.unwrap_err();

        assert_eq!(
            error,
            GatewayError::Rejected {
                status: 404,
                detail: "Course not found".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_non_json_error_body_falls_back() {
        let base_url = test_server::spawn(router()).await;
        let client = StudytrackClient::new(base_url, Arc::new(MemorySession::new()));

        let error = client.current_user().await.unwrap_err();

        assert_eq!(error.status(), Some(502));
        assert_eq!(error.to_string(), "Request failed");
    }

    #[tokio::test]
    async fn test_delete_parses_success_body() {
        let base_url = test_server::spawn(router()).await;
        let client = StudytrackClient::new(format!("{}/", base_url), Arc::new(MemorySession::new()));

        assert!(client.delete_course(1).await.is_ok());
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = StudytrackClient::new(
            format!("http://{}/api", addr),
            Arc::new(MemorySession::new()),
        );

        let error = client.list_courses().await.unwrap_err();

        assert!(matches!(error, GatewayError::Transport(_)));
    }
}
