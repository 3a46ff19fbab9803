//! Session service.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Method;
use serde::Serialize;
use tracing::info;

use crate::{
    client::{ApiClient, ApiError},
    session::models::{Credentials, Session},
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

#[derive(Debug, Clone)]
pub struct HttpSessionService {
    client: ApiClient,
}

impl HttpSessionService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SessionService for HttpSessionService {
    #[tracing::instrument(
        name = "session.service.login",
        skip(self, credentials),
        fields(email = %credentials.email),
        err
    )]
    async fn login(&self, credentials: Credentials) -> Result<Session, ApiError> {
        let request = self
            .client
            .request(Method::POST, "/auth/login", None)
            .json(&credentials);

        let session: Session = self.client.send_json(request).await?;

        info!(user_id = session.user.id, "signed in");

        Ok(session)
    }

    #[tracing::instrument(
        name = "session.service.refresh",
        skip(self, session),
        fields(user_id = session.user.id),
        err
    )]
    async fn refresh(&self, session: &Session) -> Result<Session, ApiError> {
        let request = self
            .client
            .request(Method::POST, "/auth/refresh", None)
            .json(&RefreshRequest {
                refresh_token: session.refresh_token().expose(),
            });

        self.client.send_json(request).await
    }

    #[tracing::instrument(
        name = "session.service.logout",
        skip(self, session),
        fields(user_id = session.user.id),
        err
    )]
    async fn logout(&self, session: Session) -> Result<(), ApiError> {
        let request = self
            .client
            .request(Method::POST, "/auth/logout", Some(&session));

        self.client.send_empty(request).await?;

        info!("signed out");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait SessionService: Send + Sync {
    /// Exchange credentials for a session.
    async fn login(&self, credentials: Credentials) -> Result<Session, ApiError>;

    /// Obtain a fresh session from the refresh token.
    async fn refresh(&self, session: &Session) -> Result<Session, ApiError>;

    /// Revoke the session on the backend.
    async fn logout(&self, session: Session) -> Result<(), ApiError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::{
        session::models::Secret,
        test::{backend, session},
    };

    const SESSION: &str = r#"{
        "user": { "id": 1, "email": "admin@example.com" },
        "accessToken": "fresh-access",
        "refreshToken": "fresh-refresh"
    }"#;

    #[tokio::test]
    async fn login_posts_credentials_without_bearer() -> TestResult {
        let (client, captured) = backend(200, SESSION).await?;
        let service = HttpSessionService::new(client);

        let signed_in = service
            .login(Credentials {
                email: "admin@example.com".to_string(),
                password: Secret::new("hunter2"),
            })
            .await?;
        let request = captured.await??;

        assert_eq!(signed_in.access_token().expose(), "fresh-access");
        assert_eq!(request.method, "POST");
        assert_eq!(request.path, "/auth/login");
        assert_eq!(request.header("authorization"), None);
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&request.body)?,
            serde_json::json!({ "email": "admin@example.com", "password": "hunter2" })
        );

        Ok(())
    }

    #[tokio::test]
    async fn refresh_sends_refresh_token_and_returns_new_session() -> TestResult {
        let (client, captured) = backend(200, SESSION).await?;
        let service = HttpSessionService::new(client);

        let refreshed = service.refresh(&session()).await?;
        let request = captured.await??;

        assert_eq!(refreshed.access_token().expose(), "fresh-access");
        assert_eq!(refreshed.refresh_token().expose(), "fresh-refresh");
        assert_eq!(request.method, "POST");
        assert_eq!(request.path, "/auth/refresh");
        assert_eq!(request.header("authorization"), None);
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.body, r#"{"refreshToken":"refresh-token"}"#);

        Ok(())
    }

    #[tokio::test]
    async fn logout_revokes_with_bearer_token() -> TestResult {
        let (client, captured) = backend(204, "").await?;
        let service = HttpSessionService::new(client);

        service.logout(session()).await?;
        let request = captured.await??;

        assert_eq!(request.method, "POST");
        assert_eq!(request.path, "/auth/logout");
        assert_eq!(request.header("authorization"), Some("Bearer access-token"));
        assert!(request.body.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn expired_refresh_token_is_unauthorized() -> TestResult {
        let (client, captured) = backend(401, r#"{"message":"expired"}"#).await?;
        let service = HttpSessionService::new(client);

        let result = service.refresh(&session()).await;
        captured.await??;

        assert!(matches!(result, Err(ApiError::Unauthorized)));

        Ok(())
    }
}
