//! Reels service.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Method;
use thiserror::Error;
use tracing::info;

use crate::{
    client::{ApiClient, ApiError},
    domain::reels::models::{NewReel, Reel, ReelError, ReelId},
    session::Session,
};

#[derive(Debug, Error)]
pub enum ReelsServiceError {
    #[error(transparent)]
    Invalid(#[from] ReelError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Clone)]
pub struct HttpReelsService {
    client: ApiClient,
}

impl HttpReelsService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReelsService for HttpReelsService {
    #[tracing::instrument(name = "reels.service.list_reels", skip(self, session), err)]
    async fn list_reels(&self, session: &Session) -> Result<Vec<Reel>, ReelsServiceError> {
        let request = self.client.request(Method::GET, "/reels", Some(session));

        Ok(self.client.send_json(request).await?)
    }

    #[tracing::instrument(
        name = "reels.service.create_reel",
        skip(self, session, reel),
        fields(title = %reel.title),
        err
    )]
    async fn create_reel(&self, session: &Session, reel: NewReel) -> Result<Reel, ReelsServiceError> {
        reel.validate()?;

        let request = self
            .client
            .request(Method::POST, "/reels", Some(session))
            .json(&reel);

        let created: Reel = self.client.send_json(request).await?;

        info!(reel_id = %created.id, "created reel");

        Ok(created)
    }

    #[tracing::instrument(
        name = "reels.service.delete_reel",
        skip(self, session),
        fields(reel_id = %id),
        err
    )]
    async fn delete_reel(&self, session: &Session, id: ReelId) -> Result<(), ReelsServiceError> {
        let request = self
            .client
            .request(Method::DELETE, &format!("/reels/{id}"), Some(session));

        self.client.send_empty(request).await?;

        info!("deleted reel");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ReelsService: Send + Sync {
    /// Retrieves all reels.
    async fn list_reels(&self, session: &Session) -> Result<Vec<Reel>, ReelsServiceError>;

    /// Validates and uploads a reel.
    async fn create_reel(&self, session: &Session, reel: NewReel) -> Result<Reel, ReelsServiceError>;

    /// Deletes a reel.
    async fn delete_reel(&self, session: &Session, id: ReelId) -> Result<(), ReelsServiceError>;
}
