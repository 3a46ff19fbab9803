//! Spin-the-wheel service.

use async_trait::async_trait;
use backoffice::wheel::{WheelConfig, WheelConfigError};
use mockall::automock;
use reqwest::Method;
use thiserror::Error;
use tracing::info;

use crate::{
    client::{ApiClient, ApiError},
    session::Session,
};

#[derive(Debug, Error)]
pub enum WheelServiceError {
    #[error("invalid wheel configuration: {0}")]
    Invalid(#[from] WheelConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Clone)]
pub struct HttpWheelService {
    client: ApiClient,
}

impl HttpWheelService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WheelService for HttpWheelService {
    #[tracing::instrument(name = "wheel.service.get_wheel", skip(self, session), err)]
    async fn get_wheel(&self, session: &Session) -> Result<WheelConfig, WheelServiceError> {
        let request = self.client.request(Method::GET, "/wheel", Some(session));

        Ok(self.client.send_json(request).await?)
    }

    #[tracing::instrument(
        name = "wheel.service.update_wheel",
        skip(self, session, wheel),
        fields(enabled = wheel.enabled, segment_count = wheel.segments.len()),
        err
    )]
    async fn update_wheel(
        &self,
        session: &Session,
        wheel: WheelConfig,
    ) -> Result<WheelConfig, WheelServiceError> {
        wheel.validate()?;

        let request = self
            .client
            .request(Method::PUT, "/wheel", Some(session))
            .json(&wheel);

        let updated = self.client.send_json(request).await?;

        info!("updated wheel");

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait WheelService: Send + Sync {
    /// Retrieve the current wheel configuration.
    async fn get_wheel(&self, session: &Session) -> Result<WheelConfig, WheelServiceError>;

    /// Validate and store a wheel configuration.
    async fn update_wheel(
        &self,
        session: &Session,
        wheel: WheelConfig,
    ) -> Result<WheelConfig, WheelServiceError>;
}
