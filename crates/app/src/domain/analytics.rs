//! Sales analytics service.

use async_trait::async_trait;
use backoffice::analytics::SalesPoint;
use jiff::civil::Date;
use mockall::automock;
use reqwest::Method;
use thiserror::Error;

use crate::{
    client::{ApiClient, ApiError},
    session::Session,
};

#[derive(Debug, Error)]
pub enum AnalyticsServiceError {
    #[error("report range ends before it starts ({from} - {to})")]
    InvalidRange { from: Date, to: Date },

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Clone)]
pub struct HttpAnalyticsService {
    client: ApiClient,
}

impl HttpAnalyticsService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AnalyticsService for HttpAnalyticsService {
    #[tracing::instrument(
        name = "analytics.service.sales_report",
        skip(self, session),
        fields(from = %from, to = %to),
        err
    )]
    async fn sales_report(
        &self,
        session: &Session,
        from: Date,
        to: Date,
    ) -> Result<Vec<SalesPoint>, AnalyticsServiceError> {
        if to < from {
            return Err(AnalyticsServiceError::InvalidRange { from, to });
        }

        let request = self
            .client
            .request(Method::GET, "/analytics/sales", Some(session))
            .query(&[("from", from.to_string()), ("to", to.to_string())]);

        Ok(self.client.send_json(request).await?)
    }
}

#[automock]
#[async_trait]
pub trait AnalyticsService: Send + Sync {
    /// Daily sales between `from` and `to`, both inclusive.
    async fn sales_report(
        &self,
        session: &Session,
        from: Date,
        to: Date,
    ) -> Result<Vec<SalesPoint>, AnalyticsServiceError>;
}
