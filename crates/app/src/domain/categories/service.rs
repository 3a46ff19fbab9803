//! Categories service.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Method;
use tracing::info;

use crate::{
    client::{ApiClient, ApiError},
    domain::categories::models::{Category, CategoryId, NewCategory},
    session::Session,
};

#[derive(Debug, Clone)]
pub struct HttpCategoriesService {
    client: ApiClient,
}

impl HttpCategoriesService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CategoriesService for HttpCategoriesService {
    #[tracing::instrument(name = "categories.service.list_categories", skip(self, session), err)]
    async fn list_categories(&self, session: &Session) -> Result<Vec<Category>, ApiError> {
        let request = self
            .client
            .request(Method::GET, "/categories", Some(session));

        self.client.send_json(request).await
    }

    #[tracing::instrument(
        name = "categories.service.create_category",
        skip(self, session, category),
        fields(name = %category.name),
        err
    )]
    async fn create_category(
        &self,
        session: &Session,
        category: NewCategory,
    ) -> Result<Category, ApiError> {
        let request = self
            .client
            .request(Method::POST, "/categories", Some(session))
            .json(&category);

        let created: Category = self.client.send_json(request).await?;

        info!(category_id = %created.id, "created category");

        Ok(created)
    }

    #[tracing::instrument(
        name = "categories.service.update_category",
        skip(self, session, category),
        fields(category_id = %id),
        err
    )]
    async fn update_category(
        &self,
        session: &Session,
        id: CategoryId,
        category: NewCategory,
    ) -> Result<Category, ApiError> {
        let request = self
            .client
            .request(Method::PUT, &format!("/categories/{id}"), Some(session))
            .json(&category);

        let updated = self.client.send_json(request).await?;

        info!("updated category");

        Ok(updated)
    }

    #[tracing::instrument(
        name = "categories.service.delete_category",
        skip(self, session),
        fields(category_id = %id),
        err
    )]
    async fn delete_category(&self, session: &Session, id: CategoryId) -> Result<(), ApiError> {
        let request = self
            .client
            .request(Method::DELETE, &format!("/categories/{id}"), Some(session));

        self.client.send_empty(request).await?;

        info!("deleted category");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CategoriesService: Send + Sync {
    /// Retrieves all categories.
    async fn list_categories(&self, session: &Session) -> Result<Vec<Category>, ApiError>;

    /// Creates a new category.
    async fn create_category(
        &self,
        session: &Session,
        category: NewCategory,
    ) -> Result<Category, ApiError>;

    /// Renames a category.
    async fn update_category(
        &self,
        session: &Session,
        id: CategoryId,
        category: NewCategory,
    ) -> Result<Category, ApiError>;

    /// Deletes a category.
    async fn delete_category(&self, session: &Session, id: CategoryId) -> Result<(), ApiError>;
}
