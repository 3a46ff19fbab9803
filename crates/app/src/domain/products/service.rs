//! Products service.

use async_trait::async_trait;
use backoffice::catalog::ProductId;
use mockall::automock;
use reqwest::Method;
use tracing::info;

use crate::{
    client::{ApiClient, ApiError},
    domain::products::models::{NewProduct, ProductRecord},
    session::Session,
};

#[derive(Debug, Clone)]
pub struct HttpProductsService {
    client: ApiClient,
}

impl HttpProductsService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProductsService for HttpProductsService {
    #[tracing::instrument(name = "products.service.list_products", skip(self, session), err)]
    async fn list_products(&self, session: &Session) -> Result<Vec<ProductRecord>, ApiError> {
        let request = self.client.request(Method::GET, "/products", Some(session));

        self.client.send_json(request).await
    }

    #[tracing::instrument(
        name = "products.service.get_product",
        skip(self, session),
        fields(product_id = %id),
        err
    )]
    async fn get_product(&self, session: &Session, id: ProductId) -> Result<ProductRecord, ApiError> {
        let request = self
            .client
            .request(Method::GET, &format!("/products/{id}"), Some(session));

        self.client.send_json(request).await
    }

    #[tracing::instrument(
        name = "products.service.create_product",
        skip(self, session, product),
        fields(name = %product.name),
        err
    )]
    async fn create_product(
        &self,
        session: &Session,
        product: NewProduct,
    ) -> Result<ProductRecord, ApiError> {
        let request = self
            .client
            .request(Method::POST, "/products", Some(session))
            .json(&product);

        let created: ProductRecord = self.client.send_json(request).await?;

        info!(product_id = %created.id, "created product");

        Ok(created)
    }

    #[tracing::instrument(
        name = "products.service.update_product",
        skip(self, session, product),
        fields(product_id = %id),
        err
    )]
    async fn update_product(
        &self,
        session: &Session,
        id: ProductId,
        product: NewProduct,
    ) -> Result<ProductRecord, ApiError> {
        let request = self
            .client
            .request(Method::PUT, &format!("/products/{id}"), Some(session))
            .json(&product);

        let updated = self.client.send_json(request).await?;

        info!("updated product");

        Ok(updated)
    }

    #[tracing::instrument(
        name = "products.service.delete_product",
        skip(self, session),
        fields(product_id = %id),
        err
    )]
    async fn delete_product(&self, session: &Session, id: ProductId) -> Result<(), ApiError> {
        let request = self
            .client
            .request(Method::DELETE, &format!("/products/{id}"), Some(session));

        self.client.send_empty(request).await?;

        info!("deleted product");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products.
    async fn list_products(&self, session: &Session) -> Result<Vec<ProductRecord>, ApiError>;

    /// Retrieve a single product.
    async fn get_product(&self, session: &Session, id: ProductId) -> Result<ProductRecord, ApiError>;

    /// Creates a new product.
    async fn create_product(
        &self,
        session: &Session,
        product: NewProduct,
    ) -> Result<ProductRecord, ApiError>;

    /// Replaces a product's fields.
    async fn update_product(
        &self,
        session: &Session,
        id: ProductId,
        product: NewProduct,
    ) -> Result<ProductRecord, ApiError>;

    /// Deletes a product.
    async fn delete_product(&self, session: &Session, id: ProductId) -> Result<(), ApiError>;
}
