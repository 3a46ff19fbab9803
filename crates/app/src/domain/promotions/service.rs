//! Promotions service.

use async_trait::async_trait;
use backoffice::promotions::draft::PromotionPayload;
use mockall::automock;
use reqwest::{
    Method,
    multipart::{Form, Part},
};
use tracing::info;

use crate::{
    client::{ApiClient, ApiError},
    domain::promotions::models::{PromotionId, PromotionImage, PromotionRecord},
    session::Session,
};

/// Build the multipart body for create and update.
///
/// The promotion travels as a JSON `data` part; the optional banner as an
/// `image` file part.
///
/// # Errors
///
/// Returns an error when the payload cannot be encoded or a content type is
/// not a valid MIME type.
pub fn promotion_form(
    payload: &PromotionPayload,
    image: Option<PromotionImage>,
) -> Result<Form, ApiError> {
    let data = Part::text(serde_json::to_string(payload)?).mime_str("application/json")?;

    let form = Form::new().part("data", data);

    let Some(image) = image else {
        return Ok(form);
    };

    let image = Part::bytes(image.bytes)
        .file_name(image.file_name)
        .mime_str(&image.content_type)?;

    Ok(form.part("image", image))
}

#[derive(Debug, Clone)]
pub struct HttpPromotionsService {
    client: ApiClient,
}

impl HttpPromotionsService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PromotionsService for HttpPromotionsService {
    #[tracing::instrument(name = "promotions.service.list_promotions", skip(self, session), err)]
    async fn list_promotions(&self, session: &Session) -> Result<Vec<PromotionRecord>, ApiError> {
        let request = self
            .client
            .request(Method::GET, "/promotions", Some(session));

        self.client.send_json(request).await
    }

    #[tracing::instrument(
        name = "promotions.service.get_promotion",
        skip(self, session),
        fields(promotion_id = %id),
        err
    )]
    async fn get_promotion(
        &self,
        session: &Session,
        id: PromotionId,
    ) -> Result<PromotionRecord, ApiError> {
        let request = self
            .client
            .request(Method::GET, &format!("/promotions/{id}"), Some(session));

        self.client.send_json(request).await
    }

    #[tracing::instrument(
        name = "promotions.service.create_promotion",
        skip(self, session, promotion, image),
        fields(
            code = %promotion.code,
            line_count = promotion.rules.len(),
            has_image = image.is_some()
        ),
        err
    )]
    async fn create_promotion(
        &self,
        session: &Session,
        promotion: PromotionPayload,
        image: Option<PromotionImage>,
    ) -> Result<PromotionRecord, ApiError> {
        let request = self
            .client
            .request(Method::POST, "/promotions", Some(session))
            .multipart(promotion_form(&promotion, image)?);

        let created: PromotionRecord = self.client.send_json(request).await?;

        info!(promotion_id = %created.id, "created promotion");

        Ok(created)
    }

    #[tracing::instrument(
        name = "promotions.service.update_promotion",
        skip(self, session, promotion, image),
        fields(
            promotion_id = %id,
            line_count = promotion.rules.len(),
            has_image = image.is_some()
        ),
        err
    )]
    async fn update_promotion(
        &self,
        session: &Session,
        id: PromotionId,
        promotion: PromotionPayload,
        image: Option<PromotionImage>,
    ) -> Result<PromotionRecord, ApiError> {
        let request = self
            .client
            .request(Method::PUT, &format!("/promotions/{id}"), Some(session))
            .multipart(promotion_form(&promotion, image)?);

        let updated = self.client.send_json(request).await?;

        info!("updated promotion");

        Ok(updated)
    }

    #[tracing::instrument(
        name = "promotions.service.delete_promotion",
        skip(self, session),
        fields(promotion_id = %id),
        err
    )]
    async fn delete_promotion(&self, session: &Session, id: PromotionId) -> Result<(), ApiError> {
        let request = self
            .client
            .request(Method::DELETE, &format!("/promotions/{id}"), Some(session));

        self.client.send_empty(request).await?;

        info!("deleted promotion");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait PromotionsService: Send + Sync {
    /// Retrieves all promotions.
    async fn list_promotions(&self, session: &Session) -> Result<Vec<PromotionRecord>, ApiError>;

    /// Retrieve a single promotion.
    async fn get_promotion(
        &self,
        session: &Session,
        id: PromotionId,
    ) -> Result<PromotionRecord, ApiError>;

    /// Creates a promotion, optionally with a banner image.
    async fn create_promotion(
        &self,
        session: &Session,
        promotion: PromotionPayload,
        image: Option<PromotionImage>,
    ) -> Result<PromotionRecord, ApiError>;

    /// Replaces a promotion and all of its lines.
    async fn update_promotion(
        &self,
        session: &Session,
        id: PromotionId,
        promotion: PromotionPayload,
        image: Option<PromotionImage>,
    ) -> Result<PromotionRecord, ApiError>;

    /// Deletes a promotion.
    async fn delete_promotion(&self, session: &Session, id: PromotionId) -> Result<(), ApiError>;
}

#[cfg(test)]
mod tests {
    use backoffice::promotions::{
        codec::{ActionInput, RuleInput},
        draft::PromotionDraft,
    };
    use testresult::TestResult;

    use super::*;
    use crate::test::{backend, session};

    const RECORD: &str = r#"{
        "promotionId": 9,
        "name": "Summer",
        "code": "SUMMER10",
        "startDate": "2026-06-01T00:00:00Z",
        "endDate": "2026-09-01T00:00:00Z",
        "isActive": true,
        "rules": [{ "ruleType": "PRODUCT", "ruleValue": { "productId": 42 } }],
        "actions": [{ "actionType": "FIXED_OFF", "actionValue": { "amount": 5 } }]
    }"#;

    fn payload() -> TestResult<PromotionPayload> {
        let mut draft = PromotionDraft::new(
            "Summer",
            "SUMMER10",
            "2026-06-01T00:00:00Z".parse()?,
            "2026-09-01T00:00:00Z".parse()?,
        );

        draft
            .pairs
            .try_add(&RuleInput::product("42"), &ActionInput::fixed_off("5"))?;

        Ok(draft.to_payload()?)
    }

    #[test]
    fn invalid_image_content_type_is_rejected() -> TestResult {
        let image = PromotionImage {
            file_name: "banner.png".to_string(),
            content_type: "not a mime type".to_string(),
            bytes: vec![1, 2, 3],
        };

        assert!(matches!(
            promotion_form(&payload()?, Some(image)),
            Err(ApiError::Http(_))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn create_posts_payload_as_json_data_part() -> TestResult {
        let (client, captured) = backend(201, RECORD).await?;
        let service = HttpPromotionsService::new(client);

        let created = service.create_promotion(&session(), payload()?, None).await?;
        let request = captured.await??;

        assert_eq!(created.id, PromotionId::new(9));
        assert_eq!(request.method, "POST");
        assert_eq!(request.path, "/promotions");
        assert_eq!(request.header("authorization"), Some("Bearer access-token"));
        assert!(
            request
                .header("content-type")
                .is_some_and(|value| value.starts_with("multipart/form-data; boundary="))
        );
        assert!(request.body.contains(r#"name="data""#));
        assert!(request.body.contains("application/json"));
        assert!(request.body.contains(r#""code":"SUMMER10""#));
        assert!(request.body.contains(r#""startDate":"2026-06-01T00:00:00Z""#));
        assert!(request.body.contains(r#""ruleType":"PRODUCT""#));
        assert!(request.body.contains(r#""actionType":"FIXED_OFF""#));
        assert!(!request.body.contains(r#"name="image""#));

        Ok(())
    }

    #[tokio::test]
    async fn update_puts_payload_and_banner_image() -> TestResult {
        let (client, captured) = backend(200, RECORD).await?;
        let service = HttpPromotionsService::new(client);

        let image = PromotionImage {
            file_name: "banner.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: b"png-bytes".to_vec(),
        };

        let updated = service
            .update_promotion(&session(), PromotionId::new(9), payload()?, Some(image))
            .await?;
        let request = captured.await??;

        assert_eq!(updated.promotion.code, "SUMMER10");
        assert_eq!(request.method, "PUT");
        assert_eq!(request.path, "/promotions/9");
        assert!(request.body.contains(r#"name="data""#));
        assert!(request.body.contains(r#"name="image"; filename="banner.png""#));
        assert!(request.body.contains("image/png"));
        assert!(request.body.contains("png-bytes"));

        Ok(())
    }

    #[tokio::test]
    async fn rejected_create_surfaces_backend_message() -> TestResult {
        let (client, captured) =
            backend(409, r#"{"message":"Promotion code already exists"}"#).await?;
        let service = HttpPromotionsService::new(client);

        let result = service.create_promotion(&session(), payload()?, None).await;
        captured.await??;

        assert!(matches!(
            result,
            Err(ApiError::Status { status: 409, ref message }) if message == "Promotion code already exists"
        ));

        Ok(())
    }
}
