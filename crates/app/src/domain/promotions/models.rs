//! Promotion Models

use std::fmt;

use backoffice::{ids::TypedId, promotions::draft::PromotionPayload};
use serde::Deserialize;

/// Backend identifier of a promotion.
pub type PromotionId = TypedId<PromotionRecord>;

/// Stored promotion.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionRecord {
    #[serde(rename = "promotionId")]
    pub id: PromotionId,

    #[serde(flatten)]
    pub promotion: PromotionPayload,

    #[serde(default)]
    pub image_url: Option<String>,
}

/// Banner image uploaded alongside a promotion.
#[derive(Clone, PartialEq, Eq)]
pub struct PromotionImage {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for PromotionImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PromotionImage")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use backoffice::promotions::rules::Rule;
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn record_deserializes_flattened_payload() -> TestResult {
        let record: PromotionRecord = serde_json::from_value(json!({
            "promotionId": 12,
            "name": "Summer",
            "code": "SUMMER10",
            "startDate": "2026-06-01T00:00:00Z",
            "endDate": "2026-09-01T00:00:00Z",
            "isActive": true,
            "rules": [{ "ruleType": "PRODUCT", "ruleValue": { "productId": 42 } }],
            "actions": [{ "actionType": "FIXED_OFF", "actionValue": { "amount": 5 } }],
            "imageUrl": "https://cdn.example.com/summer.png"
        }))?;

        assert_eq!(record.id, PromotionId::new(12));
        assert_eq!(record.promotion.code, "SUMMER10");
        assert!(matches!(record.promotion.rules.first(), Some(Rule::Product { .. })));
        assert_eq!(
            record.image_url.as_deref(),
            Some("https://cdn.example.com/summer.png")
        );

        Ok(())
    }

    #[test]
    fn image_debug_omits_bytes() {
        let image = PromotionImage {
            file_name: "banner.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![137, 80, 78, 71],
        };

        assert_eq!(
            format!("{image:?}"),
            "PromotionImage { file_name: \"banner.png\", content_type: \"image/png\", len: 4 }"
        );
    }
}
