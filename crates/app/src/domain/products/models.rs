//! Product Models

use backoffice::catalog::{CategoryId, Product, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product as listed in the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    #[serde(rename = "productId")]
    pub id: ProductId,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    #[serde(default)]
    pub category_id: Option<CategoryId>,

    #[serde(default)]
    pub image_url: Option<String>,
}

impl From<&ProductRecord> for Product {
    fn from(record: &ProductRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
        }
    }
}

/// Product fields sent on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn record_deserializes_with_optional_fields_missing() -> TestResult {
        let record: ProductRecord = serde_json::from_value(json!({
            "productId": 42,
            "name": "Widget",
            "price": 12.5
        }))?;

        assert_eq!(record.id, ProductId::new(42));
        assert_eq!(record.price, dec!(12.5));
        assert_eq!(record.category_id, None);
        assert_eq!(Product::from(&record).name, "Widget");

        Ok(())
    }

    #[test]
    fn new_product_omits_unset_fields() -> TestResult {
        let product = NewProduct {
            name: "Widget".to_string(),
            description: None,
            price: dec!(3.2),
            category_id: Some(CategoryId::new(4)),
        };

        assert_eq!(
            serde_json::to_value(&product)?,
            json!({ "name": "Widget", "price": 3.2, "categoryId": 4 })
        );

        Ok(())
    }
}
