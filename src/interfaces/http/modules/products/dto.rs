//! Product DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{Product, ProductDraft};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id.unwrap_or_default(),
            name: p.name,
            description: p.description,
            price: p.price,
            stock: p.stock,
            category: p.category,
            created_at: p.created_at,
        }
    }
}

/// Body for create and full-replace update. `id` and `createdAt` are
/// not part of it; if a client sends them they are ignored.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub stock: i32,
    #[validate(length(max = 50))]
    pub category: Option<String>,
}

impl From<ProductRequest> for ProductDraft {
    fn from(r: ProductRequest) -> Self {
        Self {
            name: r.name,
            description: r.description,
            price: r.price,
            stock: r.stock,
            category: r.category,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct NameSearchParams {
    /// Case-insensitive substring of the product name
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_ignores_identity_fields_and_defaults_stock() {
        let req: ProductRequest = serde_json::from_value(serde_json::json!({
            "id": 77,
            "createdAt": "2020-01-01T00:00:00Z",
            "name": "Lápiz",
            "price": 0.5
        }))
        .unwrap();

        assert_eq!(req.stock, 0);
        assert!(req.validate().is_ok());
        let draft = ProductDraft::from(req);
        assert_eq!(draft.name, "Lápiz");
        assert_eq!(draft.category, None);
    }

    #[test]
    fn request_rejects_negative_stock_and_long_category() {
        let req = ProductRequest {
            name: "Lápiz".into(),
            description: None,
            price: 0.5,
            stock: -1,
            category: Some("x".repeat(51)),
        };
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("stock"));
        assert!(fields.contains_key("category"));
    }

    #[test]
    fn dto_uses_camel_case() {
        let dto = ProductDto {
            id: 1,
            name: "Lápiz".into(),
            description: None,
            price: 0.5,
            stock: 3,
            category: None,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(dto).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}
