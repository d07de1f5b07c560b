//! Product domain entity

use chrono::{DateTime, Utc};

/// Inventory item.
///
/// `id` is `None` until the store assigns one on insert. Once assigned, `id`
/// and `created_at` never change: updates go through [`Product::replace_with`],
/// which only touches the mutable fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Option<i32>,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied product fields, used both for creation and for a
/// full-replace update. It has no identity and no creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub category: Option<String>,
}

impl ProductDraft {
    /// Build an unsaved product stamped with `created_at`.
    pub fn into_product(self, created_at: DateTime<Utc>) -> Product {
        Product {
            id: None,
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
            category: self.category,
            created_at,
        }
    }
}

impl Product {
    /// Overwrite every mutable field from `draft`, keeping `id` and `created_at`.
    pub fn replace_with(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.price = draft.price;
        self.stock = draft.stock;
        self.category = draft.category;
    }

    /// Case-insensitive substring match on the name.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }

    /// Exact, case-sensitive category match. Products without a category never match.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.as_deref() == Some(category)
    }

    /// Inclusive stock threshold.
    pub fn has_stock_at_least(&self, min: i32) -> bool {
        self.stock >= min
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn stored_product() -> Product {
        Product {
            id: Some(7),
            name: "Teclado mecánico".into(),
            description: Some("Switches rojos".into()),
            price: 89.9,
            stock: 12,
            category: Some("Periféricos".into()),
            created_at: Utc::now() - Duration::days(3),
        }
    }

    fn draft() -> ProductDraft {
        ProductDraft {
            name: "Ratón".into(),
            description: None,
            price: 19.5,
            stock: 0,
            category: None,
        }
    }

    #[test]
    fn into_product_has_no_id() {
        let now = Utc::now();
        let p = draft().into_product(now);
        assert_eq!(p.id, None);
        assert_eq!(p.created_at, now);
        assert_eq!(p.name, "Ratón");
    }

    #[test]
    fn replace_with_keeps_identity_and_creation_time() {
        let mut p = stored_product();
        let created_at = p.created_at;
        p.replace_with(draft());

        assert_eq!(p.id, Some(7));
        assert_eq!(p.created_at, created_at);
        assert_eq!(p.name, "Ratón");
        assert_eq!(p.price, 19.5);
    }

    #[test]
    fn replace_with_clears_omitted_optionals() {
        let mut p = stored_product();
        p.replace_with(draft());
        assert_eq!(p.description, None);
        assert_eq!(p.category, None);
        assert_eq!(p.stock, 0);
    }

    #[test]
    fn name_contains_ignores_case() {
        let p = stored_product();
        assert!(p.name_contains("TECLADO"));
        assert!(p.name_contains("mec"));
        assert!(!p.name_contains("ratón"));
    }

    #[test]
    fn in_category_is_exact() {
        let p = stored_product();
        assert!(p.in_category("Periféricos"));
        assert!(!p.in_category("periféricos"));
        assert!(!p.in_category("Perif"));
    }

    #[test]
    fn category_less_product_matches_no_category() {
        let mut p = stored_product();
        p.category = None;
        assert!(!p.in_category(""));
    }

    #[test]
    fn stock_threshold_is_inclusive() {
        let p = stored_product();
        assert!(p.has_stock_at_least(12));
        assert!(p.has_stock_at_least(0));
        assert!(!p.has_stock_at_least(13));
    }
}
