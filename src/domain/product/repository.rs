//! Product repository interface

use async_trait::async_trait;

use super::model::Product;
use crate::domain::DomainResult;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert when `product.id` is `None`, otherwise overwrite the stored row.
    async fn save(&self, product: Product) -> DomainResult<Product>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Product>>;
    async fn find_all(&self) -> DomainResult<Vec<Product>>;
    async fn exists_by_id(&self, id: i32) -> DomainResult<bool>;
    /// No-op when nothing is stored under `id`.
    async fn delete_by_id(&self, id: i32) -> DomainResult<()>;

    async fn find_by_category(&self, category: &str) -> DomainResult<Vec<Product>>;
    async fn find_by_name_containing_ignore_case(&self, needle: &str) -> DomainResult<Vec<Product>>;
    async fn find_by_stock_greater_than_equal(&self, min: i32) -> DomainResult<Vec<Product>>;
}
