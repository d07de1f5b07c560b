//! Product business logic service

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};

use crate::domain::{DomainResult, Product, ProductDraft, ProductRepository};

/// Service for product operations
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> DomainResult<Vec<Product>> {
        self.repo.find_all().await
    }

    pub async fn get(&self, id: i32) -> DomainResult<Option<Product>> {
        self.repo.find_by_id(id).await
    }

    /// Persist a new product; the store assigns the id.
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create(&self, draft: ProductDraft) -> DomainResult<Product> {
        let product = self.repo.save(draft.into_product(Utc::now())).await?;
        info!(id = ?product.id, "Product created");
        Ok(product)
    }

    /// Full replace of every mutable field. `Ok(None)` when `id` is not stored.
    ///
    /// Read and write are separate store calls; concurrent updates of the
    /// same id are last-writer-wins.
    #[instrument(skip(self, draft))]
    pub async fn update(&self, id: i32, draft: ProductDraft) -> DomainResult<Option<Product>> {
        let Some(mut existing) = self.repo.find_by_id(id).await? else {
            debug!("Product not found, nothing updated");
            return Ok(None);
        };

        existing.replace_with(draft);
        let saved = self.repo.save(existing).await?;
        info!("Product updated");
        Ok(Some(saved))
    }

    /// Returns whether a record was actually removed.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> DomainResult<bool> {
        if !self.repo.exists_by_id(id).await? {
            debug!("Product not found, nothing deleted");
            return Ok(false);
        }
        self.repo.delete_by_id(id).await?;
        info!("Product deleted");
        Ok(true)
    }

    pub async fn find_by_category(&self, category: &str) -> DomainResult<Vec<Product>> {
        self.repo.find_by_category(category).await
    }

    pub async fn search_by_name(&self, needle: &str) -> DomainResult<Vec<Product>> {
        self.repo.find_by_name_containing_ignore_case(needle).await
    }

    pub async fn find_with_min_stock(&self, min: i32) -> DomainResult<Vec<Product>> {
        self.repo.find_by_stock_greater_than_equal(min).await
    }
}
