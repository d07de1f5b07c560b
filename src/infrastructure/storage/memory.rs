//! In-memory storage implementation

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{
    DomainResult, Product, ProductRepository, RepositoryProvider, Task, TaskRepository,
};

/// Id-keyed table with a monotonically increasing sequence.
struct Table<T> {
    rows: DashMap<i32, T>,
    sequence: AtomicI32,
}

impl<T: Clone> Table<T> {
    fn new() -> Self {
        Self {
            rows: DashMap::new(),
            sequence: AtomicI32::new(1),
        }
    }

    /// Reserve the id for a new row, or keep the caller's id and move the
    /// sequence past it.
    fn assign_id(&self, id: Option<i32>) -> i32 {
        match id {
            Some(id) => {
                self.sequence.fetch_max(id.saturating_add(1), Ordering::SeqCst);
                id
            }
            None => self.sequence.fetch_add(1, Ordering::SeqCst),
        }
    }

    fn get(&self, id: i32) -> Option<T> {
        self.rows.get(&id).map(|row| row.value().clone())
    }

    /// Snapshot of matching rows, ordered by id.
    fn select(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        let mut rows: Vec<(i32, T)> = self
            .rows
            .iter()
            .filter(|e| predicate(e.value()))
            .map(|e| (*e.key(), e.value().clone()))
            .collect();
        rows.sort_by_key(|(id, _)| *id);
        rows.into_iter().map(|(_, row)| row).collect()
    }
}

// ── Products ────────────────────────────────────────────────────

/// In-memory product store for development and testing
pub struct InMemoryProductRepository {
    table: Table<Product>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self { table: Table::new() }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn save(&self, mut product: Product) -> DomainResult<Product> {
        let id = self.table.assign_id(product.id);
        product.id = Some(id);
        self.table.rows.insert(id, product.clone());
        Ok(product)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Product>> {
        Ok(self.table.get(id))
    }

    async fn find_all(&self) -> DomainResult<Vec<Product>> {
        Ok(self.table.select(|_| true))
    }

    async fn exists_by_id(&self, id: i32) -> DomainResult<bool> {
        Ok(self.table.rows.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i32) -> DomainResult<()> {
        self.table.rows.remove(&id);
        Ok(())
    }

    async fn find_by_category(&self, category: &str) -> DomainResult<Vec<Product>> {
        Ok(self.table.select(|p| p.in_category(category)))
    }

    async fn find_by_name_containing_ignore_case(&self, needle: &str) -> DomainResult<Vec<Product>> {
        Ok(self.table.select(|p| p.name_contains(needle)))
    }

    async fn find_by_stock_greater_than_equal(&self, min: i32) -> DomainResult<Vec<Product>> {
        Ok(self.table.select(|p| p.has_stock_at_least(min)))
    }
}

// ── Tasks ───────────────────────────────────────────────────────

/// In-memory task store for development and testing
pub struct InMemoryTaskRepository {
    table: Table<Task>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self { table: Table::new() }
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn save(&self, mut task: Task) -> DomainResult<Task> {
        let id = self.table.assign_id(task.id);
        task.id = Some(id);
        self.table.rows.insert(id, task.clone());
        Ok(task)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Task>> {
        Ok(self.table.get(id))
    }

    async fn find_all(&self) -> DomainResult<Vec<Task>> {
        Ok(self.table.select(|_| true))
    }

    async fn exists_by_id(&self, id: i32) -> DomainResult<bool> {
        Ok(self.table.rows.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i32) -> DomainResult<()> {
        self.table.rows.remove(&id);
        Ok(())
    }
}

// ── Provider ────────────────────────────────────────────────────

/// Repository provider backed by process memory. Nothing survives a restart.
#[derive(Clone)]
pub struct InMemoryRepositoryProvider {
    products: Arc<InMemoryProductRepository>,
    tasks: Arc<InMemoryTaskRepository>,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        Self {
            products: Arc::new(InMemoryProductRepository::new()),
            tasks: Arc::new(InMemoryTaskRepository::new()),
        }
    }
}

impl Default for InMemoryRepositoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
    fn products(&self) -> Arc<dyn ProductRepository> {
        self.products.clone()
    }

    fn tasks(&self) -> Arc<dyn TaskRepository> {
        self.tasks.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::domain::ProductDraft;

    fn product(name: &str, stock: i32, category: Option<&str>) -> Product {
        ProductDraft {
            name: name.into(),
            description: None,
            price: 10.0,
            stock,
            category: category.map(String::from),
        }
        .into_product(Utc::now())
    }

    #[tokio::test]
    async fn save_assigns_sequential_ids() {
        let repo = InMemoryProductRepository::new();
        let a = repo.save(product("A", 1, None)).await.unwrap();
        let b = repo.save(product("B", 1, None)).await.unwrap();
        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));
    }

    #[tokio::test]
    async fn save_with_id_overwrites() {
        let repo = InMemoryProductRepository::new();
        let mut saved = repo.save(product("A", 1, None)).await.unwrap();
        saved.stock = 99;
        repo.save(saved.clone()).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].stock, 99);
    }

    #[tokio::test]
    async fn save_with_max_id_does_not_overflow() {
        let repo = InMemoryProductRepository::new();
        let mut p = product("Borde", 1, None);
        p.id = Some(i32::MAX);

        let saved = repo.save(p).await.unwrap();
        assert_eq!(saved.id, Some(i32::MAX));
        assert!(repo.exists_by_id(i32::MAX).await.unwrap());
    }

    #[tokio::test]
    async fn explicit_id_moves_sequence_forward() {
        let repo = InMemoryTaskRepository::new();
        let task = Task {
            id: Some(10),
            title: "Importada".into(),
            description: None,
            completed: false,
            created_at: Utc::now(),
        };
        repo.save(task).await.unwrap();

        let next = repo
            .save(Task {
                id: None,
                title: "Nueva".into(),
                description: None,
                completed: false,
                created_at: Utc::now(),
            })
            .await
            .unwrap();
        assert_eq!(next.id, Some(11));
    }

    #[tokio::test]
    async fn find_all_is_ordered_by_id() {
        let repo = InMemoryProductRepository::new();
        for name in ["C", "A", "B"] {
            repo.save(product(name, 0, None)).await.unwrap();
        }
        let ids: Vec<_> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id.unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn name_search_is_case_insensitive_substring() {
        let repo = InMemoryProductRepository::new();
        repo.save(product("Tarea", 0, None)).await.unwrap();
        repo.save(product("Lámpara", 0, None)).await.unwrap();

        let found = repo.find_by_name_containing_ignore_case("tar").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Tarea");
    }

    #[tokio::test]
    async fn category_filter_is_exact() {
        let repo = InMemoryProductRepository::new();
        repo.save(product("A", 0, Some("Hogar"))).await.unwrap();
        repo.save(product("B", 0, Some("hogar"))).await.unwrap();
        repo.save(product("C", 0, None)).await.unwrap();

        let found = repo.find_by_category("Hogar").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "A");
    }

    #[tokio::test]
    async fn stock_filter_is_inclusive() {
        let repo = InMemoryProductRepository::new();
        repo.save(product("A", 4, None)).await.unwrap();
        repo.save(product("B", 5, None)).await.unwrap();
        repo.save(product("C", 6, None)).await.unwrap();

        let names: Vec<_> = repo
            .find_by_stock_greater_than_equal(5)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["B", "C"]);
    }

    #[tokio::test]
    async fn delete_missing_id_is_noop() {
        let repo = InMemoryTaskRepository::new();
        repo.delete_by_id(42).await.unwrap();
        assert!(!repo.exists_by_id(42).await.unwrap());
    }

    #[tokio::test]
    async fn provider_shares_repository_instances() {
        let provider = InMemoryRepositoryProvider::new();
        provider
            .products()
            .save(product("A", 0, None))
            .await
            .unwrap();
        assert_eq!(provider.products().find_all().await.unwrap().len(), 1);
    }
}
