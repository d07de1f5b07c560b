//! SeaORM implementation of ProductRepository

use async_trait::async_trait;
use log::{debug, info};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use super::db_err;
use crate::domain::{DomainResult, Product, ProductRepository};
use crate::infrastructure::database::entities::product;

// ── Conversion helpers ──────────────────────────────────────────

fn entity_to_domain(p: product::Model) -> Product {
    Product {
        id: Some(p.id),
        name: p.name,
        description: p.description,
        price: p.price,
        stock: p.stock,
        category: p.category,
        created_at: p.created_at,
    }
}

// ── SeaOrmProductRepository ─────────────────────────────────────

pub struct SeaOrmProductRepository {
    db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn save(&self, p: Product) -> DomainResult<Product> {
        let model = product::ActiveModel {
            id: p.id.map_or(NotSet, Set),
            name: Set(p.name),
            description: Set(p.description),
            price: Set(p.price),
            stock: Set(p.stock),
            category: Set(p.category),
            created_at: Set(p.created_at),
        };

        let saved = match p.id {
            None => model.insert(&self.db).await.map_err(db_err)?,
            Some(_) => model.update(&self.db).await.map_err(db_err)?,
        };
        info!("Product saved: {} ({})", saved.name, saved.id);
        Ok(entity_to_domain(saved))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Product>> {
        let model = product::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Product>> {
        let models = product::Entity::find()
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn exists_by_id(&self, id: i32) -> DomainResult<bool> {
        let count = product::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn delete_by_id(&self, id: i32) -> DomainResult<()> {
        let result = product::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        debug!("Product {} delete affected {} row(s)", id, result.rows_affected);
        Ok(())
    }

    async fn find_by_category(&self, category: &str) -> DomainResult<Vec<Product>> {
        let models = product::Entity::find()
            .filter(product::Column::Category.eq(category))
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    /// SQLite's `LOWER()` folds ASCII only, so the match runs on the
    /// domain predicate over the id-ordered rows instead of in SQL.
    async fn find_by_name_containing_ignore_case(&self, needle: &str) -> DomainResult<Vec<Product>> {
        let models = product::Entity::find()
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models
            .into_iter()
            .map(entity_to_domain)
            .filter(|p| p.name_contains(needle))
            .collect())
    }

    async fn find_by_stock_greater_than_equal(&self, min: i32) -> DomainResult<Vec<Product>> {
        let models = product::Entity::find()
            .filter(product::Column::Stock.gte(min))
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }
}
