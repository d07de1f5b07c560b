//! Product entity

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product model - an inventory item
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique product ID, assigned by the database
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Product name (up to 100 characters)
    pub name: String,

    /// Free-form description (up to 500 characters)
    pub description: Option<String>,

    /// Unit price
    #[sea_orm(column_type = "Double")]
    pub price: f64,

    /// Units on hand
    pub stock: i32,

    /// Short category label (up to 50 characters)
    pub category: Option<String>,

    /// When the product was created
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
