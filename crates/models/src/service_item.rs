//! Offered moving services (`services`). Read-only from the public site;
//! the `is_active` flag is applied by every read path, not by the store.
use sea_orm::{entity::prelude::*, DatabaseConnection, PaginatorTrait, QueryOrder};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Active services ordered for display.
pub async fn list_active(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .filter(Column::IsActive.eq(true))
        .order_by_asc(Column::SortOrder)
        .all(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn count(db: &DatabaseConnection) -> Result<u64, ModelError> {
    Entity::find()
        .count(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}
