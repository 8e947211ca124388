//! Slug-addressed content pages (`cms_pages`). Inactive pages are invisible
//! to every public read path.
use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cms_pages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub slug: String,
    pub title: String,
    pub body_html: String,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Look up one active page by slug; `None` falls through to the 404 page.
pub async fn find_active_by_slug(
    db: &DatabaseConnection,
    slug: &str,
) -> Result<Option<Model>, ModelError> {
    Entity::find()
        .filter(Column::Slug.eq(slug))
        .filter(Column::IsActive.eq(true))
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn list_active(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .filter(Column::IsActive.eq(true))
        .order_by_asc(Column::Slug)
        .all(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}
