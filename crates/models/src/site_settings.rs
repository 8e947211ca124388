//! Singleton row of global site metadata and sitemap/robots defaults.
use sea_orm::{entity::prelude::*, DatabaseConnection};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "site_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub site_name: String,
    pub base_url: String,
    pub meta_description: Option<String>,
    pub robots_txt: Option<String>,
    pub sitemap_change_freq: String,
    pub sitemap_priority: f64,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// The settings row, if one has been created yet.
pub async fn get(db: &DatabaseConnection) -> Result<Option<Model>, ModelError> {
    Entity::find()
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}
