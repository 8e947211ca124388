//! Admin role table. Existence of a row matching the external auth subject
//! is the sole authorization signal.
use sea_orm::{entity::prelude::*, DatabaseConnection};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "admin_users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub subject: String,
    pub role: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn find_by_subject(
    db: &DatabaseConnection,
    subject: &str,
) -> Result<Option<Model>, ModelError> {
    Entity::find()
        .filter(Column::Subject.eq(subject))
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}
