//! Chats the notification dispatcher delivers to. The active set is read
//! fresh on every send.
use sea_orm::{entity::prelude::*, DatabaseConnection};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "notification_targets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub chat_id: i64,
    pub label: Option<String>,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn list_active(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .filter(Column::IsActive.eq(true))
        .all(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}
