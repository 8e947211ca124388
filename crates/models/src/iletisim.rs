//! Contact messages (`iletisim_mesajlari`). Insert-only.
use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, PaginatorTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "iletisim_mesajlari")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub ad_soyad: String,
    pub email: String,
    pub telefon: String,
    pub mesaj: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(
    db: &DatabaseConnection,
    ad_soyad: &str,
    email: &str,
    telefon: &str,
    mesaj: &str,
) -> Result<Model, ModelError> {
    if !email.contains('@') {
        return Err(ModelError::Validation("invalid email".into()));
    }
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        ad_soyad: Set(ad_soyad.to_string()),
        email: Set(email.to_string()),
        telefon: Set(telefon.to_string()),
        mesaj: Set(mesaj.to_string()),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn count(db: &DatabaseConnection) -> Result<u64, ModelError> {
    Entity::find()
        .count(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}
