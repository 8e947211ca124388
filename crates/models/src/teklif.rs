//! Quote requests (`teklifler`). Rows are created once per submission and
//! never mutated by this codebase afterwards.
use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, PaginatorTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "teklifler")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub ad: String,
    pub soyad: String,
    pub email: String,
    pub telefon: String,
    pub hizmet_turu: String,
    pub nereden_adres: String,
    pub nereye_adres: String,
    pub tasinma_tarihi: String,
    pub notlar: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Fields of a new quote request, as submitted by the public form.
#[derive(Clone, Debug)]
pub struct NewTeklif {
    pub ad: String,
    pub soyad: String,
    pub email: String,
    pub telefon: String,
    pub hizmet_turu: String,
    pub nereden_adres: String,
    pub nereye_adres: String,
    pub tasinma_tarihi: String,
    pub notlar: Option<String>,
}

pub async fn create(db: &DatabaseConnection, input: NewTeklif) -> Result<Model, ModelError> {
    if !input.email.contains('@') {
        return Err(ModelError::Validation("invalid email".into()));
    }
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        ad: Set(input.ad),
        soyad: Set(input.soyad),
        email: Set(input.email),
        telefon: Set(input.telefon),
        hizmet_turu: Set(input.hizmet_turu),
        nereden_adres: Set(input.nereden_adres),
        nereye_adres: Set(input.nereye_adres),
        tasinma_tarihi: Set(input.tasinma_tarihi),
        notlar: Set(input.notlar),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn count(db: &DatabaseConnection) -> Result<u64, ModelError> {
    Entity::find()
        .count(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}
