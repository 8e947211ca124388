//! Customer testimonials shown on the home page.
use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "testimonials")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub author: String,
    pub rating: i16,
    pub comment: String,
    pub sort_order: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_rating(rating: i16) -> Result<(), ModelError> {
    if !(0..=5).contains(&rating) {
        return Err(ModelError::Validation("rating must be 0..=5".into()));
    }
    Ok(())
}

pub async fn create(
    db: &DatabaseConnection,
    author: &str,
    rating: i16,
    comment: &str,
    sort_order: i32,
) -> Result<Model, ModelError> {
    validate_rating(rating)?;
    if author.trim().is_empty() {
        return Err(ModelError::Validation("author required".into()));
    }
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        author: Set(author.to_string()),
        rating: Set(rating),
        comment: Set(comment.to_string()),
        sort_order: Set(sort_order),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn list_ordered(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Entity::find()
        .order_by_asc(Column::SortOrder)
        .all(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bounds() {
        assert!(validate_rating(0).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(6).is_err());
        assert!(validate_rating(-1).is_err());
    }
}
