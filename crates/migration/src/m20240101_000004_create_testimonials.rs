//! Create `testimonials`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Testimonials::Table)
                    .if_not_exists()
                    .col(uuid(Testimonials::Id).primary_key())
                    .col(string_len(Testimonials::Author, 255).not_null())
                    .col(small_integer(Testimonials::Rating).not_null())
                    .col(text(Testimonials::Comment).not_null())
                    .col(integer(Testimonials::SortOrder).not_null().default(0))
                    .col(timestamp_with_time_zone(Testimonials::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Testimonials::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Testimonials {
    Table,
    Id,
    Author,
    Rating,
    Comment,
    SortOrder,
    CreatedAt,
}
