//! Create `gallery_items`: photos ingested from the bot webhook.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GalleryItems::Table)
                    .if_not_exists()
                    .col(uuid(GalleryItems::Id).primary_key())
                    .col(string_len(GalleryItems::Title, 255).not_null())
                    .col(ColumnDef::new(GalleryItems::Description).text().null())
                    .col(text(GalleryItems::ImageUrl).not_null())
                    .col(integer(GalleryItems::SortOrder).not_null().default(0))
                    .col(timestamp_with_time_zone(GalleryItems::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GalleryItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GalleryItems {
    Table,
    Id,
    Title,
    Description,
    ImageUrl,
    SortOrder,
    CreatedAt,
}
