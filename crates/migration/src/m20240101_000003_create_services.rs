//! Create `services`: offered moving services, ordered and flag-gated.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(uuid(Services::Id).primary_key())
                    .col(string_len(Services::Title, 255).not_null())
                    .col(text(Services::Description).not_null())
                    .col(ColumnDef::new(Services::ImageUrl).text().null())
                    .col(boolean(Services::IsActive).not_null().default(true))
                    .col(integer(Services::SortOrder).not_null().default(0))
                    .col(timestamp_with_time_zone(Services::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Services::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Services::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Services {
    Table,
    Id,
    Title,
    Description,
    ImageUrl,
    IsActive,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}
