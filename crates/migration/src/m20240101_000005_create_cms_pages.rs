//! Create `cms_pages`. Slug carries a unique key; dynamic routing resolves
//! pages by it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CmsPages::Table)
                    .if_not_exists()
                    .col(uuid(CmsPages::Id).primary_key())
                    .col(string_len(CmsPages::Slug, 255).unique_key().not_null())
                    .col(string_len(CmsPages::Title, 255).not_null())
                    .col(text(CmsPages::BodyHtml).not_null())
                    .col(ColumnDef::new(CmsPages::MetaTitle).string_len(255).null())
                    .col(ColumnDef::new(CmsPages::MetaDescription).text().null())
                    .col(boolean(CmsPages::IsActive).not_null().default(true))
                    .col(timestamp_with_time_zone(CmsPages::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(CmsPages::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CmsPages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CmsPages {
    Table,
    Id,
    Slug,
    Title,
    BodyHtml,
    MetaTitle,
    MetaDescription,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
