//! Create `site_settings`: singleton row of global metadata.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SiteSettings::Table)
                    .if_not_exists()
                    .col(uuid(SiteSettings::Id).primary_key())
                    .col(string_len(SiteSettings::SiteName, 255).not_null())
                    .col(string_len(SiteSettings::BaseUrl, 255).not_null())
                    .col(ColumnDef::new(SiteSettings::MetaDescription).text().null())
                    .col(ColumnDef::new(SiteSettings::RobotsTxt).text().null())
                    .col(
                        string_len(SiteSettings::SitemapChangeFreq, 32)
                            .not_null()
                            .default("weekly"),
                    )
                    .col(double(SiteSettings::SitemapPriority).not_null().default(0.8))
                    .col(timestamp_with_time_zone(SiteSettings::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SiteSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SiteSettings {
    Table,
    Id,
    SiteName,
    BaseUrl,
    MetaDescription,
    RobotsTxt,
    SitemapChangeFreq,
    SitemapPriority,
    UpdatedAt,
}
