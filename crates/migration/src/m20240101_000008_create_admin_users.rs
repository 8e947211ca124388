//! Create `admin_users`: external auth subjects granted the admin role.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdminUsers::Table)
                    .if_not_exists()
                    .col(uuid(AdminUsers::Id).primary_key())
                    .col(string_len(AdminUsers::Subject, 255).unique_key().not_null())
                    .col(string_len(AdminUsers::Role, 32).not_null().default("admin"))
                    .col(timestamp_with_time_zone(AdminUsers::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdminUsers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AdminUsers {
    Table,
    Id,
    Subject,
    Role,
    CreatedAt,
}
