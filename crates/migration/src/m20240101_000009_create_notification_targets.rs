//! Create `notification_targets`: chats that receive form notifications.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NotificationTargets::Table)
                    .if_not_exists()
                    .col(uuid(NotificationTargets::Id).primary_key())
                    .col(big_integer(NotificationTargets::ChatId).not_null())
                    .col(ColumnDef::new(NotificationTargets::Label).string_len(255).null())
                    .col(boolean(NotificationTargets::IsActive).not_null().default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NotificationTargets::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum NotificationTargets {
    Table,
    Id,
    ChatId,
    Label,
    IsActive,
}
