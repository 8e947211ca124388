//! Create `iletisim_mesajlari`: contact-form messages.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(IletisimMesajlari::Table)
                    .if_not_exists()
                    .col(uuid(IletisimMesajlari::Id).primary_key())
                    .col(string_len(IletisimMesajlari::AdSoyad, 255).not_null())
                    .col(string_len(IletisimMesajlari::Email, 255).not_null())
                    .col(string_len(IletisimMesajlari::Telefon, 32).not_null())
                    .col(text(IletisimMesajlari::Mesaj).not_null())
                    .col(timestamp_with_time_zone(IletisimMesajlari::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(IletisimMesajlari::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum IletisimMesajlari {
    Table,
    Id,
    AdSoyad,
    Email,
    Telefon,
    Mesaj,
    CreatedAt,
}
