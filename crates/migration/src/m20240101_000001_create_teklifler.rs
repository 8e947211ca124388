//! Create `teklifler`: quote requests submitted by the public form.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Teklifler::Table)
                    .if_not_exists()
                    .col(uuid(Teklifler::Id).primary_key())
                    .col(string_len(Teklifler::Ad, 128).not_null())
                    .col(string_len(Teklifler::Soyad, 128).not_null())
                    .col(string_len(Teklifler::Email, 255).not_null())
                    .col(string_len(Teklifler::Telefon, 32).not_null())
                    .col(string_len(Teklifler::HizmetTuru, 128).not_null())
                    .col(text(Teklifler::NeredenAdres).not_null())
                    .col(text(Teklifler::NereyeAdres).not_null())
                    .col(string_len(Teklifler::TasinmaTarihi, 32).not_null())
                    .col(ColumnDef::new(Teklifler::Notlar).text().null())
                    .col(timestamp_with_time_zone(Teklifler::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Teklifler::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Teklifler::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Teklifler {
    Table,
    Id,
    Ad,
    Soyad,
    Email,
    Telefon,
    HizmetTuru,
    NeredenAdres,
    NereyeAdres,
    TasinmaTarihi,
    Notlar,
    CreatedAt,
    UpdatedAt,
}
