use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Services: public listing filters on is_active and orders by sort_order
        manager
            .create_index(
                Index::create()
                    .name("idx_services_active_sort")
                    .table(Services::Table)
                    .col(Services::IsActive)
                    .col(Services::SortOrder)
                    .to_owned(),
            )
            .await?;

        // CmsPages: slug lookups also filter on is_active
        manager
            .create_index(
                Index::create()
                    .name("idx_cms_pages_active")
                    .table(CmsPages::Table)
                    .col(CmsPages::IsActive)
                    .to_owned(),
            )
            .await?;

        // GalleryItems: display ordering
        manager
            .create_index(
                Index::create()
                    .name("idx_gallery_items_sort")
                    .table(GalleryItems::Table)
                    .col(GalleryItems::SortOrder)
                    .to_owned(),
            )
            .await?;

        // NotificationTargets: every dispatch reads the active set
        manager
            .create_index(
                Index::create()
                    .name("idx_notification_targets_active")
                    .table(NotificationTargets::Table)
                    .col(NotificationTargets::IsActive)
                    .to_owned(),
            )
            .await?;

        // Teklifler: admin listing by submission time
        manager
            .create_index(
                Index::create()
                    .name("idx_teklifler_created")
                    .table(Teklifler::Table)
                    .col(Teklifler::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_services_active_sort").table(Services::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_cms_pages_active").table(CmsPages::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_gallery_items_sort").table(GalleryItems::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_notification_targets_active").table(NotificationTargets::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_teklifler_created").table(Teklifler::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Services { Table, IsActive, SortOrder }

#[derive(DeriveIden)]
enum CmsPages { Table, IsActive }

#[derive(DeriveIden)]
enum GalleryItems { Table, SortOrder }

#[derive(DeriveIden)]
enum NotificationTargets { Table, IsActive }

#[derive(DeriveIden)]
enum Teklifler { Table, CreatedAt }
