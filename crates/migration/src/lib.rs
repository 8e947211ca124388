//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_teklifler;
mod m20240101_000002_create_iletisim_mesajlari;
mod m20240101_000003_create_services;
mod m20240101_000004_create_testimonials;
mod m20240101_000005_create_cms_pages;
mod m20240101_000006_create_site_settings;
mod m20240101_000007_create_gallery_items;
mod m20240101_000008_create_admin_users;
mod m20240101_000009_create_notification_targets;
mod m20240101_000010_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_teklifler::Migration),
            Box::new(m20240101_000002_create_iletisim_mesajlari::Migration),
            Box::new(m20240101_000003_create_services::Migration),
            Box::new(m20240101_000004_create_testimonials::Migration),
            Box::new(m20240101_000005_create_cms_pages::Migration),
            Box::new(m20240101_000006_create_site_settings::Migration),
            Box::new(m20240101_000007_create_gallery_items::Migration),
            Box::new(m20240101_000008_create_admin_users::Migration),
            Box::new(m20240101_000009_create_notification_targets::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000010_add_indexes::Migration),
        ]
    }
}
