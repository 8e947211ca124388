use std::sync::Arc;

use sea_orm::DatabaseConnection;

use configs::AppConfig;
use service::page_cache::PageCache;
use service::session::SessionResolver;
use service::storage::StorageClient;
use service::telegram::TelegramClient;

/// Everything a handler needs, constructed once at startup.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<AppConfig>,
    pub storage: StorageClient,
    /// `None` when no bot token is configured; notifications become no-ops.
    pub bot: Option<TelegramClient>,
    pub page_cache: PageCache,
    pub sessions: Arc<dyn SessionResolver>,
}
