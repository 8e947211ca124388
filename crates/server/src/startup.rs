use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use service::page_cache::PageCache;
use service::session::{JwtSessionResolver, SessionResolver};
use service::storage::StorageClient;
use service::telegram::TelegramClient;

use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Ctrl+C is the shutdown trigger; the server drains in-flight requests
/// before `run` returns.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    info!("shutdown signal received; draining connections");
}

/// Public entry: validate config, build the app state, and run the server.
pub async fn run() -> anyhow::Result<()> {
    // Fails once here on any missing required value; never lazily per request.
    let config = Arc::new(configs::AppConfig::load_and_validate()?);

    let db = models::db::connect(&config.database).await?;
    let storage = StorageClient::new(&config.storage);
    let bot = config.telegram.bot_token.as_deref().map(TelegramClient::new);
    if bot.is_none() {
        info!("no bot token configured; form notifications disabled");
    }
    let sessions: Arc<dyn SessionResolver> =
        Arc::new(JwtSessionResolver::new(config.auth.jwt_secret.clone()));

    let state = AppState {
        db,
        config: Arc::clone(&config),
        storage,
        bot,
        page_cache: PageCache::new(128),
        sessions,
    };

    let app: Router = routes::build_router(state, build_cors());

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!(%addr, "starting site server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("site server stopped");
    Ok(())
}
