use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use models::site_settings;
use service::sitemap;

use crate::state::AppState;

/// `GET /sitemap.xml` — always produced, even when individual table reads
/// fail (those categories come back empty).
pub async fn sitemap_xml(State(state): State<AppState>) -> Response {
    let xml = sitemap::build(&state.db).await;
    ([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], xml).into_response()
}

/// `GET /robots.txt` — stored blob or the permissive fallback.
pub async fn robots_txt(State(state): State<AppState>) -> Response {
    let settings = match site_settings::get(&state.db).await {
        Ok(settings) => settings,
        Err(e) => {
            warn!(error = %e, "robots: site settings read failed");
            None
        }
    };
    let body = sitemap::robots_txt(settings.as_ref());
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response()
}
