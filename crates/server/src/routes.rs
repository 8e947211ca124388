use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::middleware::admin_gate;
use crate::pages;
use crate::state::AppState;

pub mod contact;
pub mod gallery;
pub mod image;
pub mod quote;
pub mod revalidate;
pub mod seo;
pub mod upload;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: public pages, JSON API, and the
/// middleware-gated admin section.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/", get(pages::home))
        .route("/hizmetler", get(pages::services_page))
        .route("/galeri", get(pages::gallery_page))
        .route("/sitemap.xml", get(seo::sitemap_xml))
        .route("/robots.txt", get(seo::robots_txt))
        .route("/health", get(health))
        .route("/:slug", get(pages::cms_page));

    let api = Router::new()
        .route("/api/teklif", post(quote::create_quote))
        .route("/api/contact", post(contact::create_message))
        .route("/api/gallery", get(gallery::list_gallery))
        .route("/api/image", get(image::proxy_image))
        .route("/api/revalidate", post(revalidate::revalidate_path))
        .route("/api/revalidate-all", post(revalidate::revalidate_all))
        .route("/api/telegram/gallery", post(gallery::telegram_webhook));

    // Admin pages and admin-only API, behind the session/role gate.
    let admin = Router::new()
        .route("/admin", get(pages::admin::dashboard))
        .route("/admin/login", get(pages::admin::login))
        .route("/admin/icerik", get(pages::admin::editor))
        .route("/api/admin/upload", post(upload::upload_image))
        .route_layer(middleware::from_fn_with_state(state.clone(), admin_gate));

    public
        .merge(api)
        .merge(admin)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
