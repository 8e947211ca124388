//! Public page handlers. Successful renders go through the page cache; the
//! revalidation endpoints are what expire them.
pub mod admin;
pub mod views;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::error;

use models::errors::ModelError;
use models::{cms_page as cms, gallery_item, service_item, testimonial};

use crate::state::AppState;

fn page_error(e: ModelError) -> StatusCode {
    error!(error = %e, "page render failed");
    StatusCode::INTERNAL_SERVER_ERROR
}

pub async fn home(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    if let Some(html) = state.page_cache.get("/").await {
        return Ok(Html(html));
    }
    let services = service_item::list_active(&state.db).await.map_err(page_error)?;
    let testimonials = testimonial::list_ordered(&state.db).await.map_err(page_error)?;
    let html = views::home(&services, &testimonials).into_string();
    state.page_cache.insert("/", html.clone()).await;
    Ok(Html(html))
}

pub async fn services_page(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    if let Some(html) = state.page_cache.get("/hizmetler").await {
        return Ok(Html(html));
    }
    let services = service_item::list_active(&state.db).await.map_err(page_error)?;
    let html = views::services_page(&services).into_string();
    state.page_cache.insert("/hizmetler", html.clone()).await;
    Ok(Html(html))
}

pub async fn gallery_page(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    if let Some(html) = state.page_cache.get("/galeri").await {
        return Ok(Html(html));
    }
    let items = gallery_item::list_ordered(&state.db).await.map_err(page_error)?;
    let html = views::gallery_page(&items).into_string();
    state.page_cache.insert("/galeri", html.clone()).await;
    Ok(Html(html))
}

/// Dynamic CMS route: resolve by slug, 404 page when absent or inactive.
pub async fn cms_page(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let key = format!("/{}", slug);
    if let Some(html) = state.page_cache.get(&key).await {
        return Html(html).into_response();
    }
    match cms::find_active_by_slug(&state.db, &slug).await {
        Ok(Some(page)) => {
            let html = views::cms_page(&page).into_string();
            state.page_cache.insert(key, html.clone()).await;
            Html(html).into_response()
        }
        Ok(None) => (StatusCode::NOT_FOUND, views::not_found()).into_response(),
        Err(e) => {
            error!(slug = %slug, error = %e, "cms page lookup failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
