//! Admin page handlers. The middleware has already decided access by the
//! time these run.
use axum::extract::State;
use maud::Markup;
use tracing::warn;

use models::errors::ModelError;
use models::{gallery_item, iletisim, service_item, teklif};

use crate::pages::views;
use crate::state::AppState;

fn count_or_zero(label: &'static str, result: Result<u64, ModelError>) -> u64 {
    result.unwrap_or_else(|e| {
        warn!(label, error = %e, "dashboard count failed");
        0
    })
}

pub async fn dashboard(State(state): State<AppState>) -> Markup {
    let (quotes, messages, services, photos) = tokio::join!(
        teklif::count(&state.db),
        iletisim::count(&state.db),
        service_item::count(&state.db),
        gallery_item::count(&state.db),
    );
    let stats = [
        ("Teklif Talepleri", count_or_zero("teklifler", quotes)),
        ("İletişim Mesajları", count_or_zero("mesajlar", messages)),
        ("Hizmetler", count_or_zero("hizmetler", services)),
        ("Galeri Fotoğrafları", count_or_zero("galeri", photos)),
    ];
    views::dashboard(&stats)
}

pub async fn login() -> Markup {
    views::login()
}

pub async fn editor(State(state): State<AppState>) -> Markup {
    views::editor(state.config.editor.api_key.as_deref())
}
