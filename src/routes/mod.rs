//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two JSON/binary API endpoints plus the static composer frontend served
//! at `/`. The wasm bundle lives under the site directory's `pkg/` folder,
//! so a single `ServeDir` fallback covers the whole frontend.

pub mod packages;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Four full-resolution PNG data URLs arrive in one JSON body, well past
/// Axum's 2 MB default.
const MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

#[must_use]
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let site = ServeDir::new(&state.config.site_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/save-images", post(packages::save_images))
        .route("/download/{agency_id}", get(packages::download))
        .route("/healthz", get(healthz))
        .fallback_service(site)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
