//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth gateway exposes the verification primitive over HTTP. Domain
//! handlers (sets, users) live elsewhere and call the same extractors.

pub mod auth;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the HTTP router.
pub fn app(state: AppState, cors_allow_any: bool) -> Router {
    let router = Router::new()
        .route("/api/auth/verify", get(auth::verify))
        .route("/api/auth/check", get(auth::check))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if cors_allow_any {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        router.layer(cors)
    } else {
        router
    }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
