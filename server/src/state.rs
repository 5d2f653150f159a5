//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers and extractors via `FromRef`.
//! It carries no per-request or per-user data: every request is verified on
//! its own.

use crate::services::verify::TokenVerifier;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub verifier: TokenVerifier,
}

impl AppState {
    #[must_use]
    pub fn new(verifier: TokenVerifier) -> Self {
        Self { verifier }
    }
}
