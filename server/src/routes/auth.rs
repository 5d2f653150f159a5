//! Auth routes and extractors built on the token verifier.
//!
//! `BearerAuth` never rejects; handlers that only annotate their response
//! with the verification result use it. `RequireAuth` rejects with 401.

use std::convert::Infallible;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::response::Json;
use serde::Serialize;

use crate::state::AppState;

// =============================================================================
// EXTRACTORS
// =============================================================================

async fn verify_parts(parts: &Parts, state: &AppState) -> bool {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    state.verifier.verify(header).await
}

/// Verification result for the request's `Authorization` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BearerAuth {
    pub authenticated: bool,
}

impl<S> FromRequestParts<S> for BearerAuth
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let authenticated = verify_parts(parts, &AppState::from_ref(state)).await;
        Ok(Self { authenticated })
    }
}

/// Requires a verified bearer token. Use as a handler parameter to gate it.
#[derive(Debug, Clone, Copy)]
pub struct RequireAuth;

impl<S> FromRequestParts<S> for RequireAuth
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if verify_parts(parts, &AppState::from_ref(state)).await {
            Ok(Self)
        } else {
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub authenticated: bool,
}

/// `GET /api/auth/verify`: report whether the bearer token is valid.
pub async fn verify(auth: BearerAuth) -> Json<VerifyResponse> {
    Json(VerifyResponse { authenticated: auth.authenticated })
}

/// `GET /api/auth/check`: 204 when authenticated, 401 otherwise.
pub async fn check(_auth: RequireAuth) -> StatusCode {
    StatusCode::NO_CONTENT
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
