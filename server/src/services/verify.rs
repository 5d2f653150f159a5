//! Stateless bearer-token verification.
//!
//! ARCHITECTURE
//! ============
//! Each call strips the `Bearer` scheme, rejects obviously malformed tokens
//! locally, and otherwise asks the identity service. No cache, no retry.
//!
//! TRADE-OFFS
//! ==========
//! Fail-closed: a rejected token and an unreachable identity service both
//! read as "not authenticated". Callers cannot tell them apart, so an outage
//! shows up as every request being unauthenticated. Only the logs
//! distinguish the two (`debug` for rejections, `warn` for service failures).

use std::sync::Arc;

use identity::{IdentityError, TokenAuthority};

const BEARER_SCHEME: &str = "bearer";

#[derive(Clone)]
pub struct TokenVerifier {
    authority: Arc<dyn TokenAuthority>,
}

impl TokenVerifier {
    #[must_use]
    pub fn new(authority: Arc<dyn TokenAuthority>) -> Self {
        Self { authority }
    }

    /// Verify an `Authorization` header value (or a bare token).
    ///
    /// Returns `true` only when the identity service affirms the token.
    pub async fn verify(&self, credential: Option<&str>) -> bool {
        let Some(token) = credential.and_then(strip_bearer) else {
            tracing::debug!("no bearer credential");
            return false;
        };
        if !looks_like_jwt(token) {
            tracing::debug!("malformed bearer token");
            return false;
        }

        match self.authority.verify_token(token).await {
            Ok(()) => true,
            Err(e @ (IdentityError::Network(_) | IdentityError::Service { .. })) => {
                tracing::warn!(error = %e, "token verification unavailable; treating as unauthenticated");
                false
            }
            Err(e) => {
                tracing::debug!(error = %e, "token rejected");
                false
            }
        }
    }
}

/// Remove a leading `Bearer ` scheme (any case) and surrounding whitespace.
/// Returns `None` when nothing is left.
pub(crate) fn strip_bearer(raw: &str) -> Option<&str> {
    let raw = raw.trim();
    let token = match raw.split_once(char::is_whitespace) {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case(BEARER_SCHEME) => rest.trim(),
        _ if raw.eq_ignore_ascii_case(BEARER_SCHEME) => "",
        _ => raw,
    };
    (!token.is_empty()).then_some(token)
}

/// Three non-empty base64url segments separated by dots.
pub(crate) fn looks_like_jwt(token: &str) -> bool {
    let segments = token.split('.').collect::<Vec<_>>();
    segments.len() == 3
        && segments.iter().all(|segment| {
            !segment.is_empty()
                && segment
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'='))
        })
}

#[cfg(test)]
#[path = "verify_test.rs"]
mod tests;
