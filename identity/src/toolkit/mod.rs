//! Identity Toolkit REST adapter.
//!
//! Thin HTTP wrapper over `accounts:signUp`, `accounts:signInWithPassword`
//! and `accounts:lookup`. One client serves both seams: in a browser-side
//! process it is the [`IdentityProvider`], on the server it is the
//! [`TokenAuthority`]. Pure parsing lives in `parse_error_body` for
//! testability.
//!
//! TRADE-OFFS
//! ==========
//! Verification is a `lookup` round trip per call rather than local JWT
//! signature checking. No key cache to keep fresh, at the cost of one
//! request per verified token.

pub mod config;

use std::sync::Mutex;
use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::IdentityError;
use crate::feed::{PrincipalFeed, PrincipalStream};
use crate::principal::{Principal, PrincipalChange};
use crate::{IdentityProvider, TokenAuthority};
pub use config::{ConfigError, ToolkitConfig, ToolkitTimeouts};

// =============================================================================
// CLIENT
// =============================================================================

pub struct ToolkitClient {
    http: reqwest::Client,
    config: ToolkitConfig,
    feed: PrincipalFeed,
    id_token: Mutex<Option<String>>,
}

impl ToolkitClient {
    /// Build a client. Nothing is signed in until `authenticate` or
    /// `create_principal` succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientBuild`] if the HTTP client fails to
    /// build.
    pub fn new(config: ToolkitConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ConfigError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config, feed: PrincipalFeed::default(), id_token: Mutex::new(None) })
    }

    /// ID token of the signed-in principal, for `Authorization: Bearer` headers.
    #[must_use]
    pub fn id_token(&self) -> Option<String> {
        self.id_token
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    fn endpoint(&self, method: &str) -> String {
        format!("{}/accounts:{method}?key={}", self.config.base_url, self.config.api_key)
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, body: &serde_json::Value) -> Result<T, IdentityError> {
        let response = self
            .http
            .post(self.endpoint(method))
            .json(body)
            .send()
            .await
            .map_err(|e| IdentityError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| IdentityError::Network(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(parse_error_body(status, &text));
        }

        serde_json::from_str(&text).map_err(|e| IdentityError::Service { status, message: e.to_string() })
    }

    async fn lookup(&self, id_token: &str) -> Result<Principal, IdentityError> {
        let resp: LookupResponse = self
            .call("lookup", &serde_json::json!({ "idToken": id_token }))
            .await?;
        resp.users
            .into_iter()
            .next()
            .ok_or(IdentityError::UserNotFound)
    }

    /// Hold a fresh token and announce its principal.
    ///
    /// The account already exists once signUp/signIn succeeded, so a failed
    /// profile lookup falls back to the fields of the auth response.
    async fn establish(&self, auth: AuthResponse) -> Result<(), IdentityError> {
        *self
            .id_token
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(auth.id_token.clone());
        let principal = match self.lookup(&auth.id_token).await {
            Ok(principal) => principal,
            Err(e) => {
                tracing::warn!(error = %e, "profile lookup failed; using auth response fields");
                auth.into_principal()
            }
        };
        tracing::info!(email = principal.email.as_deref().unwrap_or_default(), "principal signed in");
        self.feed.publish(PrincipalChange::SignedIn(principal));
        Ok(())
    }
}

#[async_trait::async_trait]
impl IdentityProvider for ToolkitClient {
    fn subscribe(&self) -> PrincipalStream {
        self.feed.subscribe()
    }

    async fn create_principal(&self, email: &str, password: &str) -> Result<(), IdentityError> {
        let auth: AuthResponse = self
            .call(
                "signUp",
                &serde_json::json!({ "email": email, "password": password, "returnSecureToken": true }),
            )
            .await?;
        self.establish(auth).await
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<(), IdentityError> {
        let auth: AuthResponse = self
            .call(
                "signInWithPassword",
                &serde_json::json!({ "email": email, "password": password, "returnSecureToken": true }),
            )
            .await?;
        self.establish(auth).await
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        let previous = self
            .id_token
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .take();
        if previous.is_some() {
            tracing::info!("principal signed out");
        }
        self.feed.publish(PrincipalChange::SignedOut);
        Ok(())
    }
}

#[async_trait::async_trait]
impl TokenAuthority for ToolkitClient {
    async fn verify_token(&self, raw: &str) -> Result<(), IdentityError> {
        self.lookup(raw).await.map(|_| ())
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthResponse {
    id_token: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    profile_picture: Option<String>,
}

impl AuthResponse {
    fn into_principal(self) -> Principal {
        Principal {
            display_name: self.display_name.filter(|name| !name.is_empty()),
            email: self.email,
            email_verified: None,
            photo_url: self.profile_picture,
        }
    }
}

#[derive(Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<Principal>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

// =============================================================================
// PARSING
// =============================================================================

/// Map a non-success response body to an [`IdentityError`].
///
/// Bodies that do not carry `{"error":{"message":...}}` become
/// [`IdentityError::Service`] with the raw status.
fn parse_error_body(status: u16, body: &str) -> IdentityError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => IdentityError::from_code(&envelope.error.message),
        Err(_) => IdentityError::Service { status, message: body.chars().take(200).collect() },
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
