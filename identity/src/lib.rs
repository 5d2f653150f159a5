//! Shared identity model and the seams to the external identity service.
//!
//! This crate owns the types used by both `client` and `server`: the
//! principal payload, the change notifications, the credential input and the
//! provider error taxonomy. It also defines the two async traits every
//! identity backend implements, so the session core and the token verifier
//! can be exercised against mocks.
//!
//! ARCHITECTURE
//! ============
//! `IdentityProvider` is the client-facing side (subscribe, create, sign in,
//! sign out). `TokenAuthority` is the server-facing side (verify a raw ID
//! token). `toolkit::ToolkitClient` implements both against the Identity
//! Toolkit REST API.

pub mod credential;
pub mod error;
pub mod feed;
pub mod principal;
pub mod toolkit;

pub use credential::{AuthMode, Credential, CredentialError};
pub use error::{DEFAULT_ERROR_MESSAGE, IdentityError};
pub use feed::{PrincipalFeed, PrincipalStream};
pub use principal::{Principal, PrincipalChange};

// =============================================================================
// SEAMS
// =============================================================================

/// Client-side identity service: principal notifications plus the three
/// credential actions.
///
/// Implementations must announce every successful action on the stream
/// returned by [`IdentityProvider::subscribe`]; callers never learn about a
/// principal change from an action's return value.
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Open a notification stream. The first item is the current principal
    /// state; later items follow every change in order.
    fn subscribe(&self) -> PrincipalStream;

    /// Create an account and sign it in.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentityError`] if the service refuses the account (email
    /// in use, malformed email, weak password) or cannot be reached.
    async fn create_principal(&self, email: &str, password: &str) -> Result<(), IdentityError>;

    /// Sign in with an email and password.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentityError`] if the credentials are rejected or the
    /// service cannot be reached.
    async fn authenticate(&self, email: &str, password: &str) -> Result<(), IdentityError>;

    /// Sign the current principal out.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentityError`] if the service cannot complete the
    /// sign-out. The principal state is unchanged in that case.
    async fn sign_out(&self) -> Result<(), IdentityError>;
}

/// Server-side identity service: checks that a raw ID token was issued by the
/// trusted service and is still valid.
#[async_trait::async_trait]
pub trait TokenAuthority: Send + Sync {
    /// Verify a raw (unprefixed) ID token.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentityError`] when the token is rejected (expired,
    /// malformed, revoked) or the verification call itself fails.
    async fn verify_token(&self, raw: &str) -> Result<(), IdentityError>;
}
