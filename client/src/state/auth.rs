//! Auth-session controller for the current client user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the auth prompt, the navigation bar and any identity-aware view.
//! Reads mirror [`Session`]; writes are the actions below.
//!
//! DESIGN
//! ======
//! `register`, `login` and `logout` only call the identity service. The
//! resulting session change arrives through the store's notification fold,
//! so there is exactly one writer of authentication state. A failed logout
//! therefore leaves the session untouched.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use identity::{AuthMode, Credential, CredentialError, IdentityError, IdentityProvider};
use tokio::sync::watch;

use super::session::Session;
use super::store::SessionHandle;

/// Failure from the auth prompt's submit flow.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] CredentialError),
    #[error(transparent)]
    Identity(#[from] IdentityError),
}

impl SubmitError {
    /// Text for the error toast.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Invalid(e) => e.to_string(),
            Self::Identity(e) => e.user_message().to_owned(),
        }
    }
}

#[derive(Clone)]
pub struct AuthController {
    provider: Arc<dyn IdentityProvider>,
    session: SessionHandle,
}

impl AuthController {
    #[must_use]
    pub fn new(provider: Arc<dyn IdentityProvider>, session: SessionHandle) -> Self {
        Self { provider, session }
    }

    // =========================================================================
    // READS
    // =========================================================================

    #[must_use]
    pub fn session(&self) -> Session {
        self.session.snapshot()
    }

    #[must_use]
    pub fn watch(&self) -> watch::Receiver<Session> {
        self.session.watch()
    }

    // =========================================================================
    // MODAL
    // =========================================================================

    pub fn open_modal(&self) {
        self.session.update(Session::open_modal);
    }

    /// Hide the prompt and reset its form state.
    pub fn close_modal(&self) {
        self.session.update(Session::close_modal);
    }

    /// Flip the prompt between login and register.
    pub fn switch_mode(&self) {
        self.session.update(Session::switch_mode);
    }

    // =========================================================================
    // ACTIONS
    // =========================================================================

    /// Create an account. Resolves once the identity service confirms it.
    ///
    /// # Errors
    ///
    /// Returns the service's [`IdentityError`] (email in use, malformed
    /// email, weak password, network).
    pub async fn register(&self, credential: &Credential) -> Result<(), IdentityError> {
        self.provider
            .create_principal(credential.email(), &credential.password)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, email = credential.email(), "register failed"))
    }

    /// Sign in. Resolves once the identity service accepts the credentials.
    ///
    /// # Errors
    ///
    /// Returns the service's [`IdentityError`] (invalid credentials, unknown
    /// account, network).
    pub async fn login(&self, credential: &Credential) -> Result<(), IdentityError> {
        self.provider
            .authenticate(credential.email(), &credential.password)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, email = credential.email(), "login failed"))
    }

    /// Request sign-out. The session resets when the service announces it.
    ///
    /// # Errors
    ///
    /// Returns the service's [`IdentityError`]; the session is unchanged.
    pub async fn logout(&self) -> Result<(), IdentityError> {
        self.provider
            .sign_out()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "logout failed"))
    }

    /// Auth prompt submit: validate for the current mode, dispatch, and
    /// close the prompt on success.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Invalid`] without calling the service when
    /// validation fails, or [`SubmitError::Identity`] when the service
    /// refuses. The prompt stays open in both cases.
    pub async fn submit(&self, credential: &Credential) -> Result<(), SubmitError> {
        let mode = self.session.snapshot().auth_mode();
        credential.validate(mode)?;
        match mode {
            AuthMode::Login => self.login(credential).await?,
            AuthMode::Register => self.register(credential).await?,
        }
        self.close_modal();
        Ok(())
    }
}
