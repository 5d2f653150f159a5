//! Session state and the controller that fronts it.
//!
//! ARCHITECTURE
//! ============
//! `session` is the pure data model and reducer, `store` folds the identity
//! notification stream into it, and `auth` exposes the UI-facing actions.
//! Only the store's fold task writes authentication fields; the controller
//! writes modal fields only.

pub mod auth;
pub mod session;
pub mod store;

use std::sync::Arc;

use identity::IdentityProvider;

use self::auth::AuthController;
use self::store::SessionStore;

/// Subscribe a new store to `provider` and build a controller over it.
///
/// Must be called from within a tokio runtime. The caller owns the store
/// and calls [`SessionStore::teardown`] when the client shuts down.
pub fn start(provider: Arc<dyn IdentityProvider>) -> (SessionStore, AuthController) {
    let store = SessionStore::attach(provider.subscribe());
    let controller = AuthController::new(provider, store.handle());
    (store, controller)
}
