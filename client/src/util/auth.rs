//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigation bar and any gated view derive what to show from a session
//! snapshot the same way, so the derivation lives here as pure functions.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::session::Session;

/// What the navigation bar shows in its account slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavView {
    /// Identity not yet known, or a logout is in flight: neutral placeholder.
    Loading,
    /// Known logged out: show the login button.
    LoggedOut,
    /// Logged in: show the avatar menu.
    LoggedIn {
        label: String,
        avatar_name: String,
        email: Option<String>,
        avatar_url: Option<String>,
    },
}

/// Derive the account slot from a session snapshot.
#[must_use]
pub fn nav_view(session: &Session, logging_out: bool) -> NavView {
    if session.is_loading() || logging_out {
        return NavView::Loading;
    }
    match session.user() {
        None => NavView::LoggedOut,
        Some(user) => NavView::LoggedIn {
            label: user.display_label().to_owned(),
            avatar_name: user.avatar_name().to_owned(),
            email: user.email.clone(),
            avatar_url: user.avatar_url.clone(),
        },
    }
}

/// Whether the auth prompt should render. Never once authenticated.
#[must_use]
pub fn should_show_auth_modal(session: &Session) -> bool {
    session.modal_visible() && !session.authenticated()
}
