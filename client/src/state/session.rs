//! Session data model and notification reducer.
//!
//! DESIGN
//! ======
//! `authenticated` and `user` always move together; fields are private so
//! only [`Session::apply`] produces new values for them. Every notification replaces the
//! user wholesale and closes the auth prompt.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use identity::{AuthMode, Principal, PrincipalChange};

/// Immutable projection of the signed-in principal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub email_verified: Option<bool>,
    pub avatar_url: Option<String>,
}

impl From<&Principal> for Profile {
    fn from(p: &Principal) -> Self {
        Self {
            display_name: p.display_name.clone(),
            email: p.email.clone(),
            email_verified: p.email_verified,
            avatar_url: p.photo_url.clone(),
        }
    }
}

impl Profile {
    /// Display name, or `"Anonymous"`.
    #[must_use]
    pub fn display_label(&self) -> &str {
        non_empty(self.display_name.as_deref()).unwrap_or("Anonymous")
    }

    /// Name used for avatar initials: display name, else email, else empty.
    #[must_use]
    pub fn avatar_name(&self) -> &str {
        non_empty(self.display_name.as_deref())
            .or_else(|| non_empty(self.email.as_deref()))
            .unwrap_or_default()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Authentication state of one running client.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    initialized: bool,
    authenticated: bool,
    user: Option<Profile>,
    modal_visible: bool,
    auth_mode: AuthMode,
}

impl Session {
    /// True once the first identity notification has been applied.
    #[must_use]
    pub fn initialized(&self) -> bool {
        self.initialized
    }

    /// No identity notification yet: neither logged in nor known logged out.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        !self.initialized
    }

    #[must_use]
    pub fn authenticated(&self) -> bool {
        self.authenticated
    }

    #[must_use]
    pub fn user(&self) -> Option<&Profile> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn modal_visible(&self) -> bool {
        self.modal_visible
    }

    #[must_use]
    pub fn auth_mode(&self) -> AuthMode {
        self.auth_mode
    }

    /// Fold one notification into the session, returning the next state.
    #[must_use]
    pub fn apply(&self, change: &PrincipalChange) -> Session {
        let user = change.principal().map(Profile::from);
        Session {
            initialized: true,
            authenticated: user.is_some(),
            user,
            modal_visible: false,
            auth_mode: AuthMode::Login,
        }
    }

    pub(crate) fn open_modal(&mut self) {
        self.modal_visible = true;
    }

    /// Hide the prompt and reset its form back to login.
    pub(crate) fn close_modal(&mut self) {
        self.modal_visible = false;
        self.auth_mode = AuthMode::Login;
    }

    pub(crate) fn switch_mode(&mut self) {
        self.auth_mode = self.auth_mode.opposite();
    }
}
