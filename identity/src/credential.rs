//! Email/password credential input and its form-level validation.

const MIN_PASSWORD_LEN: usize = 6;

/// Which auth prompt the credential was entered into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    /// The other mode (the prompt's "switch" link).
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    /// Title shown on the prompt and its submit button.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Log in",
            Self::Register => "Register",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("Email field is required")]
    EmailRequired,
    #[error("Email must be valid")]
    EmailInvalid,
    #[error("Password field is required")]
    PasswordRequired,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Transient email/password pair. Never persisted.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential {
    pub email: String,
    pub password: String,
    pub confirm_password: Option<String>,
}

// Keeps passwords out of logs.
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl Credential {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into(), confirm_password: None }
    }

    /// Attach the registration confirmation field.
    #[must_use]
    pub fn with_confirmation(mut self, confirm: impl Into<String>) -> Self {
        self.confirm_password = Some(confirm.into());
        self
    }

    /// The email with surrounding whitespace removed.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.trim()
    }

    /// Check the fields for `mode`, returning the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first [`CredentialError`] in field order: email, password,
    /// then (register only) confirmation.
    pub fn validate(&self, mode: AuthMode) -> Result<(), CredentialError> {
        let email = self.email();
        if email.is_empty() {
            return Err(CredentialError::EmailRequired);
        }
        if !is_valid_email(email) {
            return Err(CredentialError::EmailInvalid);
        }
        if self.password.is_empty() {
            return Err(CredentialError::PasswordRequired);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(CredentialError::PasswordTooShort);
        }
        if mode == AuthMode::Register && self.confirm_password.as_deref() != Some(self.password.as_str()) {
            return Err(CredentialError::PasswordMismatch);
        }
        Ok(())
    }
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let parts = email.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() {
        return false;
    }
    let domain = parts[1];
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
#[path = "credential_test.rs"]
mod tests;
