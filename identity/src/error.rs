//! Identity service error taxonomy.
//!
//! DESIGN
//! ======
//! Provider error codes arrive as strings in two dialects: the REST API's
//! upper-snake codes (`EMAIL_EXISTS`) and the client SDK's `auth/...` codes.
//! Both collapse into one closed enum here. [`IdentityError::user_message`]
//! is the only place that turns a variant into text shown to a person.

/// Shown for any error without a dedicated message.
pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("email already in use")]
    EmailAlreadyInUse,
    #[error("invalid email")]
    InvalidEmail,
    #[error("weak password")]
    WeakPassword,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("user not found")]
    UserNotFound,
    #[error("user disabled")]
    UserDisabled,
    #[error("too many requests")]
    TooManyRequests,
    #[error("operation not allowed")]
    OperationNotAllowed,
    #[error("invalid id token")]
    InvalidToken,
    #[error("id token expired")]
    TokenExpired,
    #[error("network error: {0}")]
    Network(String),
    #[error("identity service error: status {status}: {message}")]
    Service { status: u16, message: String },
    #[error("unknown identity error: {0}")]
    Unknown(String),
}

impl IdentityError {
    /// Classify a provider error code.
    ///
    /// Accepts both REST codes and `auth/...` SDK codes. REST messages of
    /// the form `CODE : detail` are reduced to `CODE` first. Unmapped codes
    /// become [`IdentityError::Unknown`].
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        let code = code.split(" : ").next().unwrap_or_default().trim();
        match code {
            "EMAIL_EXISTS" | "auth/email-already-in-use" => Self::EmailAlreadyInUse,
            "INVALID_EMAIL" | "MISSING_EMAIL" | "auth/invalid-email" => Self::InvalidEmail,
            "WEAK_PASSWORD" | "auth/weak-password" => Self::WeakPassword,
            "INVALID_PASSWORD"
            | "INVALID_LOGIN_CREDENTIALS"
            | "MISSING_PASSWORD"
            | "auth/wrong-password"
            | "auth/invalid-credential"
            | "auth/invalid-login-credentials" => Self::InvalidCredentials,
            "EMAIL_NOT_FOUND" | "USER_NOT_FOUND" | "auth/user-not-found" => Self::UserNotFound,
            "USER_DISABLED" | "auth/user-disabled" => Self::UserDisabled,
            "TOO_MANY_ATTEMPTS_TRY_LATER" | "auth/too-many-requests" => Self::TooManyRequests,
            "OPERATION_NOT_ALLOWED" | "PASSWORD_LOGIN_DISABLED" | "auth/operation-not-allowed" => {
                Self::OperationNotAllowed
            }
            "INVALID_ID_TOKEN" | "auth/invalid-id-token" | "auth/argument-error" => Self::InvalidToken,
            "TOKEN_EXPIRED" | "auth/id-token-expired" | "auth/user-token-expired" => Self::TokenExpired,
            "auth/network-request-failed" => Self::Network(code.to_owned()),
            other => Self::Unknown(other.to_owned()),
        }
    }

    /// Human-readable message for the form/toast layer.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmailAlreadyInUse => "An account with this email already exists.",
            Self::InvalidEmail => "Email must be valid.",
            Self::WeakPassword => "Password must be at least 6 characters.",
            Self::InvalidCredentials => "Invalid email or password.",
            Self::UserNotFound => "No account found for this email.",
            Self::UserDisabled => "This account has been disabled.",
            Self::TooManyRequests => "Too many attempts. Please try again later.",
            Self::OperationNotAllowed => "This sign-in method is not enabled.",
            Self::InvalidToken | Self::TokenExpired => "Your session has expired. Please log in again.",
            Self::Network(_) => "Network error. Check your connection and try again.",
            Self::Service { .. } | Self::Unknown(_) => DEFAULT_ERROR_MESSAGE,
        }
    }
}

/// Message for an arbitrary error that reached the UI.
///
/// Identity errors go through the mapping table; anything else shows its own
/// text, or the default when that text is empty.
#[must_use]
pub fn error_message(err: &(dyn std::error::Error + 'static)) -> String {
    if let Some(identity) = err.downcast_ref::<IdentityError>() {
        return identity.user_message().to_owned();
    }
    let text = err.to_string();
    if text.trim().is_empty() { DEFAULT_ERROR_MESSAGE.to_owned() } else { text }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
