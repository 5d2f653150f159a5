//! Principal payload and change notifications.

use serde::{Deserialize, Serialize};

/// Identity as reported by the identity service.
///
/// Field names follow the service's camelCase wire format.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_verified: Option<bool>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// One "principal changed" notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PrincipalChange {
    /// No authenticated principal.
    SignedOut,
    /// A principal is signed in.
    SignedIn(Principal),
}

impl PrincipalChange {
    /// Borrow the principal, if any.
    #[must_use]
    pub fn principal(&self) -> Option<&Principal> {
        match self {
            Self::SignedOut => None,
            Self::SignedIn(p) => Some(p),
        }
    }
}

impl From<Option<Principal>> for PrincipalChange {
    fn from(value: Option<Principal>) -> Self {
        value.map_or(Self::SignedOut, Self::SignedIn)
    }
}
