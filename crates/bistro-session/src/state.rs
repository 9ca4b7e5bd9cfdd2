//! Derived session state.

use bistro_entity::Role;

/// The session state derived from the refresh token. Never stored;
/// transitions happen only through login, logout, or refresh-token
/// expiry detected at guard or refresh time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No valid session.
    Unauthenticated,
    /// A valid session with the given role.
    Authenticated(Role),
}

impl SessionState {
    /// Whether a valid session exists.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// The session role, if authenticated.
    pub fn role(&self) -> Option<Role> {
        match self {
            Self::Authenticated(role) => Some(*role),
            Self::Unauthenticated => None,
        }
    }
}
