//! Session error taxonomy.

use thiserror::Error;

use bistro_core::AppError;

/// Errors produced by the session core.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// Token claims could not be parsed. Callers must treat this
    /// identically to an absent token.
    #[error("malformed token: claims could not be parsed")]
    MalformedToken,

    /// The refresh token is past its expiry. Fatal for the session.
    #[error("refresh token has expired")]
    RefreshExpired,

    /// The renewal network call failed. Transient: tokens are left
    /// untouched so a later attempt can still succeed.
    #[error("token renewal failed: {0}")]
    RenewalFailed(#[source] AppError),
}

impl SessionError {
    /// Whether this error ends the session, as opposed to a transient
    /// failure worth retrying on the next tick.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::MalformedToken | Self::RefreshExpired)
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::MalformedToken => AppError::session("Malformed token"),
            SessionError::RefreshExpired => AppError::unauthorized("Refresh token has expired"),
            SessionError::RenewalFailed(source) => AppError::with_source(
                bistro_core::error::ErrorKind::ExternalService,
                "Token renewal failed",
                source,
            ),
        }
    }
}
