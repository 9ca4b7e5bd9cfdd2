//! The backend REST collaborator, seen from the session core.

use async_trait::async_trait;

use bistro_core::AppResult;

use crate::token::TokenPair;

/// Staff login credentials.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Login email.
    pub email: String,
    /// Plaintext password, forwarded to the backend for verification.
    pub password: String,
}

/// The token-issuing backend.
///
/// The session core only ever talks to the backend through this trait;
/// the concrete HTTP client lives in `bistro-api`, and tests substitute
/// a mock.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Exchanges credentials for a fresh token pair.
    async fn login(&self, credentials: &Credentials) -> AppResult<TokenPair>;

    /// Mints a new token pair from a refresh token.
    async fn refresh(&self, refresh_token: &str) -> AppResult<TokenPair>;

    /// Invalidates the session server-side.
    async fn logout(&self, access_token: &str, refresh_token: &str) -> AppResult<()>;
}
