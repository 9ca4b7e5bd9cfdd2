//! Dual-surface token store.

pub mod cookie;
pub mod memory;
pub mod sink;

use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::error::SessionError;
use crate::state::SessionState;
use crate::token::decode_claims;

pub use cookie::CookieSink;
pub use memory::MemorySink;
pub use sink::{TokenSink, TokenSlot};

/// Owns the canonical access/refresh token values.
///
/// Every token-setting operation writes both sinks under one lock, so
/// no reader can observe one surface updated and the other not. All
/// other components only read: the UI reads the client surface, the
/// routing guard reads the cookie surface.
pub struct TokenStore {
    client: Arc<dyn TokenSink>,
    cookies: Arc<dyn TokenSink>,
    write_lock: Mutex<()>,
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore").finish()
    }
}

impl TokenStore {
    /// Creates a store over the two injected sinks.
    pub fn new(client: Arc<dyn TokenSink>, cookies: Arc<dyn TokenSink>) -> Self {
        Self {
            client,
            cookies,
            write_lock: Mutex::new(()),
        }
    }

    /// Creates a store with the standard surfaces: an in-memory client
    /// store and an http-only cookie jar.
    pub fn with_default_sinks() -> Self {
        Self::new(Arc::new(MemorySink::new()), Arc::new(CookieSink::new()))
    }

    /// Persists both tokens to both surfaces.
    ///
    /// Both tokens are decoded first; a malformed token fails the whole
    /// operation before anything is written, so no partial-write state
    /// is observable. Cookie expiry is set to each token's own embedded
    /// expiry.
    pub fn set_tokens(&self, access: &str, refresh: &str) -> Result<(), SessionError> {
        let access_claims = decode_claims(access)?;
        let refresh_claims = decode_claims(refresh)?;

        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        for sink in [&self.client, &self.cookies] {
            sink.write(TokenSlot::Access, access, access_claims.expires_at());
            sink.write(TokenSlot::Refresh, refresh, refresh_claims.expires_at());
        }
        debug!(sub = access_claims.sub, "Tokens stored");
        Ok(())
    }

    /// Removes both tokens from both surfaces. Idempotent.
    pub fn clear_tokens(&self) {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        for sink in [&self.client, &self.cookies] {
            sink.clear(TokenSlot::Access);
            sink.clear(TokenSlot::Refresh);
        }
        debug!("Tokens cleared");
    }

    /// Reads the access token from the client surface.
    pub fn access(&self) -> Option<String> {
        self.client.read(TokenSlot::Access)
    }

    /// Reads the refresh token from the client surface.
    pub fn refresh(&self) -> Option<String> {
        self.client.read(TokenSlot::Refresh)
    }

    /// The cookie surface, as the routing guard would see it.
    pub fn cookie_surface(&self) -> &Arc<dyn TokenSink> {
        &self.cookies
    }

    /// Derives the current session state from the refresh token.
    ///
    /// A session is valid iff an unexpired, parseable refresh token is
    /// present, regardless of access-token state.
    pub fn session_state(&self) -> SessionState {
        let Some(refresh) = self.refresh() else {
            return SessionState::Unauthenticated;
        };
        match decode_claims(&refresh) {
            Ok(claims) if !claims.is_expired() => SessionState::Authenticated(claims.role),
            _ => SessionState::Unauthenticated,
        }
    }
}
