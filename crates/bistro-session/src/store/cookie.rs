//! Http-only cookie surface.

use std::sync::RwLock;

use chrono::{DateTime, Utc};
use cookie::time::OffsetDateTime;
use cookie::{Cookie, SameSite};

use super::sink::{TokenSink, TokenSlot};

/// A stored cookie value with its expiry.
#[derive(Debug, Clone)]
struct StoredCookie {
    value: String,
    expires_at: DateTime<Utc>,
}

/// The cookie surface: the jar the routing guard reads.
///
/// Each cookie's `Expires` is set to exactly the token's own embedded
/// expiry, so the cookie never outlives the credential it carries.
/// Reads honor expiry the way a browser would: an expired cookie is
/// absent.
#[derive(Debug, Default)]
pub struct CookieSink {
    access: RwLock<Option<StoredCookie>>,
    refresh: RwLock<Option<StoredCookie>>,
}

impl CookieSink {
    /// Creates an empty jar.
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, slot: TokenSlot) -> &RwLock<Option<StoredCookie>> {
        match slot {
            TokenSlot::Access => &self.access,
            TokenSlot::Refresh => &self.refresh,
        }
    }

    /// Renders the `Set-Cookie` header value for a slot, `None` when the
    /// slot is empty.
    ///
    /// Attributes follow the backend contract: `HttpOnly; Secure;
    /// SameSite=Lax; Path=/` with `Expires` at the token's own expiry.
    pub fn set_cookie_header(&self, slot: TokenSlot) -> Option<String> {
        let guard = self.slot(slot).read().unwrap_or_else(|e| e.into_inner());
        let stored = guard.as_ref()?;
        let expires = OffsetDateTime::from_unix_timestamp(stored.expires_at.timestamp()).ok()?;
        let cookie = Cookie::build((slot.key(), stored.value.clone()))
            .path("/")
            .http_only(true)
            .secure(true)
            .same_site(SameSite::Lax)
            .expires(expires)
            .build();
        Some(cookie.to_string())
    }
}

impl TokenSink for CookieSink {
    fn write(&self, slot: TokenSlot, value: &str, expires_at: DateTime<Utc>) {
        let mut guard = self.slot(slot).write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(StoredCookie {
            value: value.to_string(),
            expires_at,
        });
    }

    fn clear(&self, slot: TokenSlot) {
        let mut guard = self.slot(slot).write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }

    fn read(&self, slot: TokenSlot) -> Option<String> {
        let guard = self.slot(slot).read().unwrap_or_else(|e| e.into_inner());
        let stored = guard.as_ref()?;
        if stored.expires_at <= Utc::now() {
            return None;
        }
        Some(stored.value.clone())
    }
}
