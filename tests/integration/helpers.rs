//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};

use bistro_core::error::AppError;
use bistro_core::result::AppResult;
use bistro_entity::Role;
use bistro_session::{AuthBackend, Credentials, TokenClaims, TokenPair};

/// Forge an unsigned-for-our-purposes JWT with the given claims. The
/// client never verifies signatures, so any secret works.
pub fn forge_token(role: Role, iat: i64, exp: i64) -> String {
    let claims = TokenClaims {
        sub: 1,
        role,
        iat,
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"test-secret"),
    )
    .unwrap()
}

/// A token pair that is valid right now.
pub fn live_pair(role: Role) -> TokenPair {
    let now = Utc::now().timestamp();
    TokenPair {
        access_token: forge_token(role, now, now + 300),
        refresh_token: forge_token(role, now, now + 3600),
    }
}

/// A pair whose access token is inside its renewal window.
pub fn stale_pair(role: Role) -> TokenPair {
    let now = Utc::now().timestamp();
    TokenPair {
        access_token: forge_token(role, now - 280, now + 20),
        refresh_token: forge_token(role, now, now + 3600),
    }
}

/// Backend double that mints fresh pairs and counts calls.
pub struct MockBackend {
    pub role: Role,
    pub refresh_calls: AtomicUsize,
    pub logout_calls: AtomicUsize,
    pub fail_refresh: bool,
}

impl MockBackend {
    pub fn new(role: Role) -> Arc<Self> {
        Arc::new(Self {
            role,
            refresh_calls: AtomicUsize::new(0),
            logout_calls: AtomicUsize::new(0),
            fail_refresh: false,
        })
    }

    pub fn failing(role: Role) -> Arc<Self> {
        Arc::new(Self {
            role,
            refresh_calls: AtomicUsize::new(0),
            logout_calls: AtomicUsize::new(0),
            fail_refresh: true,
        })
    }
}

#[async_trait]
impl AuthBackend for MockBackend {
    async fn login(&self, _credentials: &Credentials) -> AppResult<TokenPair> {
        Ok(live_pair(self.role))
    }

    async fn refresh(&self, _refresh_token: &str) -> AppResult<TokenPair> {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        // Long enough for concurrent callers to pile onto one renewal.
        tokio::time::sleep(std::time::Duration::from_millis(25)).await;
        if self.fail_refresh {
            return Err(AppError::external_service("refresh endpoint down"));
        }
        Ok(live_pair(self.role))
    }

    async fn logout(&self, _access_token: &str, _refresh_token: &str) -> AppResult<()> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
