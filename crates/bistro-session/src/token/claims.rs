//! JWT claims embedded in access and refresh tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bistro_entity::Role;

/// Claims payload embedded in every token issued by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject — the account or guest ID.
    pub sub: i64,
    /// Role at the time of token issuance.
    pub role: Role,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl TokenClaims {
    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether this token has expired at `now` (epoch seconds).
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp <= now
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp())
    }

    /// Whether less than a third of the token's lifetime remains at `now`.
    ///
    /// Integer arithmetic keeps the 1/3 threshold exact: renew when
    /// `remaining * 3 < lifetime`. A non-positive lifetime always renews.
    pub fn needs_renewal_at(&self, now: i64) -> bool {
        let lifetime = self.exp - self.iat;
        if lifetime <= 0 {
            return true;
        }
        (self.exp - now) * 3 < lifetime
    }
}
