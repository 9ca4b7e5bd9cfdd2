//! Token sink abstraction.
//!
//! The Token Store writes every token to two surfaces: a client-visible
//! store (immediate UI auth checks, realtime handshake) and an http-only
//! cookie jar (the routing guard's only view). Both are modeled as sinks
//! so the store can write them transactionally through one method.

use chrono::{DateTime, Utc};

/// The two token slots a sink holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSlot {
    /// Short-lived access token.
    Access,
    /// Long-lived refresh token.
    Refresh,
}

impl TokenSlot {
    /// Cookie/storage key for this slot.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Access => "accessToken",
            Self::Refresh => "refreshToken",
        }
    }
}

/// One storage surface for the token pair.
///
/// Writes are synchronous: there is no suspension point between
/// validating a token and applying it, so no two writers can interleave
/// a partial update.
pub trait TokenSink: Send + Sync {
    /// Stores a value in the given slot, valid until `expires_at`.
    fn write(&self, slot: TokenSlot, value: &str, expires_at: DateTime<Utc>);

    /// Removes the value in the given slot. Idempotent.
    fn clear(&self, slot: TokenSlot);

    /// Reads the value in the given slot, `None` when absent or expired.
    fn read(&self, slot: TokenSlot) -> Option<String>;
}
