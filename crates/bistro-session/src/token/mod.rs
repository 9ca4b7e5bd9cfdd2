//! Token claims and unverified claim decoding.

pub mod claims;
pub mod decode;

use serde::{Deserialize, Serialize};

pub use claims::TokenClaims;
pub use decode::decode_claims;

/// An access + refresh token pair as issued by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token. Its expiry is the true session boundary.
    pub refresh_token: String,
}
