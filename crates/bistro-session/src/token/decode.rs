//! Unverified token claim decoding.
//!
//! The client never holds the signing secret; it parses the payload
//! segment of a token purely to read claims for routing and display.
//! Signature trust is delegated to the issuing backend, which validates
//! every API call independently.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::claims::TokenClaims;
use crate::error::SessionError;

/// Parses the claims of a JWT without verifying its signature.
///
/// Fails with [`SessionError::MalformedToken`] on anything that is not a
/// three-segment token with a JSON claims payload. Callers must treat
/// that outcome identically to an absent token.
pub fn decode_claims(token: &str) -> Result<TokenClaims, SessionError> {
    let mut segments = token.split('.');
    let payload = match (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) {
        (Some(_header), Some(payload), Some(_signature), None) => payload,
        _ => return Err(SessionError::MalformedToken),
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| SessionError::MalformedToken)?;

    serde_json::from_slice(&bytes).map_err(|_| SessionError::MalformedToken)
}
