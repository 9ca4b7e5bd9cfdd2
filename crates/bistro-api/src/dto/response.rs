//! Response DTOs.

use bistro_entity::{Account, Guest};
use serde::{Deserialize, Serialize};

/// The backend's success envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// The payload.
    pub data: T,
    /// Human-readable status message.
    #[serde(default)]
    pub message: String,
}

/// The backend's error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub message: String,
}

/// Payload of a successful staff login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    /// Fresh access token.
    pub access_token: String,
    /// Fresh refresh token.
    pub refresh_token: String,
    /// The authenticated account.
    pub account: Account,
}

/// Payload of a successful token refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshData {
    /// Fresh access token.
    pub access_token: String,
    /// Fresh refresh token.
    pub refresh_token: String,
}

/// Payload of a successful guest table login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestLoginData {
    /// Fresh access token.
    pub access_token: String,
    /// Fresh refresh token.
    pub refresh_token: String,
    /// The guest record created for this sitting.
    pub guest: Guest,
}

/// Payload of a dish description generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishDescription {
    /// The generated text.
    pub description: String,
}
