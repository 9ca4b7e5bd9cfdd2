//! Staff account records.

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// A staff account as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Account ID.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Account role.
    pub role: Role,
    /// Avatar URL, if set.
    #[serde(default)]
    pub avatar: Option<String>,
}
