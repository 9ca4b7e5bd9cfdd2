//! Guest session records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A guest as returned by the backend after a QR table login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    /// Guest ID.
    pub id: i64,
    /// Name entered at the table.
    pub name: String,
    /// Table the guest is seated at.
    #[serde(default)]
    pub table_number: Option<i32>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
