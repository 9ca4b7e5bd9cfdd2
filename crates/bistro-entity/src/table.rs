//! Dining table records.

use serde::{Deserialize, Serialize};

/// Availability state of a dining table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableStatus {
    /// Open for guests.
    Available,
    /// Not accepting guests.
    Hidden,
    /// Held for a booking.
    Reserved,
}

/// A dining table as returned by the backend.
///
/// The `token` is embedded in the table's QR code; a guest scanning it
/// logs in against this table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTable {
    /// Table number (stable identifier).
    pub number: i32,
    /// Seat capacity.
    pub capacity: i32,
    /// Availability state.
    pub status: TableStatus,
    /// QR login token for this table.
    pub token: String,
}
