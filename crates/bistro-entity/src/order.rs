//! Guest order records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dish::Dish;

/// Lifecycle state of a guest order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Placed, awaiting kitchen confirmation.
    Pending,
    /// Accepted and being prepared.
    Processing,
    /// Declined by staff.
    Rejected,
    /// Served to the table.
    Delivered,
    /// Settled.
    Paid,
}

impl OrderStatus {
    /// Return the status as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Rejected => "Rejected",
            Self::Delivered => "Delivered",
            Self::Paid => "Paid",
        }
    }
}

/// An order as returned by the backend.
///
/// `dish_snapshot` is the dish as it was at order time, so later menu
/// edits do not rewrite order history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order ID.
    pub id: i64,
    /// The ordering guest, if still linked.
    #[serde(default)]
    pub guest_id: Option<i64>,
    /// Table the order was placed from.
    #[serde(default)]
    pub table_number: Option<i32>,
    /// Dish as captured at order time.
    pub dish_snapshot: Dish,
    /// Ordered quantity.
    pub quantity: i32,
    /// Lifecycle state.
    pub status: OrderStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
