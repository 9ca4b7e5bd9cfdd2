//! Order-related domain events.

use serde::{Deserialize, Serialize};

/// Events related to guest orders.
///
/// Payloads are passthrough snapshots of the backend order record; the
/// client does not interpret them beyond display and list refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OrderEvent {
    /// A guest placed a new order.
    Created {
        /// The order ID.
        order_id: i64,
        /// Table the order was placed from.
        table_number: i32,
        /// Name of the ordered dish.
        dish_name: String,
        /// Ordered quantity.
        quantity: i32,
    },
    /// A staff member changed an order's status.
    Updated {
        /// The order ID.
        order_id: i64,
        /// Name of the ordered dish.
        dish_name: String,
        /// Ordered quantity.
        quantity: i32,
        /// The new status, as sent by the backend.
        status: String,
    },
}
