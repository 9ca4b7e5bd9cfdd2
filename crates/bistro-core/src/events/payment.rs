//! Payment-related domain events.

use serde::{Deserialize, Serialize};

/// Events related to payments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PaymentEvent {
    /// A guest's outstanding orders were paid.
    Completed {
        /// The guest whose orders were settled.
        guest_id: i64,
        /// IDs of the orders covered by the payment.
        order_ids: Vec<i64>,
    },
}
