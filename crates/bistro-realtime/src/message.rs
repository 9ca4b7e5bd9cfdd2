//! Inbound wire frames and their mapping to domain events.
//!
//! The backend emits named JSON frames of the shape
//! `{"event": "<name>", "data": <payload>}`. Three names are
//! recognized: `new-order` and `update-order` carry a single order
//! record, `payment` carries the array of orders settled together.

use bistro_core::events::{DomainEvent, EventPayload, OrderEvent, PaymentEvent};
use bistro_entity::Order;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Frame emitted when a guest places an order.
pub const EVENT_NEW_ORDER: &str = "new-order";
/// Frame emitted when staff change an order's status.
pub const EVENT_UPDATE_ORDER: &str = "update-order";
/// Frame emitted when a guest's orders are paid.
pub const EVENT_PAYMENT: &str = "payment";

/// A raw frame as read off the socket, before domain mapping.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundFrame {
    /// The event name.
    pub event: String,
    /// The untyped payload.
    pub data: Value,
}

impl InboundFrame {
    /// Parses a text frame from the socket.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Maps the frame onto a domain event.
    ///
    /// Returns `None` for unrecognized event names and for payloads
    /// that do not deserialize as the shape the name promises; both
    /// are logged and dropped rather than tearing the channel down.
    pub fn into_domain_event(self) -> Option<DomainEvent> {
        let payload = match self.event.as_str() {
            EVENT_NEW_ORDER => {
                let order: Order = self.decode()?;
                EventPayload::Order(OrderEvent::Created {
                    order_id: order.id,
                    table_number: order.table_number.unwrap_or_default(),
                    dish_name: order.dish_snapshot.name,
                    quantity: order.quantity,
                })
            }
            EVENT_UPDATE_ORDER => {
                let order: Order = self.decode()?;
                EventPayload::Order(OrderEvent::Updated {
                    order_id: order.id,
                    dish_name: order.dish_snapshot.name,
                    quantity: order.quantity,
                    status: order.status.as_str().to_string(),
                })
            }
            EVENT_PAYMENT => {
                let orders: Vec<Order> = self.decode()?;
                let guest_id = orders.iter().find_map(|order| order.guest_id)?;
                EventPayload::Payment(PaymentEvent::Completed {
                    guest_id,
                    order_ids: orders.iter().map(|order| order.id).collect(),
                })
            }
            other => {
                warn!(event = other, "Dropping unrecognized realtime frame");
                return None;
            }
        };
        Some(DomainEvent::new(payload))
    }

    fn decode<T: serde::de::DeserializeOwned>(&self) -> Option<T> {
        match serde_json::from_value(self.data.clone()) {
            Ok(decoded) => Some(decoded),
            Err(error) => {
                warn!(event = %self.event, %error, "Malformed realtime frame payload");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_json(id: i64, guest_id: i64, status: &str) -> Value {
        serde_json::json!({
            "id": id,
            "guestId": guest_id,
            "tableNumber": 4,
            "dishSnapshot": {
                "id": 7,
                "name": "Pho Bo",
                "price": 65000,
                "description": "Beef noodle soup",
                "image": "https://img.example/pho.png",
                "status": "Available",
                "createdAt": "2026-08-25T10:00:00Z",
                "updatedAt": "2026-08-25T10:00:00Z",
            },
            "quantity": 2,
            "status": status,
            "createdAt": "2026-08-25T11:00:00Z",
            "updatedAt": "2026-08-25T11:05:00Z",
        })
    }

    #[test]
    fn test_new_order_frame_maps_to_created_event() {
        let frame = InboundFrame {
            event: EVENT_NEW_ORDER.to_string(),
            data: order_json(42, 9, "Pending"),
        };
        let event = frame.into_domain_event().unwrap();
        match event.payload {
            EventPayload::Order(OrderEvent::Created {
                order_id,
                table_number,
                dish_name,
                quantity,
            }) => {
                assert_eq!(order_id, 42);
                assert_eq!(table_number, 4);
                assert_eq!(dish_name, "Pho Bo");
                assert_eq!(quantity, 2);
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn test_update_order_frame_carries_status() {
        let frame = InboundFrame {
            event: EVENT_UPDATE_ORDER.to_string(),
            data: order_json(42, 9, "Delivered"),
        };
        let event = frame.into_domain_event().unwrap();
        match event.payload {
            EventPayload::Order(OrderEvent::Updated { status, .. }) => {
                assert_eq!(status, "Delivered");
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn test_payment_frame_collects_order_ids() {
        let frame = InboundFrame {
            event: EVENT_PAYMENT.to_string(),
            data: Value::Array(vec![
                order_json(1, 9, "Paid"),
                order_json(2, 9, "Paid"),
            ]),
        };
        let event = frame.into_domain_event().unwrap();
        match event.payload {
            EventPayload::Payment(PaymentEvent::Completed {
                guest_id,
                order_ids,
            }) => {
                assert_eq!(guest_id, 9);
                assert_eq!(order_ids, vec![1, 2]);
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_event_and_bad_payload_are_dropped() {
        let frame = InboundFrame {
            event: "table-updated".to_string(),
            data: Value::Null,
        };
        assert!(frame.into_domain_event().is_none());

        let frame = InboundFrame {
            event: EVENT_NEW_ORDER.to_string(),
            data: serde_json::json!({"id": "not-a-number"}),
        };
        assert!(frame.into_domain_event().is_none());
    }
}
