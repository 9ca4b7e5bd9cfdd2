//! Fan-out of inbound frames to per-event subscribers.

use bistro_core::events::DomainEvent;
use dashmap::DashMap;
use tokio::sync::broadcast;
use tracing::trace;

use crate::message::InboundFrame;

/// Routes inbound frames to broadcast channels keyed by event name.
///
/// Subscribers register by wire event name (`new-order`,
/// `update-order`, `payment`) and receive the mapped [`DomainEvent`].
/// Dispatching to an event nobody subscribed to is a no-op.
#[derive(Debug)]
pub struct EventDispatcher {
    channels: DashMap<String, broadcast::Sender<DomainEvent>>,
    buffer: usize,
}

impl EventDispatcher {
    /// Create a dispatcher whose broadcast channels hold `buffer`
    /// undelivered events before lagging subscribers start losing them.
    pub fn new(buffer: usize) -> Self {
        Self {
            channels: DashMap::new(),
            buffer,
        }
    }

    /// Subscribe to a named event stream.
    pub fn subscribe(&self, event: &str) -> broadcast::Receiver<DomainEvent> {
        self.channels
            .entry(event.to_string())
            .or_insert_with(|| broadcast::channel(self.buffer).0)
            .subscribe()
    }

    /// Map a frame to its domain event and deliver it to subscribers.
    pub fn dispatch(&self, frame: InboundFrame) {
        let name = frame.event.clone();
        let Some(event) = frame.into_domain_event() else {
            return;
        };
        match self.channels.get(&name) {
            // send only fails when every receiver is gone; the event
            // is simply dropped then.
            Some(sender) => {
                let delivered = sender.send(event).unwrap_or(0);
                trace!(event = %name, delivered, "Dispatched realtime event");
            }
            None => trace!(event = %name, "No subscribers for realtime event"),
        }
    }
}
