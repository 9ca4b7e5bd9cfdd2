//! # bistro-realtime
//!
//! Client for the backend's realtime event stream. The channel
//! authenticates once, at connect time, with the access token it is
//! handed; it is NOT re-authenticated when the token store rotates.
//! The credential is session-bound by construction: keep it that way
//! unless the backend contract changes, and change it deliberately.

pub mod channel;
pub mod dispatcher;
pub mod message;

pub use channel::{RealtimeChannel, build_handshake_request};
pub use dispatcher::EventDispatcher;
pub use message::InboundFrame;
