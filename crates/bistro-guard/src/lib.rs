//! # bistro-guard
//!
//! The routing guard: a pure, synchronous policy function evaluated on
//! every matched navigation before anything renders, using only the
//! cookie-visible token state. Performs no I/O; it cannot call the
//! refresh endpoint, which is why an expired access token is resolved
//! by redirecting through the renewal route instead.
//!
//! Role claims are read from the refresh token without signature
//! verification. That is deliberate: the guard only steers UX routing,
//! and the backend re-checks authorization on every API call.

pub mod matcher;
pub mod middleware;
pub mod policy;
pub mod redirect;

pub use matcher::{PathClass, PathMatcher};
pub use middleware::route_guard;
pub use policy::{GuardDecision, RequestTokens, evaluate};
pub use redirect::RenewalRequest;
