//! # bistro-session
//!
//! The session core of the Bistro client: dual-surface token storage,
//! unverified claim decoding, and the background refresh coordinator
//! with its single-flight renewal guarantee.
//!
//! Claim decoding never verifies signatures. The client reads claims
//! only for UX routing and display; the backend re-checks authorization
//! on every API call and is the sole authority. Do not "fix" this into
//! a security boundary.

pub mod backend;
pub mod error;
pub mod refresh;
pub mod state;
pub mod store;
pub mod token;

pub use backend::{AuthBackend, Credentials};
pub use error::SessionError;
pub use refresh::{RefreshCoordinator, RefreshLoop, RefreshOutcome};
pub use state::SessionState;
pub use store::TokenStore;
pub use token::{TokenClaims, TokenPair, decode_claims};
