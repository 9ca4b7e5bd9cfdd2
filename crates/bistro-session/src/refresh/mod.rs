//! Background token renewal.

pub mod coordinator;
pub mod runner;

pub use coordinator::{RefreshCoordinator, RefreshOutcome};
pub use runner::RefreshLoop;
