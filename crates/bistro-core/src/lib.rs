//! # bistro-core
//!
//! Core crate for the Bistro restaurant client. Contains configuration
//! schemas, domain events, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Bistro crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
