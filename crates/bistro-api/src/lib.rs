//! # bistro-api
//!
//! Typed REST client for the Bistro backend. [`ApiClient`] attaches the
//! stored access token to every request and, on a 401, funnels through
//! the refresh coordinator for exactly one renewal-and-retry.
//! [`AuthClient`] is the unauthenticated token-issuing surface that the
//! session core talks to.

pub mod account;
pub mod ai;
pub mod auth;
pub mod client;
pub mod dish;
pub mod dto;
pub mod guest;
pub mod order;
pub mod table;

pub use auth::AuthClient;
pub use client::ApiClient;
