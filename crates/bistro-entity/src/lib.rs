//! # bistro-entity
//!
//! Domain records exchanged with the backend REST API. These are plain
//! passthrough records: the client renders and forwards them without
//! interpreting their persistence format.

pub mod account;
pub mod dish;
pub mod guest;
pub mod order;
pub mod role;
pub mod table;

pub use account::Account;
pub use dish::{Dish, DishStatus};
pub use guest::Guest;
pub use order::{Order, OrderStatus};
pub use role::Role;
pub use table::{DiningTable, TableStatus};
