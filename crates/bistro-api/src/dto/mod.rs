//! Wire DTOs for the backend REST API.
//!
//! The backend wraps every successful body in `{"data": ..., "message":
//! ...}` and speaks camelCase throughout.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
