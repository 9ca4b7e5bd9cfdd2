//! Dish records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Availability state of a dish on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DishStatus {
    /// Shown on the menu and orderable.
    Available,
    /// Shown on the menu but not orderable.
    Unavailable,
    /// Not shown on the menu.
    Hidden,
}

/// A dish as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    /// Dish ID.
    pub id: i64,
    /// Dish name.
    pub name: String,
    /// Price in the smallest currency unit.
    pub price: i64,
    /// Menu description.
    pub description: String,
    /// Image URL.
    pub image: String,
    /// Availability state.
    pub status: DishStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
