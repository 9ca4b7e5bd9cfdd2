//! Request DTOs with validation.

use bistro_entity::{DishStatus, OrderStatus, TableStatus};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Staff login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginBody {
    /// Login email.
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 6, max = 100, message = "Password must be 6-100 characters"))]
    pub password: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshBody {
    /// The refresh token to renew from.
    pub refresh_token: String,
}

/// Logout request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutBody {
    /// The refresh token to invalidate.
    pub refresh_token: String,
}

/// Guest table-login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GuestLoginBody {
    /// Guest display name.
    #[validate(length(min = 2, max = 50, message = "Name must be 2-50 characters"))]
    pub name: String,
    /// The table the guest is seated at.
    pub table_number: i32,
    /// The table's QR token.
    #[validate(length(min = 1, message = "Table token is required"))]
    pub token: String,
}

/// Dish creation request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDishBody {
    /// Dish name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Price in the smallest currency unit.
    #[validate(range(min = 0))]
    pub price: i64,
    /// Menu description.
    pub description: String,
    /// Image URL.
    #[validate(url(message = "Image must be a valid URL"))]
    pub image: String,
    /// Availability state.
    pub status: DishStatus,
}

/// Dish update request. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDishBody {
    /// New name.
    pub name: Option<String>,
    /// New price.
    pub price: Option<i64>,
    /// New description.
    pub description: Option<String>,
    /// New image URL.
    pub image: Option<String>,
    /// New availability state.
    pub status: Option<DishStatus>,
}

/// Table creation request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTableBody {
    /// Table number.
    #[validate(range(min = 1))]
    pub number: i32,
    /// Seat count.
    #[validate(range(min = 1))]
    pub capacity: i32,
    /// Visibility state.
    pub status: TableStatus,
}

/// Table update request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTableBody {
    /// New seat count.
    pub capacity: Option<i32>,
    /// New visibility state.
    pub status: Option<TableStatus>,
    /// Rotate the QR token, invalidating printed codes.
    pub change_token: bool,
}

/// One line of a guest order submission.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// The ordered dish.
    pub dish_id: i64,
    /// Ordered quantity.
    #[validate(range(min = 1, max = 20))]
    pub quantity: i32,
}

/// Staff-entered order creation on behalf of a guest.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrdersBody {
    /// The guest the orders belong to.
    pub guest_id: i64,
    /// Lines to create.
    #[validate(length(min = 1, message = "At least one order line is required"))]
    #[validate(nested)]
    pub orders: Vec<OrderItem>,
}

/// Order status/content update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderBody {
    /// New lifecycle state.
    pub status: OrderStatus,
    /// Replacement dish.
    pub dish_id: i64,
    /// Replacement quantity.
    pub quantity: i32,
}

/// Settle all of a guest's unpaid orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayGuestOrdersBody {
    /// The guest to settle.
    pub guest_id: i64,
}

/// Own-profile update.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateMeBody {
    /// New display name.
    #[validate(length(min = 2, max = 255))]
    pub name: String,
    /// New avatar URL.
    pub avatar: Option<String>,
}

/// Own-password change.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordBody {
    /// Current password.
    #[validate(length(min = 6, max = 100))]
    pub old_password: String,
    /// New password.
    #[validate(length(min = 6, max = 100))]
    pub password: String,
    /// New password, repeated.
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,
}

/// Employee account creation (owner only).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeBody {
    /// Display name.
    #[validate(length(min = 2, max = 255))]
    pub name: String,
    /// Login email.
    #[validate(email)]
    pub email: String,
    /// Initial password.
    #[validate(length(min = 6, max = 100))]
    pub password: String,
    /// Initial password, repeated.
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,
    /// Avatar URL.
    pub avatar: Option<String>,
}

/// Employee account update (owner only).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeBody {
    /// New display name.
    #[validate(length(min = 2, max = 255))]
    pub name: String,
    /// New login email.
    #[validate(email)]
    pub email: String,
    /// Replacement password, when set.
    pub password: Option<String>,
    /// Avatar URL.
    pub avatar: Option<String>,
    /// Promote to or demote from Owner.
    pub role: Option<String>,
}

/// Dish description generation request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerateDescriptionBody {
    /// The dish name to describe.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}
