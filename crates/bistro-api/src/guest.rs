//! Guest-facing endpoints, used after a table login.

use validator::Validate;

use bistro_core::error::AppError;
use bistro_core::result::AppResult;
use bistro_entity::Order;

use crate::client::ApiClient;
use crate::dto::OrderItem;

impl ApiClient {
    /// Places the guest's own orders.
    pub async fn guest_create_orders(&self, items: &[OrderItem]) -> AppResult<Vec<Order>> {
        for item in items {
            item.validate()
                .map_err(|err| AppError::validation(err.to_string()))?;
        }
        self.post("/guest/orders", &items).await
    }

    /// Lists the guest's own orders for this sitting.
    pub async fn guest_list_orders(&self) -> AppResult<Vec<Order>> {
        self.get("/guest/orders").await
    }
}
