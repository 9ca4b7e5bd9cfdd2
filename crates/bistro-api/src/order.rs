//! Order management endpoints (staff side).

use chrono::{DateTime, Utc};
use validator::Validate;

use bistro_core::error::AppError;
use bistro_core::result::AppResult;
use bistro_entity::Order;

use crate::client::ApiClient;
use crate::dto::{CreateOrdersBody, PayGuestOrdersBody, UpdateOrderBody};

impl ApiClient {
    /// Lists orders created inside the given window.
    pub async fn list_orders(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> AppResult<Vec<Order>> {
        self.get(&format!(
            "/orders?fromDate={}&toDate={}",
            from.to_rfc3339(),
            to.to_rfc3339()
        ))
        .await
    }

    /// Fetches one order.
    pub async fn get_order(&self, id: i64) -> AppResult<Order> {
        self.get(&format!("/orders/{id}")).await
    }

    /// Creates orders on behalf of a seated guest.
    pub async fn create_orders(&self, body: &CreateOrdersBody) -> AppResult<Vec<Order>> {
        body.validate()
            .map_err(|err| AppError::validation(err.to_string()))?;
        self.post("/orders", body).await
    }

    /// Updates an order's status or contents.
    pub async fn update_order(&self, id: i64, body: &UpdateOrderBody) -> AppResult<Order> {
        self.put(&format!("/orders/{id}"), body).await
    }

    /// Marks all of a guest's unpaid orders as paid.
    pub async fn pay_guest_orders(&self, body: &PayGuestOrdersBody) -> AppResult<Vec<Order>> {
        self.post("/orders/pay", body).await
    }
}
