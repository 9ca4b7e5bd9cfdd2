//! Menu dish endpoints.

use validator::Validate;

use bistro_core::error::AppError;
use bistro_core::result::AppResult;
use bistro_entity::Dish;

use crate::client::ApiClient;
use crate::dto::{CreateDishBody, UpdateDishBody};

impl ApiClient {
    /// Lists the full menu.
    pub async fn list_dishes(&self) -> AppResult<Vec<Dish>> {
        self.get("/dishes").await
    }

    /// Fetches one dish.
    pub async fn get_dish(&self, id: i64) -> AppResult<Dish> {
        self.get(&format!("/dishes/{id}")).await
    }

    /// Adds a dish to the menu.
    pub async fn create_dish(&self, body: &CreateDishBody) -> AppResult<Dish> {
        body.validate()
            .map_err(|err| AppError::validation(err.to_string()))?;
        self.post("/dishes", body).await
    }

    /// Updates a dish.
    pub async fn update_dish(&self, id: i64, body: &UpdateDishBody) -> AppResult<Dish> {
        self.put(&format!("/dishes/{id}"), body).await
    }

    /// Removes a dish from the menu.
    pub async fn delete_dish(&self, id: i64) -> AppResult<Dish> {
        self.delete(&format!("/dishes/{id}")).await
    }
}
