//! Dining table endpoints.

use validator::Validate;

use bistro_core::error::AppError;
use bistro_core::result::AppResult;
use bistro_entity::DiningTable;

use crate::client::ApiClient;
use crate::dto::{CreateTableBody, UpdateTableBody};

impl ApiClient {
    /// Lists all tables.
    pub async fn list_tables(&self) -> AppResult<Vec<DiningTable>> {
        self.get("/tables").await
    }

    /// Fetches one table by number.
    pub async fn get_table(&self, number: i32) -> AppResult<DiningTable> {
        self.get(&format!("/tables/{number}")).await
    }

    /// Registers a new table.
    pub async fn create_table(&self, body: &CreateTableBody) -> AppResult<DiningTable> {
        body.validate()
            .map_err(|err| AppError::validation(err.to_string()))?;
        self.post("/tables", body).await
    }

    /// Updates a table; `change_token` rotates the QR token.
    pub async fn update_table(&self, number: i32, body: &UpdateTableBody) -> AppResult<DiningTable> {
        self.put(&format!("/tables/{number}"), body).await
    }

    /// Removes a table.
    pub async fn delete_table(&self, number: i32) -> AppResult<DiningTable> {
        self.delete(&format!("/tables/{number}")).await
    }
}
