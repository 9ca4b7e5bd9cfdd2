//! Account endpoints: own profile and employee management.

use validator::Validate;

use bistro_core::error::AppError;
use bistro_core::result::AppResult;
use bistro_entity::Account;

use crate::client::ApiClient;
use crate::dto::{ChangePasswordBody, CreateEmployeeBody, UpdateEmployeeBody, UpdateMeBody};

impl ApiClient {
    /// Fetches the authenticated account.
    pub async fn me(&self) -> AppResult<Account> {
        self.get("/accounts/me").await
    }

    /// Updates the authenticated account's profile.
    pub async fn update_me(&self, body: &UpdateMeBody) -> AppResult<Account> {
        body.validate()
            .map_err(|err| AppError::validation(err.to_string()))?;
        self.put("/accounts/me", body).await
    }

    /// Changes the authenticated account's password.
    pub async fn change_password(&self, body: &ChangePasswordBody) -> AppResult<Account> {
        body.validate()
            .map_err(|err| AppError::validation(err.to_string()))?;
        self.put("/accounts/change-password", body).await
    }

    /// Lists employee accounts. Owner only.
    pub async fn list_employees(&self) -> AppResult<Vec<Account>> {
        self.get("/accounts").await
    }

    /// Fetches one employee account. Owner only.
    pub async fn get_employee(&self, id: i64) -> AppResult<Account> {
        self.get(&format!("/accounts/detail/{id}")).await
    }

    /// Creates an employee account. Owner only.
    pub async fn create_employee(&self, body: &CreateEmployeeBody) -> AppResult<Account> {
        body.validate()
            .map_err(|err| AppError::validation(err.to_string()))?;
        self.post("/accounts", body).await
    }

    /// Updates an employee account. Owner only.
    pub async fn update_employee(&self, id: i64, body: &UpdateEmployeeBody) -> AppResult<Account> {
        body.validate()
            .map_err(|err| AppError::validation(err.to_string()))?;
        self.put(&format!("/accounts/detail/{id}"), body).await
    }

    /// Deletes an employee account. Owner only.
    pub async fn delete_employee(&self, id: i64) -> AppResult<Account> {
        self.delete(&format!("/accounts/detail/{id}")).await
    }
}
