//! Dish description generation, proxied through the backend.

use validator::Validate;

use bistro_core::error::AppError;
use bistro_core::result::AppResult;

use crate::client::ApiClient;
use crate::dto::{DishDescription, GenerateDescriptionBody};

impl ApiClient {
    /// Asks the backend to draft a menu description for a dish name.
    ///
    /// Stateless: nothing is persisted until the caller saves the text
    /// through a dish create or update.
    pub async fn generate_dish_description(&self, name: &str) -> AppResult<DishDescription> {
        let body = GenerateDescriptionBody {
            name: name.to_string(),
        };
        body.validate()
            .map_err(|err| AppError::validation(err.to_string()))?;
        self.post("/dishes/generate-description", &body).await
    }
}
