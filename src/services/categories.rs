//! Category service implementation

use tracing::debug;
use crate::models::Category;
use crate::services::api::ApiClient;
use crate::utils::errors::Result;

#[derive(Debug, Clone)]
pub struct CategoryService {
    api: ApiClient,
}

impl CategoryService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn categories(&self, token: &str) -> Result<Vec<Category>> {
        let categories: Vec<Category> = self.api.get("categories", Some(token)).await?;
        debug!(count = categories.len(), "Fetched categories");
        Ok(categories)
    }
}
