use async_trait::async_trait;

use crate::domain::errors::BackendError;

use super::model::Product;

#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Lists products, optionally restricted to one category.
    async fn list(&self, category: Option<&str>) -> Result<Vec<Product>, BackendError>;
}
