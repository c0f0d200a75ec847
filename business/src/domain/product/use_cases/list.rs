use async_trait::async_trait;

use crate::domain::errors::BackendError;
use crate::domain::product::model::Product;

pub struct ListProductsParams {
    pub category: Option<String>,
}

#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute(&self, params: ListProductsParams) -> Result<Vec<Product>, BackendError>;
}
