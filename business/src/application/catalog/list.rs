use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::BackendError;
use crate::domain::logger::Logger;
use crate::domain::product::catalog::ProductCatalog;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::list::{ListProductsParams, ListProductsUseCase};

pub struct ListProductsUseCaseImpl {
    pub catalog: Arc<dyn ProductCatalog>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListProductsUseCase for ListProductsUseCaseImpl {
    async fn execute(&self, params: ListProductsParams) -> Result<Vec<Product>, BackendError> {
        // "home" is the storefront's all-products tab, not a real category.
        let category = params
            .category
            .as_deref()
            .filter(|category| *category != "home");

        let products = self.catalog.list(category).await.inspect_err(|err| {
            self.logger.error(&format!("Product fetch failed: {err}"));
        })?;

        self.logger
            .debug(&format!("Fetched {} product(s)", products.len()));
        Ok(products)
    }
}
