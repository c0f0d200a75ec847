use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;

use business::domain::errors::BackendError;
use business::domain::product::catalog::ProductCatalog;
use business::domain::product::model::Product;
use business::domain::shared::value_objects::ProductId;

use crate::client::BackendClient;

pub struct ProductCatalogSupabase {
    client: BackendClient,
}

impl ProductCatalogSupabase {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

/// Row shape of the hosted `products` table.
#[derive(Debug, Deserialize)]
struct ProductRow {
    id: i64,
    name: String,
    description: Option<String>,
    price: Decimal,
    image_url: Option<String>,
    category: Option<String>,
}

impl ProductRow {
    fn into_domain(self) -> Product {
        Product {
            id: ProductId::new(self.id.to_string()),
            name: self.name,
            description: self.description,
            unit_price: self.price,
            image_url: self.image_url,
            category: self.category,
        }
    }
}

#[async_trait]
impl ProductCatalog for ProductCatalogSupabase {
    async fn list(&self, category: Option<&str>) -> Result<Vec<Product>, BackendError> {
        let mut request = self
            .client
            .client
            .get(self.client.rest_url("products"))
            .header("apikey", &self.client.api_key)
            .header("Authorization", self.client.auth_header())
            .query(&[("select", "*")]);

        if let Some(category) = category {
            request = request.query(&[("category", format!("eq.{category}"))]);
        }

        let response = request.send().await.map_err(|err| {
            tracing::error!("Catalog request failed: {err}");
            BackendError::Connection
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(BackendError::Unauthorized);
        }
        if !status.is_success() {
            tracing::error!("Catalog request rejected with status {status}");
            return Err(BackendError::Rejected);
        }

        let rows: Vec<ProductRow> = response.json().await.map_err(|err| {
            tracing::error!("Catalog response unreadable: {err}");
            BackendError::Rejected
        })?;

        Ok(rows.into_iter().map(ProductRow::into_domain).collect())
    }
}
