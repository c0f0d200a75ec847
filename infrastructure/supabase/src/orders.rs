use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Serialize;

use business::domain::cart::model::LineItem;
use business::domain::errors::BackendError;
use business::domain::order::gateway::OrderGateway;
use business::domain::order::model::OrderRequest;

use crate::client::BackendClient;

pub struct OrderGatewaySupabase {
    client: BackendClient,
}

impl OrderGatewaySupabase {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

/// Row shape of the hosted `orders` table. The total travels as the
/// display-formatted string existing rows already hold.
#[derive(Debug, Serialize)]
struct OrderRow {
    user_email: String,
    order_items: Vec<OrderItemRow>,
    total: String,
    address: String,
    payment_method: String,
}

#[derive(Debug, Serialize)]
struct OrderItemRow {
    id: String,
    name: String,
    price: Decimal,
    image: String,
    qty: u32,
}

impl OrderRow {
    fn from_domain(order: &OrderRequest) -> Self {
        Self {
            user_email: order.contact_email().to_string(),
            order_items: order.items().iter().map(OrderItemRow::from_domain).collect(),
            total: order.total().to_string(),
            address: order.shipping_address().to_string(),
            payment_method: order.payment_method().to_string(),
        }
    }
}

impl OrderItemRow {
    fn from_domain(item: &LineItem) -> Self {
        Self {
            id: item.product_id.as_str().to_string(),
            name: item.name.clone(),
            price: item.unit_price,
            image: item.image_url.clone(),
            qty: item.quantity,
        }
    }
}

#[async_trait]
impl OrderGateway for OrderGatewaySupabase {
    async fn insert(&self, order: &OrderRequest) -> Result<(), BackendError> {
        // PostgREST bulk-insert shape: an array with one row.
        let body = vec![OrderRow::from_domain(order)];

        let response = self
            .client
            .client
            .post(self.client.rest_url("orders"))
            .header("apikey", &self.client.api_key)
            .header("Authorization", self.client.auth_header())
            .header("Prefer", "return=minimal")
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                tracing::error!("Order insert request failed: {err}");
                BackendError::Connection
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(BackendError::Unauthorized);
        }
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!("Order insert rejected with status {status}: {detail}");
            return Err(BackendError::Rejected);
        }

        Ok(())
    }
}
