use async_trait::async_trait;

use crate::domain::errors::BackendError;

use super::model::OrderRequest;

/// Order persistence collaborator. A single insert with no partial-write
/// semantics exposed to this system.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn insert(&self, order: &OrderRequest) -> Result<(), BackendError>;
}
