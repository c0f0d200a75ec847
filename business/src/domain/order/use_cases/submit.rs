use async_trait::async_trait;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::CheckoutForm;

pub struct SubmitOrderParams {
    pub form: CheckoutForm,
}

/// Outcome of a successful submission, for the success message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReceipt {
    pub total: String,
}

#[async_trait]
pub trait SubmitOrderUseCase: Send + Sync {
    async fn execute(&self, params: SubmitOrderParams) -> Result<OrderReceipt, OrderError>;
}
