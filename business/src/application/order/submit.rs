use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::application::cart::store::CartStore;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::gateway::OrderGateway;
use crate::domain::order::model::OrderRequest;
use crate::domain::order::use_cases::submit::{OrderReceipt, SubmitOrderParams, SubmitOrderUseCase};

pub struct SubmitOrderUseCaseImpl {
    pub store: Arc<Mutex<CartStore>>,
    pub gateway: Arc<dyn OrderGateway>,
    pub logger: Arc<dyn Logger>,
    in_flight: AtomicBool,
}

impl SubmitOrderUseCaseImpl {
    pub fn new(
        store: Arc<Mutex<CartStore>>,
        gateway: Arc<dyn OrderGateway>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            store,
            gateway,
            logger,
            in_flight: AtomicBool::new(false),
        }
    }

    fn lock_store(&self) -> MutexGuard<'_, CartStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn submit(&self, params: SubmitOrderParams) -> Result<OrderReceipt, OrderError> {
        // Snapshot is read fresh per attempt; validation happens before any
        // remote call.
        let snapshot = self.lock_store().snapshot();
        let order = OrderRequest::new(&params.form, &snapshot)?;

        self.logger.info(&format!(
            "Submitting order: {} item(s), total {}",
            order.items().len(),
            order.total()
        ));

        if let Err(err) = self.gateway.insert(&order).await {
            self.logger.error(&format!("Order insert failed: {err}"));
            return Err(OrderError::Backend(err));
        }

        let total = order.total().to_string();
        self.lock_store().clear();
        self.logger.info(&format!("Order placed, total {total}"));

        Ok(OrderReceipt { total })
    }
}

#[async_trait]
impl SubmitOrderUseCase for SubmitOrderUseCaseImpl {
    async fn execute(&self, params: SubmitOrderParams) -> Result<OrderReceipt, OrderError> {
        // Guard against a second trigger while a submission is in flight so a
        // retry cannot produce a duplicate order insert.
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(OrderError::SubmissionInFlight);
        }

        let result = self.submit(params).await;
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }
}
