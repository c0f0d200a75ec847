use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::cart::model::{Cart, CartSnapshot};
use crate::domain::cart::storage::CartStorage;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::ProductId;

/// Sole authority over the current cart contents.
///
/// Every mutation is applied in memory first and then written through to the
/// injected storage before returning. A failed write is logged and ignored:
/// the in-memory cart stays authoritative for the session.
pub struct CartStore {
    cart: Cart,
    storage: Arc<dyn CartStorage>,
    logger: Arc<dyn Logger>,
}

impl CartStore {
    /// Reads the persisted cart at startup. Absent or malformed content
    /// yields an empty cart; this never fails.
    pub fn load(storage: Arc<dyn CartStorage>, logger: Arc<dyn Logger>) -> Self {
        let cart = storage.load();
        logger.debug(&format!("Cart loaded with {} item(s)", cart.items().len()));
        Self {
            cart,
            storage,
            logger,
        }
    }

    pub fn add_item(
        &mut self,
        product_id: ProductId,
        name: impl Into<String>,
        unit_price: Decimal,
        image_url: impl Into<String>,
    ) {
        self.cart.add_item(product_id, name, unit_price, image_url);
        self.persist();
    }

    pub fn change_quantity(&mut self, product_id: &ProductId, delta: i64) {
        self.cart.change_quantity(product_id, delta);
        self.persist();
    }

    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    pub fn snapshot(&self) -> CartSnapshot {
        self.cart.snapshot()
    }

    fn persist(&self) {
        if let Err(err) = self.storage.save(&self.cart) {
            self.logger
                .warn(&format!("Cart persistence failed, keeping in-memory state: {err}"));
        }
    }
}
