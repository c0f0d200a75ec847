use crate::domain::errors::StorageError;

use super::model::Cart;

/// Durable local key-value store for the cart.
///
/// Reads are infallible: absent or malformed content yields an empty cart.
/// Writes are synchronous so the persisted cart matches the in-memory cart
/// before the mutating operation returns.
pub trait CartStorage: Send + Sync {
    fn load(&self) -> Cart;
    fn save(&self, cart: &Cart) -> Result<(), StorageError>;
}
