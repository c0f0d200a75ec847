use std::fs;
use std::path::PathBuf;

use business::domain::cart::model::Cart;
use business::domain::cart::storage::CartStorage;
use business::domain::errors::StorageError;

use super::record::LineItemRecord;

/// Cart storage backed by a single JSON file, the device-local equivalent of
/// the browser key-value store the cart was originally persisted in.
pub struct CartStorageFile {
    path: PathBuf,
}

impl CartStorageFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CartStorage for CartStorageFile {
    fn load(&self) -> Cart {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => return Cart::new(),
        };

        match serde_json::from_str::<Vec<LineItemRecord>>(&content) {
            Ok(records) => Cart::from_items(records.into_iter().map(LineItemRecord::into_domain)),
            Err(err) => {
                // Corrupt content is never surfaced; the session starts fresh.
                tracing::warn!("Discarding unreadable cart at {:?}: {err}", self.path);
                Cart::new()
            }
        }
    }

    fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        let records: Vec<LineItemRecord> =
            cart.items().iter().map(LineItemRecord::from_domain).collect();
        let content = serde_json::to_string(&records).map_err(|_| StorageError::Serialize)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|_| StorageError::Write)?;
        }
        fs::write(&self.path, content).map_err(|_| StorageError::Write)
    }
}
