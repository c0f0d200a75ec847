use super::backend_config::BackendConfig;
use super::storage_config::StorageConfig;

pub struct AppConfig {
    pub backend: BackendConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            backend: BackendConfig::from_env(),
            storage: StorageConfig::from_env(),
        }
    }
}
