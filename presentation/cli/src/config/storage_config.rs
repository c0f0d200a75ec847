use std::path::PathBuf;

/// Configuration for the local cart file.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub cart_path: PathBuf,
}

impl StorageConfig {
    /// Load storage configuration from environment variables.
    ///
    /// Environment variables:
    /// - STOREFRONT_CART_PATH: cart file location (default: ".storefront/cart.json")
    pub fn from_env() -> Self {
        let cart_path = std::env::var("STOREFRONT_CART_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".storefront/cart.json"));

        Self { cart_path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_path_when_variable_is_unset() {
        // Sole test touching this variable, so no parallel-test interference.
        unsafe { std::env::remove_var("STOREFRONT_CART_PATH") };

        let config = StorageConfig::from_env();

        assert_eq!(config.cart_path, PathBuf::from(".storefront/cart.json"));
    }
}
