/// Configuration for the hosted Supabase backend.
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
    /// Where the provider sends users after a password reset link.
    pub reset_redirect: String,
}

impl BackendConfig {
    /// Load backend configuration from environment variables.
    ///
    /// Environment variables:
    /// - STOREFRONT_BACKEND_URL: project URL (required)
    /// - STOREFRONT_BACKEND_KEY: anon API key (required)
    /// - STOREFRONT_RESET_REDIRECT: reset link landing page (optional)
    pub fn from_env() -> Self {
        let url = std::env::var("STOREFRONT_BACKEND_URL")
            .expect("STOREFRONT_BACKEND_URL environment variable must be set");
        let anon_key = std::env::var("STOREFRONT_BACKEND_KEY")
            .expect("STOREFRONT_BACKEND_KEY environment variable must be set");
        let reset_redirect = std::env::var("STOREFRONT_RESET_REDIRECT").unwrap_or_default();

        Self {
            url,
            anon_key,
            reset_redirect,
        }
    }
}
