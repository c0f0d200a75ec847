use reqwest::Client;

/// Shared HTTP client configuration for the hosted Supabase project.
pub struct BackendClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
}

impl BackendClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Builds the authorization header value.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Returns the PostgREST endpoint URL for a table.
    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Returns a GoTrue auth endpoint URL.
    pub fn auth_url(&self, endpoint: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_table_and_auth_urls() {
        let client = BackendClient::new(
            "https://demo.supabase.co".to_string(),
            "anon-key".to_string(),
        );

        assert_eq!(
            client.rest_url("products"),
            "https://demo.supabase.co/rest/v1/products"
        );
        assert_eq!(
            client.auth_url("signup"),
            "https://demo.supabase.co/auth/v1/signup"
        );
        assert_eq!(client.auth_header(), "Bearer anon-key");
    }

    #[test]
    fn should_strip_trailing_slash_from_base_url() {
        let client = BackendClient::new("https://demo.supabase.co/".to_string(), "k".to_string());

        assert_eq!(
            client.rest_url("orders"),
            "https://demo.supabase.co/rest/v1/orders"
        );
    }
}
