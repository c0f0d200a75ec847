use async_trait::async_trait;
use serde::Serialize;

use business::domain::auth::errors::AuthError;
use business::domain::auth::gateway::AuthGateway;

use crate::client::BackendClient;

pub struct AuthGatewaySupabase {
    client: BackendClient,
}

impl AuthGatewaySupabase {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    async fn post(
        &self,
        url: String,
        query: &[(&str, &str)],
        body: &impl Serialize,
    ) -> Result<(), AuthError> {
        let response = self
            .client
            .client
            .post(url)
            .header("apikey", &self.client.api_key)
            .header("Authorization", self.client.auth_header())
            .query(query)
            .json(body)
            .send()
            .await
            .map_err(|err| {
                tracing::error!("Auth request failed: {err}");
                AuthError::Backend("Unable to reach the authentication service".to_string())
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!("Auth request rejected with status {status}: {body}");
        Err(AuthError::Backend(provider_message(&body)))
    }
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RecoverRequest<'a> {
    email: &'a str,
}

/// Pulls the human-readable message out of a GoTrue error body so it can be
/// shown to the user verbatim.
fn provider_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["error_description", "msg", "message"]
                .iter()
                .find_map(|key| value.get(key).and_then(|m| m.as_str()).map(str::to_string))
        })
        .unwrap_or_else(|| "Authentication failed".to_string())
}

#[async_trait]
impl AuthGateway for AuthGatewaySupabase {
    async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError> {
        self.post(
            self.client.auth_url("token"),
            &[("grant_type", "password")],
            &Credentials { email, password },
        )
        .await
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError> {
        self.post(
            self.client.auth_url("signup"),
            &[],
            &Credentials { email, password },
        )
        .await
    }

    async fn send_password_reset(&self, email: &str, redirect_to: &str) -> Result<(), AuthError> {
        self.post(
            self.client.auth_url("recover"),
            &[("redirect_to", redirect_to)],
            &RecoverRequest { email },
        )
        .await
    }
}
