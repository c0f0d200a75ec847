use async_trait::async_trait;

use super::errors::AuthError;

/// Authentication collaborator. No session or token handling happens in this
/// core; each call either succeeds or yields a provider error message.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError>;
    async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError>;
    async fn send_password_reset(&self, email: &str, redirect_to: &str) -> Result<(), AuthError>;
}
