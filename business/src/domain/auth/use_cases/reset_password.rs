use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;

pub struct ResetPasswordParams {
    pub email: String,
    /// Where the provider sends the user after following the reset link.
    pub redirect_to: String,
}

#[async_trait]
pub trait ResetPasswordUseCase: Send + Sync {
    async fn execute(&self, params: ResetPasswordParams) -> Result<(), AuthError>;
}
