use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::gateway::AuthGateway;
use crate::domain::auth::use_cases::sign_in::{SignInParams, SignInUseCase};
use crate::domain::logger::Logger;

pub struct SignInUseCaseImpl {
    pub gateway: Arc<dyn AuthGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SignInUseCase for SignInUseCaseImpl {
    async fn execute(&self, params: SignInParams) -> Result<(), AuthError> {
        let email = params.email.trim();
        if email.is_empty() {
            return Err(AuthError::EmailRequired);
        }
        if params.password.is_empty() {
            return Err(AuthError::PasswordRequired);
        }

        self.logger.info(&format!("Signing in {email}"));
        self.gateway.sign_in(email, &params.password).await
    }
}
