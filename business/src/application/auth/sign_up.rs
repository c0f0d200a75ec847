use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::gateway::AuthGateway;
use crate::domain::auth::use_cases::sign_up::{SignUpParams, SignUpUseCase};
use crate::domain::logger::Logger;

pub struct SignUpUseCaseImpl {
    pub gateway: Arc<dyn AuthGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SignUpUseCase for SignUpUseCaseImpl {
    async fn execute(&self, params: SignUpParams) -> Result<(), AuthError> {
        let email = params.email.trim();
        if email.is_empty() {
            return Err(AuthError::EmailRequired);
        }
        if params.password.is_empty() {
            return Err(AuthError::PasswordRequired);
        }

        self.logger.info(&format!("Registering {email}"));
        self.gateway.sign_up(email, &params.password).await
    }
}
