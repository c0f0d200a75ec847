use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::gateway::AuthGateway;
use crate::domain::auth::use_cases::reset_password::{ResetPasswordParams, ResetPasswordUseCase};
use crate::domain::logger::Logger;

pub struct ResetPasswordUseCaseImpl {
    pub gateway: Arc<dyn AuthGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ResetPasswordUseCase for ResetPasswordUseCaseImpl {
    async fn execute(&self, params: ResetPasswordParams) -> Result<(), AuthError> {
        let email = params.email.trim();
        if email.is_empty() {
            return Err(AuthError::EmailRequired);
        }

        self.logger.info(&format!("Password reset requested for {email}"));
        self.gateway
            .send_password_reset(email, &params.redirect_to)
            .await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;

    mock! {
        pub Gateway {}

        #[async_trait]
        impl AuthGateway for Gateway {
            async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError>;
            async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError>;
            async fn send_password_reset(&self, email: &str, redirect_to: &str) -> Result<(), AuthError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_reject_empty_email() {
        let gateway = MockGateway::new();

        let use_case = ResetPasswordUseCaseImpl {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ResetPasswordParams {
                email: String::new(),
                redirect_to: "https://shop.example.com/reset".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), AuthError::EmailRequired));
    }

    #[tokio::test]
    async fn should_pass_redirect_target_through() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_send_password_reset()
            .withf(|_, redirect| redirect == "https://shop.example.com/reset")
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = ResetPasswordUseCaseImpl {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ResetPasswordParams {
                email: "ana@example.com".to_string(),
                redirect_to: "https://shop.example.com/reset".to_string(),
            })
            .await;

        assert!(result.is_ok());
    }
}
