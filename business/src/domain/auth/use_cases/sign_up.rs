use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;

pub struct SignUpParams {
    pub email: String,
    pub password: String,
}

#[async_trait]
pub trait SignUpUseCase: Send + Sync {
    async fn execute(&self, params: SignUpParams) -> Result<(), AuthError>;
}
