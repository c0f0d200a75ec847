#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("auth.email_required")]
    EmailRequired,
    #[error("auth.password_required")]
    PasswordRequired,
    /// Message returned by the auth provider, surfaced to the user verbatim.
    #[error("{0}")]
    Backend(String),
}
