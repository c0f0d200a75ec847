/// Errors from the hosted backend collaborators (catalog, orders, auth).
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("backend.connection")]
    Connection,
    #[error("backend.rejected")]
    Rejected,
    #[error("backend.unauthorized")]
    Unauthorized,
}

/// Errors writing the cart to durable local storage. Reads never fail:
/// malformed or missing content is treated as an empty cart.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage.write")]
    Write,
    #[error("storage.serialize")]
    Serialize,
}
