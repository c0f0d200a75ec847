#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.email_required")]
    EmailRequired,
    #[error("order.address_required")]
    AddressRequired,
    #[error("order.payment_method_required")]
    PaymentMethodRequired,
    #[error("order.cart_empty")]
    CartEmpty,
    #[error("order.submission_in_flight")]
    SubmissionInFlight,
    #[error(transparent)]
    Backend(#[from] crate::domain::errors::BackendError),
}
