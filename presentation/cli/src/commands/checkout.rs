use business::domain::order::model::CheckoutForm;
use business::domain::order::use_cases::submit::SubmitOrderParams;

use crate::setup::dependency_injection::DependencyContainer;
use crate::view;

pub async fn run(container: &DependencyContainer, email: String, address: String, payment: String) {
    let form = CheckoutForm {
        contact_email: email,
        shipping_address: address,
        payment_method: payment,
    };

    match container
        .submit_order
        .execute(SubmitOrderParams { form })
        .await
    {
        Ok(receipt) => println!("{}", view::order_success(&receipt.total)),
        Err(err) => println!("{}", view::order_error(&err)),
    }
}
