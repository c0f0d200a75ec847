use crate::domain::cart::model::{CartSnapshot, LineItem};

use super::errors::OrderError;

/// Raw checkout form input, exactly as the user typed it.
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    pub contact_email: String,
    pub shipping_address: String,
    pub payment_method: String,
}

/// Immutable order record built once at checkout time. Either accepted or
/// rejected as a whole by the order persistence collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    contact_email: String,
    items: Vec<LineItem>,
    total: String,
    shipping_address: String,
    payment_method: String,
}

impl OrderRequest {
    /// Validates the form against the cart snapshot and builds the request.
    ///
    /// Validation short-circuits in a fixed order: email, address, payment
    /// method, then non-empty cart. The total is captured as a string with
    /// exactly two decimal places, the format stored orders already use.
    pub fn new(form: &CheckoutForm, snapshot: &CartSnapshot) -> Result<Self, OrderError> {
        let contact_email = form.contact_email.trim();
        if contact_email.is_empty() {
            return Err(OrderError::EmailRequired);
        }

        let shipping_address = form.shipping_address.trim();
        if shipping_address.is_empty() {
            return Err(OrderError::AddressRequired);
        }

        let payment_method = form.payment_method.trim();
        if payment_method.is_empty() {
            return Err(OrderError::PaymentMethodRequired);
        }

        if snapshot.is_empty() {
            return Err(OrderError::CartEmpty);
        }

        Ok(Self {
            contact_email: contact_email.to_string(),
            items: snapshot.items.clone(),
            total: snapshot.formatted_total(),
            shipping_address: shipping_address.to_string(),
            payment_method: payment_method.to_string(),
        })
    }

    pub fn contact_email(&self) -> &str {
        &self.contact_email
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn total(&self) -> &str {
        &self.total
    }

    pub fn shipping_address(&self) -> &str {
        &self.shipping_address
    }

    pub fn payment_method(&self) -> &str {
        &self.payment_method
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::domain::cart::model::Cart;
    use crate::domain::shared::value_objects::ProductId;

    use super::*;

    fn filled_form() -> CheckoutForm {
        CheckoutForm {
            contact_email: "ana@example.com".to_string(),
            shipping_address: "1 Main St".to_string(),
            payment_method: "card".to_string(),
        }
    }

    fn snapshot_with_widget() -> CartSnapshot {
        let mut cart = Cart::new();
        cart.add_item(ProductId::new("p1"), "Widget", Decimal::new(1000, 2), "i1");
        cart.add_item(ProductId::new("p1"), "Widget", Decimal::new(1000, 2), "i1");
        cart.add_item(ProductId::new("p1"), "Widget", Decimal::new(1000, 2), "i1");
        cart.snapshot()
    }

    #[test]
    fn should_build_request_with_formatted_total() {
        let order = OrderRequest::new(&filled_form(), &snapshot_with_widget()).unwrap();

        assert_eq!(order.total(), "30.00");
        assert_eq!(order.contact_email(), "ana@example.com");
        assert_eq!(order.items().len(), 1);
        assert_eq!(order.items()[0].quantity, 3);
    }

    #[test]
    fn should_trim_form_fields() {
        let form = CheckoutForm {
            contact_email: "  ana@example.com ".to_string(),
            shipping_address: " 1 Main St  ".to_string(),
            payment_method: " card ".to_string(),
        };

        let order = OrderRequest::new(&form, &snapshot_with_widget()).unwrap();

        assert_eq!(order.contact_email(), "ana@example.com");
        assert_eq!(order.shipping_address(), "1 Main St");
        assert_eq!(order.payment_method(), "card");
    }

    #[test]
    fn should_reject_missing_email_first() {
        let form = CheckoutForm::default();

        let result = OrderRequest::new(&form, &snapshot_with_widget());

        assert!(matches!(result.unwrap_err(), OrderError::EmailRequired));
    }

    #[test]
    fn should_reject_whitespace_only_email() {
        let mut form = filled_form();
        form.contact_email = "   ".to_string();

        let result = OrderRequest::new(&form, &snapshot_with_widget());

        assert!(matches!(result.unwrap_err(), OrderError::EmailRequired));
    }

    #[test]
    fn should_reject_missing_address_after_email() {
        let mut form = filled_form();
        form.shipping_address = String::new();

        let result = OrderRequest::new(&form, &snapshot_with_widget());

        assert!(matches!(result.unwrap_err(), OrderError::AddressRequired));
    }

    #[test]
    fn should_reject_missing_payment_method_after_address() {
        let mut form = filled_form();
        form.payment_method = String::new();

        let result = OrderRequest::new(&form, &snapshot_with_widget());

        assert!(matches!(
            result.unwrap_err(),
            OrderError::PaymentMethodRequired
        ));
    }

    #[test]
    fn should_reject_empty_cart_last() {
        let result = OrderRequest::new(&filled_form(), &Cart::new().snapshot());

        assert!(matches!(result.unwrap_err(), OrderError::CartEmpty));
    }
}
