//! Pure view-model rendering: every function maps domain data to a string
//! and touches nothing else, so it can be tested without any terminal.

use tabled::builder::Builder;
use tabled::settings::Style;

use business::domain::cart::model::CartSnapshot;
use business::domain::order::errors::OrderError;
use business::domain::product::model::Product;

pub fn product_list(products: &[Product]) -> String {
    if products.is_empty() {
        return "No products found.".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["Id", "Name", "Price", "Category"]);
    for product in products {
        builder.push_record([
            product.id.as_str().to_string(),
            product.name.clone(),
            format!("${:.2}", product.unit_price),
            product.category.clone().unwrap_or_default(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

pub fn cart_view(snapshot: &CartSnapshot) -> String {
    if snapshot.is_empty() {
        return "Your cart is empty.".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["Name", "Unit price", "Qty", "Subtotal"]);
    for item in &snapshot.items {
        builder.push_record([
            item.name.clone(),
            format!("${:.2}", item.unit_price),
            item.quantity.to_string(),
            format!("${:.2}", item.subtotal()),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());

    format!(
        "{table}\n{} item(s), total ${}",
        snapshot.item_count,
        snapshot.formatted_total()
    )
}

pub fn cart_count(snapshot: &CartSnapshot) -> String {
    format!("Cart: {} item(s)", snapshot.item_count)
}

pub fn order_success(total: &str) -> String {
    format!("Order placed successfully! Total: ${total}")
}

/// User-facing message for a failed submission. Validation failures name the
/// missing field; remote failures stay generic (the detail is only logged).
pub fn order_error(err: &OrderError) -> String {
    match err {
        OrderError::EmailRequired => "Please enter your email!".to_string(),
        OrderError::AddressRequired => "Please enter your address!".to_string(),
        OrderError::PaymentMethodRequired => "Please select a payment method!".to_string(),
        OrderError::CartEmpty => "Your cart is empty!".to_string(),
        OrderError::SubmissionInFlight => "An order is already being placed.".to_string(),
        OrderError::Backend(_) => "Failed to place order. Try again!".to_string(),
    }
}
