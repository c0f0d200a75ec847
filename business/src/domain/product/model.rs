use rust_decimal::Decimal;

use crate::domain::shared::value_objects::ProductId;

/// Catalog read model. The cart only consumes id, name, price and image of
/// whatever the user selects to add.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub unit_price: Decimal,
    pub image_url: Option<String>,
    pub category: Option<String>,
}
