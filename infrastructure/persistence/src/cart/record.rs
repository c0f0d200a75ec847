use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use business::domain::cart::model::LineItem;
use business::domain::shared::value_objects::ProductId;

/// Serialized shape of one cart line, matching the records existing carts
/// were stored with (`id` / `price` / `image` / `qty` keys). Older carts
/// hold numeric ids, so the id accepts either form.
#[derive(Debug, Serialize, Deserialize)]
pub struct LineItemRecord {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub qty: u32,
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(i64),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}

impl LineItemRecord {
    pub fn into_domain(self) -> LineItem {
        LineItem {
            product_id: ProductId::new(self.id),
            name: self.name,
            unit_price: self.price,
            image_url: self.image,
            quantity: self.qty,
        }
    }

    pub fn from_domain(item: &LineItem) -> Self {
        Self {
            id: item.product_id.as_str().to_string(),
            name: item.name.clone(),
            price: item.unit_price,
            image: item.image_url.clone(),
            qty: item.quantity,
        }
    }
}
