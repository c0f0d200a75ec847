use rust_decimal::Decimal;

use crate::domain::shared::value_objects::ProductId;

/// One product/quantity pairing held in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Decimal,
    pub image_url: String,
    pub quantity: u32,
}

impl LineItem {
    pub fn subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Insertion-ordered collection of line items.
///
/// Invariants held after every mutation: at most one item per product id,
/// and no item with a zero quantity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

/// Point-in-time copy of the cart plus its derived values, taken for display
/// or for building an order request.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSnapshot {
    pub items: Vec<LineItem>,
    pub item_count: u64,
    pub total: Decimal,
}

impl CartSnapshot {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total formatted with exactly two decimal places, the shape the
    /// backend expects for transmitted order totals.
    pub fn formatted_total(&self) -> String {
        format!("{:.2}", self.total)
    }
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a cart from persisted records. Entries with a zero quantity
    /// are dropped and duplicate product ids are merged into the first
    /// occurrence, so the invariants hold regardless of what was stored.
    pub fn from_items(items: impl IntoIterator<Item = LineItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            if item.quantity == 0 {
                continue;
            }
            match cart.find_mut(&item.product_id) {
                // Saturate: stored records are untrusted and must never
                // abort the load.
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                None => cart.items.push(item),
            }
        }
        cart
    }

    /// Increments the quantity of an existing line item, or appends a new
    /// one with quantity 1. Always succeeds.
    pub fn add_item(
        &mut self,
        product_id: ProductId,
        name: impl Into<String>,
        unit_price: Decimal,
        image_url: impl Into<String>,
    ) {
        match self.find_mut(&product_id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(1),
            None => self.items.push(LineItem {
                product_id,
                name: name.into(),
                unit_price,
                image_url: image_url.into(),
                quantity: 1,
            }),
        }
    }

    /// Adds `delta` to the quantity of the given product. A no-op when the
    /// product is not in the cart; removes the item entirely when the new
    /// quantity would drop to zero or below.
    pub fn change_quantity(&mut self, product_id: &ProductId, delta: i64) {
        let Some(index) = self
            .items
            .iter()
            .position(|item| &item.product_id == product_id)
        else {
            return;
        };

        let updated = i64::from(self.items[index].quantity) + delta;
        if updated <= 0 {
            self.items.remove(index);
        } else {
            self.items[index].quantity = u32::try_from(updated).unwrap_or(u32::MAX);
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all line items.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of `unit_price * quantity` across all line items.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items.clone(),
            item_count: self.item_count(),
            total: self.total(),
        }
    }

    fn find_mut(&mut self, product_id: &ProductId) -> Option<&mut LineItem> {
        self.items
            .iter_mut()
            .find(|item| &item.product_id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn price(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    fn widget(cart: &mut Cart) {
        cart.add_item(ProductId::new("p1"), "Widget", price(999), "img1");
    }

    #[test]
    fn should_merge_repeated_adds_into_one_line_item() {
        let mut cart = Cart::new();
        widget(&mut cart);
        widget(&mut cart);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.snapshot().formatted_total(), "19.98");
    }

    #[test]
    fn should_remove_item_when_quantity_drops_to_zero() {
        let mut cart = Cart::new();
        widget(&mut cart);
        widget(&mut cart);

        cart.change_quantity(&ProductId::new("p1"), -2);

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn should_remove_item_when_quantity_drops_below_zero() {
        let mut cart = Cart::new();
        widget(&mut cart);

        cart.change_quantity(&ProductId::new("p1"), -5);

        assert!(cart.is_empty());
    }

    #[test]
    fn should_ignore_quantity_change_for_unknown_product() {
        let mut cart = Cart::new();
        widget(&mut cart);

        cart.change_quantity(&ProductId::new("missing"), 3);

        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn should_keep_insertion_order_of_first_add() {
        let mut cart = Cart::new();
        cart.add_item(ProductId::new("b"), "Second", price(100), "i2");
        cart.add_item(ProductId::new("a"), "First", price(200), "i1");
        cart.add_item(ProductId::new("b"), "Second", price(100), "i2");

        let ids: Vec<&str> = cart
            .items()
            .iter()
            .map(|item| item.product_id.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn should_compute_total_across_distinct_items() {
        let mut cart = Cart::new();
        cart.add_item(ProductId::new("p1"), "Widget", price(1000), "i1");
        cart.add_item(ProductId::new("p1"), "Widget", price(1000), "i1");
        cart.add_item(ProductId::new("p1"), "Widget", price(1000), "i1");
        cart.add_item(ProductId::new("p2"), "Gadget", price(250), "i2");

        assert_eq!(cart.item_count(), 4);
        assert_eq!(cart.snapshot().formatted_total(), "32.50");
    }

    #[test]
    fn snapshot_is_stable_without_intervening_mutation() {
        let mut cart = Cart::new();
        widget(&mut cart);

        assert_eq!(cart.snapshot(), cart.snapshot());
    }

    #[test]
    fn should_drop_zero_quantity_records_when_rebuilding() {
        let cart = Cart::from_items([
            LineItem {
                product_id: ProductId::new("p1"),
                name: "Widget".to_string(),
                unit_price: price(999),
                image_url: "i1".to_string(),
                quantity: 0,
            },
            LineItem {
                product_id: ProductId::new("p2"),
                name: "Gadget".to_string(),
                unit_price: price(100),
                image_url: "i2".to_string(),
                quantity: 2,
            },
        ]);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].product_id, ProductId::new("p2"));
    }

    #[test]
    fn should_merge_duplicate_records_when_rebuilding() {
        let record = LineItem {
            product_id: ProductId::new("p1"),
            name: "Widget".to_string(),
            unit_price: price(999),
            image_url: "i1".to_string(),
            quantity: 2,
        };
        let cart = Cart::from_items([record.clone(), record]);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 4);
    }

    #[test]
    fn should_saturate_quantity_when_merged_records_overflow() {
        let record = LineItem {
            product_id: ProductId::new("p1"),
            name: "Widget".to_string(),
            unit_price: price(999),
            image_url: "i1".to_string(),
            quantity: 3_000_000_000,
        };
        let cart = Cart::from_items([record.clone(), record]);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, u32::MAX);
    }

    #[test]
    fn should_saturate_quantity_when_adding_to_a_maxed_item() {
        let mut cart = Cart::from_items([LineItem {
            product_id: ProductId::new("p1"),
            name: "Widget".to_string(),
            unit_price: price(999),
            image_url: "i1".to_string(),
            quantity: u32::MAX,
        }]);

        widget(&mut cart);

        assert_eq!(cart.items()[0].quantity, u32::MAX);
    }

    #[test]
    fn formatted_total_pads_to_two_decimals() {
        let mut cart = Cart::new();
        cart.add_item(ProductId::new("p1"), "Widget", Decimal::from(10), "i1");

        assert_eq!(cart.snapshot().formatted_total(), "10.00");
    }
}
