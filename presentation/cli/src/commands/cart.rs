use std::sync::{Mutex, PoisonError};

use business::application::cart::store::CartStore;
use business::domain::product::use_cases::list::ListProductsParams;
use business::domain::shared::value_objects::ProductId;

use crate::cli::CartCommand;
use crate::setup::dependency_injection::DependencyContainer;
use crate::view;

pub async fn run(container: &DependencyContainer, command: CartCommand) {
    match command {
        CartCommand::Show => {
            let snapshot = lock(&container.cart_store).snapshot();
            println!("{}", view::cart_view(&snapshot));
        }
        CartCommand::Add { product_id } => add(container, &product_id).await,
        CartCommand::Inc { product_id } => change(container, &product_id, 1),
        CartCommand::Dec { product_id } => change(container, &product_id, -1),
    }
}

/// Looks the product up in the remote catalog so the cart line carries the
/// current name and price, then adds one unit.
async fn add(container: &DependencyContainer, product_id: &str) {
    let products = match container
        .list_products
        .execute(ListProductsParams { category: None })
        .await
    {
        Ok(products) => products,
        Err(_) => {
            println!("Could not reach the catalog. Try again!");
            return;
        }
    };

    let Some(product) = products.into_iter().find(|p| p.id.as_str() == product_id) else {
        println!("No product with id {product_id}.");
        return;
    };

    let mut store = lock(&container.cart_store);
    store.add_item(
        product.id,
        product.name,
        product.unit_price,
        product.image_url.unwrap_or_default(),
    );
    println!("Added to cart!");
    println!("{}", view::cart_count(&store.snapshot()));
}

fn change(container: &DependencyContainer, product_id: &str, delta: i64) {
    let mut store = lock(&container.cart_store);
    store.change_quantity(&ProductId::new(product_id), delta);
    println!("{}", view::cart_view(&store.snapshot()));
}

fn lock(store: &Mutex<CartStore>) -> std::sync::MutexGuard<'_, CartStore> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}
