use business::domain::product::use_cases::list::ListProductsParams;

use crate::setup::dependency_injection::DependencyContainer;
use crate::view;

/// Lists the catalog. A backend failure renders the same empty-result
/// fallback as a genuinely empty catalog; the cause is already logged.
pub async fn run(container: &DependencyContainer, category: Option<String>) {
    let products = container
        .list_products
        .execute(ListProductsParams { category })
        .await
        .unwrap_or_default();

    println!("{}", view::product_list(&products));
}
