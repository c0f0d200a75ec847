use std::sync::{Arc, Mutex};

use logger::TracingLogger;
use persistence::cart::file_storage::CartStorageFile;
use supabase::auth::AuthGatewaySupabase;
use supabase::catalog::ProductCatalogSupabase;
use supabase::client::BackendClient;
use supabase::orders::OrderGatewaySupabase;

use business::application::auth::reset_password::ResetPasswordUseCaseImpl;
use business::application::auth::sign_in::SignInUseCaseImpl;
use business::application::auth::sign_up::SignUpUseCaseImpl;
use business::application::cart::store::CartStore;
use business::application::catalog::list::ListProductsUseCaseImpl;
use business::application::order::submit::SubmitOrderUseCaseImpl;
use business::domain::auth::use_cases::reset_password::ResetPasswordUseCase;
use business::domain::auth::use_cases::sign_in::SignInUseCase;
use business::domain::auth::use_cases::sign_up::SignUpUseCase;
use business::domain::logger::Logger;
use business::domain::order::use_cases::submit::SubmitOrderUseCase;
use business::domain::product::use_cases::list::ListProductsUseCase;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub cart_store: Arc<Mutex<CartStore>>,
    pub list_products: Arc<dyn ListProductsUseCase>,
    pub submit_order: Arc<dyn SubmitOrderUseCase>,
    pub sign_in: Arc<dyn SignInUseCase>,
    pub sign_up: Arc<dyn SignUpUseCase>,
    pub reset_password: Arc<dyn ResetPasswordUseCase>,
    pub reset_redirect: String,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Infrastructure adapters
        let storage = Arc::new(CartStorageFile::new(config.storage.cart_path.clone()));
        let cart_store = Arc::new(Mutex::new(CartStore::load(storage, logger.clone())));

        let catalog = Arc::new(ProductCatalogSupabase::new(BackendClient::new(
            config.backend.url.clone(),
            config.backend.anon_key.clone(),
        )));
        let orders = Arc::new(OrderGatewaySupabase::new(BackendClient::new(
            config.backend.url.clone(),
            config.backend.anon_key.clone(),
        )));
        let auth = Arc::new(AuthGatewaySupabase::new(BackendClient::new(
            config.backend.url.clone(),
            config.backend.anon_key.clone(),
        )));

        // Use cases
        let list_products = Arc::new(ListProductsUseCaseImpl {
            catalog,
            logger: logger.clone(),
        });
        let submit_order = Arc::new(SubmitOrderUseCaseImpl::new(
            cart_store.clone(),
            orders,
            logger.clone(),
        ));
        let sign_in = Arc::new(SignInUseCaseImpl {
            gateway: auth.clone(),
            logger: logger.clone(),
        });
        let sign_up = Arc::new(SignUpUseCaseImpl {
            gateway: auth.clone(),
            logger: logger.clone(),
        });
        let reset_password = Arc::new(ResetPasswordUseCaseImpl {
            gateway: auth,
            logger,
        });

        Self {
            cart_store,
            list_products,
            submit_order,
            sign_in,
            sign_up,
            reset_password,
            reset_redirect: config.backend.reset_redirect.clone(),
        }
    }
}
