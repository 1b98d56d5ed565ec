use std::sync::Arc;

use catalog::catalog_http::CatalogHttp;
use catalog::client::CatalogClient;
use logger::{TracingLogger, TracingNotifier};
use persistence::cart::repository::CartRepositoryLocalStorage;
use persistence::local_storage::LocalStorage;

use business::application::cart::add_product::AddProductUseCaseImpl;
use business::application::cart::context::CartContext;
use business::application::cart::remove_product::RemoveProductUseCaseImpl;
use business::application::cart::store::CartStore;
use business::application::cart::update_product_amount::UpdateProductAmountUseCaseImpl;

use crate::api::notification::toast_queue::ToastQueue;
use crate::config::catalog_config::CatalogConfig;

const PENDING_NOTICES: usize = 32;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub notification_api: crate::api::notification::routes::NotificationApi,
}

impl DependencyContainer {
    pub async fn new(
        storage: Arc<dyn LocalStorage>,
        catalog_config: &CatalogConfig,
    ) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let cart_repository = Arc::new(CartRepositoryLocalStorage::new(storage));
        let catalog = Arc::new(CatalogHttp::new(CatalogClient::new(
            catalog_config.base_url.clone(),
            catalog_config.timeout,
        )));
        let toasts = Arc::new(ToastQueue::new(PENDING_NOTICES, Arc::new(TracingNotifier)));

        // Cart state, restored from the persisted snapshot
        let store = Arc::new(CartStore::load(cart_repository, logger.clone()).await);

        // Cart use cases
        let update_product_amount_use_case = Arc::new(UpdateProductAmountUseCaseImpl {
            store: store.clone(),
            catalog: catalog.clone(),
            notifier: toasts.clone(),
            logger: logger.clone(),
        });
        let add_product_use_case = Arc::new(AddProductUseCaseImpl {
            store: store.clone(),
            catalog,
            update_amount: update_product_amount_use_case.clone(),
            notifier: toasts.clone(),
            logger: logger.clone(),
        });
        let remove_product_use_case = Arc::new(RemoveProductUseCaseImpl {
            store: store.clone(),
            notifier: toasts.clone(),
            logger,
        });

        let context = CartContext::new(
            store,
            add_product_use_case,
            remove_product_use_case,
            update_product_amount_use_case,
        );

        let cart_api = crate::api::cart::routes::CartApi::new(context);
        let notification_api = crate::api::notification::routes::NotificationApi::new(toasts);

        Ok(Self {
            health_api,
            cart_api,
            notification_api,
        })
    }
}
