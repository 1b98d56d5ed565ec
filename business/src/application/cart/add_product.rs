use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::store::CartStore;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartItem};
use crate::domain::cart::notice::CartNotice;
use crate::domain::cart::outcome::CartOutcome;
use crate::domain::cart::use_cases::add_product::{AddProductParams, AddProductUseCase};
use crate::domain::cart::use_cases::update_product_amount::{
    UpdateProductAmountParams, UpdateProductAmountUseCase,
};
use crate::domain::catalog::services::CatalogService;
use crate::domain::logger::Logger;
use crate::domain::notifier::Notifier;
use crate::domain::shared::value_objects::ProductId;

pub struct AddProductUseCaseImpl {
    pub store: Arc<CartStore>,
    pub catalog: Arc<dyn CatalogService>,
    pub update_amount: Arc<dyn UpdateProductAmountUseCase>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

impl AddProductUseCaseImpl {
    // Stock is only checked for exhaustion here; re-adds go through the
    // amount update, which checks the full target quantity.
    async fn append(&self, product_id: ProductId) -> Result<Cart, CartError> {
        let stock = self.catalog.fetch_stock(product_id).await?;
        if stock.is_exhausted() {
            return Err(CartError::OutOfStock);
        }

        let product = self.catalog.fetch_product(product_id).await?;
        let cart = self
            .store
            .cart()
            .with_item(CartItem::from_catalog(product))?;
        self.store.commit(cart.clone()).await?;
        Ok(cart)
    }
}

#[async_trait]
impl AddProductUseCase for AddProductUseCaseImpl {
    async fn execute(&self, params: AddProductParams) -> CartOutcome {
        self.logger
            .info(&format!("Adding product to cart: {}", params.product_id));

        if let Some(existing) = self.store.cart().find(params.product_id) {
            self.logger.debug(&format!(
                "Product {} already in cart, incrementing",
                params.product_id
            ));
            return self
                .update_amount
                .execute(UpdateProductAmountParams {
                    product_id: params.product_id,
                    amount: existing.amount.saturating_add(1),
                })
                .await;
        }

        match self.append(params.product_id).await {
            Ok(cart) => {
                self.logger.info(&format!(
                    "Product {} added ({} line(s) in cart)",
                    params.product_id,
                    cart.len()
                ));
                CartOutcome::Ok
            }
            Err(e) => {
                self.logger.warn(&format!(
                    "Could not add product {}: {}",
                    params.product_id, e
                ));
                if let Some(notice) = e.notice(CartNotice::AddFailed) {
                    self.notifier.notify(notice.message());
                }
                e.outcome()
            }
        }
    }
}
