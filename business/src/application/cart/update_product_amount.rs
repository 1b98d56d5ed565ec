use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::store::CartStore;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::notice::CartNotice;
use crate::domain::cart::outcome::CartOutcome;
use crate::domain::cart::use_cases::update_product_amount::{
    UpdateProductAmountParams, UpdateProductAmountUseCase,
};
use crate::domain::catalog::services::CatalogService;
use crate::domain::logger::Logger;
use crate::domain::notifier::Notifier;

pub struct UpdateProductAmountUseCaseImpl {
    pub store: Arc<CartStore>,
    pub catalog: Arc<dyn CatalogService>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

impl UpdateProductAmountUseCaseImpl {
    async fn apply(&self, params: UpdateProductAmountParams) -> Result<Cart, CartError> {
        if params.amount <= 0 {
            return Err(CartError::InvalidAmount);
        }

        let stock = self.catalog.fetch_stock(params.product_id).await?;
        if !stock.covers(params.amount) {
            return Err(CartError::OutOfStock);
        }

        let cart = self
            .store
            .cart()
            .with_amount(params.product_id, params.amount)?;
        self.store.commit(cart.clone()).await?;
        Ok(cart)
    }
}

#[async_trait]
impl UpdateProductAmountUseCase for UpdateProductAmountUseCaseImpl {
    async fn execute(&self, params: UpdateProductAmountParams) -> CartOutcome {
        self.logger.info(&format!(
            "Updating amount of product {} to {}",
            params.product_id, params.amount
        ));

        match self.apply(params).await {
            Ok(cart) => {
                self.logger.info(&format!(
                    "Product {} amount set to {} ({} unit(s) in cart)",
                    params.product_id,
                    params.amount,
                    cart.units()
                ));
                CartOutcome::Ok
            }
            Err(CartError::InvalidAmount) => {
                self.logger.debug(&format!(
                    "Ignoring non-positive amount {} for product {}",
                    params.amount, params.product_id
                ));
                CartOutcome::InvalidNoOp
            }
            Err(e) => {
                self.logger.warn(&format!(
                    "Could not update product {}: {}",
                    params.product_id, e
                ));
                if let Some(notice) = e.notice(CartNotice::UpdateFailed) {
                    self.notifier.notify(notice.message());
                }
                e.outcome()
            }
        }
    }
}
