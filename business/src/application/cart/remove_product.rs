use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::store::CartStore;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::notice::CartNotice;
use crate::domain::cart::outcome::CartOutcome;
use crate::domain::cart::use_cases::remove_product::{
    RemoveProductParams, RemoveProductUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::notifier::Notifier;

pub struct RemoveProductUseCaseImpl {
    pub store: Arc<CartStore>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

impl RemoveProductUseCaseImpl {
    async fn remove(&self, params: &RemoveProductParams) -> Result<Cart, CartError> {
        let cart = self.store.cart().without(params.product_id)?;
        self.store.commit(cart.clone()).await?;
        Ok(cart)
    }
}

#[async_trait]
impl RemoveProductUseCase for RemoveProductUseCaseImpl {
    async fn execute(&self, params: RemoveProductParams) -> CartOutcome {
        self.logger
            .info(&format!("Removing product from cart: {}", params.product_id));

        match self.remove(&params).await {
            Ok(cart) => {
                self.logger.info(&format!(
                    "Product {} removed ({} line(s) left)",
                    params.product_id,
                    cart.len()
                ));
                CartOutcome::Ok
            }
            Err(e) => {
                self.logger.warn(&format!(
                    "Could not remove product {}: {}",
                    params.product_id, e
                ));
                if let Some(notice) = e.notice(CartNotice::RemoveFailed) {
                    self.notifier.notify(notice.message());
                }
                e.outcome()
            }
        }
    }
}
