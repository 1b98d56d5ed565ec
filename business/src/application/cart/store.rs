use std::sync::Arc;

use tokio::sync::{Mutex, watch};

use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

/// Holds the in-memory cart and keeps its persisted mirror in step.
///
/// Readers get cloned snapshots; subscribers are woken on every commit.
pub struct CartStore {
    state: watch::Sender<Cart>,
    commit_lock: Mutex<()>,
    repository: Arc<dyn CartRepository>,
    logger: Arc<dyn Logger>,
}

impl CartStore {
    pub fn new(initial: Cart, repository: Arc<dyn CartRepository>, logger: Arc<dyn Logger>) -> Self {
        let (state, _) = watch::channel(initial);
        Self {
            state,
            commit_lock: Mutex::new(()),
            repository,
            logger,
        }
    }

    /// Restores the cart from the persisted snapshot.
    ///
    /// A missing or unreadable snapshot yields an empty cart.
    pub async fn load(repository: Arc<dyn CartRepository>, logger: Arc<dyn Logger>) -> Self {
        let initial = match repository.load().await {
            Ok(Some(cart)) => {
                logger.info(&format!("Cart restored with {} item(s)", cart.len()));
                cart
            }
            Ok(None) => {
                logger.info("No persisted cart, starting empty");
                Cart::empty()
            }
            Err(e) => {
                logger.warn(&format!("Persisted cart unreadable ({}), starting empty", e));
                Cart::empty()
            }
        };

        Self::new(initial, repository, logger)
    }

    pub fn cart(&self) -> Cart {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.state.subscribe()
    }

    /// Persists `cart` and then publishes it as the current state.
    ///
    /// Nothing is published when the write fails.
    pub async fn commit(&self, cart: Cart) -> Result<(), RepositoryError> {
        let _guard = self.commit_lock.lock().await;

        self.repository.save(&cart).await?;
        self.logger
            .debug(&format!("Cart committed with {} item(s)", cart.len()));
        self.state.send_replace(cart);
        Ok(())
    }
}
