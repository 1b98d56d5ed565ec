use std::sync::Arc;

use async_trait::async_trait;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;

use super::entity::CartItemEntity;
use crate::local_storage::{LocalStorage, StorageError};

/// Storage key holding the serialized cart.
pub const CART_STORAGE_KEY: &str = "@RocketShoes:cart";

pub struct CartRepositoryLocalStorage {
    storage: Arc<dyn LocalStorage>,
}

impl CartRepositoryLocalStorage {
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryLocalStorage {
    async fn load(&self) -> Result<Option<Cart>, RepositoryError> {
        let raw = self
            .storage
            .get_item(CART_STORAGE_KEY)
            .await
            .map_err(|e| match e {
                StorageError::Corrupted => RepositoryError::corrupted(),
                StorageError::Io => RepositoryError::storage_unavailable(),
            })?;

        let Some(raw) = raw else {
            return Ok(None);
        };

        let entities: Vec<CartItemEntity> =
            serde_json::from_str(&raw).map_err(|_| RepositoryError::corrupted())?;

        let (cart, dropped) =
            Cart::restore(entities.into_iter().map(|e| e.into_domain()).collect());
        if dropped > 0 {
            tracing::warn!(dropped, key = CART_STORAGE_KEY, "invalid cart lines dropped on load");
        }
        Ok(Some(cart))
    }

    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        let entities: Vec<CartItemEntity> =
            cart.items().iter().map(CartItemEntity::from_domain).collect();
        let raw = serde_json::to_string(&entities).map_err(|_| RepositoryError::persistence())?;

        self.storage
            .set_item(CART_STORAGE_KEY, &raw)
            .await
            .map_err(|_| RepositoryError::persistence())
    }
}
