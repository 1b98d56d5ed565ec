use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Cart;

/// Durable mirror of the cart. The whole snapshot is read and written at once.
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Returns `None` when nothing has been persisted yet.
    async fn load(&self) -> Result<Option<Cart>, RepositoryError>;
    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
}
