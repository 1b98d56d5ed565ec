use crate::domain::catalog::errors::CatalogError;
use crate::domain::errors::RepositoryError;

use super::notice::CartNotice;
use super::outcome::CartOutcome;

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.out_of_stock")]
    OutOfStock,
    #[error("cart.not_found")]
    NotFound,
    #[error("cart.already_in_cart")]
    AlreadyInCart,
    #[error("cart.invalid_amount")]
    InvalidAmount,
    #[error("catalog.transport")]
    Catalog(#[from] CatalogError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl CartError {
    /// Outcome kind reported to the caller.
    pub fn outcome(&self) -> CartOutcome {
        match self {
            CartError::OutOfStock => CartOutcome::OutOfStock,
            CartError::NotFound => CartOutcome::NotFound,
            CartError::InvalidAmount => CartOutcome::InvalidNoOp,
            CartError::AlreadyInCart | CartError::Catalog(_) | CartError::Repository(_) => {
                CartOutcome::TransportError
            }
        }
    }

    /// Notice shown to the user, or `None` for the silent paths.
    ///
    /// `fallback` is the operation's generic failure notice.
    pub fn notice(&self, fallback: CartNotice) -> Option<CartNotice> {
        match self {
            CartError::OutOfStock => Some(CartNotice::OutOfStock),
            CartError::InvalidAmount => None,
            _ => Some(fallback),
        }
    }
}
