use async_trait::async_trait;

use crate::domain::shared::value_objects::ProductId;

use super::errors::CatalogError;
use super::model::{CatalogProduct, Stock};

/// Service port for product and stock lookups.
///
/// Every call reaches the catalog; results are not cached by the cart.
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn fetch_stock(&self, product_id: ProductId) -> Result<Stock, CatalogError>;

    async fn fetch_product(&self, product_id: ProductId) -> Result<CatalogProduct, CatalogError>;
}
