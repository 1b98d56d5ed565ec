use async_trait::async_trait;

use crate::domain::cart::outcome::CartOutcome;
use crate::domain::shared::value_objects::ProductId;

pub struct RemoveProductParams {
    pub product_id: ProductId,
}

#[async_trait]
pub trait RemoveProductUseCase: Send + Sync {
    async fn execute(&self, params: RemoveProductParams) -> CartOutcome;
}
