use async_trait::async_trait;

use crate::domain::cart::outcome::CartOutcome;
use crate::domain::shared::value_objects::ProductId;

#[derive(Debug, Clone, Copy)]
pub struct UpdateProductAmountParams {
    pub product_id: ProductId,
    pub amount: i64,
}

#[async_trait]
pub trait UpdateProductAmountUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductAmountParams) -> CartOutcome;
}
