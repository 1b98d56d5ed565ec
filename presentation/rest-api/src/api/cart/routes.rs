use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::application::cart::context::CartContext;
use business::domain::cart::use_cases::update_product_amount::UpdateProductAmountParams;
use business::domain::shared::value_objects::ProductId;

use crate::api::cart::dto::{CartResponse, UpdateAmountRequest};
use crate::api::cart::outcome_mapper::CartMutationResponse;
use crate::api::tags::ApiTags;

pub struct CartApi {
    context: CartContext,
}

impl CartApi {
    pub fn new(context: CartContext) -> Self {
        Self { context }
    }
}

/// Shopping cart API
///
/// Failed operations leave the cart unchanged and queue a user notice
/// (see `/notifications`).
#[OpenApi]
impl CartApi {
    /// Get the cart
    ///
    /// Returns the lines in insertion order with subtotals and the cart total.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self) -> Json<CartResponse> {
        Json(CartResponse::from(&self.context.cart()))
    }

    /// Add a product
    ///
    /// Adds one unit. A product already in the cart has its amount incremented
    /// instead, as long as stock allows.
    #[oai(path = "/cart/items/:product_id", method = "post", tag = "ApiTags::Cart")]
    async fn add_product(&self, product_id: Path<u64>) -> CartMutationResponse {
        let outcome = self
            .context
            .add_product(ProductId::new(product_id.0))
            .await;
        CartMutationResponse::from_outcome(outcome, &self.context.cart())
    }

    /// Change a product amount
    ///
    /// Sets the quantity of a line, checked against current stock.
    #[oai(path = "/cart/items/:product_id", method = "put", tag = "ApiTags::Cart")]
    async fn update_product_amount(
        &self,
        product_id: Path<u64>,
        body: Json<UpdateAmountRequest>,
    ) -> CartMutationResponse {
        let outcome = self
            .context
            .update_product_amount(UpdateProductAmountParams {
                product_id: ProductId::new(product_id.0),
                amount: body.0.amount,
            })
            .await;
        CartMutationResponse::from_outcome(outcome, &self.context.cart())
    }

    /// Remove a product
    ///
    /// Drops the whole line regardless of its amount.
    #[oai(path = "/cart/items/:product_id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_product(&self, product_id: Path<u64>) -> CartMutationResponse {
        let outcome = self
            .context
            .remove_product(ProductId::new(product_id.0))
            .await;
        CartMutationResponse::from_outcome(outcome, &self.context.cart())
    }
}
