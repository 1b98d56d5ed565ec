use poem_openapi::payload::Json;

use business::domain::cart::model::Cart;
use business::domain::cart::outcome::CartOutcome;

use crate::api::cart::dto::{CartMutationResult, CartResponse};

#[derive(poem_openapi::ApiResponse)]
pub enum CartMutationResponse {
    /// Applied, or ignored because the amount was not positive
    #[oai(status = 200)]
    Ok(Json<CartMutationResult>),
    /// Product is not in the cart
    #[oai(status = 404)]
    NotFound(Json<CartMutationResult>),
    /// Requested quantity exceeds stock
    #[oai(status = 409)]
    OutOfStock(Json<CartMutationResult>),
    /// Catalog or storage failure
    #[oai(status = 502)]
    TransportError(Json<CartMutationResult>),
}

impl CartMutationResponse {
    pub fn from_outcome(outcome: CartOutcome, cart: &Cart) -> Self {
        let body = Json(CartMutationResult {
            outcome: outcome.to_string(),
            cart: CartResponse::from(cart),
        });

        match outcome {
            CartOutcome::Ok | CartOutcome::InvalidNoOp => CartMutationResponse::Ok(body),
            CartOutcome::NotFound => CartMutationResponse::NotFound(body),
            CartOutcome::OutOfStock => CartMutationResponse::OutOfStock(body),
            CartOutcome::TransportError => CartMutationResponse::TransportError(body),
        }
    }
}
