use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartItem};
use business::domain::shared::format::format_price;

#[derive(Debug, Clone, Object)]
pub struct UpdateAmountRequest {
    /// Requested quantity. Zero or less is ignored.
    pub amount: i64,
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    /// Product identifier
    pub id: u64,
    pub title: String,
    /// Unit price
    pub price: f64,
    /// Unit price as currency text, e.g. "R$ 179,90"
    pub formatted_price: String,
    /// Product image URL
    pub image: String,
    /// Units in the cart
    pub amount: i64,
    /// price * amount
    pub subtotal: f64,
    pub formatted_subtotal: String,
}

impl From<&CartItem> for CartItemResponse {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id.value(),
            title: item.title.clone(),
            price: item.price,
            formatted_price: format_price(item.price),
            image: item.image.clone(),
            amount: item.amount,
            subtotal: item.subtotal(),
            formatted_subtotal: format_price(item.subtotal()),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    /// Lines in the order they were added
    pub items: Vec<CartItemResponse>,
    /// Total units across all lines
    pub units: i64,
    pub total: f64,
    pub formatted_total: String,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartItemResponse::from).collect(),
            units: cart.units(),
            total: cart.total(),
            formatted_total: format_price(cart.total()),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartMutationResult {
    /// ok, out_of_stock, not_found, transport_error or invalid_no_op
    pub outcome: String,
    /// Cart after the operation
    pub cart: CartResponse,
}
