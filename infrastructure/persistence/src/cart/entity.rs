use serde::{Deserialize, Serialize};

use business::domain::cart::model::CartItem;
use business::domain::shared::value_objects::ProductId;

/// Stored form of a cart line. Field names are part of the snapshot format.
#[derive(Debug, Serialize, Deserialize)]
pub struct CartItemEntity {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub amount: i64,
}

impl CartItemEntity {
    pub fn from_domain(item: &CartItem) -> Self {
        Self {
            id: item.id.value(),
            title: item.title.clone(),
            price: item.price,
            image: item.image.clone(),
            amount: item.amount,
        }
    }

    pub fn into_domain(self) -> CartItem {
        CartItem::from_repository(
            ProductId::new(self.id),
            self.title,
            self.price,
            self.image,
            self.amount,
        )
    }
}
