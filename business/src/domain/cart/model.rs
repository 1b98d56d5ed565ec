use crate::domain::catalog::model::CatalogProduct;
use crate::domain::shared::value_objects::ProductId;

use super::errors::CartError;

/// A product line in the cart. `amount` is the quantity held, always >= 1.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub amount: i64,
}

impl CartItem {
    /// First unit of a product freshly fetched from the catalog.
    pub fn from_catalog(product: CatalogProduct) -> Self {
        Self {
            id: product.id,
            title: product.title,
            price: product.price,
            image: product.image,
            amount: 1,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ProductId,
        title: String,
        price: f64,
        image: String,
        amount: i64,
    ) -> Self {
        Self {
            id,
            title,
            price,
            image,
            amount,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.price * self.amount as f64
    }
}

/// Ordered cart lines, in the order they were added. Ids are unique.
///
/// Transitions never mutate in place: each one returns the next cart so that a
/// failed operation can simply drop it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Constructor for a snapshot read back from the repository (no validation).
    pub fn from_repository(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Rebuilds a cart from a stored snapshot, dropping lines that break the
    /// cart rules: non-positive amounts and repeated ids (the first line wins).
    ///
    /// Returns the cart and how many lines were dropped.
    pub fn restore(items: Vec<CartItem>) -> (Self, usize) {
        let stored = items.len();
        let mut kept: Vec<CartItem> = Vec::with_capacity(stored);
        for item in items {
            if item.amount > 0 && !kept.iter().any(|line| line.id == item.id) {
                kept.push(item);
            }
        }

        let dropped = stored - kept.len();
        (Self::from_repository(kept), dropped)
    }

    pub fn find(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.find(product_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines.
    pub fn units(&self) -> i64 {
        self.items.iter().map(|item| item.amount).sum()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Appends a new line at the end.
    pub fn with_item(&self, item: CartItem) -> Result<Self, CartError> {
        if self.contains(item.id) {
            return Err(CartError::AlreadyInCart);
        }
        if item.amount <= 0 {
            return Err(CartError::InvalidAmount);
        }

        let mut items = self.items.clone();
        items.push(item);
        Ok(Self { items })
    }

    /// Drops the line for `product_id`, keeping the order of the rest.
    pub fn without(&self, product_id: ProductId) -> Result<Self, CartError> {
        if !self.contains(product_id) {
            return Err(CartError::NotFound);
        }

        let items = self
            .items
            .iter()
            .filter(|item| item.id != product_id)
            .cloned()
            .collect();
        Ok(Self { items })
    }

    /// Sets the quantity of the line for `product_id`.
    ///
    /// A product that is not in the cart leaves every line as it was.
    pub fn with_amount(&self, product_id: ProductId, amount: i64) -> Result<Self, CartError> {
        if amount <= 0 {
            return Err(CartError::InvalidAmount);
        }

        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id == product_id {
                    CartItem {
                        amount,
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect();
        Ok(Self { items })
    }
}
