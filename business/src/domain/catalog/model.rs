use crate::domain::shared::value_objects::ProductId;

/// Product details as served by the catalog, without a cart quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogProduct {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image: String,
}

/// Units available for a product. Owned by the catalog, never cached here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stock {
    pub id: ProductId,
    pub amount: i64,
}

impl Stock {
    pub fn is_exhausted(&self) -> bool {
        self.amount == 0
    }

    /// Whether `amount` units can be held in the cart.
    pub fn covers(&self, amount: i64) -> bool {
        amount <= self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_exhausted_only_at_zero() {
        let empty = Stock { id: ProductId::new(1), amount: 0 };
        let some = Stock { id: ProductId::new(1), amount: 1 };

        assert!(empty.is_exhausted());
        assert!(!some.is_exhausted());
    }

    #[test]
    fn should_cover_amounts_up_to_available() {
        let stock = Stock { id: ProductId::new(1), amount: 5 };

        assert!(stock.covers(5));
        assert!(stock.covers(1));
        assert!(!stock.covers(6));
    }
}
