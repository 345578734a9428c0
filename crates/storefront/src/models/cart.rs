//! Cart domain types.

use serde::{Deserialize, Serialize};

use mango_stand_core::{Price, ProductId};

use super::Product;

/// A denormalized cart entry.
///
/// Carries a snapshot of the product's display fields taken when the product
/// was first added, plus a running quantity. The snapshot is intentionally
/// never refreshed: deleting the product from the catalog leaves the line in
/// place with its original name and price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Id of the snapshotted product.
    pub id: ProductId,
    pub name: String,
    /// Unit price at the time of the first add.
    pub price: Price,
    pub img: String,
    /// Always `>= 1`; a line at zero does not exist.
    pub quantity: u32,
}

impl CartLine {
    /// Snapshot a product into a fresh quantity-1 line.
    #[must_use]
    pub fn snapshot(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            img: product.img.clone(),
            quantity: 1,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use mango_stand_core::Price;

    use super::*;

    #[test]
    fn test_snapshot_copies_display_fields() {
        let product = Product {
            id: ProductId::new("7"),
            name: "Mango Chutney".to_owned(),
            price: Price::parse("4.25").unwrap(),
            img: "https://picsum.photos/seed/chutney/400/300".to_owned(),
            description: "Small-batch, medium heat.".to_owned(),
        };

        let line = CartLine::snapshot(&product);
        assert_eq!(line.id, product.id);
        assert_eq!(line.name, product.name);
        assert_eq!(line.price, product.price);
        assert_eq!(line.img, product.img);
        assert_eq!(line.quantity, 1);
    }
}
