//! Built-in seed catalog for first runs.

use rust_decimal::Decimal;

use mango_stand_core::{Price, ProductId};

use crate::models::Product;

/// The catalog installed when no `products` record exists yet.
///
/// Ids are small fixed tokens; admin-created products get timestamp-derived
/// ids, so the two ranges never collide.
#[must_use]
pub fn seed_catalog() -> Vec<Product> {
    vec![
        product(
            "1",
            "Dried Mango Strips",
            650,
            "https://picsum.photos/seed/mango-strips/400/300",
            "Sun-dried Ataulfo mango, no added sugar. 200g resealable bag.",
        ),
        product(
            "2",
            "Mango Chutney",
            425,
            "https://picsum.photos/seed/chutney/400/300",
            "Small-batch chutney with ginger and chili. Pairs with anything grilled.",
        ),
        product(
            "3",
            "Alphonso Gift Box",
            2900,
            "https://picsum.photos/seed/alphonso/400/300",
            "Six hand-picked Alphonso mangoes in a ventilated gift crate.",
        ),
        product(
            "4",
            "Mango Hot Sauce",
            799,
            "https://picsum.photos/seed/hot-sauce/400/300",
            "Fermented habanero and mango. Medium heat, big aroma.",
        ),
        product(
            "5",
            "Cold-Pressed Mango Juice",
            549,
            "https://picsum.photos/seed/juice/400/300",
            "750ml bottle, pressed weekly. Keep refrigerated.",
        ),
        product(
            "6",
            "Mango Stand Tote",
            1500,
            "https://picsum.photos/seed/tote/400/300",
            "Heavy canvas tote with the stand's hand-painted logo.",
        ),
    ]
}

fn product(id: &str, name: &str, cents: i64, img: &str, description: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Price::new(Decimal::new(cents, 2)),
        img: img.to_owned(),
        description: description.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique() {
        let catalog = seed_catalog();
        for (i, a) in catalog.iter().enumerate() {
            for b in catalog.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_seed_is_stable() {
        assert_eq!(seed_catalog(), seed_catalog());
        assert!(!seed_catalog().is_empty());
    }
}
