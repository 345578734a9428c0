//! Plain-text rendering of projector view models.
//!
//! The projector hands over plain data; these functions decide how it looks
//! in a terminal. Nothing here reads or mutates engine state.

use mango_stand_storefront::projector::{AdminRowView, CartView, CatalogView, DetailView};

/// Render the product grid.
pub fn catalog(view: &CatalogView) {
    match view {
        CatalogView::Empty => println!("No products yet."),
        CatalogView::Cards(cards) => {
            for card in cards {
                println!(
                    "{:>13}  {:<28} {:>10}  {}",
                    card.id, card.name, card.formatted_price, card.img
                );
            }
        }
    }
}

/// Render one product's detail view.
pub fn detail(view: &DetailView) {
    println!("{}  ({})", view.name, view.id);
    println!("{}", view.formatted_price);
    println!("{}", view.img);
    println!();
    println!("{}", view.description);
}

/// Render the cart with totals.
pub fn cart(view: &CartView) {
    match view {
        CartView::Empty => println!("Your cart is empty."),
        CartView::Lines {
            lines,
            formatted_total,
            item_count,
        } => {
            for line in lines {
                println!(
                    "{:>13}  {:<28} {:>3} x {:>10} = {:>10}",
                    line.id, line.name, line.quantity, line.formatted_price, line.formatted_subtotal
                );
            }
            println!();
            println!("{item_count} item(s), total {formatted_total}");
        }
    }
}

/// Render the admin management list.
pub fn admin(rows: &[AdminRowView]) {
    if rows.is_empty() {
        println!("No products yet.");
        return;
    }
    for row in rows {
        println!("{:>13}  {:<28} {:>10}", row.id, row.name, row.formatted_price);
    }
}
