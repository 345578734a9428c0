//! View projector - pure mappings from state snapshots to view models.
//!
//! Projections never mutate their input and are idempotent: projecting the
//! same snapshot twice yields an identical value. Nothing here touches
//! storage or UI; the shell is responsible for turning view models into
//! widgets.
//!
//! Not-found semantics live at the lookup, not here:
//! [`project_product_detail`] takes a `&Product` the caller already resolved
//! via [`Store::product`](crate::Store::product).

use mango_stand_core::ProductId;

use crate::models::{CartLine, Product};
use crate::store;

/// One card in the product grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardView {
    pub id: ProductId,
    pub name: String,
    pub formatted_price: String,
    pub img: String,
}

/// The product grid, or the empty-catalog marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogView {
    /// Nothing to show; the shell renders a "no products" placeholder.
    Empty,
    /// One card per product, catalog order.
    Cards(Vec<ProductCardView>),
}

/// Full product detail, including the description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: ProductId,
    pub name: String,
    pub formatted_price: String,
    pub img: String,
    pub description: String,
}

/// One rendered cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    pub id: ProductId,
    pub name: String,
    pub formatted_price: String,
    pub img: String,
    pub quantity: u32,
    pub formatted_subtotal: String,
}

/// The cart, or the empty-cart marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartView {
    /// Nothing in the cart; the shell renders a "cart is empty" placeholder.
    Empty,
    /// Lines plus the totals footer.
    Lines {
        lines: Vec<CartLineView>,
        formatted_total: String,
        item_count: u32,
    },
}

/// One row in the admin management list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminRowView {
    pub id: ProductId,
    pub name: String,
    pub formatted_price: String,
}

/// Project the catalog into the product grid.
#[must_use]
pub fn project_product_grid(products: &[Product]) -> CatalogView {
    if products.is_empty() {
        return CatalogView::Empty;
    }

    CatalogView::Cards(
        products
            .iter()
            .map(|p| ProductCardView {
                id: p.id.clone(),
                name: p.name.clone(),
                formatted_price: p.price.to_string(),
                img: p.img.clone(),
            })
            .collect(),
    )
}

/// Project one product into its detail view.
#[must_use]
pub fn project_product_detail(product: &Product) -> DetailView {
    DetailView {
        id: product.id.clone(),
        name: product.name.clone(),
        formatted_price: product.price.to_string(),
        img: product.img.clone(),
        description: product.description.clone(),
    }
}

/// Project the cart, with per-line subtotals and the totals footer.
#[must_use]
pub fn project_cart(cart: &[CartLine]) -> CartView {
    if cart.is_empty() {
        return CartView::Empty;
    }

    let totals = store::compute_cart_totals(cart);
    let lines = cart
        .iter()
        .zip(&totals.line_subtotals)
        .map(|(line, subtotal)| CartLineView {
            id: line.id.clone(),
            name: line.name.clone(),
            formatted_price: line.price.to_string(),
            img: line.img.clone(),
            quantity: line.quantity,
            formatted_subtotal: subtotal.to_string(),
        })
        .collect();

    CartView::Lines {
        lines,
        formatted_total: totals.grand_total.to_string(),
        item_count: totals.item_count,
    }
}

/// Project the catalog into admin management rows.
#[must_use]
pub fn project_admin_list(products: &[Product]) -> Vec<AdminRowView> {
    products
        .iter()
        .map(|p| AdminRowView {
            id: p.id.clone(),
            name: p.name.clone(),
            formatted_price: p.price.to_string(),
        })
        .collect()
}
