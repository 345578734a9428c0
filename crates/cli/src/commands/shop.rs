//! Catalog browsing commands.

use mango_stand_core::ProductId;
use mango_stand_storefront::Store;
use mango_stand_storefront::projector;
use mango_stand_storefront::shell::{Page, Shell};
use mango_stand_storefront::storage::FileStore;

use crate::render;

/// Show the product grid.
pub fn list(store: &Store<FileStore>) {
    render::catalog(&projector::project_product_grid(store.products()));
}

/// Show one product's detail view.
pub fn show(store: &Store<FileStore>, shell: &mut impl Shell, id: &str) {
    let id = ProductId::from(id);
    match store.product(&id) {
        Some(product) => {
            render::detail(&projector::project_product_detail(product));
            shell.navigate_to(Page::ProductDetail);
        }
        None => shell.notify("Product not found", true),
    }
}
