//! Cart commands.

use mango_stand_core::ProductId;
use mango_stand_storefront::Store;
use mango_stand_storefront::projector;
use mango_stand_storefront::shell::Shell;
use mango_stand_storefront::storage::FileStore;

use crate::render;

/// Add one unit of `id` to the cart and re-render it.
pub fn add(store: &mut Store<FileStore>, shell: &mut impl Shell, id: &str) {
    let id = ProductId::from(id);
    match store.add_to_cart(&id) {
        Some(name) => {
            shell.notify(&format!("{name} added to cart"), false);
            render::cart(&projector::project_cart(store.cart()));
        }
        // Unknown ids only come from stale state; silent no-op.
        None => tracing::debug!(%id, "add_to_cart missed"),
    }
}

/// Remove the line for `id` and re-render the cart.
pub fn remove(store: &mut Store<FileStore>, shell: &mut impl Shell, id: &str) {
    let id = ProductId::from(id);
    match store.remove_from_cart(&id) {
        Some(name) => {
            shell.notify(&format!("{name} removed from cart"), false);
            render::cart(&projector::project_cart(store.cart()));
        }
        None => tracing::debug!(%id, "remove_from_cart missed"),
    }
}

/// Show the cart with totals.
pub fn show(store: &Store<FileStore>) {
    render::cart(&projector::project_cart(store.cart()));
}
