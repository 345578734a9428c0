//! Catalog management commands.

use mango_stand_core::ProductId;
use mango_stand_storefront::Store;
use mango_stand_storefront::models::ProductDraft;
use mango_stand_storefront::projector;
use mango_stand_storefront::shell::Shell;
use mango_stand_storefront::storage::FileStore;

use crate::render;

/// Show the management list.
pub fn list(store: &Store<FileStore>) {
    render::admin(&projector::project_admin_list(store.products()));
}

/// Validate and add a product, then re-render the management list.
pub fn add(
    store: &mut Store<FileStore>,
    shell: &mut impl Shell,
    name: String,
    price: String,
    img: String,
    description: String,
) {
    let draft = ProductDraft {
        name,
        price,
        img,
        description,
    };

    match store.add_product(draft) {
        Ok(product) => {
            shell.notify(&format!("{} added to the catalog", product.name), false);
            render::admin(&projector::project_admin_list(store.products()));
        }
        Err(error) => shell.notify(&error.to_string(), true),
    }
}

/// Remove a product and re-render the management list.
pub fn remove(store: &mut Store<FileStore>, shell: &mut impl Shell, id: &str) {
    let id = ProductId::from(id);
    match store.delete_product(&id) {
        Some(name) => {
            shell.notify(&format!("{name} removed from the catalog"), false);
            render::admin(&projector::project_admin_list(store.products()));
        }
        None => tracing::debug!(%id, "delete_product missed"),
    }
}
