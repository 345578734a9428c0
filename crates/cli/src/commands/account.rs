//! Account commands.

use mango_stand_storefront::services::auth::AccountService;
use mango_stand_storefront::shell::{Page, Shell};
use mango_stand_storefront::storage::FileStore;

/// Register, overwriting the stored account.
pub fn register(
    accounts: &mut AccountService<FileStore>,
    shell: &mut impl Shell,
    name: &str,
    email: &str,
    pass: &str,
) {
    match accounts.register(name, email, pass) {
        Ok(user) => shell.notify(&format!("Registered {}", user.name), false),
        Err(error) => shell.notify(&error.to_string(), true),
    }
}

/// Sign in against the stored account.
pub fn login(
    accounts: &AccountService<FileStore>,
    shell: &mut impl Shell,
    email: &str,
    pass: &str,
) {
    match accounts.login(email, pass) {
        Ok(user) => {
            shell.notify(&format!("Welcome back, {}", user.name), false);
            shell.navigate_to(Page::Storefront);
        }
        Err(error) => shell.notify(&error.to_string(), true),
    }
}
