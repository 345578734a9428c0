//! Terminal implementation of the engine's shell contract.

use mango_stand_storefront::shell::{Page, Shell};

/// Prints notifications to the terminal.
///
/// A one-shot CLI has no pages to switch, so navigation is just traced -
/// the next invocation "renders" whatever view its subcommand asks for.
pub struct TerminalShell;

impl Shell for TerminalShell {
    fn notify(&mut self, message: &str, is_error: bool) {
        if is_error {
            eprintln!("!! {message}");
        } else {
            println!("-- {message}");
        }
    }

    fn navigate_to(&mut self, page: Page) {
        tracing::debug!(?page, "navigate");
    }
}
