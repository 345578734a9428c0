//! Shell contract - the UI/navigation collaborator.
//!
//! The engine calls into the shell for user feedback and page switches; the
//! shell calls back into [`Store`](crate::Store) operations and
//! [`projector`](crate::projector) functions. Only plain data crosses the
//! boundary - no storage handles, no widgets.

/// Pages the shell can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// The product grid.
    Storefront,
    /// A single product's detail view.
    ProductDetail,
    /// The cart view.
    Cart,
    /// Register/login forms.
    Account,
    /// The catalog management list.
    Admin,
}

/// UI feedback surface implemented by the shell.
pub trait Shell {
    /// Show a toast-style notification. Fire-and-forget: the engine never
    /// waits on or reads back from the shell.
    fn notify(&mut self, message: &str, is_error: bool);

    /// Switch the visible page.
    fn navigate_to(&mut self, page: Page);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Shell double that records what the engine asked for.
    #[derive(Default)]
    struct RecordingShell {
        notifications: Vec<(String, bool)>,
        pages: Vec<Page>,
    }

    impl Shell for RecordingShell {
        fn notify(&mut self, message: &str, is_error: bool) {
            self.notifications.push((message.to_owned(), is_error));
        }

        fn navigate_to(&mut self, page: Page) {
            self.pages.push(page);
        }
    }

    #[test]
    fn test_shell_trait_is_object_safe() {
        let mut recording = RecordingShell::default();
        let shell: &mut dyn Shell = &mut recording;

        shell.notify("Mango Chutney added to cart", false);
        shell.navigate_to(Page::Cart);

        assert_eq!(
            recording.notifications,
            vec![("Mango Chutney added to cart".to_owned(), false)]
        );
        assert_eq!(recording.pages, vec![Page::Cart]);
    }
}
