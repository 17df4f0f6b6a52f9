//! Screen view models
//!
//! Each screen keeps the state its UI renders and exposes the actions the UI
//! triggers. Actions return an [`Effect`]: an alert to show and/or a route
//! to navigate to.

pub mod form;
pub mod list;
pub mod login;
pub mod navigation;

pub use form::FormScreen;
pub use list::ListScreen;
pub use login::LoginScreen;
pub use navigation::{Alert, Confirm, Effect, Route};

#[cfg(test)]
pub(crate) mod fake;

/// Holds a screen's `loading` flag up while a request is in flight
///
/// Dropping the guard clears the flag, also when the action's future is
/// dropped before the request completes.
struct Busy<'a>(&'a mut bool);

impl<'a> Busy<'a> {
    fn new(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for Busy<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}
