//! History integration for the storefront router.
//!
//! The router never talks to the browser (or any other navigation backend) directly. Instead it
//! relies on a [`History`] provider to store the current location, the entries behind it (a
//! browser's back button) and the entries in front of it (a browser's forward button).
//!
//! Two providers ship with this crate:
//! - [`MemoryHistory`] keeps everything in memory. It is the default outside the browser and the
//!   provider used in tests.
//! - `WebHistory` (behind the `web` feature) drives the browser's path-based [History API].
//!
//! [History API]: https://developer.mozilla.org/en-US/docs/Web/API/History_API

use std::rc::Rc;

mod memory;
pub use memory::*;

#[cfg(feature = "web")]
mod web;
#[cfg(feature = "web")]
pub use web::*;

/// Remove a path prefix from a URL path.
///
/// Returns [`None`] if `path` is not under `prefix`. A prefix only matches whole segments, and
/// the bare prefix becomes `/`. Anything after the path (a query for example) is kept.
///
/// ```rust
/// # use storefront_history::strip_prefix;
/// assert_eq!(strip_prefix("/shop/products?page=2", "/shop"), Some("/products?page=2"));
/// assert_eq!(strip_prefix("/shop", "/shop"), Some("/"));
/// assert_eq!(strip_prefix("/shopping", "/shop"), None);
/// ```
pub fn strip_prefix<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = path.strip_prefix(prefix)?;
    match rest.chars().next() {
        None => Some("/"),
        Some('/') => Some(rest),
        Some(_) => None,
    }
}

/// An integration with some kind of navigation history.
///
/// All methods take `&self`: providers are shared between the router and whoever else needs to
/// observe the location, so they keep their state behind interior mutability.
///
/// Depending on your backend, your implementation may deviate from the described procedure. This
/// is fine, as long as `current_route` follows the described format.
pub trait History {
    /// Get the current route.
    ///
    /// **Must start** with `/`. **Must _not_ contain** the prefix. May contain a query string.
    ///
    /// ```rust
    /// # use storefront_history::{History, MemoryHistory};
    /// let history = MemoryHistory::default();
    /// assert_eq!(history.current_route(), "/");
    ///
    /// history.push(String::from("/products"));
    /// assert_eq!(history.current_route(), "/products");
    /// ```
    #[must_use]
    fn current_route(&self) -> String;

    /// Get the current path prefix of the URL.
    ///
    /// Meant for environments where the application is not hosted at `/`. The provider removes
    /// the prefix from [`History::current_route`] and adds it back in during navigation. The
    /// router only uses this value to build `href`s.
    fn current_prefix(&self) -> Option<String> {
        None
    }

    /// Check whether there is a previous entry to navigate back to.
    ///
    /// If a provider cannot know this, it should return [`true`].
    #[must_use]
    fn can_go_back(&self) -> bool {
        true
    }

    /// Go back to the previous entry.
    ///
    /// Does nothing if there is no previous entry. May be called even if
    /// [`History::can_go_back`] returned [`false`].
    fn go_back(&self);

    /// Check whether there is a future entry to navigate forward to.
    ///
    /// If a provider cannot know this, it should return [`true`].
    #[must_use]
    fn can_go_forward(&self) -> bool {
        true
    }

    /// Go forward to the next entry.
    ///
    /// Does nothing if there is no future entry.
    fn go_forward(&self);

    /// Go to another route.
    ///
    /// This should do three things:
    /// 1. Move the current route onto the back stack.
    /// 2. Make `route` the current route.
    /// 3. Clear the forward stack.
    fn push(&self, route: String);

    /// Replace the current route with another one, leaving the back and forward stacks untouched.
    fn replace(&self, route: String);

    /// Navigate to an external URL that isn't controlled by the router.
    ///
    /// Returns [`false`] if the provider cannot do that, which lets the router report the
    /// failure.
    #[allow(unused_variables)]
    fn external(&self, url: String) -> bool {
        false
    }

    /// Provide the history with an update callback.
    ///
    /// Some providers receive location changes from outside the router (a browser's back button
    /// for example). When that happens they call `callback`, which makes the router re-resolve
    /// the current route.
    #[allow(unused_variables)]
    fn updater(&self, callback: Rc<dyn Fn()>) {}
}
