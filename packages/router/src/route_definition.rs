//! Route entries: which view to render for which path.

mod segment;
pub use segment::MatchOptions;
pub(crate) use segment::{
    construct_path, has_trailing_slash, match_segments, parse_route_path, path_shape,
    strip_query, Segment,
};

use crate::view::{Component, View};

/// A rule mapping a URL path to a renderable view.
///
/// The `path` is a pattern of `/`-separated segments. `/` is the application root. A segment
/// written as `:key` is a parameter and matches any single non-empty segment, whose decoded value
/// is made available under `key`.
///
/// ```rust
/// # use storefront_router::prelude::*;
/// # fn Products(_: &Router) -> Element { String::new() }
/// let route = Route::new("/products", "Products", Products);
/// assert_eq!(route.path(), "/products");
/// assert_eq!(route.name(), "Products");
/// ```
#[derive(Debug)]
pub struct Route {
    path: String,
    name: String,
    view: View,
}

impl Route {
    /// Create a route that renders `component`.
    pub fn new(path: impl Into<String>, name: impl Into<String>, component: Component) -> Self {
        Self::with_view(path, name, View::Eager(component))
    }

    /// Create a route whose component is only loaded the first time the route renders.
    pub fn lazy(path: impl Into<String>, name: impl Into<String>, loader: fn() -> Component) -> Self {
        Self::with_view(path, name, View::lazy(loader))
    }

    /// Create a route from any [`View`].
    pub fn with_view(path: impl Into<String>, name: impl Into<String>, view: View) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
        }
    }

    /// The path pattern.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The unique name, used for navigation without hard-coded paths.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The view rendered when the route is active.
    pub fn view(&self) -> &View {
        &self.view
    }
}
