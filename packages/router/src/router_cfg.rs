use std::rc::Rc;

use crate::{
    components::NotFound, route_definition::MatchOptions, router::Router, view::Component,
};

/// Global configuration options for the router.
///
/// This implements [`Default`] and follows the builder pattern, so you can use it like this:
/// ```rust
/// # use storefront_router::prelude::*;
/// fn Missing(_: &Router) -> Element {
///     String::from("<h1>Nothing here</h1>")
/// }
///
/// let cfg = RouterConfig::default().not_found(Missing).sensitive(true);
/// ```
#[derive(Clone)]
pub struct RouterConfig {
    pub(crate) not_found: Component,
    pub(crate) on_update: Option<Rc<dyn Fn(&Router)>>,
    pub(crate) options: MatchOptions,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            not_found: NotFound,
            on_update: None,
            options: MatchOptions::default(),
        }
    }
}

impl RouterConfig {
    /// A component to render when no route matches the current path.
    ///
    /// Defaults to a router-internal component called [`NotFound`].
    pub fn not_found(self, component: Component) -> Self {
        Self {
            not_found: component,
            ..self
        }
    }

    /// A function to be called whenever the routing is updated.
    ///
    /// The callback is invoked after the router state is updated, before subscribers are
    /// notified. It is called no more than once per rerouting.
    ///
    /// Defaults to [`None`].
    pub fn on_update(self, callback: impl Fn(&Router) + 'static) -> Self {
        Self {
            on_update: Some(Rc::new(callback)),
            ..self
        }
    }

    /// Whether static path segments are compared case-sensitively.
    ///
    /// Defaults to [`false`]: `/PRODUCTS` matches a `/products` route.
    pub fn sensitive(mut self, sensitive: bool) -> Self {
        self.options.sensitive = sensitive;
        self
    }

    /// Whether a trailing `/` must match exactly.
    ///
    /// Defaults to [`false`]: `/products/` matches a `/products` route.
    pub fn strict(mut self, strict: bool) -> Self {
        self.options.strict = strict;
        self
    }
}
