//! The uniform view reference routes point at.

use std::{cell::OnceCell, fmt::Debug};

use crate::router::Router;

/// Rendered markup.
pub type Element = String;

/// A renderable unit of UI.
///
/// Views receive the router they are mounted by, which is how they read the current route and
/// navigate without any global lookup.
pub type Component = fn(&Router) -> Element;

/// What a route renders.
///
/// Most routes bind their component directly. A [`View::Lazy`] route only resolves its component
/// the first time the route is rendered, then keeps it for the lifetime of the route table.
pub enum View {
    /// A component bound at startup.
    Eager(Component),
    /// A component loaded on first use.
    Lazy(LazyView),
}

impl View {
    /// Create a view whose component is produced by `loader` on first render.
    pub fn lazy(loader: fn() -> Component) -> Self {
        Self::Lazy(LazyView {
            loader,
            loaded: OnceCell::new(),
        })
    }

    /// Get the component, loading it if needed.
    pub fn component(&self) -> Component {
        match self {
            Self::Eager(component) => *component,
            Self::Lazy(lazy) => lazy.get(),
        }
    }

    /// Whether the component is available without loading.
    pub fn is_loaded(&self) -> bool {
        match self {
            Self::Eager(_) => true,
            Self::Lazy(lazy) => lazy.loaded.get().is_some(),
        }
    }

    pub(crate) fn render(&self, router: &Router) -> Element {
        (self.component())(router)
    }
}

impl From<Component> for View {
    fn from(component: Component) -> Self {
        Self::Eager(component)
    }
}

impl Debug for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Eager(_) => f.write_str("View::Eager"),
            Self::Lazy(lazy) => f
                .debug_struct("View::Lazy")
                .field("loaded", &lazy.loaded.get().is_some())
                .finish(),
        }
    }
}

/// A component that is loaded the first time it is needed.
pub struct LazyView {
    loader: fn() -> Component,
    loaded: OnceCell<Component>,
}

impl LazyView {
    fn get(&self) -> Component {
        *self.loaded.get_or_init(|| {
            tracing::trace!("loading lazy view");
            (self.loader)()
        })
    }
}
