//! The router instance.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use storefront_history::History;
use url::Url;

use crate::{
    error::{ConfigurationError, NavigationError},
    navigation::NavigationTarget,
    route_definition::{strip_query, Route},
    route_table::{RouteMatch, RouteTable},
    router_cfg::RouterConfig,
    state::RouterState,
    view::Element,
};

/// Relative paths are resolved against the current route as if it lived under this URL.
const RELATIVE_BASE: &str = "storefront://index.html/";

/// The query and fragment of a location, including the leading `?` or `#`.
fn query(location: &str) -> &str {
    &location[strip_query(location).len()..]
}

type Subscriber = dyn Fn(&Router);

struct RouterInner {
    config: RouterConfig,
    history: Rc<dyn History>,
    state: RefCell<RouterState>,
    subscribers: RefCell<Vec<Weak<Subscriber>>>,
    table: RouteTable,
}

/// The core of the router.
///
/// This combines a [`RouteTable`] and a [`History`] provider to find which view should be
/// rendered for the current location, and notifies subscribers when that changes.
///
/// A [`Router`] is a cheap handle: cloning it yields another handle to the same router. Build one
/// at startup and pass it to whatever needs to navigate; views receive it when they render.
///
/// ```rust
/// # use std::rc::Rc;
/// # use storefront_router::prelude::*;
/// fn Login(_: &Router) -> Element { String::from("<h1>Login</h1>") }
/// fn Products(_: &Router) -> Element { String::from("<h1>Products</h1>") }
///
/// let router = Router::new(
///     [
///         Route::new("/", "Login", Login),
///         Route::new("/products", "Products", Products),
///     ],
///     Rc::new(MemoryHistory::default()),
///     RouterConfig::default(),
/// )
/// .unwrap();
/// assert_eq!(router.render(), "<h1>Login</h1>");
///
/// router.push(NavigationTarget::named("Products")).unwrap();
/// assert_eq!(router.current_name().as_deref(), Some("Products"));
/// assert_eq!(router.render(), "<h1>Products</h1>");
///
/// router.go_back();
/// assert_eq!(router.render(), "<h1>Login</h1>");
/// ```
#[derive(Clone)]
pub struct Router {
    inner: Rc<RouterInner>,
}

/// Keeps a subscription made with [`Router::subscribe`] alive. Dropping it unsubscribes.
pub struct Subscription {
    _callback: Rc<Subscriber>,
}

impl Router {
    /// Create a new [`Router`] and perform the initial routing.
    ///
    /// Fails if the routes don't form a valid [`RouteTable`].
    pub fn new(
        routes: impl IntoIterator<Item = Route>,
        history: Rc<dyn History>,
        config: RouterConfig,
    ) -> Result<Self, ConfigurationError> {
        let table = RouteTable::with_options(routes, config.options)?;

        let router = Self {
            inner: Rc::new(RouterInner {
                config,
                history,
                state: RefCell::new(RouterState::default()),
                subscribers: RefCell::new(Vec::new()),
                table,
            }),
        };

        // the history only holds a weak handle, so dropping the last router frees it
        let weak = Rc::downgrade(&router.inner);
        router.inner.history.updater(Rc::new(move || {
            if let Some(inner) = weak.upgrade() {
                Router { inner }.update_routing();
            }
        }));

        router.update_routing();
        Ok(router)
    }

    /// The route table.
    pub fn table(&self) -> &RouteTable {
        &self.inner.table
    }

    /// Find the route for a location without navigating to it.
    pub fn resolve(&self, location: &str) -> Result<RouteMatch<'_>, NavigationError> {
        self.inner.table.resolve(location)
    }

    /// A snapshot of the current routing information.
    pub fn current(&self) -> RouterState {
        self.inner.state.borrow().clone()
    }

    /// The name of the active route, [`None`] if no route matches the current path.
    pub fn current_name(&self) -> Option<String> {
        self.inner.state.borrow().name.clone()
    }

    /// Whether there is a prior entry to go back to.
    pub fn can_go_back(&self) -> bool {
        self.inner.history.can_go_back()
    }

    /// Whether there is a later entry to go forward to.
    pub fn can_go_forward(&self) -> bool {
        self.inner.history.can_go_forward()
    }

    /// Go back to the previous entry. Does nothing if there is none.
    pub fn go_back(&self) {
        self.inner.history.go_back();
        self.update_routing();
    }

    /// Go forward to the next entry. Does nothing if there is none.
    pub fn go_forward(&self) {
        self.inner.history.go_forward();
        self.update_routing();
    }

    /// Push a new history entry.
    ///
    /// Navigating to a path no route matches succeeds and renders the not-found view. Unknown
    /// names and missing parameters fail without touching the history.
    pub fn push(&self, target: impl Into<NavigationTarget>) -> Result<(), NavigationError> {
        match target.into() {
            NavigationTarget::External(url) => self.external(url),
            target => {
                let path = self.internal_path(&target)?;
                if self.is_current_location(&path) {
                    tracing::debug!(%path, "already at location; not pushing");
                    return Ok(());
                }
                tracing::debug!(%path, "push");
                self.inner.history.push(path);
                self.update_routing();
                Ok(())
            }
        }
    }

    /// Replace the current history entry.
    pub fn replace(&self, target: impl Into<NavigationTarget>) -> Result<(), NavigationError> {
        match target.into() {
            NavigationTarget::External(url) => self.external(url),
            target => {
                let path = self.internal_path(&target)?;
                tracing::debug!(%path, "replace");
                self.inner.history.replace(path);
                self.update_routing();
                Ok(())
            }
        }
    }

    /// Navigate to the route called `name`, so callers don't hard-code paths.
    pub fn navigate_by_name(
        &self,
        name: &str,
        parameters: &[(&str, &str)],
    ) -> Result<(), NavigationError> {
        let target = parameters
            .iter()
            .fold(NavigationTarget::named(name), |target, (k, v)| {
                target.parameter(*k, v)
            });
        self.push(target)
    }

    /// Get the `href` for the `target`, including the history's prefix.
    pub fn href(&self, target: &NavigationTarget) -> Result<String, NavigationError> {
        if let NavigationTarget::External(url) = target {
            return Ok(url.clone());
        }

        let path = self.internal_path(target)?;
        Ok(match self.inner.history.current_prefix() {
            Some(prefix) => format!("{prefix}{path}"),
            None => path,
        })
    }

    /// Render the view of the active route, or the not-found view if no route is active.
    pub fn render(&self) -> Element {
        let name = self.inner.state.borrow().name.clone();
        match name.and_then(|name| self.inner.table.by_name(&name)) {
            Some(route) => route.view().render(self),
            None => (self.inner.config.not_found)(self),
        }
    }

    /// Call `callback` after every routing update.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl Fn(&Router) + 'static) -> Subscription {
        let callback: Rc<Subscriber> = Rc::new(callback);
        self.inner
            .subscribers
            .borrow_mut()
            .push(Rc::downgrade(&callback));
        Subscription {
            _callback: callback,
        }
    }

    fn external(&self, url: String) -> Result<(), NavigationError> {
        if self.inner.history.external(url.clone()) {
            Ok(())
        } else {
            tracing::warn!("external navigation to {url} is not supported by the history");
            Err(NavigationError::ExternalNavigationFailed(url))
        }
    }

    /// Turn an internal target into an absolute path.
    fn internal_path(&self, target: &NavigationTarget) -> Result<String, NavigationError> {
        match target {
            NavigationTarget::Path(path) if path.starts_with("//") => {
                Err(NavigationError::InvalidPath(path.clone()))
            }
            NavigationTarget::Path(path) if path.starts_with('/') => Ok(path.clone()),
            NavigationTarget::Path(path) => {
                let current = self.inner.history.current_route();
                // `sale:summer` would otherwise be joined as a URL with its own scheme
                let relative = match Url::parse(path) {
                    Ok(_) => format!("./{path}"),
                    Err(_) => path.clone(),
                };
                let url = Url::parse(RELATIVE_BASE)
                    .and_then(|base| base.join(current.trim_start_matches('/')))
                    .and_then(|base| base.join(&relative))
                    .map_err(|_| NavigationError::InvalidPath(path.clone()))?;

                let mut joined = url.path().to_string();
                if let Some(query) = url.query() {
                    joined.push('?');
                    joined.push_str(query);
                }
                if let Some(fragment) = url.fragment() {
                    joined.push('#');
                    joined.push_str(fragment);
                }
                Ok(joined)
            }
            NavigationTarget::Named { name, parameters } => {
                self.inner.table.path_for(name, parameters)
            }
            NavigationTarget::External(url) => Err(NavigationError::InvalidPath(url.clone())),
        }
    }

    /// Re-read the history and update the state. Subscribers only hear about actual changes.
    /// Whether `path` leads to the active route with the same parameters and query.
    ///
    /// Locations no route matches are left to the history's own comparison.
    fn is_current_location(&self, path: &str) -> bool {
        let current = self.inner.history.current_route();
        if query(path) != query(&current) {
            return false;
        }

        let state = self.inner.state.borrow();
        match (self.inner.table.resolve(path), &state.name) {
            (Ok(found), Some(name)) => {
                found.route.name() == name && found.parameters == state.parameters
            }
            _ => false,
        }
    }

    fn update_routing(&self) {
        let history = &self.inner.history;
        let location = history.current_route();

        let mut state = match self.inner.table.resolve(&location) {
            Ok(found) => RouterState {
                name: Some(found.route.name().to_string()),
                path: found.path,
                parameters: found.parameters,
                ..Default::default()
            },
            Err(err) => {
                tracing::warn!("{err}");
                RouterState {
                    path: strip_query(&location).to_string(),
                    ..Default::default()
                }
            }
        };
        state.can_go_back = history.can_go_back();
        state.can_go_forward = history.can_go_forward();
        state.prefix = history.current_prefix();

        {
            let mut current = self.inner.state.borrow_mut();
            if *current == state {
                return;
            }
            tracing::debug!(path = %state.path, name = ?state.name, "routing updated");
            *current = state;
        }

        if let Some(on_update) = &self.inner.config.on_update {
            on_update(self);
        }
        self.update_subscribers();
    }

    /// Notify subscribers, dropping the ones that have unsubscribed.
    fn update_subscribers(&self) {
        let subscribers: Vec<_> = {
            let mut subscribers = self.inner.subscribers.borrow_mut();
            subscribers.retain(|s| s.strong_count() > 0);
            subscribers.iter().filter_map(Weak::upgrade).collect()
        };

        for subscriber in subscribers {
            subscriber(self);
        }
    }
}
