use std::{cell::RefCell, rc::Rc};

use gloo::events::EventListener;
use wasm_bindgen::JsValue;
use web_sys::{History as BrowserHistory, Window};

use crate::{strip_prefix, History};

/// A [`History`] provider that integrates with a browser via the path-based [History API].
///
/// Routes are real URL paths (`/products`), not hash fragments, so the server hosting the
/// application has to answer every unknown path with the application's entry page.
///
/// # Prefix
/// This provider supports a prefix, which can be used for web apps that aren't located at the
/// root of their domain. Application developers are responsible for ensuring that right after
/// the prefix comes a `/`.
///
/// [History API]: https://developer.mozilla.org/en-US/docs/Web/API/History_API
pub struct WebHistory {
    history: BrowserHistory,
    listener_navigation: RefCell<Option<EventListener>>,
    prefix: Option<String>,
    window: Window,
}

impl Default for WebHistory {
    fn default() -> Self {
        Self::new(None)
    }
}

impl WebHistory {
    /// Create a new [`WebHistory`].
    ///
    /// An empty or `/` prefix is treated as no prefix. A trailing `/` on the prefix is dropped.
    pub fn new(prefix: Option<String>) -> Self {
        let window = web_sys::window().expect("access to `window`");
        let history = window.history().expect("`window` has access to `history`");
        let prefix = prefix
            .map(|p| p.trim_end_matches('/').to_string())
            .filter(|p| !p.is_empty());

        Self {
            history,
            listener_navigation: RefCell::new(None),
            prefix,
            window,
        }
    }

    /// Create a new [`WebHistory`] with a prefix.
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::new(Some(prefix.into()))
    }

    fn full_path(&self, route: &str) -> String {
        match &self.prefix {
            None => route.to_string(),
            Some(prefix) => format!("{prefix}{route}"),
        }
    }
}

impl History for WebHistory {
    fn current_route(&self) -> String {
        let location = self.window.location();
        let path = location.pathname().unwrap_or_else(|_| String::from("/"));
        let search = location.search().unwrap_or_default();

        let path = match &self.prefix {
            None => path,
            Some(prefix) => strip_prefix(&path, prefix).unwrap_or("/").to_string(),
        };

        format!("{path}{search}")
    }

    fn current_prefix(&self) -> Option<String> {
        self.prefix.clone()
    }

    fn go_back(&self) {
        if let Err(e) = self.history.back() {
            tracing::error!("failed to go back: {e:?}")
        }
    }

    fn go_forward(&self) {
        if let Err(e) = self.history.forward() {
            tracing::error!("failed to go forward: {e:?}")
        }
    }

    fn push(&self, route: String) {
        if route.starts_with("//") {
            tracing::error!(r#"cannot navigate to paths starting with "//", path: {route}"#);
            return;
        }

        // don't push the same route twice
        if self.current_route() == route {
            return;
        }

        let path = self.full_path(&route);
        if let Err(e) = self
            .history
            .push_state_with_url(&JsValue::NULL, "", Some(&path))
        {
            tracing::error!("failed to push state: {e:?}");
        }
    }

    fn replace(&self, route: String) {
        if route.starts_with("//") {
            tracing::error!(r#"cannot navigate to paths starting with "//", path: {route}"#);
            return;
        }

        let path = self.full_path(&route);
        if let Err(e) = self
            .history
            .replace_state_with_url(&JsValue::NULL, "", Some(&path))
        {
            tracing::error!("failed to replace state: {e:?}");
        }
    }

    fn external(&self, url: String) -> bool {
        match self.window.location().set_href(&url) {
            Ok(_) => true,
            Err(e) => {
                tracing::error!("failed to navigate to external url (`{url}`): {e:?}");
                false
            }
        }
    }

    fn updater(&self, callback: Rc<dyn Fn()>) {
        let listener = EventListener::new(&self.window, "popstate", move |_| (*callback)());
        *self.listener_navigation.borrow_mut() = Some(listener);
    }
}
