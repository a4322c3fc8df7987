use std::collections::BTreeMap;

use crate::navigation::NavigationTarget;

/// The current routing information.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouterState {
    /// Whether there is a prior path to go back to.
    ///
    /// This might be [`true`] even if there isn't.
    pub can_go_back: bool,

    /// Whether there is a later path to forward to.
    ///
    /// This might be [`true`] even if there isn't.
    pub can_go_forward: bool,

    /// The name of the active route, [`None`] if no route matches the current path.
    pub name: Option<String>,

    /// The current path, without prefix, query or fragment.
    pub path: String,

    /// The current prefix.
    pub prefix: Option<String>,

    /// The parameters read from the path as specified by the current route.
    pub parameters: BTreeMap<String, String>,
}

impl RouterState {
    /// Get a parameter of the current route.
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).map(String::as_str)
    }

    /// Checks if the provided `target` is currently active.
    ///
    /// # [`Path`](NavigationTarget::Path)
    /// If `exact` is [`true`], the current path must match the `target` path exactly.
    ///
    /// If `exact` is [`false`] and the `target` path is absolute (starts with `/`), the current
    /// path must start with the `target` path.
    ///
    /// Otherwise, the last segment of the current path must match the `target` path.
    ///
    /// # [`Named`](NavigationTarget::Named)
    /// The `target` name must be the active name.
    ///
    /// If `exact` is [`true`], all `target` parameters must be matched by current parameters.
    ///
    /// # [`External`](NavigationTarget::External)
    /// Always [`false`].
    #[must_use]
    pub fn is_at(&self, target: &NavigationTarget, exact: bool) -> bool {
        match target {
            NavigationTarget::Path(path) => {
                if exact {
                    &self.path == path
                } else if path.starts_with('/') {
                    self.path.starts_with(path.as_str())
                } else if let Some((_, segment)) = self.path.rsplit_once('/') {
                    segment == path
                } else {
                    false
                }
            }
            NavigationTarget::Named { name, parameters } => {
                if self.name.as_ref() != Some(name) {
                    return false;
                }

                // ensure specified parameters match when exact
                !exact
                    || parameters
                        .iter()
                        .all(|(k, v)| self.parameters.get(k) == Some(v))
            }
            NavigationTarget::External(_) => false,
        }
    }
}
