use std::cell::RefCell;

use crate::History;

struct MemoryHistoryState {
    current: String,
    history: Vec<String>,
    future: Vec<String>,
}

/// A [`History`] provider that stores all navigation information in memory.
pub struct MemoryHistory {
    state: RefCell<MemoryHistoryState>,
    base_path: Option<String>,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::with_initial_path("/")
    }
}

impl MemoryHistory {
    /// Create a [`MemoryHistory`] starting at `path`.
    ///
    /// A `path` without a leading `/` gets one.
    ///
    /// ```rust
    /// # use storefront_history::{History, MemoryHistory};
    /// let history = MemoryHistory::with_initial_path("/products");
    /// assert_eq!(history.current_route(), "/products");
    /// assert_eq!(history.can_go_back(), false);
    /// ```
    pub fn with_initial_path(path: impl ToString) -> Self {
        Self {
            state: MemoryHistoryState {
                current: absolute(path.to_string()),
                history: Vec::new(),
                future: Vec::new(),
            }
            .into(),
            base_path: None,
        }
    }

    /// Set the base path for the history. Rendered `href`s are prefixed with this path.
    ///
    /// ```rust
    /// # use storefront_history::*;
    /// let history = MemoryHistory::default().with_prefix("/shop");
    /// assert_eq!(history.current_prefix(), Some("/shop".to_string()));
    /// ```
    pub fn with_prefix(mut self, prefix: impl ToString) -> Self {
        self.base_path = Some(prefix.to_string());
        self
    }
}

fn absolute(path: String) -> String {
    if path.starts_with('/') {
        path
    } else {
        format!("/{path}")
    }
}

impl History for MemoryHistory {
    fn current_prefix(&self) -> Option<String> {
        self.base_path.clone()
    }

    fn current_route(&self) -> String {
        self.state.borrow().current.clone()
    }

    fn can_go_back(&self) -> bool {
        !self.state.borrow().history.is_empty()
    }

    fn go_back(&self) {
        let mut write = self.state.borrow_mut();
        if let Some(last) = write.history.pop() {
            let old = std::mem::replace(&mut write.current, last);
            write.future.push(old);
        }
    }

    fn can_go_forward(&self) -> bool {
        !self.state.borrow().future.is_empty()
    }

    fn go_forward(&self) {
        let mut write = self.state.borrow_mut();
        if let Some(next) = write.future.pop() {
            let old = std::mem::replace(&mut write.current, next);
            write.history.push(old);
        }
    }

    fn push(&self, new: String) {
        if new.starts_with("//") {
            tracing::error!(r#"cannot navigate to paths starting with "//", path: {new}"#);
            return;
        }

        let new = absolute(new);
        let mut write = self.state.borrow_mut();
        // don't push the same route twice
        if write.current == new {
            return;
        }
        let old = std::mem::replace(&mut write.current, new);
        write.history.push(old);
        write.future.clear();
    }

    fn replace(&self, path: String) {
        if path.starts_with("//") {
            tracing::error!(r#"cannot navigate to paths starting with "//", path: {path}"#);
            return;
        }

        self.state.borrow_mut().current = absolute(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_root() {
        let history = MemoryHistory::default();
        assert_eq!(history.current_route(), "/");
        assert!(!history.can_go_back());
        assert!(!history.can_go_forward());
    }

    #[test]
    fn initial_path_is_made_absolute() {
        let history = MemoryHistory::with_initial_path("products");
        assert_eq!(history.current_route(), "/products");
    }

    #[test]
    fn back_and_forward() {
        let history = MemoryHistory::default();
        history.push(String::from("/products"));
        assert!(history.can_go_back());

        history.go_back();
        assert_eq!(history.current_route(), "/");
        assert!(history.can_go_forward());

        history.go_forward();
        assert_eq!(history.current_route(), "/products");
        assert!(!history.can_go_forward());
    }

    #[test]
    fn going_back_past_the_start_does_nothing() {
        let history = MemoryHistory::default();
        history.go_back();
        assert_eq!(history.current_route(), "/");
        history.go_forward();
        assert_eq!(history.current_route(), "/");
    }

    #[test]
    fn push_clears_future() {
        let history = MemoryHistory::default();
        history.push(String::from("/a"));
        history.push(String::from("/b"));
        history.go_back();
        assert!(history.can_go_forward());

        history.push(String::from("/c"));
        assert!(!history.can_go_forward());
        assert_eq!(history.current_route(), "/c");

        history.go_back();
        assert_eq!(history.current_route(), "/a");
    }

    #[test]
    fn push_same_route_is_ignored() {
        let history = MemoryHistory::default();
        history.push(String::from("/products"));
        history.push(String::from("/products"));

        history.go_back();
        assert_eq!(history.current_route(), "/");
        assert!(!history.can_go_back());
    }

    #[test]
    fn replace_keeps_stacks() {
        let history = MemoryHistory::default();
        history.replace(String::from("/products"));
        assert_eq!(history.current_route(), "/products");
        assert!(!history.can_go_back());
    }

    #[test]
    fn protocol_relative_paths_are_refused() {
        let history = MemoryHistory::default();
        history.push(String::from("//evil.example"));
        history.replace(String::from("//evil.example"));
        assert_eq!(history.current_route(), "/");
        assert!(!history.can_go_back());
    }

    #[test]
    fn no_external_navigation() {
        let history = MemoryHistory::default();
        assert!(!history.external(String::from("https://example.com")));
    }
}
