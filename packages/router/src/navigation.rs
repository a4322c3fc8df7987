//! Types relating to navigation.

use std::{convert::Infallible, fmt::Display, str::FromStr};

use url::Url;

/// A target for the router to navigate to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationTarget {
    /// Navigate to the specified path.
    Path(String),
    /// Navigate to the route with the corresponding name.
    Named {
        /// The name of the target route.
        name: String,
        /// Values for the parameters in the route's path.
        parameters: Vec<(String, String)>,
    },
    /// Navigate to an external page.
    External(String),
}

impl NavigationTarget {
    /// Create a target for the route called `name`.
    ///
    /// ```rust
    /// # use storefront_router::prelude::*;
    /// let target = NavigationTarget::named("Product").parameter("id", "42");
    /// assert_eq!(
    ///     target,
    ///     NavigationTarget::Named {
    ///         name: String::from("Product"),
    ///         parameters: vec![(String::from("id"), String::from("42"))],
    ///     }
    /// );
    /// ```
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    /// Add a parameter to a named target. Does nothing for other targets.
    pub fn parameter(mut self, key: impl Into<String>, value: impl Display) -> Self {
        match &mut self {
            Self::Named { parameters, .. } => parameters.push((key.into(), value.to_string())),
            _ => tracing::warn!("ignoring parameter on a target that is not named"),
        }
        self
    }

    /// Returns `true` if the navigation target is [`NavigationTarget::External`].
    #[must_use]
    pub fn is_external(&self) -> bool {
        matches!(self, Self::External(..))
    }
}

/// URL schemes that make a string a [`NavigationTarget::External`] target.
pub const EXTERNAL_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

impl FromStr for NavigationTarget {
    type Err = Infallible;

    /// Absolute URLs with one of the [`EXTERNAL_SCHEMES`] are external, everything else is an
    /// internal path. A path like `sale:summer` therefore stays internal.
    ///
    /// ```rust
    /// # use storefront_router::prelude::*;
    /// assert_eq!(
    ///     "/products".parse::<NavigationTarget>(),
    ///     Ok(NavigationTarget::Path(String::from("/products")))
    /// );
    /// assert!(NavigationTarget::from("https://example.com/").is_external());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match Url::parse(s) {
            Ok(url) if EXTERNAL_SCHEMES.contains(&url.scheme()) => {
                Self::External(s.to_string())
            }
            _ => Self::Path(s.to_string()),
        })
    }
}

impl From<&str> for NavigationTarget {
    fn from(value: &str) -> Self {
        match value.parse() {
            Ok(target) => target,
            Err(never) => match never {},
        }
    }
}

impl From<String> for NavigationTarget {
    fn from(value: String) -> Self {
        value.as_str().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_internal() {
        assert_eq!(
            NavigationTarget::from("/"),
            NavigationTarget::Path(String::from("/"))
        );
        assert_eq!(
            NavigationTarget::from(String::from("products")),
            NavigationTarget::Path(String::from("products"))
        );
    }

    #[test]
    fn urls_are_external() {
        assert!(NavigationTarget::from("https://example.com/products").is_external());
        assert!(NavigationTarget::from("mailto:shop@example.com").is_external());
        assert!(NavigationTarget::from("tel:+15551234").is_external());
    }

    #[test]
    fn unknown_schemes_are_internal() {
        assert_eq!(
            NavigationTarget::from("sale:summer"),
            NavigationTarget::Path(String::from("sale:summer"))
        );
        assert!(!NavigationTarget::from("localhost:8080/products").is_external());
    }

    #[test]
    fn parameters_only_apply_to_names() {
        let target = NavigationTarget::from("/products").parameter("id", 1);
        assert_eq!(target, NavigationTarget::Path(String::from("/products")));
    }
}
