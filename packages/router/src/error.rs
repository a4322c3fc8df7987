//! Errors the router can report.

/// A problem with the route table, detected while building it.
///
/// These are programming errors in the route declarations. Applications should treat them as
/// fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// Two routes match exactly the same paths.
    #[error(r#"route paths must be unique; duplicate path: "{0}""#)]
    DuplicatePath(String),

    /// Two routes share a name.
    #[error(r#"route names must be unique; duplicate name: "{0}""#)]
    DuplicateName(String),

    /// A route was declared without a name.
    #[error(r#"route names must not be empty; path: "{0}""#)]
    EmptyName(String),

    /// A route path could not be parsed.
    #[error(r#"invalid route path "{path}": {reason}"#)]
    InvalidPath {
        /// The offending path.
        path: String,
        /// What is wrong with it.
        reason: &'static str,
    },
}

/// A navigation request the router could not satisfy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// No route matches the path.
    #[error(r#"no route matches the path "{0}""#)]
    RouteNotFound(String),

    /// No route carries the requested name.
    #[error(r#"no route is named "{0}""#)]
    UnknownName(String),

    /// A named route needs a parameter that was not provided.
    #[error(r#"route "{name}" requires the parameter "{parameter}""#)]
    MissingParameter {
        /// The route name.
        name: String,
        /// The missing parameter key.
        parameter: String,
    },

    /// The path cannot be navigated to.
    #[error(r#"cannot navigate to "{0}": internal paths must start with a single "/""#)]
    InvalidPath(String),

    /// The history provider could not leave the application.
    #[error(r#"failed to navigate to the external url "{0}""#)]
    ExternalNavigationFailed(String),
}
