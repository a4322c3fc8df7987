//! The validated, immutable set of routes a [`Router`](crate::router::Router) works with.

use std::collections::{BTreeMap, HashMap};

use crate::{
    error::{ConfigurationError, NavigationError},
    route_definition::{
        construct_path, has_trailing_slash, match_segments, parse_route_path, path_shape,
        strip_query, MatchOptions, Route, Segment,
    },
};

struct CompiledRoute {
    route: Route,
    segments: Vec<Segment>,
    trailing_slash: bool,
}

/// An ordered collection of [`Route`]s with unique paths and unique names.
///
/// The table is checked once when it is built and never changes afterwards. When two routes could
/// match the same location, the one declared first wins.
pub struct RouteTable {
    routes: Vec<CompiledRoute>,
    names: BTreeMap<String, usize>,
    options: MatchOptions,
}

/// A route that matched a location.
#[derive(Debug)]
pub struct RouteMatch<'a> {
    /// The matching route.
    pub route: &'a Route,
    /// The location path, query and fragment removed.
    pub path: String,
    /// The decoded parameters.
    pub parameters: BTreeMap<String, String>,
}

impl RouteTable {
    /// Build a table from routes, using the default (lenient) matching rules.
    ///
    /// ```rust
    /// # use storefront_router::prelude::*;
    /// # fn Login(_: &Router) -> Element { String::new() }
    /// let table = RouteTable::new([
    ///     Route::new("/", "Login", Login),
    ///     Route::new("/", "Home", Login),
    /// ]);
    /// assert_eq!(
    ///     table.err(),
    ///     Some(ConfigurationError::DuplicatePath(String::from("/")))
    /// );
    /// ```
    pub fn new(routes: impl IntoIterator<Item = Route>) -> Result<Self, ConfigurationError> {
        Self::with_options(routes, MatchOptions::default())
    }

    /// Build a table from routes with explicit matching rules.
    pub fn with_options(
        routes: impl IntoIterator<Item = Route>,
        options: MatchOptions,
    ) -> Result<Self, ConfigurationError> {
        let mut compiled = Vec::new();
        let mut names = BTreeMap::new();
        let mut shapes = HashMap::new();

        for route in routes {
            if route.name().is_empty() {
                return Err(ConfigurationError::EmptyName(route.path().to_string()));
            }

            let segments = parse_route_path(route.path())?;
            let trailing_slash = has_trailing_slash(route.path());
            let shape = path_shape(&segments, trailing_slash, options);
            if shapes.insert(shape, compiled.len()).is_some() {
                tracing::error!(r#"route paths must be unique; duplicate path: "{}""#, route.path());
                return Err(ConfigurationError::DuplicatePath(route.path().to_string()));
            }

            if names.insert(route.name().to_string(), compiled.len()).is_some() {
                tracing::error!(r#"route names must be unique; duplicate name: "{}""#, route.name());
                return Err(ConfigurationError::DuplicateName(route.name().to_string()));
            }

            compiled.push(CompiledRoute {
                trailing_slash,
                route,
                segments,
            });
        }

        tracing::debug!(routes = compiled.len(), "built route table");

        Ok(Self {
            routes: compiled,
            names,
            options,
        })
    }

    /// The matching rules this table was built with.
    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// Find the route for a location. The query and fragment are ignored.
    pub fn resolve(&self, location: &str) -> Result<RouteMatch<'_>, NavigationError> {
        let path = strip_query(location);

        self.routes
            .iter()
            .find_map(|compiled| {
                match_segments(
                    &compiled.segments,
                    compiled.trailing_slash,
                    path,
                    self.options,
                )
                .map(|parameters| RouteMatch {
                    route: &compiled.route,
                    path: path.to_string(),
                    parameters,
                })
            })
            .ok_or_else(|| NavigationError::RouteNotFound(path.to_string()))
    }

    /// Get a route by its name.
    pub fn by_name(&self, name: &str) -> Option<&Route> {
        self.names.get(name).map(|&idx| &self.routes[idx].route)
    }

    /// Build the path of the route called `name`, filling in `parameters`.
    pub fn path_for(
        &self,
        name: &str,
        parameters: &[(String, String)],
    ) -> Result<String, NavigationError> {
        let compiled = self
            .names
            .get(name)
            .map(|&idx| &self.routes[idx])
            .ok_or_else(|| NavigationError::UnknownName(name.to_string()))?;

        construct_path(name, &compiled.segments, parameters)
    }

    /// Iterate the routes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter().map(|compiled| &compiled.route)
    }

    /// The number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    fn index(_: &Router) -> Element {
        String::from("<p>index</p>")
    }

    fn list(_: &Router) -> Element {
        String::from("<p>list</p>")
    }

    fn item(_: &Router) -> Element {
        String::from("<p>item</p>")
    }

    fn table() -> RouteTable {
        RouteTable::new([
            Route::new("/", "Index", index),
            Route::new("/items", "List", list),
            Route::new("/items/:id", "Item", item),
        ])
        .unwrap()
    }

    #[test]
    fn resolve_static() {
        let table = table();
        assert_eq!(table.resolve("/").unwrap().route.name(), "Index");
        assert_eq!(table.resolve("/items").unwrap().route.name(), "List");
    }

    #[test]
    fn resolve_ignores_query() {
        let found = table().resolve("/items?page=2#top").map(|m| m.path).unwrap();
        assert_eq!(found, "/items");
    }

    #[test]
    fn resolve_parameter() {
        let table = table();
        let found = table.resolve("/items/7").unwrap();
        assert_eq!(found.route.name(), "Item");
        assert_eq!(found.parameters.get("id").map(String::as_str), Some("7"));
    }

    #[test]
    fn resolve_unknown() {
        assert_eq!(
            table().resolve("/unknown").err(),
            Some(NavigationError::RouteNotFound(String::from("/unknown")))
        );
    }

    #[test]
    fn first_declared_wins() {
        let table = RouteTable::new([
            Route::new("/items/new", "New", list),
            Route::new("/items/:id", "Item", item),
        ])
        .unwrap();

        assert_eq!(table.resolve("/items/new").unwrap().route.name(), "New");
        assert_eq!(table.resolve("/items/3").unwrap().route.name(), "Item");
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let table = RouteTable::new([
            Route::new("/", "Index", index),
            Route::new("/items", "Index", list),
        ]);
        assert_eq!(
            table.err(),
            Some(ConfigurationError::DuplicateName(String::from("Index")))
        );
    }

    #[test]
    fn duplicate_paths_are_rejected() {
        let table = RouteTable::new([
            Route::new("/items/:id", "Item", item),
            Route::new("/Items/:slug/", "Other", list),
        ]);
        assert_eq!(
            table.err(),
            Some(ConfigurationError::DuplicatePath(String::from("/Items/:slug/")))
        );
    }

    #[test]
    fn empty_names_are_rejected() {
        let table = RouteTable::new([Route::new("/", "", index)]);
        assert_eq!(
            table.err(),
            Some(ConfigurationError::EmptyName(String::from("/")))
        );
    }

    #[test]
    fn invalid_paths_are_rejected() {
        let table = RouteTable::new([Route::new("items", "List", list)]);
        assert!(matches!(
            table.err(),
            Some(ConfigurationError::InvalidPath { .. })
        ));
    }

    #[test]
    fn path_for_names() {
        let table = table();
        assert_eq!(table.path_for("Index", &[]), Ok(String::from("/")));
        assert_eq!(
            table.path_for("Item", &[(String::from("id"), String::from("7"))]),
            Ok(String::from("/items/7"))
        );
        assert_eq!(
            table.path_for("Missing", &[]),
            Err(NavigationError::UnknownName(String::from("Missing")))
        );
    }

    #[test]
    fn iteration_keeps_declaration_order() {
        let table = table();
        let names: Vec<_> = table.iter().map(Route::name).collect();
        assert_eq!(names, ["Index", "List", "Item"]);
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
    }

    #[test]
    fn strict_tables_keep_trailing_slash_routes_apart() {
        let strict = MatchOptions {
            strict: true,
            ..Default::default()
        };
        let table = RouteTable::with_options(
            [
                Route::new("/items", "List", list),
                Route::new("/items/", "Index", index),
            ],
            strict,
        )
        .unwrap();

        assert_eq!(table.resolve("/items").unwrap().route.name(), "List");
        assert_eq!(table.resolve("/items/").unwrap().route.name(), "Index");
        assert_eq!(
            RouteTable::new([
                Route::new("/items", "List", list),
                Route::new("/items/", "Index", index),
            ])
            .err(),
            Some(ConfigurationError::DuplicatePath(String::from("/items/")))
        );
    }
}
