use std::collections::{BTreeMap, BTreeSet};

use urlencoding::{decode, encode};

use crate::error::{ConfigurationError, NavigationError};

/// How strictly location paths are compared against route paths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Compare static segments case-sensitively.
    pub sensitive: bool,
    /// Refuse a trailing `/` that the route path doesn't have.
    pub strict: bool,
}

/// A single part of a route path.
///
/// A segment refers to the value between two `/` in the path. For example `/products/42`
/// contains two segments: `["products", "42"]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Segment {
    Static(String),
    Parameter(String),
}

fn invalid(path: &str, reason: &'static str) -> ConfigurationError {
    ConfigurationError::InvalidPath {
        path: path.to_string(),
        reason,
    }
}

/// Parse a route path into its segments.
pub(crate) fn parse_route_path(path: &str) -> Result<Vec<Segment>, ConfigurationError> {
    let Some(rest) = path.strip_prefix('/') else {
        return Err(invalid(path, r#"must start with "/""#));
    };
    if path.contains(['?', '#']) {
        return Err(invalid(path, "must not contain a query or fragment"));
    }

    let rest = rest.strip_suffix('/').unwrap_or(rest);
    if rest.is_empty() {
        return Ok(Vec::new());
    }

    let mut keys = BTreeSet::new();
    rest.split('/')
        .map(|segment| match segment.strip_prefix(':') {
            _ if segment.is_empty() => Err(invalid(path, "must not contain empty segments")),
            Some("") => Err(invalid(path, "parameters need a name")),
            Some(key) if !keys.insert(key) => Err(invalid(path, "duplicate parameter name")),
            Some(key) => Ok(Segment::Parameter(key.to_string())),
            None => Ok(Segment::Static(segment.to_string())),
        })
        .collect()
}

/// A key identifying which locations a route path matches, independent of parameter names.
///
/// In strict mode a declared trailing `/` is part of the key, since `/a` and `/a/` then match
/// different locations.
pub(crate) fn path_shape(
    segments: &[Segment],
    trailing_slash: bool,
    options: MatchOptions,
) -> String {
    if segments.is_empty() {
        return String::from("/");
    }

    let mut shape: String = segments
        .iter()
        .map(|segment| match segment {
            Segment::Static(s) if options.sensitive => format!("/{s}"),
            Segment::Static(s) => format!("/{}", s.to_lowercase()),
            Segment::Parameter(_) => String::from("/:"),
        })
        .collect();
    if options.strict && trailing_slash {
        shape.push('/');
    }
    shape
}

/// Cut the query and fragment off a location.
pub(crate) fn strip_query(location: &str) -> &str {
    location
        .find(['?', '#'])
        .map(|idx| &location[..idx])
        .unwrap_or(location)
}

/// Whether a route path ends in a `/` that isn't the root.
pub(crate) fn has_trailing_slash(path: &str) -> bool {
    path.len() > 1 && path.ends_with('/')
}

/// Match a location path against route segments, returning the decoded parameters.
///
/// `trailing_slash` tells whether the route path was declared with a trailing `/`; it only
/// matters in strict mode.
pub(crate) fn match_segments(
    segments: &[Segment],
    trailing_slash: bool,
    path: &str,
    options: MatchOptions,
) -> Option<BTreeMap<String, String>> {
    let rest = path.strip_prefix('/')?;
    let (rest, trailing) = match rest.strip_suffix('/') {
        Some(trimmed) => (trimmed, true),
        None => (rest, false),
    };
    if options.strict && trailing != trailing_slash {
        return None;
    }

    let parts: Vec<&str> = if rest.is_empty() {
        Vec::new()
    } else {
        rest.split('/').collect()
    };
    if parts.len() != segments.len() {
        return None;
    }

    let mut parameters = BTreeMap::new();
    for (segment, part) in segments.iter().zip(parts) {
        let value = match decode(part) {
            Ok(value) => value,
            Err(_) => {
                tracing::error!(r#"failed to decode path segment: "{part}""#);
                return None;
            }
        };

        match segment {
            Segment::Static(expected) => {
                let matches = if options.sensitive {
                    *expected == value
                } else {
                    expected.to_lowercase() == value.to_lowercase()
                };
                if !matches {
                    return None;
                }
            }
            Segment::Parameter(key) => {
                if value.is_empty() {
                    return None;
                }
                parameters.insert(key.clone(), value.into_owned());
            }
        }
    }

    Some(parameters)
}

/// Build the path of the route `name` by filling its parameters from `parameters`.
pub(crate) fn construct_path(
    name: &str,
    segments: &[Segment],
    parameters: &[(String, String)],
) -> Result<String, NavigationError> {
    for (key, _) in parameters {
        let used = segments
            .iter()
            .any(|s| matches!(s, Segment::Parameter(k) if k == key));
        if !used {
            tracing::warn!(r#"discarding parameter "{key}" not used by route "{name}""#);
        }
    }

    if segments.is_empty() {
        return Ok(String::from("/"));
    }

    let mut path = String::new();
    for segment in segments {
        path.push('/');
        match segment {
            Segment::Static(s) => path.push_str(s),
            Segment::Parameter(key) => {
                let value = parameters
                    .iter()
                    .rev()
                    .find(|(k, _)| k == key)
                    .map(|(_, v)| v)
                    .filter(|v| !v.is_empty())
                    .ok_or_else(|| NavigationError::MissingParameter {
                        name: name.to_string(),
                        parameter: key.clone(),
                    })?;
                path.push_str(&encode(value));
            }
        }
    }

    Ok(path)
}
