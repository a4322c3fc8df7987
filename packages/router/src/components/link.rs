use askama_escape::{escape, Html};

use crate::{navigation::NavigationTarget, router::Router, view::Element};

/// Render an anchor pointing at `target`.
///
/// The `href` comes from [`Router::href`], so it carries the history prefix. Links to the active
/// location are marked with `aria-current="page"`, external links open without an opener.
///
/// If the target cannot be resolved the label is rendered as plain text and the problem logged.
///
/// ```rust
/// # use std::rc::Rc;
/// # use storefront_router::prelude::*;
/// # fn Login(_: &Router) -> Element { String::new() }
/// # fn Products(_: &Router) -> Element { String::new() }
/// let router = Router::new(
///     [
///         Route::new("/", "Login", Login),
///         Route::new("/products", "Products", Products),
///     ],
///     Rc::new(MemoryHistory::default()),
///     RouterConfig::default(),
/// )
/// .unwrap();
///
/// assert_eq!(
///     link(&router, NavigationTarget::named("Products"), "Shop & browse"),
///     r#"<a href="/products">Shop &amp; browse</a>"#
/// );
/// ```
pub fn link(router: &Router, target: impl Into<NavigationTarget>, label: &str) -> Element {
    let target = target.into();

    let href = match router.href(&target) {
        Ok(href) => href,
        Err(err) => {
            tracing::warn!("failed to create link to {target:?}: {err}");
            return escape(label, Html).to_string();
        }
    };

    let extra = if target.is_external() {
        r#" rel="noopener noreferrer""#
    } else if router.current().is_at(&target, true) || is_current_path(router, &target) {
        r#" aria-current="page""#
    } else {
        ""
    };

    format!(
        r#"<a href="{}"{extra}>{}</a>"#,
        escape(&href, Html),
        escape(label, Html)
    )
}

/// Whether a path target resolves to the active route.
fn is_current_path(router: &Router, target: &NavigationTarget) -> bool {
    let NavigationTarget::Path(path) = target else {
        return false;
    };

    let state = router.current();
    match (router.resolve(path), state.name) {
        (Ok(found), Some(name)) => found.route.name() == name && found.parameters == state.parameters,
        _ => false,
    }
}
