//! The application's views.
//!
//! The login form and the product catalogue live outside this crate; these components are the
//! mount points the router selects, each identified by its heading.

use storefront_router::prelude::*;

use crate::routes::{LOGIN, PRODUCTS};

/// The view at `/`.
#[allow(non_snake_case)]
pub fn Login(router: &Router) -> Element {
    format!(
        r#"<main class="login"><h1>Login</h1><nav>{}</nav></main>"#,
        link(router, NavigationTarget::named(PRODUCTS), "Browse products")
    )
}

/// The view at `/products`.
#[allow(non_snake_case)]
pub fn Products(router: &Router) -> Element {
    format!(
        r#"<main class="products"><h1>Products</h1><nav>{}</nav></main>"#,
        link(router, NavigationTarget::named(LOGIN), "Sign out")
    )
}

/// Rendered for any path without a route. Deliberately not a redirect.
#[allow(non_snake_case)]
pub fn NotFound(router: &Router) -> Element {
    format!(
        r#"<main class="not-found"><h1>Page Not Found</h1><nav>{}</nav></main>"#,
        link(router, NavigationTarget::named(LOGIN), "Back to login")
    )
}
