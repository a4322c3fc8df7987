//! The route table.

use storefront_router::prelude::Route;

use crate::views::{Login, Products};

/// Name of the login route, at `/`.
pub const LOGIN: &str = "Login";

/// Name of the product listing route, at `/products`.
pub const PRODUCTS: &str = "Products";

/// Every route of the application, in matching order.
pub fn routes() -> Vec<Route> {
    vec![
        Route::new("/", LOGIN, Login),
        Route::new("/products", PRODUCTS, Products),
    ]
}
