#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

pub mod error;
pub mod navigation;
pub mod route_definition;
pub mod route_table;
pub mod router;
pub mod view;

/// Views the router renders itself, and helpers for views.
pub mod components {
    mod default_errors;
    pub use default_errors::*;

    mod link;
    pub use link::*;
}

mod router_cfg;
mod state;

/// A collection of useful items most applications might need.
pub mod prelude {
    pub use crate::components::*;
    pub use crate::error::*;
    pub use crate::navigation::*;
    pub use crate::route_definition::{MatchOptions, Route};
    pub use crate::route_table::*;
    pub use crate::router::*;
    pub use crate::router_cfg::RouterConfig;
    pub use crate::state::RouterState;
    pub use crate::view::*;
    pub use storefront_history::{History, MemoryHistory};

    #[cfg(feature = "web")]
    pub use storefront_history::WebHistory;
}
