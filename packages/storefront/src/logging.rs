//! Tracing setup.
//!
//! The libraries only emit `tracing` events. The application decides where they go: a `fmt`
//! subscriber filtered by [`LOG_ENV`] on native targets, the browser console on the web.

/// The environment variable holding the log filter, e.g. `STOREFRONT_LOG=storefront_router=debug`.
pub const LOG_ENV: &str = "STOREFRONT_LOG";

/// Install the global subscriber. Calling it again is a no-op.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .is_err()
    {
        tracing::trace!("logging already initialized");
    }
}

/// Install the global subscriber. Calling it again is a no-op.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    use std::sync::Once;

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_wasm::set_as_global_default();
    });
}
