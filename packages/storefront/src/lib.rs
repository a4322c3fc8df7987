#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

use std::rc::Rc;

use storefront_history::History;
use storefront_router::prelude::*;

pub mod config;
pub mod links;
pub mod logging;
pub mod routes;
pub mod views;

#[cfg(feature = "web")]
mod web;

pub use config::{ConfigError, StorefrontConfig};

/// Why the application could not start.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The route table is invalid.
    #[error("invalid route table: {0}")]
    Routes(#[from] ConfigurationError),

    /// The page has no `document`.
    #[cfg(feature = "web")]
    #[error("there is no document to mount into")]
    NoDocument,

    /// The element to render into is missing.
    #[cfg(feature = "web")]
    #[error(r#"the page has no element with id "{0}""#)]
    MissingRoot(&'static str),
}

/// Build the application's router on top of `history`.
pub fn build_router(
    config: &StorefrontConfig,
    history: Rc<dyn History>,
) -> Result<Router, ConfigurationError> {
    let router_config = config
        .router_config()
        .not_found(views::NotFound)
        .on_update(|router| {
            let state = router.current();
            match state.name {
                Some(name) => tracing::info!(route = %name, path = %state.path, "navigated"),
                None => tracing::info!(path = %state.path, "navigated to unknown path"),
            }
        });

    Router::new(routes::routes(), history, router_config)
}

/// The history provider for the current platform.
pub fn platform_history(config: &StorefrontConfig) -> Rc<dyn History> {
    #[cfg(feature = "web")]
    {
        Rc::new(storefront_history::WebHistory::new(config.base_path()))
    }

    #[cfg(not(feature = "web"))]
    {
        let history = storefront_history::MemoryHistory::with_initial_path(&config.router.initial_path);
        match config.base_path() {
            Some(prefix) => Rc::new(history.with_prefix(prefix)),
            None => Rc::new(history),
        }
    }
}

/// Load the configuration, set up logging, build the router and mount the application.
pub fn launch() -> Result<(), LaunchError> {
    logging::init_logging();

    let config = load_config()?;
    tracing::info!(app = %config.application.name, base_path = ?config.base_path(), "starting");

    let router = build_router(&config, platform_history(&config)).inspect_err(|err| {
        tracing::error!("{err}");
    })?;

    mount(router, &config)
}

#[cfg(feature = "web")]
fn load_config() -> Result<StorefrontConfig, LaunchError> {
    // there is no filesystem in the browser, the file and the override are baked in at build time
    let config = StorefrontConfig::from_toml(include_str!("../Storefront.toml"))?
        .with_base_path_override(option_env!("STOREFRONT_BASE_PATH").map(String::from))?;
    Ok(config)
}

#[cfg(not(feature = "web"))]
fn load_config() -> Result<StorefrontConfig, LaunchError> {
    let dir = std::env::current_dir().map_err(|source| ConfigError::Io {
        path: std::path::PathBuf::from("."),
        source,
    })?;
    Ok(StorefrontConfig::load(&dir)?.with_env_overrides()?)
}

#[cfg(feature = "web")]
fn mount(router: Router, config: &StorefrontConfig) -> Result<(), LaunchError> {
    web::mount(router, config)
}

/// Outside the browser there is nothing to mount into, so render the initial route once.
#[cfg(not(feature = "web"))]
fn mount(router: Router, _config: &StorefrontConfig) -> Result<(), LaunchError> {
    println!("{}", router.render());
    Ok(())
}
