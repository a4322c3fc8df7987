//! Application configuration, read from `Storefront.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use storefront_router::prelude::RouterConfig;

/// The name of the configuration file next to the application.
pub const CONFIG_FILE: &str = "Storefront.toml";

/// The environment variable that overrides `web.app.base_path`.
pub const BASE_PATH_ENV: &str = "STOREFRONT_BASE_PATH";

/// An error while loading the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid.
    #[error("failed to parse Storefront.toml: {0}")]
    Toml(#[from] toml::de::Error),

    /// The base path cannot be used as a URL path prefix.
    #[error(r#"invalid base path "{0}": must be a plain path like "/shop""#)]
    InvalidBasePath(String),
}

/// The contents of `Storefront.toml`. Every section and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// `[application]`
    pub application: ApplicationConfig,
    /// `[web]`
    pub web: WebConfig,
    /// `[router]`
    pub router: RouterSection,
}

/// The `[application]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// The application name, used in logs.
    pub name: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: String::from("storefront"),
        }
    }
}

/// The `[web]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    /// `[web.app]`
    pub app: WebAppConfig,
}

/// The `[web.app]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebAppConfig {
    /// The document title set when the application mounts.
    pub title: Option<String>,
    /// The path the application is served under, for example `/shop`. Unset means the root.
    pub base_path: Option<String>,
}

/// The `[router]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterSection {
    /// Match static path segments case-sensitively.
    pub sensitive: bool,
    /// Require trailing slashes to match exactly.
    pub strict: bool,
    /// Where the in-memory history starts outside the browser.
    pub initial_path: String,
}

impl Default for RouterSection {
    fn default() -> Self {
        Self {
            sensitive: false,
            strict: false,
            initial_path: String::from("/"),
        }
    }
}

impl StorefrontConfig {
    /// Parse a configuration from TOML.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `Storefront.toml` from `dir`. A missing file yields the defaults.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        match std::fs::read_to_string(&path) {
            Ok(source) => Self::from_toml(&source),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no {CONFIG_FILE} in {}, using defaults", dir.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io { path, source }),
        }
    }

    /// Apply [`BASE_PATH_ENV`] from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_base_path_override(std::env::var(BASE_PATH_ENV).ok())
    }

    /// Replace the base path if `base_path` is set.
    pub fn with_base_path_override(mut self, base_path: Option<String>) -> Result<Self, ConfigError> {
        if let Some(base_path) = base_path {
            self.web.app.base_path = Some(base_path);
            self.validate()?;
        }
        Ok(self)
    }

    /// The normalized base path: leading `/`, no trailing `/`, [`None`] for the domain root.
    pub fn base_path(&self) -> Option<String> {
        let trimmed = self.web.app.base_path.as_deref()?.trim_matches('/');
        (!trimmed.is_empty()).then(|| format!("/{trimmed}"))
    }

    /// The router settings this configuration asks for.
    pub fn router_config(&self) -> RouterConfig {
        RouterConfig::default()
            .sensitive(self.router.sensitive)
            .strict(self.router.strict)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(base_path) = &self.web.app.base_path {
            if base_path.contains(['?', '#', ' ']) || base_path.contains("//") {
                return Err(ConfigError::InvalidBasePath(base_path.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = StorefrontConfig::from_toml("").unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.application.name, "storefront");
        assert_eq!(config.router.initial_path, "/");
        assert_eq!(config.base_path(), None);
    }

    #[test]
    fn bundled_config_parses() {
        let config = StorefrontConfig::from_toml(include_str!("../Storefront.toml")).unwrap();
        assert_eq!(config.web.app.title.as_deref(), Some("Storefront"));
        assert!(!config.router.sensitive);
    }

    #[test]
    fn full_config() {
        let config = StorefrontConfig::from_toml(
            r#"
            [application]
            name = "shop"

            [web.app]
            base_path = "shop/"

            [router]
            sensitive = true
            initial_path = "/products"
            "#,
        )
        .unwrap();

        assert_eq!(config.application.name, "shop");
        assert_eq!(config.base_path().as_deref(), Some("/shop"));
        assert!(config.router.sensitive);
        assert!(!config.router.strict);
        assert_eq!(config.router.initial_path, "/products");
    }

    #[test]
    fn root_base_path_is_none() {
        let config = StorefrontConfig::default()
            .with_base_path_override(Some(String::from("/")))
            .unwrap();
        assert_eq!(config.base_path(), None);
    }

    #[test]
    fn override_replaces_base_path() {
        let config = StorefrontConfig::from_toml("[web.app]\nbase_path = \"/old\"")
            .unwrap()
            .with_base_path_override(Some(String::from("/new")))
            .unwrap();
        assert_eq!(config.base_path().as_deref(), Some("/new"));

        let untouched = config.clone().with_base_path_override(None).unwrap();
        assert_eq!(untouched, config);
    }

    #[test]
    fn invalid_base_path() {
        let err = StorefrontConfig::from_toml("[web.app]\nbase_path = \"/shop?x=1\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBasePath(_)));
    }

    #[test]
    fn invalid_toml() {
        let err = StorefrontConfig::from_toml("[router]\nsensitive = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = std::env::temp_dir().join("storefront-config-test-missing");
        let config = StorefrontConfig::load(&dir).unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }
}
