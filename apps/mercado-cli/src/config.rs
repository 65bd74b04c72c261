//! # Configuration
//!
//! Where the data files live.
//!
//! ## Configuration Sources (later overrides earlier)
//! 1. Defaults (this file)
//! 2. Config file (`--config FILE`, or `config.toml` in the platform config dir)
//! 3. Environment variables (`MERCADO_*`)
//! 4. `--data-dir` on the command line (applied by the caller)
//!
//! ## Example Config File
//! ```toml
//! data_dir = "/srv/mercado"
//! products_file = "products.dat"
//! customers_file = "clients.txt"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use mercado_store::persistence::customers::DEFAULT_CUSTOMERS_FILE;
use mercado_store::persistence::products::DEFAULT_PRODUCTS_FILE;
use mercado_store::StoreConfig;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding both data files.
    pub data_dir: PathBuf,

    /// Product snapshot file name inside `data_dir`.
    pub products_file: String,

    /// Customer list file name inside `data_dir`.
    pub customers_file: String,
}

impl Default for AppConfig {
    /// ## Default Values
    /// - data_dir: platform data dir (`~/.local/share/mercado` on Linux),
    ///   or the working directory when none can be determined
    /// - products_file: `products.dat`
    /// - customers_file: `clients.txt`
    fn default() -> Self {
        let data_dir = directories::ProjectDirs::from("com", "mercado", "mercado")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        AppConfig {
            data_dir,
            products_file: DEFAULT_PRODUCTS_FILE.to_string(),
            customers_file: DEFAULT_CUSTOMERS_FILE.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// An explicit `config_path` that does not exist is an error; a missing
    /// default config file is not.
    pub fn load(config_path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(path = %path.display(), "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns defaults if load fails.
    pub fn load_or_default(config_path: Option<&Path>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            let mut config = Self::default();
            config.apply_overrides(|key| std::env::var(key).ok());
            config
        })
    }

    fn from_file(path: &Path) -> ConfigResult<Self> {
        info!(path = %path.display(), "Loading config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Applies `MERCADO_DATA_DIR`, `MERCADO_PRODUCTS_FILE` and
    /// `MERCADO_CUSTOMERS_FILE` as looked up by `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup("MERCADO_DATA_DIR") {
            debug!(dir = %dir, "Overriding data dir from environment");
            self.data_dir = PathBuf::from(dir);
        }

        if let Some(name) = lookup("MERCADO_PRODUCTS_FILE") {
            self.products_file = name;
        }

        if let Some(name) = lookup("MERCADO_CUSTOMERS_FILE") {
            self.customers_file = name;
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        for (field, value) in [
            ("products_file", &self.products_file),
            ("customers_file", &self.customers_file),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{} must not be empty", field)));
            }
            if value.contains(['/', '\\']) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a file name, not a path: {}",
                    field, value
                )));
            }
        }

        if self.products_file == self.customers_file {
            return Err(ConfigError::Invalid(
                "products_file and customers_file must differ".to_string(),
            ));
        }

        Ok(())
    }

    /// Paths handed to mercado-store.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(
            self.data_dir.join(&self.products_file),
            self.data_dir.join(&self.customers_file),
        )
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "mercado", "mercado")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_file_names() {
        let config = AppConfig::default();
        assert_eq!(config.products_file, "products.dat");
        assert_eq!(config.customers_file, "clients.txt");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str("data_dir = \"/srv/mercado\"").unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/mercado"));
        assert_eq!(config.customers_file, "clients.txt");
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mercado.toml");
        std::fs::write(
            &path,
            "data_dir = \"/tmp/shop\"\nproducts_file = \"produtos.txt\"\ncustomers_file = \"clientes.txt\"\n",
        )
        .unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(
            config.store_config().customers_path,
            PathBuf::from("/tmp/shop/clientes.txt")
        );
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_bad_toml_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "data_dir = [").unwrap();

        assert!(matches!(
            AppConfig::load(Some(&path)),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("MERCADO_DATA_DIR", "/data"),
            ("MERCADO_CUSTOMERS_FILE", "clientes.txt"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.data_dir, PathBuf::from("/data"));
        assert_eq!(config.products_file, "products.dat");
        assert_eq!(config.customers_file, "clientes.txt");
    }

    #[test]
    fn test_validation() {
        let mut config = AppConfig::default();

        config.products_file = " ".to_string();
        assert!(config.validate().is_err());

        config.products_file = "sub/products.dat".to_string();
        assert!(config.validate().is_err());

        config.products_file = "clients.txt".to_string();
        assert!(config.validate().is_err());

        config.products_file = "products.json".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("products_file"));
        assert!(toml_str.contains("customers_file"));
    }
}
