//! # Configuration for nullscalar
//!
//! Centralised configuration shared by the nullscalar crates. Today it only
//! carries the SQL column type overrides used when mapping wrapper kinds to DDL.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::TypeMappingConfig;
//!
//! let mut types = TypeMappingConfig::default();
//! types.uint = Some("BIGINT".to_string());
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [types]
//! uint = "BIGINT"
//! date_time = "TIMESTAMP"
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // nullscalar.toml, or the file named by NULLSCALAR_CONFIG
//! let config = AppConfig::load()?;
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./nullscalar.toml";
const CONFIG_PATH_VAR: &str = "NULLSCALAR_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub types: TypeMappingConfig,
}

/// Per-kind SQL column type overrides. `None` keeps the built-in mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeMappingConfig {
    pub bool: Option<String>,
    pub int: Option<String>,
    pub uint: Option<String>,
    pub float: Option<String>,
    pub string: Option<String>,
    pub date: Option<String>,
    pub date_time: Option<String>,
}

impl AppConfig {
    /// Load configuration from the file named in `NULLSCALAR_CONFIG` (a `.env`
    /// file is honoured), then from `./nullscalar.toml`, else defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err.into()),
        }

        if let Ok(config_path) = env::var(CONFIG_PATH_VAR) {
            Self::from_file(&config_path)
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        self.types.validate()
    }
}

impl TypeMappingConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let overrides = [
            ("bool", &self.bool),
            ("int", &self.int),
            ("uint", &self.uint),
            ("float", &self.float),
            ("string", &self.string),
            ("date", &self.date),
            ("date_time", &self.date_time),
        ];
        for (name, value) in overrides {
            if let Some(sql_type) = value {
                if sql_type.trim().is_empty() {
                    return Err(ConfigError::Invalid(format!(
                        "SQL type override for '{}' cannot be blank",
                        name
                    )));
                }
            }
        }
        Ok(())
    }
}
