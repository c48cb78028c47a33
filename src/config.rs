//! Configuration loading and management.
//!
//! Configuration supplies *defaults*; explicit command-line flags and
//! environment variables always win. Sources, highest to lowest
//! precedence:
//!
//! 1. Command-line arguments
//! 2. Environment variables (`SQL_TRANSPILER_READ_DIALECT`,
//!    `SQL_TRANSPILER_WRITE_DIALECT`, `SQL_TRANSPILER_DIALECT`,
//!    `SQL_TRANSPILER_FORMAT`, handled by the CLI layer)
//! 3. `.sql-transpiler.toml` in current directory
//! 4. `~/.config/sql-transpiler/config.toml`
//! 5. Built-in defaults (`generic` dialect, `text` format)
//!
//! # Configuration File Format
//!
//! ```toml
//! [defaults]
//! read_dialect = "mysql"       # transpile input dialect
//! write_dialect = "postgresql" # transpile output dialect
//! dialect = "generic"          # optimize dialect
//! format = "text"              # text, json, yaml
//! ```

use std::{
    env, fs,
    path::{Path, PathBuf}
};

use serde::Deserialize;

use crate::error::{AppResult, config_error};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig
}

/// Default dialects and output format
///
/// Values are plain strings here; they are validated against the known
/// dialect and format names when a command resolves its effective
/// settings.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DefaultsConfig {
    /// Default input dialect for `transpile`
    pub read_dialect:  Option<String>,
    /// Default output dialect for `transpile`
    pub write_dialect: Option<String>,
    /// Default dialect for `optimize`
    pub dialect:       Option<String>,
    /// Default output format
    pub format:        Option<String>
}

impl Config {
    /// Load configuration from config files
    ///
    /// Priority (highest to lowest):
    /// 1. Config file in current directory (.sql-transpiler.toml)
    /// 2. Config file in home directory
    ///    (~/.config/sql-transpiler/config.toml)
    /// 3. Default values
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        // Try to load from home directory config
        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("sql-transpiler")
                .join("config.toml");

            if home_config.exists() {
                config = Self::load_file(&home_config)?;
            }
        }

        // Try to load from current directory config (overrides home config)
        let local_config = PathBuf::from(".sql-transpiler.toml");
        if local_config.exists() {
            config = Self::load_file(&local_config)?;
        }

        Ok(config)
    }

    fn load_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| config_error(format!("Failed to read config file: {}", e)))?;
        toml::from_str(&content).map_err(|e| config_error(format!("Invalid config file: {}", e)))
    }
}
