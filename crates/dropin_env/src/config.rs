//!
//! Configuration of the drop-in crates.
//!

use std::path::PathBuf;

use serde::Deserialize;

use crate::{
    env::{self, Env},
    logger::config::Log,
};

/// Prefix of environment variables that override file configuration.
pub const ENV_PREFIX: &str = "DROPIN";

/// Config.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Logging to a console.
    pub log: Log,
    /// Where key-value preferences are kept.
    #[serde(default)]
    pub storage: StorageSettings,
}

/// Backing store for persisted preferences.
#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process local, lost on exit.
    #[default]
    Memory,
    /// JSON document on disk.
    File,
}

/// Storage settings.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct StorageSettings {
    /// Which backend to construct.
    pub backend: StorageBackend,
    /// File used by [`StorageBackend::File`]. Relative paths resolve against the workspace.
    pub path: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            path: PathBuf::from("dropin_preferences.json"),
        }
    }
}

impl StorageSettings {
    /// Absolute location of the preferences file.
    pub fn resolved_path(&self) -> PathBuf {
        if self.path.is_absolute() {
            self.path.clone()
        } else {
            env::workspace_path().join(&self.path)
        }
    }
}

impl Config {
    /// Default constructor.
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::new_with_config_path(None)
    }

    /// Constructor expecting config path set explicitly.
    pub fn new_with_config_path(
        explicit_config_path: Option<PathBuf>,
    ) -> Result<Self, config::ConfigError> {
        // Configuration values are picked up in the following priority order (1 being least
        // priority):
        // 1. Defaults from the implementation of the `Default` trait.
        // 2. Values from config file. The config file accessed depends on the environment
        //    specified by the `RUN_ENV` environment variable. `RUN_ENV` can be one of
        //    `Development`, `Sandbox` or `Production`. If nothing is specified for `RUN_ENV`,
        //    `/config/development.toml` file is read.
        // 3. Environment variables prefixed with `DROPIN` and each level separated by double
        //    underscores.
        //
        // Values in config file override the defaults in `Default` trait, and the values set
        // using environment variables override both the defaults and the config file values.

        let environment = env::which();
        let config_path = Self::config_path(environment, explicit_config_path);

        let config = Self::builder(environment)?
            .add_source(config::File::from(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Construct config builder extending it by fall-back defaults and setting config file to
    /// load.
    pub fn builder(
        environment: Env,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        let console_level = match environment {
            Env::Development => "DEBUG",
            Env::Sandbox | Env::Production => "WARN",
        };

        config::Config::builder()
            .set_default("log.console.enabled", true)?
            .set_default("log.console.level", console_level)?
            .set_default("log.console.log_format", "default")?
            .set_default("storage.backend", "memory")
    }

    /// Config path.
    pub fn config_path(environment: Env, explicit_config_path: Option<PathBuf>) -> PathBuf {
        let mut config_path = PathBuf::new();
        if let Some(explicit_config_path_val) = explicit_config_path {
            config_path.push(explicit_config_path_val);
        } else {
            let config_file_name = match environment {
                Env::Production => "production.toml",
                Env::Sandbox => "sandbox.toml",
                Env::Development => "development.toml",
            };
            config_path.push(env::workspace_path());
            config_path.push("config");
            config_path.push(config_file_name);
        }
        config_path
    }
}
