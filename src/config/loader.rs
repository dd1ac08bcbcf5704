//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags (applied by the binary)
//! 2. Environment variables (`DEVCHAINS_LOG` is read by [`crate::logging`])
//! 3. Explicit `--config` file
//! 4. `.devchains.toml` in the project directory
//! 5. `<config dir>/devchains/config.toml` (global defaults)
//! 6. Built-in constants
//!
//! Every field is optional so a layer only overrides what it sets.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::chains::{ChainSettings, SettingsError, validate_chain_list};
use crate::constants::{
    self, DEFAULT_LOG_LEVEL, DEVELOPMENT_CHAINS, VERIFICATION_BLOCK_CONFIRMATIONS,
};
use crate::env::Env;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid chain settings: {0}")]
    Settings(#[from] SettingsError),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub chains: ChainsConfig,
    pub verification: VerificationConfig,
    pub log: LogConfig,
    /// Problems found while applying environment overrides.
    #[serde(skip)]
    warnings: Vec<String>,
}

/// `[chains]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChainsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub development: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmations: Option<u64>,
}

/// `[verification]` section.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerificationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Block-explorer API key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl std::fmt::Debug for VerificationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerificationConfig")
            .field("enabled", &self.enabled)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl VerificationConfig {
    /// Verification is on unless explicitly disabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    /// A non-blank explorer key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }

    /// Enabled and a key is available.
    pub fn is_eligible(&self) -> bool {
        self.is_enabled() && self.has_api_key()
    }
}

/// `[log]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Tracing filter directive, e.g. `info` or `devchains=debug`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads the global config, the project-local config and an optional
    /// explicit file, then applies environment variable overrides. The
    /// explicit file must exist; the others are skipped when absent.
    pub fn load(
        project_dir: Option<&Path>,
        explicit: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let layers = Self::layer_paths(Self::global_config_path(), project_dir, explicit);
        Self::from_layers(&layers, env)
    }

    /// Config files to read, lowest priority first.
    ///
    /// Absent global and project files are skipped; the explicit file is
    /// always included so a missing one is reported.
    fn layer_paths(
        global: Option<PathBuf>,
        project_dir: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Vec<PathBuf> {
        let mut layers = Vec::new();

        if let Some(global_path) = global {
            if global_path.exists() {
                layers.push(global_path);
            }
        }

        if let Some(dir) = project_dir {
            let local_path = dir.join(constants::CONFIG_FILENAME);
            if local_path.exists() {
                layers.push(local_path);
            }
        }

        if let Some(path) = explicit {
            layers.push(path.to_path_buf());
        }

        layers
    }

    /// Merge the given files in order (later wins), then apply `env`.
    pub fn from_layers(paths: &[PathBuf], env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        for path in paths {
            let layer = Self::load_file(path)?;
            tracing::debug!(path = %path.display(), "loaded config layer");
            config.merge(layer);
        }
        config.apply_env_vars(env);
        Ok(config)
    }

    /// Load a config from a specific file.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one; fields set in `other` win.
    pub fn merge(&mut self, other: Config) {
        if other.chains.development.is_some() {
            self.chains.development = other.chains.development;
        }
        if other.chains.confirmations.is_some() {
            self.chains.confirmations = other.chains.confirmations;
        }

        if other.verification.enabled.is_some() {
            self.verification.enabled = other.verification.enabled;
        }
        if other.verification.has_api_key() {
            self.verification.api_key = other.verification.api_key;
        }

        if other.log.level.is_some() {
            self.log.level = other.log.level;
        }
    }

    /// Apply environment variable overrides.
    ///
    /// Malformed values are ignored and recorded in [`Config::warnings`].
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(chains) = env.list(constants::ENV_DEVELOPMENT_CHAINS) {
            match validate_chain_list(&chains) {
                Ok(()) => self.chains.development = Some(chains),
                Err(e) => self.warnings.push(format!(
                    "ignoring invalid {} value: {e}",
                    constants::ENV_DEVELOPMENT_CHAINS
                )),
            }
        }

        if let Some(val) = env.var(constants::ENV_CONFIRMATIONS) {
            match val.parse::<u64>() {
                Ok(n) => self.chains.confirmations = Some(n),
                Err(_) => self.warnings.push(format!(
                    "ignoring invalid {} value: {val}",
                    constants::ENV_CONFIRMATIONS
                )),
            }
        }

        match env.flag(constants::ENV_VERIFY) {
            Some(Ok(enabled)) => self.verification.enabled = Some(enabled),
            Some(Err(val)) => self.warnings.push(format!(
                "ignoring invalid {} value: {val}",
                constants::ENV_VERIFY
            )),
            None => {}
        }

        let api_key = env.first_of(&[
            constants::ENV_EXPLORER_API_KEY,
            constants::ENV_ETHERSCAN_API_KEY,
        ]);
        if api_key.is_some() {
            self.verification.api_key = api_key;
        }
    }

    /// Validated chain settings, falling back to the built-in constants.
    pub fn settings(&self) -> Result<ChainSettings, ConfigError> {
        let confirmations = self
            .chains
            .confirmations
            .unwrap_or(VERIFICATION_BLOCK_CONFIRMATIONS);
        let settings = match &self.chains.development {
            Some(chains) => ChainSettings::new(chains.iter().cloned(), confirmations)?,
            None => ChainSettings::default().with_required_confirmations(confirmations),
        };
        Ok(settings)
    }

    /// Environment values that were ignored during loading.
    ///
    /// Loading happens before logging is set up, so the caller reports these.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Tracing filter from config, or the default.
    pub fn log_level(&self) -> &str {
        self.log.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Fully populated copy with the API key redacted, for display.
    pub fn resolved(&self) -> Config {
        Config {
            chains: ChainsConfig {
                development: Some(self.chains.development.clone().unwrap_or_else(|| {
                    DEVELOPMENT_CHAINS.iter().map(|c| c.to_string()).collect()
                })),
                confirmations: Some(
                    self.chains
                        .confirmations
                        .unwrap_or(VERIFICATION_BLOCK_CONFIRMATIONS),
                ),
            },
            verification: VerificationConfig {
                enabled: Some(self.verification.is_enabled()),
                api_key: self
                    .verification
                    .has_api_key()
                    .then(|| "[REDACTED]".to_string()),
            },
            log: LogConfig {
                level: Some(self.log_level().to_string()),
            },
            warnings: Vec::new(),
        }
    }
}
