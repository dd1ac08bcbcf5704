//! Development-chain and confirmation settings.
//!
//! The built-in values are plain constants (see [`crate::constants`]). The
//! [`ChainSettings`] record carries the same two values once they have been
//! resolved from configuration; it is built once and passed by reference.

use std::sync::LazyLock;

use serde::Serialize;
use thiserror::Error;

use crate::constants::{DEVELOPMENT_CHAINS, VERIFICATION_BLOCK_CONFIRMATIONS};
use crate::models::NetworkKind;

/// Names of the built-in development networks.
pub fn development_chain_names() -> &'static [&'static str] {
    DEVELOPMENT_CHAINS
}

/// Built-in number of confirmations required on live networks.
pub fn required_confirmations() -> u64 {
    VERIFICATION_BLOCK_CONFIRMATIONS
}

/// Returns `true` if `name` is one of the built-in development networks.
pub fn is_development_chain(name: &str) -> bool {
    let name = name.trim();
    DEVELOPMENT_CHAINS.iter().any(|c| *c == name)
}

/// Errors raised when a chain list fails validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("development chain list is empty")]
    EmptyChainList,

    #[error("development chain names must not be empty")]
    EmptyChainName,

    #[error("invalid development chain name '{name}': names must be lowercase without whitespace")]
    InvalidChainName { name: String },

    #[error("development chain '{name}' is listed more than once")]
    DuplicateChainName { name: String },
}

/// Resolved chain settings.
///
/// Immutable once constructed. `ChainSettings::default()` matches the
/// built-in constants exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainSettings {
    development_chains: Vec<String>,
    required_confirmations: u64,
}

static GLOBAL: LazyLock<ChainSettings> = LazyLock::new(ChainSettings::default);

impl ChainSettings {
    /// Build settings from an explicit chain list and threshold.
    pub fn new<I, S>(chains: I, required_confirmations: u64) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let development_chains: Vec<String> = chains.into_iter().map(Into::into).collect();
        validate_chain_list(&development_chains)?;

        Ok(Self {
            development_chains,
            required_confirmations,
        })
    }

    /// Process-wide settings built from the constants, initialised on first use.
    pub fn global() -> &'static ChainSettings {
        &GLOBAL
    }

    pub fn development_chains(&self) -> &[String] {
        &self.development_chains
    }

    pub fn required_confirmations(&self) -> u64 {
        self.required_confirmations
    }

    /// Membership test against the development chain list.
    ///
    /// Surrounding whitespace in `network` is ignored; the comparison is
    /// otherwise exact.
    pub fn is_development(&self, network: &str) -> bool {
        let network = network.trim();
        self.development_chains.iter().any(|c| c == network)
    }

    pub fn kind_of(&self, network: &str) -> NetworkKind {
        if self.is_development(network) {
            NetworkKind::Development
        } else {
            NetworkKind::Live
        }
    }

    /// Copy of these settings with a different confirmation threshold.
    pub fn with_required_confirmations(&self, required_confirmations: u64) -> Self {
        Self {
            development_chains: self.development_chains.clone(),
            required_confirmations,
        }
    }
}

impl Default for ChainSettings {
    fn default() -> Self {
        Self {
            development_chains: DEVELOPMENT_CHAINS.iter().map(|c| c.to_string()).collect(),
            required_confirmations: VERIFICATION_BLOCK_CONFIRMATIONS,
        }
    }
}

/// Check a development chain list without building settings from it.
pub fn validate_chain_list(chains: &[String]) -> Result<(), SettingsError> {
    if chains.is_empty() {
        return Err(SettingsError::EmptyChainList);
    }
    for (i, chain) in chains.iter().enumerate() {
        validate_chain_name(chain)?;
        if chains[..i].contains(chain) {
            return Err(SettingsError::DuplicateChainName {
                name: chain.clone(),
            });
        }
    }
    Ok(())
}

fn validate_chain_name(name: &str) -> Result<(), SettingsError> {
    if name.is_empty() {
        return Err(SettingsError::EmptyChainName);
    }
    if name.chars().any(|c| c.is_whitespace() || c.is_uppercase()) {
        return Err(SettingsError::InvalidChainName {
            name: name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_chain_names() {
        assert_eq!(development_chain_names(), &["hardhat", "localhost"]);
    }

    #[test]
    fn builtin_confirmations() {
        assert_eq!(required_confirmations(), 6);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let first = (development_chain_names(), required_confirmations());
        for _ in 0..3 {
            assert_eq!(required_confirmations(), first.1);
            assert_eq!(development_chain_names(), first.0);
        }
    }

    #[test]
    fn membership() {
        assert!(is_development_chain("hardhat"));
        assert!(is_development_chain("localhost"));
        assert!(!is_development_chain("mainnet"));
        assert!(!is_development_chain("Hardhat"));
    }

    #[test]
    fn default_settings_match_constants() {
        let settings = ChainSettings::default();
        assert_eq!(settings.development_chains(), &["hardhat", "localhost"]);
        assert_eq!(settings.required_confirmations(), 6);
        assert_eq!(ChainSettings::global(), &settings);
    }

    #[test]
    fn global_is_shared() {
        assert!(std::ptr::eq(ChainSettings::global(), ChainSettings::global()));
    }

    #[test]
    fn kind_of_network() {
        let settings = ChainSettings::default();
        assert_eq!(settings.kind_of("hardhat"), NetworkKind::Development);
        assert_eq!(settings.kind_of(" localhost "), NetworkKind::Development);
        assert_eq!(settings.kind_of("sepolia"), NetworkKind::Live);
    }

    #[test]
    fn new_accepts_custom_chains() {
        let settings = ChainSettings::new(["anvil", "ganache"], 12).unwrap();
        assert!(settings.is_development("anvil"));
        assert!(!settings.is_development("hardhat"));
        assert_eq!(settings.required_confirmations(), 12);
    }

    #[test]
    fn new_rejects_bad_lists() {
        assert_eq!(
            ChainSettings::new(Vec::<String>::new(), 6),
            Err(SettingsError::EmptyChainList)
        );
        assert_eq!(
            ChainSettings::new(["hardhat", ""], 6),
            Err(SettingsError::EmptyChainName)
        );
        assert_eq!(
            ChainSettings::new(["Hardhat"], 6),
            Err(SettingsError::InvalidChainName { name: "Hardhat".into() })
        );
        assert_eq!(
            ChainSettings::new(["local host"], 6),
            Err(SettingsError::InvalidChainName { name: "local host".into() })
        );
        assert_eq!(
            ChainSettings::new(["hardhat", "hardhat"], 6),
            Err(SettingsError::DuplicateChainName { name: "hardhat".into() })
        );
    }

    #[test]
    fn validate_chain_list_matches_new() {
        assert_eq!(validate_chain_list(&["anvil".to_string()]), Ok(()));
        assert_eq!(validate_chain_list(&[]), Err(SettingsError::EmptyChainList));
        assert_eq!(
            validate_chain_list(&["anvil".to_string(), "anvil".to_string()]),
            Err(SettingsError::DuplicateChainName { name: "anvil".into() })
        );
    }

    #[test]
    fn with_required_confirmations_keeps_chains() {
        let settings = ChainSettings::default().with_required_confirmations(0);
        assert_eq!(settings.required_confirmations(), 0);
        assert_eq!(settings.development_chains(), &["hardhat", "localhost"]);
    }
}
