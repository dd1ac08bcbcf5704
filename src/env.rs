//! Environment variable abstraction for testability.
//!
//! Production code uses [`Env::real()`] which delegates to [`std::env::var`].
//! Tests use [`Env::mock()`] backed by a `HashMap`, so config layering can be
//! exercised without touching the process environment.

use std::collections::HashMap;

use crate::constants::{ENV_HARDHAT_NETWORK, ENV_NETWORK};

/// Environment variable reader.
#[derive(Clone, Debug)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

impl Env {
    /// Create an `Env` that reads from the real process environment.
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// Create an `Env` backed by explicit key-value pairs.
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Look up an environment variable by name.
    ///
    /// Values that are empty after trimming are treated as unset.
    pub fn var(&self, name: &str) -> Option<String> {
        let raw = match &self.overrides {
            Some(map) => map.get(name).cloned(),
            None => std::env::var(name).ok(),
        }?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Read the first variable in `names` that is set.
    pub fn first_of(&self, names: &[&str]) -> Option<String> {
        names.iter().find_map(|name| self.var(name))
    }

    /// Read a boolean switch.
    ///
    /// Returns `Some(Err(raw))` when the variable is set to something that
    /// is not a recognised boolean, so callers can warn about it.
    pub fn flag(&self, name: &str) -> Option<Result<bool, String>> {
        let val = self.var(name)?;
        Some(match val.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(val),
        })
    }

    /// Read a comma-separated list, dropping empty entries.
    pub fn list(&self, name: &str) -> Option<Vec<String>> {
        let val = self.var(name)?;
        Some(
            val.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    /// The network the surrounding tooling is targeting, if any.
    pub fn network(&self) -> Option<String> {
        self.first_of(&[ENV_NETWORK, ENV_HARDHAT_NETWORK])
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::real()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_env_reads_cargo_manifest_dir() {
        let env = Env::real();
        assert!(env.var("CARGO_MANIFEST_DIR").is_some());
    }

    #[test]
    fn mock_env_returns_set_values() {
        let env = Env::mock([("FOO", "bar"), ("BAZ", " qux ")]);
        assert_eq!(env.var("FOO").as_deref(), Some("bar"));
        assert_eq!(env.var("BAZ").as_deref(), Some("qux"));
        assert!(env.var("NONEXISTENT").is_none());
    }

    #[test]
    fn blank_values_count_as_unset() {
        let env = Env::mock([("BLANK", "   ")]);
        assert!(env.var("BLANK").is_none());
    }

    #[test]
    fn flag_parses_common_spellings() {
        let env = Env::mock([("A", "Yes"), ("B", "off"), ("C", "maybe")]);
        assert_eq!(env.flag("A"), Some(Ok(true)));
        assert_eq!(env.flag("B"), Some(Ok(false)));
        assert_eq!(env.flag("C"), Some(Err("maybe".to_string())));
        assert_eq!(env.flag("D"), None);
    }

    #[test]
    fn list_splits_and_trims() {
        let env = Env::mock([("CHAINS", "hardhat, localhost,,anvil ")]);
        assert_eq!(
            env.list("CHAINS").unwrap(),
            vec!["hardhat", "localhost", "anvil"]
        );
    }

    #[test]
    fn network_prefers_own_variable_over_hardhat() {
        let env = Env::mock([("DEVCHAINS_NETWORK", "sepolia"), ("HARDHAT_NETWORK", "hardhat")]);
        assert_eq!(env.network().as_deref(), Some("sepolia"));

        let env = Env::mock([("HARDHAT_NETWORK", "localhost")]);
        assert_eq!(env.network().as_deref(), Some("localhost"));

        let env = Env::mock(Vec::<(&str, &str)>::new());
        assert!(env.network().is_none());
    }
}
