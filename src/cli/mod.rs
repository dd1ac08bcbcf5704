//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use anyhow::{Result, bail};

use devchains::env::Env;

/// Resolve the network for a command: explicit argument, then environment.
pub fn resolve_network(arg: Option<&str>, env: &Env) -> Result<String> {
    if let Some(network) = arg.map(str::trim).filter(|n| !n.is_empty()) {
        return Ok(network.to_string());
    }
    match env.network() {
        Some(network) => Ok(network),
        None => bail!(
            "no network given; pass one as an argument or set {} (or {})",
            devchains::constants::ENV_NETWORK,
            devchains::constants::ENV_HARDHAT_NETWORK,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_argument_wins() {
        let env = Env::mock([("DEVCHAINS_NETWORK", "sepolia")]);
        assert_eq!(resolve_network(Some(" hardhat "), &env).unwrap(), "hardhat");
    }

    #[test]
    fn falls_back_to_environment() {
        let env = Env::mock([("HARDHAT_NETWORK", "localhost")]);
        assert_eq!(resolve_network(None, &env).unwrap(), "localhost");
        assert_eq!(resolve_network(Some("  "), &env).unwrap(), "localhost");
    }

    #[test]
    fn errors_without_any_source() {
        let env = Env::mock(Vec::<(&str, &str)>::new());
        let err = resolve_network(None, &env).unwrap_err();
        assert!(err.to_string().contains("DEVCHAINS_NETWORK"), "got: {err}");
    }
}
