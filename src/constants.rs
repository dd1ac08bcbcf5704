//! App-wide constants.
//!
//! Holds the built-in chain settings alongside the tool name, config
//! paths and environment variable names, so a rename only requires
//! changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "devchains";

/// Crate version, as set in `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compilation target triple, exported by `build.rs`.
pub const TARGET: &str = env!("TARGET");

/// Local config filename (e.g. `.devchains.toml` in the project root).
pub const CONFIG_FILENAME: &str = ".devchains.toml";

/// Directory name under the user config dir for the global config.
pub const CONFIG_DIR: &str = "devchains";

// ── Chain settings ──────────────────────────────────────────────────

/// Networks that run locally or in-process and never need confirmations
/// or explorer verification.
pub const DEVELOPMENT_CHAINS: &[&str] = &["hardhat", "localhost"];

/// Number of blocks that must be appended on top of a transaction's block
/// (including a contract creation) before it is treated as confirmed.
pub const VERIFICATION_BLOCK_CONFIRMATIONS: u64 = 6;

/// Default tracing filter when nothing else is configured.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_DEVELOPMENT_CHAINS: &str = "DEVCHAINS_DEVELOPMENT_CHAINS";
pub const ENV_CONFIRMATIONS: &str = "DEVCHAINS_CONFIRMATIONS";
pub const ENV_VERIFY: &str = "DEVCHAINS_VERIFY";
pub const ENV_EXPLORER_API_KEY: &str = "DEVCHAINS_EXPLORER_API_KEY";
pub const ENV_NETWORK: &str = "DEVCHAINS_NETWORK";
pub const ENV_LOG: &str = "DEVCHAINS_LOG";

/// Fallbacks understood by existing Hardhat projects.
pub const ENV_ETHERSCAN_API_KEY: &str = "ETHERSCAN_API_KEY";
pub const ENV_HARDHAT_NETWORK: &str = "HARDHAT_NETWORK";
