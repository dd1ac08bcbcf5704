//! devchains — development-chain and confirmation settings for deployment
//! tooling (library crate).
//!
//! The two built-in values are [`DEVELOPMENT_CHAINS`] and
//! [`VERIFICATION_BLOCK_CONFIRMATIONS`]; everything else derives decisions
//! from them.

pub mod chains;
pub mod config;
pub mod confirmation;
pub mod constants;
pub mod env;
pub mod logging;
pub mod models;
pub mod output;
pub mod plan;

pub use chains::{
    ChainSettings, SettingsError, development_chain_names, is_development_chain,
    required_confirmations,
};
pub use confirmation::ConfirmationPolicy;
pub use constants::{DEVELOPMENT_CHAINS, VERIFICATION_BLOCK_CONFIRMATIONS};
pub use models::NetworkKind;
pub use plan::DeployPlan;
