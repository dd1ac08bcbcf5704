//! Shared types used across modules.
//!
//! Reports produced by the CLI commands live here so the renderers in
//! [`crate::output`] can format them without reaching into the modules
//! that compute them.

pub mod report;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub use report::{ChainsReport, CheckReport, FinalityReport};

/// Whether a network is local/simulated or a public network.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NetworkKind {
    /// Listed as a development chain; no confirmations or verification.
    Development,
    /// Anything else.
    Live,
}

impl NetworkKind {
    pub fn is_development(self) -> bool {
        self == NetworkKind::Development
    }
}
