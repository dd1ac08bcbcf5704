//! Report types produced by the query commands.

use serde::Serialize;

use crate::chains::ChainSettings;
use crate::confirmation::ConfirmationPolicy;
use crate::models::NetworkKind;

/// Effective development chains and confirmation threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainsReport {
    pub development_chains: Vec<String>,
    pub required_confirmations: u64,
}

impl From<&ChainSettings> for ChainsReport {
    fn from(settings: &ChainSettings) -> Self {
        Self {
            development_chains: settings.development_chains().to_vec(),
            required_confirmations: settings.required_confirmations(),
        }
    }
}

/// Classification of a single network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub network: String,
    pub kind: NetworkKind,
}

impl CheckReport {
    pub fn new(settings: &ChainSettings, network: &str) -> Self {
        let network = network.trim();
        Self {
            network: network.to_string(),
            kind: settings.kind_of(network),
        }
    }
}

/// Finality of a transaction given its inclusion block and the chain head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalityReport {
    pub network: String,
    pub included_at: u64,
    pub head: u64,
    pub confirmations: u64,
    pub required: u64,
    pub remaining: u64,
    #[serde(rename = "final")]
    pub is_final: bool,
}

impl FinalityReport {
    pub fn new(settings: &ChainSettings, network: &str, included_at: u64, head: u64) -> Self {
        let network = network.trim();
        let policy = ConfirmationPolicy::for_network(settings, network);
        Self {
            network: network.to_string(),
            included_at,
            head,
            confirmations: ConfirmationPolicy::confirmations(included_at, head),
            required: policy.blocks_to_wait(),
            remaining: policy.remaining(included_at, head),
            is_final: policy.is_final(included_at, head),
        }
    }
}
