//! Per-network deployment decisions.
//!
//! A [`DeployPlan`] tells a deployment script how many confirmations to
//! await after deploying to a network and whether explorer verification
//! should be attempted. It only reports; it never waits or verifies.

use serde::Serialize;

use crate::chains::ChainSettings;
use crate::config::VerificationConfig;
use crate::confirmation::ConfirmationPolicy;
use crate::models::NetworkKind;

/// Decisions for deploying to one network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeployPlan {
    pub network: String,
    pub kind: NetworkKind,
    pub wait_confirmations: u64,
    pub verify: bool,
}

impl DeployPlan {
    pub fn resolve(
        settings: &ChainSettings,
        network: &str,
        verification: &VerificationConfig,
    ) -> Self {
        let network = network.trim();
        let kind = settings.kind_of(network);
        let policy = ConfirmationPolicy::for_network(settings, network);
        let verify = !kind.is_development() && verification.is_eligible();

        if !kind.is_development() && verification.is_enabled() && !verification.has_api_key() {
            tracing::info!(network, "no explorer API key configured; verification skipped");
        }
        tracing::debug!(
            network,
            %kind,
            wait = policy.blocks_to_wait(),
            verify,
            "resolved deploy plan"
        );

        Self {
            network: network.to_string(),
            kind,
            wait_confirmations: policy.blocks_to_wait(),
            verify,
        }
    }
}
