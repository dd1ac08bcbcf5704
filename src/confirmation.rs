//! Confirmation threshold arithmetic.
//!
//! A transaction included in block `h` has `head - h` confirmations once the
//! chain head is at `head`. It is final when that count reaches the
//! required threshold. Nothing here waits on a chain; callers poll and ask.

use serde::Serialize;

use crate::chains::ChainSettings;

/// Number of additional blocks required before a transaction is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfirmationPolicy {
    required: u64,
}

impl ConfirmationPolicy {
    pub fn new(required: u64) -> Self {
        Self { required }
    }

    /// Policy for `network`: development chains never wait.
    pub fn for_network(settings: &ChainSettings, network: &str) -> Self {
        if settings.is_development(network) {
            Self::new(0)
        } else {
            Self::new(settings.required_confirmations())
        }
    }

    /// Blocks to await after inclusion.
    pub fn blocks_to_wait(&self) -> u64 {
        self.required
    }

    /// `false` when the threshold is zero.
    pub fn requires_wait(&self) -> bool {
        self.required > 0
    }

    /// Confirmations accumulated by a transaction included at `included_at`.
    ///
    /// A head behind the inclusion block (e.g. a lagging node) counts as zero.
    pub fn confirmations(included_at: u64, head: u64) -> u64 {
        head.saturating_sub(included_at)
    }

    pub fn is_final(&self, included_at: u64, head: u64) -> bool {
        Self::confirmations(included_at, head) >= self.required
    }

    /// Blocks still to be appended before the transaction is final.
    pub fn remaining(&self, included_at: u64, head: u64) -> u64 {
        self.required
            .saturating_sub(Self::confirmations(included_at, head))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_means_no_wait() {
        let policy = ConfirmationPolicy::new(0);
        assert!(!policy.requires_wait());
        assert_eq!(policy.blocks_to_wait(), 0);
        assert!(policy.is_final(100, 100));
        assert_eq!(policy.remaining(100, 100), 0);
    }

    #[test]
    fn six_means_six_additional_blocks() {
        let policy = ConfirmationPolicy::new(crate::constants::VERIFICATION_BLOCK_CONFIRMATIONS);
        assert!(policy.requires_wait());
        assert_eq!(policy.blocks_to_wait(), 6);
        assert!(!policy.is_final(100, 100));
        assert!(!policy.is_final(100, 105));
        assert_eq!(policy.remaining(100, 105), 1);
        assert!(policy.is_final(100, 106));
        assert!(policy.is_final(100, 250));
        assert_eq!(policy.remaining(100, 250), 0);
    }

    #[test]
    fn head_behind_inclusion_is_not_final() {
        let policy = ConfirmationPolicy::new(6);
        assert_eq!(ConfirmationPolicy::confirmations(100, 90), 0);
        assert!(!policy.is_final(100, 90));
        assert_eq!(policy.remaining(100, 90), 6);
    }

    #[test]
    fn for_network_uses_kind() {
        let settings = ChainSettings::default();
        assert_eq!(ConfirmationPolicy::for_network(&settings, "hardhat").blocks_to_wait(), 0);
        assert_eq!(ConfirmationPolicy::for_network(&settings, "localhost").blocks_to_wait(), 0);
        assert_eq!(ConfirmationPolicy::for_network(&settings, "mainnet").blocks_to_wait(), 6);

        let custom = settings.with_required_confirmations(2);
        assert_eq!(ConfirmationPolicy::for_network(&custom, "sepolia").blocks_to_wait(), 2);
    }

    #[test]
    fn handles_extreme_heights() {
        let policy = ConfirmationPolicy::new(u64::MAX);
        assert!(!policy.is_final(0, u64::MAX - 1));
        assert!(policy.is_final(0, u64::MAX));
    }
}
