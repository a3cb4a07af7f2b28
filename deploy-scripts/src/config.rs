//! Configuration for a deployment run

use std::time::Duration;

use crate::constants::{DEVNET_NETWORK, LOCALHOST_NETWORK, VERIFICATION_DELAY};

/// The configuration of a single deployment run.
///
/// Built once from the CLI arguments; the orchestration reads everything
/// it needs from here rather than from process-wide state.
#[derive(Debug, Clone)]
pub struct DeployConfig {
    /// The name of the target network configuration
    pub network: String,
    /// Whether the deployed implementation is submitted for explorer verification
    pub verification_enabled: bool,
    /// How long to wait between deployment and verification
    pub verification_delay: Duration,
}

impl DeployConfig {
    /// Build the configuration for the given target network
    pub fn new(network: impl Into<String>) -> Self {
        let network = network.into();
        // Local networks have no explorer to verify against
        let verification_enabled = !is_local_network(&network);

        Self {
            network,
            verification_enabled,
            verification_delay: VERIFICATION_DELAY,
        }
    }
}

/// Whether the named network is served by a local node
fn is_local_network(network: &str) -> bool {
    network == DEVNET_NETWORK || network == LOCALHOST_NETWORK
}

#[cfg(test)]
mod tests {
    //! Tests of the verification capability flag

    use std::time::Duration;

    use super::DeployConfig;
    use crate::constants::{DEVNET_NETWORK, LOCALHOST_NETWORK};

    /// Verification is disabled for networks served by a local node
    #[test]
    fn test_verification_disabled_on_local_networks() {
        assert!(!DeployConfig::new(DEVNET_NETWORK).verification_enabled);
        assert!(!DeployConfig::new(LOCALHOST_NETWORK).verification_enabled);
    }

    /// Verification is enabled for all other networks,
    /// with the full indexing delay applied
    #[test]
    fn test_verification_enabled_on_public_networks() {
        let config = DeployConfig::new("testnet");

        assert!(config.verification_enabled);
        assert!(config.verification_delay >= Duration::from_secs(60));
    }
}
