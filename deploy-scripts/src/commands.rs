//! Implementations of the various deploy scripts

use tokio::time::sleep;
use tracing::info;

use crate::{
    config::DeployConfig, deployer::ProxyDeployer, errors::DeployError, types::DeployedContract,
    verification::VerificationClient,
};

/// Deploy the upgradeable setter contract pair and, on public networks,
/// submit the implementation for block-explorer verification.
///
/// The flow is a linear pipeline: acquire the signer, deploy, resolve the
/// implementation behind the proxy, report both addresses, then verify
/// behind the guard. Any failure propagates to the caller; nothing is
/// retried.
pub async fn deploy_and_verify<D: ProxyDeployer, V: VerificationClient>(
    config: &DeployConfig,
    deployer: &D,
    verifier: &V,
) -> Result<DeployedContract, DeployError> {
    let deployer_address = deployer.deployer_address()?;
    info!(
        "Deploying setter contracts to {} from {deployer_address:#x}",
        config.network
    );

    let proxy = deployer.deploy_proxy().await?;
    let implementation = deployer.implementation_address(proxy).await?;

    println!("Setter proxy deployed at {:#x}", proxy);
    println!("Setter implementation deployed at {:#x}", implementation);

    if config.verification_enabled {
        println!("Sleeping before verification...");
        sleep(config.verification_delay).await;

        // The setter takes no constructor arguments
        verifier.verify_contract(implementation, &[]).await?;
    }

    Ok(DeployedContract {
        proxy,
        implementation,
    })
}

#[cfg(test)]
mod tests {
    //! Orchestration tests against in-memory collaborators

    use std::{
        sync::atomic::{AtomicU64, Ordering},
        sync::{Arc, Mutex},
        time::Duration,
    };

    use alloy::primitives::Address;
    use async_trait::async_trait;

    use super::deploy_and_verify;
    use crate::{
        config::DeployConfig,
        constants::{DEVNET_NETWORK, LOCALHOST_NETWORK},
        deployer::ProxyDeployer,
        errors::DeployError,
        verification::VerificationClient,
    };

    /// The network name used to exercise the verification path
    const PUBLIC_NETWORK: &str = "testnet";

    /// The collaborator invocations observed during a run, in order
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Step {
        /// The proxy/implementation pair was deployed
        Deploy,
        /// The implementation address was resolved from the proxy
        Resolve,
        /// The implementation was submitted for verification
        Verify,
    }

    /// An invocation record shared between the mock collaborators
    type StepLog = Arc<Mutex<Vec<Step>>>;

    /// A [`ProxyDeployer`] over an in-memory chain, minting a fresh
    /// address pair per deployment
    struct MockDeployer {
        /// The invocation record shared with the verification mock
        log: StepLog,
        /// Whether a deployer account is configured
        has_signer: bool,
        /// Whether upgrade-safety validation rejects the implementation
        unsafe_implementation: bool,
        /// The counter from which fresh contract addresses are minted
        next_address: AtomicU64,
    }

    impl MockDeployer {
        /// A deployer with a configured signer and a safe implementation
        fn new(log: StepLog) -> Self {
            Self {
                log,
                has_signer: true,
                unsafe_implementation: false,
                next_address: AtomicU64::new(1),
            }
        }

        /// Mint a fresh, nonzero contract address
        fn mint_address(&self) -> Address {
            Address::with_last_byte(self.next_address.fetch_add(1, Ordering::SeqCst) as u8)
        }
    }

    #[async_trait]
    impl ProxyDeployer for MockDeployer {
        fn deployer_address(&self) -> Result<Address, DeployError> {
            if !self.has_signer {
                return Err(DeployError::SignerUnavailable(
                    "no accounts configured".to_string(),
                ));
            }

            Ok(Address::with_last_byte(0xaa))
        }

        async fn deploy_proxy(&self) -> Result<Address, DeployError> {
            if self.unsafe_implementation {
                return Err(DeployError::UnsafeImplementation(
                    "missing upgrade hook".to_string(),
                ));
            }

            self.log.lock().unwrap().push(Step::Deploy);
            Ok(self.mint_address())
        }

        async fn implementation_address(&self, _proxy: Address) -> Result<Address, DeployError> {
            self.log.lock().unwrap().push(Step::Resolve);
            Ok(self.mint_address())
        }
    }

    /// A [`VerificationClient`] that records its submissions
    struct MockVerifier {
        /// The invocation record shared with the deployer mock
        log: StepLog,
        /// The addresses submitted for verification
        submissions: Mutex<Vec<Address>>,
    }

    impl MockVerifier {
        /// A verifier that accepts every submission
        fn new(log: StepLog) -> Self {
            Self {
                log,
                submissions: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl VerificationClient for MockVerifier {
        async fn verify_contract(
            &self,
            address: Address,
            constructor_args: &[u8],
        ) -> Result<(), DeployError> {
            assert!(constructor_args.is_empty());

            self.log.lock().unwrap().push(Step::Verify);
            self.submissions.lock().unwrap().push(address);

            Ok(())
        }
    }

    /// A deploy config for the given network with the indexing delay zeroed
    /// out, keeping the tests fast
    fn test_config(network: &str) -> DeployConfig {
        let mut config = DeployConfig::new(network);
        config.verification_delay = Duration::ZERO;
        config
    }

    /// Verification never fires on the local networks
    #[tokio::test]
    async fn test_local_networks_skip_verification() {
        for network in [DEVNET_NETWORK, LOCALHOST_NETWORK] {
            let log = StepLog::default();
            let deployer = MockDeployer::new(log.clone());
            let verifier = MockVerifier::new(log.clone());

            let deployed = deploy_and_verify(&test_config(network), &deployer, &verifier)
                .await
                .unwrap();

            assert!(!deployed.proxy.is_zero());
            assert!(!deployed.implementation.is_zero());
            assert_ne!(deployed.proxy, deployed.implementation);
            assert_eq!(*log.lock().unwrap(), vec![Step::Deploy, Step::Resolve]);
        }
    }

    /// On public networks the implementation is verified exactly once, and
    /// only after the deployment has fully resolved
    #[tokio::test]
    async fn test_public_network_verifies_once_after_deploy() {
        let log = StepLog::default();
        let deployer = MockDeployer::new(log.clone());
        let verifier = MockVerifier::new(log.clone());

        let deployed = deploy_and_verify(&test_config(PUBLIC_NETWORK), &deployer, &verifier)
            .await
            .unwrap();

        assert_eq!(
            *log.lock().unwrap(),
            vec![Step::Deploy, Step::Resolve, Step::Verify],
        );
        assert_eq!(
            *verifier.submissions.lock().unwrap(),
            vec![deployed.implementation],
        );
    }

    /// A missing signer fails the run before any deployment or verification
    #[tokio::test]
    async fn test_missing_signer_preempts_deployment() {
        let log = StepLog::default();
        let mut deployer = MockDeployer::new(log.clone());
        deployer.has_signer = false;
        let verifier = MockVerifier::new(log.clone());

        let res = deploy_and_verify(&test_config(PUBLIC_NETWORK), &deployer, &verifier).await;

        assert!(matches!(res, Err(DeployError::SignerUnavailable(_))));
        assert!(log.lock().unwrap().is_empty());
    }

    /// A rejected implementation fails the run before verification,
    /// regardless of the target network
    #[tokio::test]
    async fn test_unsafe_implementation_preempts_verification() {
        for network in [DEVNET_NETWORK, PUBLIC_NETWORK] {
            let log = StepLog::default();
            let mut deployer = MockDeployer::new(log.clone());
            deployer.unsafe_implementation = true;
            let verifier = MockVerifier::new(log.clone());

            let res = deploy_and_verify(&test_config(network), &deployer, &verifier).await;

            assert!(matches!(res, Err(DeployError::UnsafeImplementation(_))));
            assert!(!log.lock().unwrap().contains(&Step::Verify));
        }
    }

    /// Re-running the deployment mints a fresh contract pair,
    /// never reusing addresses
    #[tokio::test]
    async fn test_redeployment_is_not_idempotent() {
        let log = StepLog::default();
        let deployer = MockDeployer::new(log.clone());
        let verifier = MockVerifier::new(log.clone());
        let config = test_config(DEVNET_NETWORK);

        let first = deploy_and_verify(&config, &deployer, &verifier)
            .await
            .unwrap();
        let second = deploy_and_verify(&config, &deployer, &verifier)
            .await
            .unwrap();

        assert_ne!(first.proxy, second.proxy);
        assert_ne!(first.implementation, second.implementation);
    }
}
