//! The proxy-deployment collaborator: deploys the setter implementation
//! contract and the upgradeable proxy in front of it

use alloy::{
    network::{Ethereum, EthereumWallet, TransactionBuilder},
    primitives::{Address, Bytes},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use alloy_sol_types::{SolCall, SolValue};
use async_trait::async_trait;
use tracing::info;

use crate::{
    constants::{IMPLEMENTATION_STORAGE_SLOT, NUM_DEPLOY_CONFIRMATIONS},
    errors::DeployError,
    solidity::{initializeCall, IERC1822Proxiable},
    types::ContractArtifact,
};

/// The proxy-deployment collaborator invoked by the deploy scripts.
///
/// Implementations own the chain client and the upgrade-safety checks;
/// the orchestration only sequences the calls.
#[async_trait]
pub trait ProxyDeployer {
    /// The account that signs the deployment transactions
    fn deployer_address(&self) -> Result<Address, DeployError>;

    /// Deploy the setter implementation contract and an initialized proxy in
    /// front of it, returning the proxy address once the deployment
    /// transactions have confirmed
    async fn deploy_proxy(&self) -> Result<Address, DeployError>;

    /// Resolve the implementation contract address behind the given proxy
    async fn implementation_address(&self, proxy: Address) -> Result<Address, DeployError>;
}

/// A [`ProxyDeployer`] backed by a signer-attached RPC provider
pub struct RpcProxyDeployer {
    /// The provider with which the deployment transactions are sent
    provider: DynProvider,
    /// The address of the deployer account attached to the provider
    deployer: Address,
    /// The compiled setter implementation artifact
    implementation_artifact: ContractArtifact,
    /// The compiled proxy artifact
    proxy_artifact: ContractArtifact,
}

impl RpcProxyDeployer {
    /// Construct a deployer from the given signer, RPC endpoint, and
    /// contract artifacts
    pub fn new(
        signer: PrivateKeySigner,
        rpc_url: &str,
        implementation_artifact: ContractArtifact,
        proxy_artifact: ContractArtifact,
    ) -> Result<Self, DeployError> {
        let url =
            Url::parse(rpc_url).map_err(|e| DeployError::ClientInitialization(e.to_string()))?;

        let deployer = signer.address();
        let provider = ProviderBuilder::<_, _, Ethereum>::default()
            .with_simple_nonce_management()
            .wallet(EthereumWallet::new(signer))
            .on_http(url);

        Ok(Self {
            provider: DynProvider::new(provider),
            deployer,
            implementation_artifact,
            proxy_artifact,
        })
    }

    /// Send a deployment transaction and return the created contract's address
    async fn deploy_contract(&self, code: Bytes) -> Result<Address, DeployError> {
        let tx = TransactionRequest::default().with_deploy_code(code);

        let receipt = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| DeployError::TransactionFailure(e.to_string()))?
            .with_required_confirmations(NUM_DEPLOY_CONFIRMATIONS)
            .get_receipt()
            .await
            .map_err(|e| DeployError::TransactionFailure(e.to_string()))?;

        if !receipt.status() {
            return Err(DeployError::TransactionFailure(
                "deployment transaction reverted".to_string(),
            ));
        }

        receipt.contract_address.ok_or_else(|| {
            DeployError::TransactionFailure(
                "deployment receipt carries no contract address".to_string(),
            )
        })
    }

    /// Check that the implementation is safe to put behind the proxy.
    ///
    /// The implementation must expose the ERC1822 `proxiableUUID` hook and
    /// point it at the EIP1967 implementation slot. No relaxations are applied.
    async fn validate_upgrade_safety(&self, implementation: Address) -> Result<(), DeployError> {
        let uuid = IERC1822Proxiable::new(implementation, &self.provider)
            .proxiableUUID()
            .call()
            .await
            .map_err(|e| {
                DeployError::UnsafeImplementation(format!(
                    "implementation does not expose the ERC1822 upgrade hook: {e}"
                ))
            })?
            ._0;

        if uuid != IMPLEMENTATION_STORAGE_SLOT {
            return Err(DeployError::UnsafeImplementation(format!(
                "proxiableUUID points at {uuid}, expected the EIP1967 implementation slot"
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl ProxyDeployer for RpcProxyDeployer {
    fn deployer_address(&self) -> Result<Address, DeployError> {
        Ok(self.deployer)
    }

    async fn deploy_proxy(&self) -> Result<Address, DeployError> {
        let implementation = self
            .deploy_contract(self.implementation_artifact.deploy_code()?)
            .await?;

        info!("Validating upgrade safety of implementation at {implementation:#x}");
        self.validate_upgrade_safety(implementation).await?;

        // The proxy constructor takes the implementation address and the
        // calldata with which to initialize it, atomically with the deployment
        let init_calldata = initializeCall::new(()).abi_encode();
        let constructor_args = (implementation, Bytes::from(init_calldata)).abi_encode_params();

        let deploy_code = [
            self.proxy_artifact.deploy_code()?.to_vec(),
            constructor_args,
        ]
        .concat();

        self.deploy_contract(deploy_code.into()).await
    }

    async fn implementation_address(&self, proxy: Address) -> Result<Address, DeployError> {
        let slot_value = self
            .provider
            .get_storage_at(proxy, IMPLEMENTATION_STORAGE_SLOT.into())
            .await
            .map_err(|e| DeployError::ContractInteraction(e.to_string()))?;

        let implementation = Address::from_word(slot_value.into());
        if implementation == Address::ZERO {
            return Err(DeployError::TransactionFailure(
                "proxy does not point at an implementation".to_string(),
            ));
        }

        Ok(implementation)
    }
}
