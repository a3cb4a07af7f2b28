//! Definitions of CLI arguments and commands for deploy scripts

use std::path::PathBuf;

use alloy::signers::local::PrivateKeySigner;
use clap::{Args, Parser, Subcommand};

use crate::{
    commands::deploy_and_verify,
    config::DeployConfig,
    constants::{DEFAULT_DEVNET_RPC_URL, DEFAULT_EXPLORER_API_URL, DEVNET_NETWORK},
    deployer::RpcProxyDeployer,
    errors::DeployError,
    types::DeployedContract,
    utils::load_artifact,
    verification::ExplorerClient,
};

/// The CLI arguments shared by all deploy scripts
#[derive(Parser)]
pub struct Cli {
    /// Private key of the deployer
    // TODO: Better key management
    #[arg(short, long, env = "PRIV_KEY")]
    pub priv_key: Option<String>,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_DEVNET_RPC_URL)]
    pub rpc_url: String,

    /// Name of the target network configuration
    #[arg(short, long, env = "NETWORK", default_value = DEVNET_NETWORK)]
    pub network: String,

    /// Block explorer verification API URL
    #[arg(long, env = "EXPLORER_API_URL", default_value = DEFAULT_EXPLORER_API_URL)]
    pub explorer_api_url: String,

    /// Block explorer API key
    #[arg(long, env = "EXPLORER_API_KEY", default_value = "")]
    pub explorer_api_key: String,

    /// The deploy script to run
    #[command(subcommand)]
    pub command: Command,
}

/// The deploy scripts that can be run
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the upgradeable setter contract pair
    DeployProxy(DeployProxyArgs),
}

/// Deploy the upgradeable setter contract pair.
///
/// Concretely, this deploys the setter implementation contract and an
/// [`ERC1967Proxy`](https://docs.openzeppelin.com/contracts/5.x/api/proxy#ERC1967Proxy)
/// in front of it, initialized through the setter's default initializer.
///
/// Calls made to the proxy are forwarded to the implementation contract;
/// upgrades replace the implementation while the proxy address stays fixed.
#[derive(Args)]
pub struct DeployProxyArgs {
    /// Path to the compiled setter implementation artifact
    #[arg(short, long)]
    pub implementation: PathBuf,

    /// Path to the compiled proxy artifact
    #[arg(short, long)]
    pub proxy: PathBuf,
}

impl Command {
    /// Run the parsed command with the given run configuration and signer
    pub async fn run(
        self,
        config: &DeployConfig,
        signer: PrivateKeySigner,
        rpc_url: &str,
        explorer_api_url: &str,
        explorer_api_key: &str,
    ) -> Result<DeployedContract, DeployError> {
        match self {
            Command::DeployProxy(args) => {
                let implementation_artifact = load_artifact(&args.implementation)?;
                let proxy_artifact = load_artifact(&args.proxy)?;

                let deployer = RpcProxyDeployer::new(
                    signer,
                    rpc_url,
                    implementation_artifact,
                    proxy_artifact,
                )?;
                let verifier = ExplorerClient::new(explorer_api_url, explorer_api_key);

                deploy_and_verify(config, &deployer, &verifier).await
            }
        }
    }
}
