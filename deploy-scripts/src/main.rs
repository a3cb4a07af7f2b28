use clap::Parser;
use deploy_scripts::{cli::Cli, config::DeployConfig, errors::DeployError, utils::setup_signer};

#[tokio::main]
async fn main() -> Result<(), DeployError> {
    let Cli {
        priv_key,
        rpc_url,
        network,
        explorer_api_url,
        explorer_api_key,
        command,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    let config = DeployConfig::new(network);
    let signer = setup_signer(priv_key.as_deref())?;

    command
        .run(&config, signer, &rpc_url, &explorer_api_url, &explorer_api_key)
        .await
        .map(|_| ())
}
