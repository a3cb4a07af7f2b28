//! Utilities for the deploy scripts.

use std::{fs, path::Path, str::FromStr};

use alloy::signers::local::PrivateKeySigner;

use crate::{errors::DeployError, types::ContractArtifact};

/// Build the deployer's signer from the configured private key.
///
/// The key is the first (and only) account configured for the target
/// network; without one there is no account to deploy from.
pub fn setup_signer(priv_key: Option<&str>) -> Result<PrivateKeySigner, DeployError> {
    let priv_key = priv_key.ok_or_else(|| {
        DeployError::SignerUnavailable(
            "no deployer account configured for the target network".to_string(),
        )
    })?;

    PrivateKeySigner::from_str(priv_key).map_err(|e| DeployError::SignerUnavailable(e.to_string()))
}

/// Read and parse a compiled contract artifact
pub fn load_artifact(path: &Path) -> Result<ContractArtifact, DeployError> {
    let contents =
        fs::read_to_string(path).map_err(|e| DeployError::ArtifactParsing(e.to_string()))?;

    serde_json::from_str(&contents).map_err(|e| DeployError::ArtifactParsing(e.to_string()))
}
