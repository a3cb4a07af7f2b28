//! Type definitions used throughout the deploy scripts

use alloy::primitives::{hex, Address, Bytes};
use serde::Deserialize;

use crate::errors::DeployError;

/// The deployed setter contract pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeployedContract {
    /// The address of the proxy, i.e. the stable externally visible address
    pub proxy: Address,
    /// The address of the setter implementation contract behind the proxy
    pub implementation: Address,
}

/// A compiled contract artifact, as emitted by the contract build pipeline
#[derive(Debug, Clone, Deserialize)]
pub struct ContractArtifact {
    /// The creation bytecode section of the artifact
    pub bytecode: ArtifactBytecode,
}

/// The bytecode section of a compiled contract artifact
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactBytecode {
    /// The hex-encoded creation bytecode
    pub object: String,
}

impl ContractArtifact {
    /// The creation bytecode to include in a deployment transaction
    pub fn deploy_code(&self) -> Result<Bytes, DeployError> {
        let code = hex::decode(&self.bytecode.object)
            .map_err(|e| DeployError::ArtifactParsing(e.to_string()))?;

        Ok(code.into())
    }
}
