//! Definitions of errors that can occur during the execution of the deploy scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the deploy scripts
#[derive(Debug)]
pub enum DeployError {
    /// No usable deployer account is configured for the target network
    SignerUnavailable(String),
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// Error reading or parsing a compiled contract artifact
    ArtifactParsing(String),
    /// The upgrade-safety validation rejected the implementation contract
    UnsafeImplementation(String),
    /// A deployment transaction reverted or failed to confirm
    TransactionFailure(String),
    /// Error calling a contract method
    ContractInteraction(String),
    /// The block explorer rejected or failed the verification request
    VerificationFailure(String),
}

impl Display for DeployError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DeployError::SignerUnavailable(s) => write!(f, "signer unavailable: {}", s),
            DeployError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            DeployError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            DeployError::UnsafeImplementation(s) => write!(f, "unsafe implementation: {}", s),
            DeployError::TransactionFailure(s) => write!(f, "error deploying contract: {}", s),
            DeployError::ContractInteraction(s) => {
                write!(f, "error interacting with contract: {}", s)
            }
            DeployError::VerificationFailure(s) => write!(f, "error verifying contract: {}", s),
        }
    }
}

impl Error for DeployError {}
