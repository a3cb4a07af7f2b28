//! The contract-verification collaborator: submits deployed contracts to
//! the block explorer's verification API

use alloy::primitives::{hex, Address};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use crate::{constants::EXPLORER_SUCCESS_STATUS, errors::DeployError};

/// The contract-verification collaborator invoked by the deploy scripts
#[async_trait]
pub trait VerificationClient {
    /// Submit the contract at `address` for source verification, with the
    /// given ABI-encoded constructor arguments
    async fn verify_contract(
        &self,
        address: Address,
        constructor_args: &[u8],
    ) -> Result<(), DeployError>;
}

/// A [`VerificationClient`] backed by a block explorer's HTTP API
pub struct ExplorerClient {
    /// The underlying HTTP client
    http: reqwest::Client,
    /// The explorer verification API endpoint
    api_url: String,
    /// The API key with which requests are authenticated
    api_key: String,
}

impl ExplorerClient {
    /// Create a client against the given explorer API endpoint
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }
}

/// The response envelope returned by the explorer API
#[derive(Deserialize)]
struct ExplorerResponse {
    /// "1" on success, "0" on rejection
    status: String,
    /// The detail message accompanying the status
    result: String,
}

#[async_trait]
impl VerificationClient for ExplorerClient {
    async fn verify_contract(
        &self,
        address: Address,
        constructor_args: &[u8],
    ) -> Result<(), DeployError> {
        let params = [
            ("module", "contract".to_string()),
            ("action", "verifysourcecode".to_string()),
            ("contractaddress", format!("{address:#x}")),
            // The explorer API expects this exact (misspelled) field name
            ("constructorArguements", hex::encode(constructor_args)),
            ("apikey", self.api_key.clone()),
        ];

        let response = self
            .http
            .post(&self.api_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| DeployError::VerificationFailure(e.to_string()))?;

        let body: ExplorerResponse = response
            .json()
            .await
            .map_err(|e| DeployError::VerificationFailure(e.to_string()))?;

        if body.status != EXPLORER_SUCCESS_STATUS {
            return Err(DeployError::VerificationFailure(body.result));
        }

        info!("Verification submitted for {address:#x}");

        Ok(())
    }
}
