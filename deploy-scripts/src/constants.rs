//! Constants used in the deploy scripts

use std::time::Duration;

use alloy::primitives::{b256, B256};

/// The storage slot containing the implementation contract address in the upgradeable proxy.
///
/// This is specified in EIP1967: https://eips.ethereum.org/EIPS/eip-1967#logic-address
pub const IMPLEMENTATION_STORAGE_SLOT: B256 =
    b256!("360894a13ba1a3210667c828492db98dca3e2076cc3735a920a3ca505d382bbc");

/// The number of confirmations to wait for the contract deployment transactions
pub const NUM_DEPLOY_CONFIRMATIONS: u64 = 1;

/// The name of the auto-funded local development network
pub const DEVNET_NETWORK: &str = "devnet";

/// The name of the network served by a user-run local node
pub const LOCALHOST_NETWORK: &str = "localhost";

/// How long to wait between deployment and verification,
/// giving the block explorer time to index the new contracts
pub const VERIFICATION_DELAY: Duration = Duration::from_secs(60);

/// The default hostport that the local devnet node runs on
pub const DEFAULT_DEVNET_RPC_URL: &str = "http://localhost:8547";

/// The default block explorer verification API endpoint
pub const DEFAULT_EXPLORER_API_URL: &str = "https://api.arbiscan.io/api";

/// The response status with which the explorer reports a successful submission
pub const EXPLORER_SUCCESS_STATUS: &str = "1";
