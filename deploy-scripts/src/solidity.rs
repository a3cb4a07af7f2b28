//! Definitions of Solidity functions called during deployment

use alloy::sol;

sol! {
    /// The setter contract's one-time initializer, invoked through the
    /// proxy constructor at deployment time
    function initialize() external;
}

sol! {
    /// The upgrade hook that upgrade-safe implementations expose.
    ///
    /// This is specified in ERC1822: https://eips.ethereum.org/EIPS/eip-1822
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface IERC1822Proxiable {
        function proxiableUUID() external view returns (bytes32);
    }
}
