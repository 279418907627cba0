//! ERC-20 `approve` call preparation.

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;

/// Minimal ERC-20 ABI fragment for allowances.
mod abi {
    alloy_sol_types::sol! {
        function approve(address spender, uint256 amount) external returns (bool);
    }
}

/// A contract call ready for gas estimation and submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedCall {
    /// Contract being called.
    pub to: Address,
    /// ABI-encoded calldata.
    pub data: Bytes,
}

/// `approve(spender, type(uint256).max)` on `token`.
///
/// Grants the spender an unbounded allowance so the user unlocks a token once.
pub fn unlimited_approval(token: Address, spender: Address) -> PreparedCall {
    let calldata = abi::approveCall {
        spender,
        amount: U256::MAX,
    }
    .abi_encode();

    PreparedCall {
        to: token,
        data: Bytes::from(calldata),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_unlimited_approval_encoding() {
        let token = address!("0x6B175474E89094C44Da98b954EedeAC495271d0F");
        let spender = address!("0x1111111111111111111111111111111111111111");

        let call = unlimited_approval(token, spender);
        assert_eq!(call.to, token);

        // selector + two 32-byte words
        assert_eq!(call.data.len(), 4 + 32 + 32);
        assert_eq!(&call.data[..4], &[0x09, 0x5e, 0xa7, 0xb3]);
        assert_eq!(&call.data[16..36], spender.as_slice());
        assert!(call.data[36..].iter().all(|b| *b == 0xff));
    }
}
