//! ABI dispatch shared by the precompiles in this crate.

use alloy::{
    hex,
    primitives::{Address, Bytes},
    sol_types::SolCall,
};
use revm::precompile::{PrecompileError, PrecompileOutput, PrecompileResult};
use tracing::trace;

use crate::error::{IntoPrecompileResult, Result, SimpleStoragePrecompileError};

/// A contract implemented natively and called with Solidity ABI calldata.
pub trait Precompile {
    fn call(&mut self, calldata: &[u8], msg_sender: Address) -> PrecompileResult;
}

/// Decodes `calldata` with `decode` and hands the call to `f`.
///
/// Calldata without a selector is rejected outright. Unknown selectors revert
/// with `UnknownFunctionSelector`, malformed arguments revert with empty data.
pub fn dispatch_call<T>(
    calldata: &[u8],
    decode: impl FnOnce(&[u8]) -> alloy::sol_types::Result<T>,
    f: impl FnOnce(T) -> PrecompileResult,
) -> PrecompileResult {
    let Some(selector) = calldata.get(..4) else {
        return Err(PrecompileError::Other(
            "Invalid input: missing function selector".into(),
        ));
    };
    trace!(selector = %hex::encode(selector), len = calldata.len(), "dispatching call");

    let call = match decode(calldata) {
        Ok(call) => call,
        Err(alloy::sol_types::Error::UnknownSelector { selector, .. }) => {
            return unknown_selector(*selector);
        }
        Err(_) => return Ok(PrecompileOutput::new_reverted(0, Bytes::new())),
    };

    f(call)
}

pub fn unknown_selector(selector: [u8; 4]) -> PrecompileResult {
    SimpleStoragePrecompileError::unknown_selector(selector).into_precompile_result(0)
}

/// Runs a read-only call and ABI-encodes its return value.
pub fn view<C: SolCall>(call: C, f: impl FnOnce(C) -> Result<C::Return>) -> PrecompileResult {
    f(call).into_precompile_result(0, |ret| C::abi_encode_returns(&ret).into())
}

/// Runs a state-changing call that returns nothing.
pub fn mutate_void<C: SolCall>(
    call: C,
    sender: Address,
    f: impl FnOnce(Address, C) -> Result<()>,
) -> PrecompileResult {
    f(sender, call).into_precompile_result(0, |()| Bytes::new())
}
