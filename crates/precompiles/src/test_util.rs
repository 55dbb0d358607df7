//! Helpers for testing precompile dispatch.

use crate::{dispatch::Precompile, error::SimpleStoragePrecompileError};
use alloy::{primitives::Address, sol_types::SolInterface};
use revm::precompile::PrecompileResult;

/// Asserts that `result` is a revert carrying exactly the ABI encoding of `expected`.
pub fn expect_precompile_revert<E: SolInterface>(result: &PrecompileResult, expected: E) {
    match result {
        Ok(output) => {
            assert!(output.reverted, "expected revert, got success: {output:?}");
            assert_eq!(
                &output.bytes[..],
                expected.abi_encode().as_slice(),
                "unexpected revert data"
            );
        }
        Err(err) => panic!("expected revert, got precompile error: {err:?}"),
    }
}

/// Calls `precompile` with every selector of an interface and collects the ones
/// it rejects as unknown.
///
/// Only the selector is sent, so functions taking arguments revert on decoding;
/// what matters is that they are not reported as unknown.
pub fn check_selector_coverage<P: Precompile>(
    precompile: &mut P,
    selectors: &[[u8; 4]],
    interface_name: &str,
    name_lookup: impl Fn([u8; 4]) -> Option<&'static str>,
) -> Vec<(String, [u8; 4])> {
    let mut unsupported = Vec::new();

    for &selector in selectors {
        let unknown = SimpleStoragePrecompileError::unknown_selector(selector)
            .into_precompile_result(0)
            .ok()
            .map(|output| output.bytes);

        let rejected = match precompile.call(&selector, Address::ZERO) {
            Ok(output) => output.reverted && Some(&output.bytes) == unknown.as_ref(),
            Err(_) => false,
        };

        if rejected {
            let name = name_lookup(selector).unwrap_or("<unknown>");
            unsupported.push((format!("{interface_name}::{name}"), selector));
        }
    }

    unsupported
}

/// Panics listing every unsupported selector found by [`check_selector_coverage`].
pub fn assert_full_coverage<const N: usize>(results: [Vec<(String, [u8; 4])>; N]) {
    let missing: Vec<_> = results.into_iter().flatten().collect();

    assert!(
        missing.is_empty(),
        "unsupported selectors:\n{}",
        missing
            .iter()
            .map(|(name, selector)| format!("  {name} (0x{})", alloy::hex::encode(selector)))
            .collect::<Vec<_>>()
            .join("\n")
    );
}
