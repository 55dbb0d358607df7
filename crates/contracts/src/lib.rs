//! Solidity interfaces of the SimpleStorage precompile.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod precompiles;

#[doc(hidden)]
pub use alloy_sol_types;

/// Forwards to [`alloy_sol_types::sol!`] so every interface in this crate is
/// expanded against the same `alloy-sol-types` version.
#[macro_export]
#[doc(hidden)]
macro_rules! sol {
    ($($input:tt)*) => {
        $crate::alloy_sol_types::sol! { $($input)* }
    };
}
