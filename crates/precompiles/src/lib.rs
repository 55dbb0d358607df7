//! SimpleStorage precompile implementation.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub use error::{IntoPrecompileResult, Result};

pub mod dispatch;
pub use dispatch::Precompile;

pub mod storage;

pub mod simple_storage;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_util;

pub use simple_storage_contracts::precompiles::SIMPLE_STORAGE_ADDRESS;
