use alloy::{primitives::Bytes, sol_types::SolInterface};
use revm::precompile::{PrecompileError, PrecompileOutput, PrecompileResult};
use simple_storage_contracts::precompiles::SimpleStorageError;

pub type Result<T> = std::result::Result<T, SimpleStoragePrecompileError>;

/// Errors surfaced by the SimpleStorage precompile.
///
/// ABI-level failures are returned to the caller as revert data, everything
/// else aborts the call.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SimpleStoragePrecompileError {
    /// Revert reason defined by `ISimpleStorage`.
    #[error("SimpleStorage error: {0:?}")]
    SimpleStorage(SimpleStorageError),

    /// Unrecoverable failure of the underlying storage provider.
    #[error("Fatal precompile error: {0}")]
    Fatal(String),
}

impl SimpleStoragePrecompileError {
    pub fn fatal(reason: impl Into<String>) -> Self {
        Self::Fatal(reason.into())
    }

    pub fn unknown_selector(selector: [u8; 4]) -> Self {
        SimpleStorageError::unknown_selector(selector).into()
    }

    /// Converts the error into the output revm expects from a precompile.
    pub fn into_precompile_result(self, gas: u64) -> PrecompileResult {
        match self {
            Self::SimpleStorage(err) => Ok(PrecompileOutput::new_reverted(
                gas,
                err.abi_encode().into(),
            )),
            Self::Fatal(msg) => Err(PrecompileError::Other(msg.into())),
        }
    }
}

impl From<SimpleStorageError> for SimpleStoragePrecompileError {
    fn from(err: SimpleStorageError) -> Self {
        Self::SimpleStorage(err)
    }
}

pub trait IntoPrecompileResult<T> {
    /// Encodes a successful value with `encode_ok`, or maps the error through
    /// [`SimpleStoragePrecompileError::into_precompile_result`].
    fn into_precompile_result(
        self,
        gas: u64,
        encode_ok: impl FnOnce(T) -> Bytes,
    ) -> PrecompileResult;
}

impl<T> IntoPrecompileResult<T> for Result<T> {
    fn into_precompile_result(
        self,
        gas: u64,
        encode_ok: impl FnOnce(T) -> Bytes,
    ) -> PrecompileResult {
        match self {
            Ok(res) => Ok(PrecompileOutput::new(gas, encode_ok(res))),
            Err(err) => err.into_precompile_result(gas),
        }
    }
}
