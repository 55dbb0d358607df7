pub mod hashmap;
pub mod slots;

mod types;
pub use types::{Mapping, Slot};

use alloy::primitives::{Address, LogData, U256};
use revm::state::{AccountInfo, Bytecode};

use crate::error::Result;

/// Backing store a precompile reads from and writes to.
///
/// All methods take `&mut self` because real EVM journals track warm/cold
/// access even on reads.
pub trait PrecompileStorageProvider {
    fn set_code(&mut self, address: Address, code: Bytecode) -> Result<()>;
    fn get_account_info(&mut self, address: Address) -> Result<AccountInfo>;
    fn sstore(&mut self, address: Address, key: U256, value: U256) -> Result<()>;
    fn sload(&mut self, address: Address, key: U256) -> Result<U256>;
    fn emit_event(&mut self, address: Address, event: LogData) -> Result<()>;
}
