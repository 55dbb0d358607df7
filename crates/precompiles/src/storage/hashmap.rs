use alloy::primitives::{Address, LogData, U256};
use revm::state::{AccountInfo, Bytecode};
use std::collections::HashMap;

use crate::{
    error::{Result, SimpleStoragePrecompileError},
    storage::PrecompileStorageProvider,
};

/// In-memory [`PrecompileStorageProvider`].
///
/// Keeps every emitted log per contract address, in emission order, so callers
/// can observe the events a call produced.
#[derive(Debug, Default)]
pub struct HashMapStorageProvider {
    internals: HashMap<(Address, U256), U256>,
    accounts: HashMap<Address, AccountInfo>,
    events: HashMap<Address, Vec<LogData>>,
    failure: Option<String>,
}

impl HashMapStorageProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent storage access fail with a fatal error.
    pub fn with_failure(mut self, reason: impl Into<String>) -> Self {
        self.failure = Some(reason.into());
        self
    }

    /// Logs emitted by `address`, oldest first.
    pub fn get_events(&self, address: Address) -> &[LogData] {
        self.events.get(&address).map(Vec::as_slice).unwrap_or_default()
    }

    fn check_available(&self) -> Result<()> {
        match &self.failure {
            Some(reason) => Err(SimpleStoragePrecompileError::fatal(reason.clone())),
            None => Ok(()),
        }
    }
}

impl PrecompileStorageProvider for HashMapStorageProvider {
    fn set_code(&mut self, address: Address, code: Bytecode) -> Result<()> {
        self.check_available()?;
        let account = self.accounts.entry(address).or_default();
        account.code_hash = code.hash_slow();
        account.code = Some(code);
        Ok(())
    }

    fn get_account_info(&mut self, address: Address) -> Result<AccountInfo> {
        self.check_available()?;
        Ok(self.accounts.get(&address).cloned().unwrap_or_default())
    }

    fn sstore(&mut self, address: Address, key: U256, value: U256) -> Result<()> {
        self.check_available()?;
        self.internals.insert((address, key), value);
        Ok(())
    }

    fn sload(&mut self, address: Address, key: U256) -> Result<U256> {
        self.check_available()?;
        Ok(self
            .internals
            .get(&(address, key))
            .copied()
            .unwrap_or(U256::ZERO))
    }

    fn emit_event(&mut self, address: Address, event: LogData) -> Result<()> {
        self.check_available()?;
        self.events.entry(address).or_default().push(event);
        Ok(())
    }
}
