pub mod dispatch;

pub use simple_storage_contracts::precompiles::{
    ISimpleStorage, SimpleStorageError, SimpleStorageEvent,
};

use crate::{
    SIMPLE_STORAGE_ADDRESS,
    error::Result,
    storage::{Mapping, PrecompileStorageProvider, Slot, slots},
};
use alloy::primitives::{Address, Bytes, IntoLogData, U256};
use revm::state::Bytecode;
use tracing::debug;

/// Native implementation of `ISimpleStorage`.
///
/// Storage layout matches the Solidity contract:
/// - slot 0: `uint256 storedNumber`
/// - slot 1: `mapping(string => uint256) nameToFavoriteNumber`
pub struct SimpleStorage<'a, S: PrecompileStorageProvider> {
    stored_number: Slot,
    name_to_favorite_number: Mapping<String>,
    storage: &'a mut S,
}

impl<'a, S: PrecompileStorageProvider> SimpleStorage<'a, S> {
    pub fn new(storage: &'a mut S) -> Self {
        Self {
            stored_number: Slot::new(slots::STORED_NUMBER, SIMPLE_STORAGE_ADDRESS),
            name_to_favorite_number: Mapping::new(
                slots::NAME_TO_FAVORITE_NUMBER,
                SIMPLE_STORAGE_ADDRESS,
            ),
            storage,
        }
    }

    /// Account that owns this contract's state and logs.
    pub const fn address(&self) -> Address {
        SIMPLE_STORAGE_ADDRESS
    }

    /// Deploys the contract by giving its account non-empty code.
    ///
    /// Stored values are left untouched, so re-initializing is harmless.
    pub fn initialize(&mut self) -> Result<()> {
        let address = self.address();
        self.storage
            .set_code(address, Bytecode::new_legacy(Bytes::from_static(&[0xef])))
    }

    pub fn is_initialized(&mut self) -> Result<bool> {
        let address = self.address();
        let info = self.storage.get_account_info(address)?;
        Ok(!info.is_empty_code_hash())
    }

    pub fn store(&mut self, call: ISimpleStorage::storeCall) -> Result<()> {
        debug!(value = %call.value, "store");
        self.stored_number.write(self.storage, call.value)?;
        self.emit_event(SimpleStorageEvent::stored(call.value))
    }

    pub fn retrieve(&mut self) -> Result<U256> {
        self.stored_number.read(self.storage)
    }

    pub fn add_person(&mut self, call: ISimpleStorage::addPersonCall) -> Result<()> {
        debug!(name = %call.name, favorite_number = %call.favoriteNumber, "add person");
        self.name_to_favorite_number
            .at(&call.name)
            .write(self.storage, call.favoriteNumber)
    }

    pub fn name_to_favorite_number(
        &mut self,
        call: ISimpleStorage::nameToFavoriteNumberCall,
    ) -> Result<U256> {
        self.name_to_favorite_number
            .at(&call.name)
            .read(self.storage)
    }

    fn emit_event(&mut self, event: SimpleStorageEvent) -> Result<()> {
        let address = self.address();
        self.storage.emit_event(address, event.into_log_data())
    }
}
