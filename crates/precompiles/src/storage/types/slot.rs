use alloy::primitives::{Address, U256};

use crate::{error::Result, storage::PrecompileStorageProvider};

/// Handle to a single storage word of a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    slot: U256,
    address: Address,
}

impl Slot {
    pub const fn new(slot: U256, address: Address) -> Self {
        Self { slot, address }
    }

    #[cfg(test)]
    pub(crate) const fn slot(&self) -> U256 {
        self.slot
    }

    pub fn read<S: PrecompileStorageProvider + ?Sized>(&self, storage: &mut S) -> Result<U256> {
        storage.sload(self.address, self.slot)
    }

    pub fn write<S: PrecompileStorageProvider + ?Sized>(
        &self,
        storage: &mut S,
        value: U256,
    ) -> Result<()> {
        storage.sstore(self.address, self.slot, value)
    }
}
