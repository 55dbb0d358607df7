use alloy::primitives::{Address, U256};
use std::marker::PhantomData;

use crate::storage::{
    Slot,
    slots::{StorageKey, mapping_slot},
};

/// Handle to a Solidity `mapping(K => uint256)`.
///
/// The mapping itself occupies no storage; entries live at
/// `keccak256(key ++ base_slot)`.
#[derive(Debug)]
pub struct Mapping<K: ?Sized> {
    base_slot: U256,
    address: Address,
    _key: PhantomData<fn(&K)>,
}

impl<K: StorageKey + ?Sized> Mapping<K> {
    pub const fn new(base_slot: U256, address: Address) -> Self {
        Self {
            base_slot,
            address,
            _key: PhantomData,
        }
    }

    #[cfg(test)]
    pub(crate) const fn base_slot(&self) -> U256 {
        self.base_slot
    }

    /// Returns the slot handle of the entry for `key`.
    pub fn at(&self, key: &K) -> Slot {
        Slot::new(mapping_slot(key, self.base_slot), self.address)
    }
}
