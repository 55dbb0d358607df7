use alloy::primitives::{U256, keccak256};

/// `storedNumber` (uint256)
pub const STORED_NUMBER: U256 = U256::ZERO;
/// `nameToFavoriteNumber` (mapping(string => uint256))
pub const NAME_TO_FAVORITE_NUMBER: U256 = U256::from_limbs([1, 0, 0, 0]);

/// A type usable as a mapping key.
///
/// `string` keys are hashed as raw bytes with no padding, as Solidity does.
pub trait StorageKey {
    fn encode_key(&self, buf: &mut Vec<u8>);
}

impl StorageKey for str {
    fn encode_key(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.as_bytes());
    }
}

impl StorageKey for String {
    fn encode_key(&self, buf: &mut Vec<u8>) {
        self.as_str().encode_key(buf);
    }
}

/// Compute storage slot for a mapping
#[inline]
pub fn mapping_slot<K: StorageKey + ?Sized>(key: &K, mapping_slot: U256) -> U256 {
    let mut buf = Vec::with_capacity(64);
    key.encode_key(&mut buf);
    buf.extend_from_slice(&mapping_slot.to_be_bytes::<32>());
    U256::from_be_bytes(keccak256(buf).0)
}
