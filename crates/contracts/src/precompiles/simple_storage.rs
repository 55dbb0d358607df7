pub use ISimpleStorage::{
    ISimpleStorageErrors as SimpleStorageError, ISimpleStorageEvents as SimpleStorageEvent,
};

crate::sol! {
    /// Single-value storage with a name to favorite number registry.
    ///
    /// Every `store` emits `NumberStored` with the stored value. `addPerson`
    /// overwrites any previous entry for the same name and emits nothing.
    #[derive(Debug, PartialEq, Eq)]
    #[sol(abi)]
    interface ISimpleStorage {
        /// Overwrite the stored number.
        /// @param value The new stored number
        function store(uint256 value) external;

        /// @return value The most recently stored number, zero if never stored
        function retrieve() external view returns (uint256 value);

        /// Register (or re-register) a favorite number under `name`.
        function addPerson(string calldata name, uint256 favoriteNumber) external;

        /// @return favoriteNumber The number registered for `name`, zero if absent
        function nameToFavoriteNumber(string calldata name) external view returns (uint256 favoriteNumber);

        event NumberStored(uint256 value);

        error UnknownFunctionSelector(bytes4 selector);
    }
}

impl SimpleStorageError {
    pub const fn unknown_selector(selector: [u8; 4]) -> Self {
        Self::UnknownFunctionSelector(ISimpleStorage::UnknownFunctionSelector {
            selector: alloy_primitives::FixedBytes(selector),
        })
    }
}

impl SimpleStorageEvent {
    pub const fn stored(value: alloy_primitives::U256) -> Self {
        Self::NumberStored(ISimpleStorage::NumberStored { value })
    }
}
