use super::SimpleStorage;
use crate::{
    dispatch::{Precompile, dispatch_call, mutate_void, view},
    storage::PrecompileStorageProvider,
};
use alloy::{primitives::Address, sol_types::SolInterface};
use revm::precompile::PrecompileResult;
use simple_storage_contracts::precompiles::ISimpleStorage::ISimpleStorageCalls;

impl<S: PrecompileStorageProvider> Precompile for SimpleStorage<'_, S> {
    fn call(&mut self, calldata: &[u8], msg_sender: Address) -> PrecompileResult {
        dispatch_call(calldata, ISimpleStorageCalls::abi_decode, |call| match call {
            // View functions
            ISimpleStorageCalls::retrieve(call) => view(call, |_| self.retrieve()),
            ISimpleStorageCalls::nameToFavoriteNumber(call) => {
                view(call, |c| self.name_to_favorite_number(c))
            }

            // Mutate functions
            ISimpleStorageCalls::store(call) => mutate_void(call, msg_sender, |_, c| self.store(c)),
            ISimpleStorageCalls::addPerson(call) => {
                mutate_void(call, msg_sender, |_, c| self.add_person(c))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        SIMPLE_STORAGE_ADDRESS,
        storage::hashmap::HashMapStorageProvider,
        test_util::{assert_full_coverage, check_selector_coverage, expect_precompile_revert},
    };
    use alloy::{
        primitives::U256,
        sol_types::{SolCall, SolEvent},
    };
    use revm::precompile::PrecompileError;
    use simple_storage_contracts::precompiles::{ISimpleStorage, SimpleStorageError};

    #[test]
    fn test_function_selector_dispatch() -> eyre::Result<()> {
        let mut storage = HashMapStorageProvider::new();
        let mut simple_storage = SimpleStorage::new(&mut storage);
        simple_storage.initialize()?;

        let result = simple_storage.call(&[0x12, 0x34, 0x56, 0x78], Address::random());
        expect_precompile_revert(
            &result,
            SimpleStorageError::unknown_selector([0x12, 0x34, 0x56, 0x78]),
        );

        let result = simple_storage.call(&[0x12], Address::random());
        assert!(matches!(result, Err(PrecompileError::Other(_))));
        Ok(())
    }

    #[test]
    fn test_store_then_retrieve_dispatch() -> eyre::Result<()> {
        let mut storage = HashMapStorageProvider::new();
        let sender = Address::random();
        let mut simple_storage = SimpleStorage::new(&mut storage);
        simple_storage.initialize()?;

        let calldata = ISimpleStorage::storeCall {
            value: U256::from(42),
        }
        .abi_encode();
        let result = simple_storage.call(&calldata, sender)?;
        assert!(!result.reverted);
        assert_eq!(result.gas_used, 0);
        assert!(result.bytes.is_empty());

        let calldata = ISimpleStorage::retrieveCall {}.abi_encode();
        let result = simple_storage.call(&calldata, sender)?;
        assert_eq!(result.gas_used, 0);
        assert_eq!(
            ISimpleStorage::retrieveCall::abi_decode_returns(&result.bytes)?,
            U256::from(42)
        );

        let logs = storage.get_events(SIMPLE_STORAGE_ADDRESS);
        assert_eq!(logs.len(), 1);
        assert_eq!(
            ISimpleStorage::NumberStored::decode_log_data(&logs[0])?.value,
            U256::from(42)
        );
        Ok(())
    }

    #[test]
    fn test_add_person_dispatch() -> eyre::Result<()> {
        let mut storage = HashMapStorageProvider::new();
        let sender = Address::random();
        let mut simple_storage = SimpleStorage::new(&mut storage);
        simple_storage.initialize()?;

        let calldata = ISimpleStorage::addPersonCall {
            name: "Alice".to_string(),
            favoriteNumber: U256::from(7),
        }
        .abi_encode();
        let result = simple_storage.call(&calldata, sender)?;
        assert!(!result.reverted);

        let calldata = ISimpleStorage::nameToFavoriteNumberCall {
            name: "Alice".to_string(),
        }
        .abi_encode();
        let result = simple_storage.call(&calldata, sender)?;
        assert_eq!(
            ISimpleStorage::nameToFavoriteNumberCall::abi_decode_returns(&result.bytes)?,
            U256::from(7)
        );
        Ok(())
    }

    #[test]
    fn test_truncated_arguments_revert() -> eyre::Result<()> {
        let mut storage = HashMapStorageProvider::new();
        let mut simple_storage = SimpleStorage::new(&mut storage);
        simple_storage.initialize()?;

        let mut calldata = ISimpleStorage::storeCall {
            value: U256::from(42),
        }
        .abi_encode();
        calldata.truncate(20);

        let result = simple_storage.call(&calldata, Address::random())?;
        assert!(result.reverted);
        assert!(result.bytes.is_empty());
        assert_eq!(simple_storage.retrieve()?, U256::ZERO);
        Ok(())
    }

    #[test]
    fn test_storage_failure_is_fatal() {
        let mut storage = HashMapStorageProvider::new().with_failure("storage unavailable");
        let mut simple_storage = SimpleStorage::new(&mut storage);

        let calldata = ISimpleStorage::retrieveCall {}.abi_encode();
        let result = simple_storage.call(&calldata, Address::random());

        assert!(
            matches!(result, Err(PrecompileError::Other(msg)) if msg.contains("storage unavailable"))
        );
    }

    #[test]
    fn test_selector_coverage() -> eyre::Result<()> {
        let mut storage = HashMapStorageProvider::new();
        let mut simple_storage = SimpleStorage::new(&mut storage);
        simple_storage.initialize()?;

        let unsupported = check_selector_coverage(
            &mut simple_storage,
            ISimpleStorageCalls::SELECTORS,
            "ISimpleStorage",
            ISimpleStorageCalls::name_by_selector,
        );

        assert_full_coverage([unsupported]);
        Ok(())
    }
}
