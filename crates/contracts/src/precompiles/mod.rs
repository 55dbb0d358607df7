pub mod simple_storage;

pub use simple_storage::*;

use alloy_primitives::{Address, address};

pub const SIMPLE_STORAGE_ADDRESS: Address = address!("0x5700000000000000000000000000000000000000");
