mod slot;
pub use slot::*;

mod mapping;
pub use mapping::*;
