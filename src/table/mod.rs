pub mod slot;
pub use slot::*;

pub mod table;
pub use table::*;
