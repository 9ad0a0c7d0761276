pub mod key;
pub use key::*;

pub mod lru;
pub use lru::*;

pub mod shared;
pub use shared::*;
