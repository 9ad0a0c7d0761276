pub mod archetype;
pub use archetype::*;

pub mod classify;
pub use classify::*;

pub mod filter;
pub use filter::*;

pub mod table;
pub use table::*;
