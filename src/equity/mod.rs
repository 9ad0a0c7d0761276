pub mod exact;
pub use exact::*;

pub mod method;
pub use method::*;

pub mod montecarlo;
pub use montecarlo::*;

pub mod query;
pub use query::*;

pub mod result;
pub use result::*;

pub mod seed;

pub mod solve;
pub use solve::*;

pub mod tally;
pub use tally::*;
