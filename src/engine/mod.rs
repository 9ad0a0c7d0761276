pub mod engine;
pub use engine::*;

pub mod metrics;
pub use metrics::*;
