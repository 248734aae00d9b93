pub mod seed;
pub mod snapshot;
pub mod types;

pub use snapshot::{AggregateSnapshot, Analytics};
pub use types::*;
