pub mod catalog;
pub mod config;
mod error;
pub mod observability;
pub mod snapshot;

pub use error::*;
pub use snapshot::Snapshot;
