//! Infrastructure layer - adapters for the domain ports and metrics

pub mod metrics;
pub mod roster;

pub use roster::InMemoryRoster;
