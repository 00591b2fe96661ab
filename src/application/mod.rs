//! Application layer - Use cases and application services
//!
//! Orchestrates the call and grid domains for the rendering layer and
//! publishes the resulting events.

pub mod call_grid;
pub mod events;

pub use call_grid::{CallGridService, CallGridSnapshot};
pub use events::{GridEvent, GridEventBroadcaster};
