//! Domain layer - Core rules of the call grid
//!
//! This layer contains:
//! - Value Objects: participant states, presentation modes, geometry
//! - Entities: call participants and their streams
//! - Domain Services: stream selection and grid planning
//! - Ports: the roster provided by the call session

pub mod call;
pub mod grid;
pub mod shared;

// Re-export commonly used types
pub use shared::{DomainError, Result};
