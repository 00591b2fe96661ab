//! CallGrid - stream arrangement and grid layout for video calls
//!
//! Decides which call participants are shown, in what order, whether the
//! local user sits in the grid or in a floating preview, and how the grid is
//! split into pages and cells. Rendering is left to the caller.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use domain::shared::error::{DomainError, Result};
