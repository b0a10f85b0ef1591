//! Utility types and functions for DTU reading.
//!
//! - [`Error`] / [`Result`] - Error handling
//! - [`color`] - HTML color parsing and color strength

pub mod color;
mod error;

pub use error::*;
pub use glam::Vec4;
