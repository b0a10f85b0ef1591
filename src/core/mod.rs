//! Core layer - the typed material model.
//!
//! This module provides:
//! - [`Value`] / [`ValueType`] - Typed property values and their declared tags
//! - [`Property`] - Named value with optional texture reference
//! - [`Material`] - Ordered properties with name lookup and fallbacks
//! - [`Document`] - Asset metadata and its materials

mod value;
mod property;
mod material;
mod document;

pub use value::{Value, ValueType};
pub use property::Property;
pub use material::Material;
pub use document::{Document, DocumentState};
