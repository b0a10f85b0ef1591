//! # DTU
//!
//! Typed reader for DTU documents, the JSON interchange files written by
//! Daz Studio bridge exporters. A document describes one asset and its
//! surface materials; every material carries an open-ended set of named
//! shading properties whose value encoding depends on a declared data type.
//!
//! ## Modules
//!
//! - [`util`] - Errors and color utilities
//! - [`core`] - Typed model: Value, Property, Material, Document
//! - [`reader`] - JSON tree view and the document parser
//!
//! ## Example
//!
//! ```no_run
//! use dtu::{parse, Value};
//!
//! let doc = parse("Genesis8Female.dtu")?;
//! for mat in &doc.materials {
//!     let roughness = mat.get_or("Glossy Roughness", Value::Double(0.5));
//!     println!("{}: {}", mat.material_name, roughness.float());
//! }
//! # Ok::<(), dtu::Error>(())
//! ```

pub mod util;
pub mod core;
pub mod reader;

// Re-export commonly used types
pub use util::{Error, Result};
pub use crate::core::{Document, DocumentState, Material, Property, Value, ValueType};
pub use reader::{parse, parse_str};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::util::{Error, Result, Vec4};
    pub use crate::core::{Document, DocumentState, Material, Property, Value, ValueType};
    pub use crate::reader::{parse, parse_str, Node};
}
