//! Reading DTU documents.
//!
//! [`parse`] is the entry point; [`Node`] is the loosely-typed JSON view it
//! walks.

mod node;
mod parse;

pub use node::Node;
pub use parse::{parse, parse_str};
