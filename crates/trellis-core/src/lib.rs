//! Component tree model, template registry, and validation for the Trellis
//! visual editor.
//!
//! This crate provides the foundational types shared by the code generator:
//! - `VisualComponent` nodes and their lifecycle operations
//! - Tree queries, geometry, search and statistics over flat component lists
//! - The built-in template registry and the validator driven by it
//! - JSON import/export of component lists

pub mod errors;
pub mod json;
pub mod model;
pub mod search;
pub mod templates;
pub mod tree;
pub mod validate;

pub use errors::*;
pub use json::*;
pub use model::*;
pub use search::*;
pub use templates::*;
pub use tree::*;
pub use validate::*;
