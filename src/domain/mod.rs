//! Domain types for the tool collection.

mod tool;

pub use tool::{Field, ToolEntry, ToolFields};
