//! Geometric primitives for field placement

pub mod rect;

// Re-export commonly used items
pub use rect::{Field, FieldId, FieldLayout, Rectangle};
