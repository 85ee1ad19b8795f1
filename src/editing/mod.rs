//! Editing Functionality
//!
//! Pointer-driven field placement for the preview editor: picking a field,
//! dragging or resizing it with snapping, and placing it on release.

pub mod field_drag;

// Re-export commonly used items
pub use field_drag::{FieldDragState, FieldEditingPlugin, PreviewLayout};
