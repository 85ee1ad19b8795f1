//! Rendering of snap guides
//!
//! - Guide line operations over any [`GuideSurface`]
//! - An in-memory stage with named layers
//! - The Bevy overlay that draws guides with gizmos

pub mod guides;
pub mod overlay;
pub mod stage;

// Re-export commonly used items
pub use guides::{
    hide_snap_guides, initialize_snap_guides, show_multiple_snap_guides, show_snap_guides,
    GuideAxis, GuideLine, GuideStyle, GuideSurface,
};
pub use overlay::{GuideOverlay, SnapGuidePlugin};
pub use stage::{Layer, Stage, SNAP_GUIDE_LAYER};
