//! Alignment engine
//!
//! Snaps a dragged or resized field to the edges, centers and sizes of its
//! peers. Every query is a pure function of the layout passed in: nothing
//! is cached between calls, so repeated queries during a drag are cheap to
//! reason about and always agree with the current layout.

pub mod candidates;
pub mod drag;
pub mod resize;

use serde::{Deserialize, Serialize};

pub use candidates::SnapCandidates;
pub use drag::SnapResult;
pub use resize::ResizeSnapResult;

/// Default snapping distance in stage pixels
pub const SNAP_THRESHOLD: f64 = 10.0;

/// Whether a snap point comes from a box edge or its center line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapKind {
    Edge,
    Center,
}

/// Orientation of the line a snap point describes
///
/// A `Horizontal` snap point is a horizontal line, so it constrains Y.
/// A `Vertical` snap point constrains X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapDirection {
    Horizontal,
    Vertical,
}

/// A single coordinate a manipulated field can align to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapPoint {
    pub position: f64,
    pub kind: SnapKind,
    pub direction: SnapDirection,
}

impl SnapPoint {
    pub fn edge(position: f64, direction: SnapDirection) -> Self {
        Self {
            position,
            kind: SnapKind::Edge,
            direction,
        }
    }

    pub fn center(position: f64, direction: SnapDirection) -> Self {
        Self {
            position,
            kind: SnapKind::Center,
            direction,
        }
    }
}

/// Snapping engine configured with a threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentEngine {
    threshold: f64,
}

impl Default for AlignmentEngine {
    fn default() -> Self {
        Self::new(SNAP_THRESHOLD)
    }
}

impl AlignmentEngine {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Inclusive distance check shared by every snapping rule
    pub(crate) fn within(&self, value: f64, target: f64) -> bool {
        (value - target).abs() <= self.threshold
    }
}
