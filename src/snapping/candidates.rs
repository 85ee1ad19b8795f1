//! Candidate extraction from peer fields

use super::{AlignmentEngine, SnapDirection, SnapPoint};
use crate::geometry::{FieldId, FieldLayout};
use tracing::trace;

/// Everything a manipulated field can snap to, in peer order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnapCandidates {
    /// Top, center and bottom lines of each peer (constrain Y)
    pub horizontal: Vec<SnapPoint>,
    /// Left, center and right lines of each peer (constrain X)
    pub vertical: Vec<SnapPoint>,
    pub widths: Vec<f64>,
    pub heights: Vec<f64>,
}

impl AlignmentEngine {
    /// Collect snap points and peer sizes from every field except `exclude`
    pub fn candidates(&self, layout: &FieldLayout, exclude: Option<&FieldId>) -> SnapCandidates {
        let mut candidates = SnapCandidates::default();

        for field in layout.peers(exclude) {
            let bounds = &field.bounds;

            candidates.horizontal.extend([
                SnapPoint::edge(bounds.top(), SnapDirection::Horizontal),
                SnapPoint::center(bounds.center_y(), SnapDirection::Horizontal),
                SnapPoint::edge(bounds.bottom(), SnapDirection::Horizontal),
            ]);
            candidates.vertical.extend([
                SnapPoint::edge(bounds.left(), SnapDirection::Vertical),
                SnapPoint::center(bounds.center_x(), SnapDirection::Vertical),
                SnapPoint::edge(bounds.right(), SnapDirection::Vertical),
            ]);
            candidates.widths.push(bounds.width);
            candidates.heights.push(bounds.height);
        }

        trace!(
            "Extracted {} horizontal and {} vertical snap points",
            candidates.horizontal.len(),
            candidates.vertical.len()
        );
        candidates
    }
}
