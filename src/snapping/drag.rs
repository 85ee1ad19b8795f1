//! Drag snapping
//!
//! While a field is dragged only its position changes. Each axis snaps to
//! the first candidate (in peer order) that lies within the threshold of the
//! field's leading edge, trailing edge or center, checked in that order.

use super::{AlignmentEngine, SnapPoint};
use crate::geometry::{Field, FieldLayout};
use serde::Serialize;
use tracing::debug;

/// Snapped position of a dragged field and the guide that fired per axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SnapResult {
    pub x: f64,
    pub y: f64,
    /// Y of the horizontal guide, if the Y axis snapped
    pub horizontal_guide: Option<f64>,
    /// X of the vertical guide, if the X axis snapped
    pub vertical_guide: Option<f64>,
}

impl SnapResult {
    pub fn snapped(&self) -> bool {
        self.horizontal_guide.is_some() || self.vertical_guide.is_some()
    }
}

impl AlignmentEngine {
    /// Snap `moving` to its peers when proposed at `(new_x, new_y)`
    ///
    /// `moving` provides the size and the id to exclude; its current
    /// position is ignored.
    pub fn snapped_position(
        &self,
        layout: &FieldLayout,
        moving: &Field,
        new_x: f64,
        new_y: f64,
    ) -> SnapResult {
        let candidates = self.candidates(layout, Some(&moving.id));
        let size = &moving.bounds;

        let (y, horizontal_guide) =
            self.snap_axis(&candidates.horizontal, new_y, size.height);
        let (x, vertical_guide) = self.snap_axis(&candidates.vertical, new_x, size.width);

        if horizontal_guide.is_some() || vertical_guide.is_some() {
            debug!(
                "Drag snap for '{}': ({:.1}, {:.1}) -> ({:.1}, {:.1})",
                moving.id, new_x, new_y, x, y
            );
        }

        SnapResult {
            x,
            y,
            horizontal_guide,
            vertical_guide,
        }
    }

    /// First-match snapping of one axis
    ///
    /// `start` is the proposed top (or left) and `extent` the height (or
    /// width). Returns the adjusted start and the matched position.
    fn snap_axis(&self, points: &[SnapPoint], start: f64, extent: f64) -> (f64, Option<f64>) {
        let end = start + extent;
        let center = start + extent / 2.0;

        for point in points {
            let target = point.position;
            let snapped = if self.within(start, target) {
                target
            } else if self.within(end, target) {
                target - extent
            } else if self.within(center, target) {
                target - extent / 2.0
            } else {
                continue;
            };
            return (snapped, Some(target));
        }

        (start, None)
    }
}
