//! Resize snapping
//!
//! Resizing snaps the size, not the position: width and height each take
//! the first peer size within the threshold. Afterwards every peer line that
//! happens to sit near one of the resulting edges is reported as a guide,
//! so several guides per axis can be active at once.

use super::{AlignmentEngine, SnapPoint};
use crate::geometry::{FieldId, FieldLayout, Rectangle};
use serde::Serialize;
use tracing::debug;

/// Snapped box of a resized field and every guide touching its edges
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResizeSnapResult {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub horizontal_guides: Vec<f64>,
    pub vertical_guides: Vec<f64>,
}

impl ResizeSnapResult {
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(self.x, self.y, self.width, self.height)
    }
}

impl AlignmentEngine {
    /// Snap the size of field `id` when resized to the proposed box
    ///
    /// `new_x` and `new_y` are passed through unchanged.
    pub fn snapped_resize(
        &self,
        layout: &FieldLayout,
        id: &FieldId,
        new_x: f64,
        new_y: f64,
        new_width: f64,
        new_height: f64,
    ) -> ResizeSnapResult {
        let candidates = self.candidates(layout, Some(id));

        let width = self.first_size_match(&candidates.widths, new_width);
        let height = self.first_size_match(&candidates.heights, new_height);
        let bounds = Rectangle::new(new_x, new_y, width, height);

        let horizontal_guides =
            self.touching_guides(&candidates.horizontal, bounds.top(), bounds.bottom());
        let vertical_guides =
            self.touching_guides(&candidates.vertical, bounds.left(), bounds.right());

        if width != new_width || height != new_height {
            debug!(
                "Resize snap for '{}': {:.1}x{:.1} -> {:.1}x{:.1}",
                id, new_width, new_height, width, height
            );
        }

        ResizeSnapResult {
            x: new_x,
            y: new_y,
            width,
            height,
            horizontal_guides,
            vertical_guides,
        }
    }

    fn first_size_match(&self, sizes: &[f64], proposed: f64) -> f64 {
        sizes
            .iter()
            .copied()
            .find(|&size| self.within(proposed, size))
            .unwrap_or(proposed)
    }

    /// Positions of every point near either edge, one entry per point
    fn touching_guides(&self, points: &[SnapPoint], start: f64, end: f64) -> Vec<f64> {
        points
            .iter()
            .filter(|point| self.within(start, point.position) || self.within(end, point.position))
            .map(|point| point.position)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_matching_width_wins() {
        let engine = AlignmentEngine::new(10.0);
        let mut layout = FieldLayout::new();
        layout.insert("a", Rectangle::new(0.0, 500.0, 104.0, 30.0));
        layout.insert("b", Rectangle::new(0.0, 600.0, 100.0, 30.0));
        layout.insert("self", Rectangle::new(300.0, 0.0, 80.0, 80.0));

        let result = engine.snapped_resize(&layout, &"self".into(), 300.0, 0.0, 101.0, 80.0);
        assert_eq!(result.width, 104.0);
    }

    #[test]
    fn test_width_and_height_snap_independently() {
        let engine = AlignmentEngine::new(10.0);
        let mut layout = FieldLayout::new();
        layout.insert("wide", Rectangle::new(0.0, 500.0, 200.0, 10.0));
        layout.insert("tall", Rectangle::new(500.0, 500.0, 10.0, 150.0));

        let result = engine.snapped_resize(&layout, &"self".into(), 1000.0, 0.0, 195.0, 70.0);
        assert_eq!(result.width, 200.0);
        assert_eq!(result.height, 70.0);
        assert_eq!((result.x, result.y), (1000.0, 0.0));
    }

    #[test]
    fn test_guides_follow_snapped_size() {
        let engine = AlignmentEngine::new(2.0);
        let mut layout = FieldLayout::new();
        // Peer bottom at 50; its height (50) also becomes the snapped height
        layout.insert("peer", Rectangle::new(500.0, 0.0, 10.0, 50.0));

        let result = engine.snapped_resize(&layout, &"self".into(), 0.0, 0.0, 40.0, 48.5);
        assert_eq!(result.height, 50.0);
        assert_eq!(result.horizontal_guides, vec![0.0, 50.0]);
        assert!(result.vertical_guides.is_empty());
    }

    #[test]
    fn test_center_lines_can_report_guides() {
        let engine = AlignmentEngine::new(3.0);
        let mut layout = FieldLayout::new();
        layout.insert("peer", Rectangle::new(0.0, 100.0, 10.0, 40.0));

        // Resized box bottom at 121 sits 1 px from the peer center (120)
        let result = engine.snapped_resize(&layout, &"self".into(), 300.0, 0.0, 90.0, 121.0);
        assert_eq!(result.horizontal_guides, vec![120.0]);
    }
}
