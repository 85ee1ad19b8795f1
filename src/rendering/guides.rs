//! Snap guide lines
//!
//! Guides are drawn on a dedicated overlay layer through the [`GuideSurface`]
//! trait, so the same operations drive the in-memory [`Stage`] and the Bevy
//! overlay. Every show call clears the layer first: no guide survives from
//! one snap evaluation to the next.

use super::stage::{Layer, Stage, SNAP_GUIDE_LAYER};
use kurbo::{Line, Point};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Shortest dash drawn; anything positive below this is lengthened
pub const MIN_DASH_LENGTH: f64 = 0.5;

/// Visual style of guide lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideStyle {
    /// Hex color such as `#2563eb`
    pub color: String,
    pub stroke_width: f64,
    /// Dash length followed by gap length
    pub dash: [f64; 2],
}

impl Default for GuideStyle {
    fn default() -> Self {
        Self {
            color: "#2563eb".to_string(),
            stroke_width: 1.0,
            dash: [4.0, 4.0],
        }
    }
}

impl GuideStyle {
    /// Replace dash values the overlay cannot draw
    ///
    /// A dash of zero or less still means a solid line.
    pub fn sanitized(mut self) -> Self {
        let [dash, gap] = self.dash;
        let defaults = Self::default().dash;

        if !dash.is_finite() || !gap.is_finite() {
            warn!("Ignoring non-finite guide dash {:?}", self.dash);
            self.dash = defaults;
            return self;
        }
        if dash > 0.0 && dash < MIN_DASH_LENGTH {
            warn!(
                "Guide dash {} is shorter than {}px, using {}px",
                dash, MIN_DASH_LENGTH, MIN_DASH_LENGTH
            );
            self.dash[0] = MIN_DASH_LENGTH;
        }
        if gap < 0.0 {
            warn!("Negative guide gap {}, using 0", gap);
            self.dash[1] = 0.0;
        }
        self
    }
}

/// Which axis a guide line runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuideAxis {
    /// Full-width line at a fixed Y
    Horizontal,
    /// Full-height line at a fixed X
    Vertical,
}

/// One drawn guide, spanning the whole stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideLine {
    pub axis: GuideAxis,
    pub position: f64,
    pub line: Line,
    pub style: GuideStyle,
}

impl GuideLine {
    pub fn horizontal(y: f64, stage_width: f64, style: GuideStyle) -> Self {
        Self {
            axis: GuideAxis::Horizontal,
            position: y,
            line: Line::new(Point::new(0.0, y), Point::new(stage_width, y)),
            style,
        }
    }

    pub fn vertical(x: f64, stage_height: f64, style: GuideStyle) -> Self {
        Self {
            axis: GuideAxis::Vertical,
            position: x,
            line: Line::new(Point::new(x, 0.0), Point::new(x, stage_height)),
            style,
        }
    }
}

/// A drawing layer guide lines can be put on
pub trait GuideSurface {
    /// Remove every guide line
    fn clear(&mut self);
    fn add_line(&mut self, line: GuideLine);
    /// Ask the host to repaint the layer
    fn redraw(&mut self);
    fn line_count(&self) -> usize;
    /// Style used for lines created on this surface
    fn style(&self) -> &GuideStyle;
}

/// Replace any existing snap guide layer of `stage` with a fresh one
///
/// Calling it again on the same stage never leaves more than one guide layer
/// attached.
pub fn initialize_snap_guides(stage: &mut Stage) -> &mut Layer {
    let removed = stage.remove_layers_named(SNAP_GUIDE_LAYER);
    if removed > 0 {
        debug!("Removed {} stale snap guide layer(s)", removed);
    }
    let layer = Layer::new(SNAP_GUIDE_LAYER, stage.guide_style().clone());
    stage.add_layer(layer)
}

/// Show at most one guide per axis
///
/// A guide is only drawn when both its position and the matching stage
/// extent are known. A missing layer is ignored.
pub fn show_snap_guides<S: GuideSurface + ?Sized>(
    layer: Option<&mut S>,
    horizontal_guide: Option<f64>,
    vertical_guide: Option<f64>,
    stage_width: Option<f64>,
    stage_height: Option<f64>,
) {
    let Some(layer) = layer else {
        return;
    };

    layer.clear();
    if let (Some(y), Some(width)) = (horizontal_guide, stage_width) {
        let line = GuideLine::horizontal(y, width, layer.style().clone());
        layer.add_line(line);
    }
    if let (Some(x), Some(height)) = (vertical_guide, stage_height) {
        let line = GuideLine::vertical(x, height, layer.style().clone());
        layer.add_line(line);
    }
    trace!("Showing {} snap guide(s)", layer.line_count());
    layer.redraw();
}

/// Show one guide per entry of each list (resize results)
pub fn show_multiple_snap_guides<S: GuideSurface + ?Sized>(
    layer: Option<&mut S>,
    horizontal_guides: &[f64],
    vertical_guides: &[f64],
    stage_width: f64,
    stage_height: f64,
) {
    let Some(layer) = layer else {
        return;
    };

    layer.clear();
    for &y in horizontal_guides {
        let line = GuideLine::horizontal(y, stage_width, layer.style().clone());
        layer.add_line(line);
    }
    for &x in vertical_guides {
        let line = GuideLine::vertical(x, stage_height, layer.style().clone());
        layer.add_line(line);
    }
    trace!("Showing {} snap guide(s)", layer.line_count());
    layer.redraw();
}

/// Remove all guides, typically on pointer release
pub fn hide_snap_guides<S: GuideSurface + ?Sized>(layer: Option<&mut S>) {
    let Some(layer) = layer else {
        return;
    };
    layer.clear();
    layer.redraw();
}
