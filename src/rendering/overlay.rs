//! Bevy overlay for snap guides
//!
//! [`GuideOverlay`] is the editor's guide layer. It only stores lines; the
//! `draw_snap_guides` system turns them into dashed gizmo lines every frame.

use super::guides::{GuideLine, GuideStyle, GuideSurface};
use bevy::color::Srgba;
use bevy::gizmos::config::{DefaultGizmoConfigGroup, GizmoConfigStore};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Fallback for unparsable style colors
const GUIDE_FALLBACK_COLOR: Color = Color::srgb(0.145, 0.388, 0.922);

/// Guide layer of the Bevy editor
#[derive(Resource, Debug, Clone, Default)]
pub struct GuideOverlay {
    lines: Vec<GuideLine>,
    style: GuideStyle,
    generation: u64,
}

impl GuideOverlay {
    pub fn new(style: GuideStyle) -> Self {
        Self {
            style,
            ..default()
        }
    }

    pub fn lines(&self) -> &[GuideLine] {
        &self.lines
    }

    /// Bumped on every redraw request
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl GuideSurface for GuideOverlay {
    fn clear(&mut self) {
        self.lines.clear();
    }

    fn add_line(&mut self, line: GuideLine) {
        self.lines.push(line);
    }

    fn redraw(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn style(&self) -> &GuideStyle {
        &self.style
    }
}

/// Plugin drawing the guide overlay
pub struct SnapGuidePlugin {
    pub style: GuideStyle,
}

impl Plugin for SnapGuidePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(GuideOverlay::new(self.style.clone()))
            .add_systems(Startup, configure_guide_gizmos)
            .add_systems(Update, draw_snap_guides);
    }
}

fn configure_guide_gizmos(mut gizmo_store: ResMut<GizmoConfigStore>, overlay: Res<GuideOverlay>) {
    let (config, _) = gizmo_store.config_mut::<DefaultGizmoConfigGroup>();
    config.line.width = overlay.style.stroke_width as f32;
    debug!("Configured guide line width to {}px", config.line.width);
}

/// Draw every guide of the overlay as a dashed line
pub fn draw_snap_guides(
    overlay: Res<GuideOverlay>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut gizmos: Gizmos,
) {
    if overlay.lines.is_empty() {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let stage_size = Vec2::new(window.width(), window.height());

    for guide in &overlay.lines {
        let color = guide_color(&guide.style);
        let start = stage_to_world(guide.line.p0, stage_size);
        let end = stage_to_world(guide.line.p1, stage_size);
        let [dash, gap] = guide.style.dash;
        for (a, b) in dash_segments(start, end, dash as f32, gap as f32) {
            gizmos.line_2d(a, b, color);
        }
    }
}

/// Stage pixels (top-left origin, y down) to the world space of a centered
/// `Camera2d` at scale 1
pub fn stage_to_world(point: kurbo::Point, stage_size: Vec2) -> Vec2 {
    Vec2::new(
        point.x as f32 - stage_size.x / 2.0,
        stage_size.y / 2.0 - point.y as f32,
    )
}

/// Inverse of [`stage_to_world`]
pub fn world_to_stage(point: Vec2, stage_size: Vec2) -> kurbo::Point {
    kurbo::Point::new(
        (point.x + stage_size.x / 2.0) as f64,
        (stage_size.y / 2.0 - point.y) as f64,
    )
}

pub fn guide_color(style: &GuideStyle) -> Color {
    Srgba::hex(&style.color)
        .map(Color::from)
        .unwrap_or(GUIDE_FALLBACK_COLOR)
}

/// Upper bound on dashes per guide line
pub const MAX_DASH_SEGMENTS: usize = 4096;

/// Split a line into dash segments; a non-positive dash gives a solid line
pub fn dash_segments(start: Vec2, end: Vec2, dash: f32, gap: f32) -> Vec<(Vec2, Vec2)> {
    let total_length = start.distance(end);
    if total_length <= f32::EPSILON {
        return Vec::new();
    }
    if dash <= 0.0 || !dash.is_finite() {
        return vec![(start, end)];
    }

    let direction = (end - start) / total_length;
    let segment_length = dash + gap.max(0.0);
    if !segment_length.is_finite() {
        return vec![(start, end)];
    }
    let count = ((total_length / segment_length).ceil() as usize).min(MAX_DASH_SEGMENTS);

    (0..count)
        .map(|i| {
            let dash_start = i as f32 * segment_length;
            let dash_end = (dash_start + dash).min(total_length);
            (start + direction * dash_start, start + direction * dash_end)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::{hide_snap_guides, show_multiple_snap_guides, show_snap_guides};

    #[test]
    fn test_overlay_resource_receives_guides() {
        let mut app = App::new();
        app.insert_resource(GuideOverlay::new(GuideStyle::default()));

        {
            let mut overlay = app.world_mut().resource_mut::<GuideOverlay>();
            show_snap_guides(
                Some(&mut *overlay),
                Some(12.0),
                None,
                Some(640.0),
                Some(480.0),
            );
        }

        let overlay = app.world().resource::<GuideOverlay>();
        assert_eq!(overlay.line_count(), 1);
        assert_eq!(overlay.generation(), 1);
    }

    #[test]
    fn test_overlay_hide_after_resize_guides() {
        let mut overlay = GuideOverlay::default();
        show_multiple_snap_guides(Some(&mut overlay), &[0.0, 50.0], &[10.0], 640.0, 480.0);
        assert_eq!(overlay.lines().len(), 3);

        hide_snap_guides(Some(&mut overlay));
        assert!(overlay.lines().is_empty());
        assert_eq!(overlay.generation(), 2);
    }

    #[test]
    fn test_stage_world_round_trip_corners() {
        let size = Vec2::new(800.0, 600.0);
        assert_eq!(stage_to_world(kurbo::Point::new(0.0, 0.0), size), Vec2::new(-400.0, 300.0));
        assert_eq!(
            world_to_stage(Vec2::new(400.0, -300.0), size),
            kurbo::Point::new(800.0, 600.0)
        );
    }

    #[test]
    fn test_dash_segments() {
        let segments = dash_segments(Vec2::ZERO, Vec2::new(20.0, 0.0), 4.0, 4.0);
        // Dashes start at 0, 8 and 16; the last one is cut at the line end
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[2], (Vec2::new(16.0, 0.0), Vec2::new(20.0, 0.0)));

        assert_eq!(dash_segments(Vec2::ZERO, Vec2::ZERO, 4.0, 4.0).len(), 0);
        assert_eq!(dash_segments(Vec2::ZERO, Vec2::X, 0.0, 4.0).len(), 1);
    }

    #[test]
    fn test_tiny_dash_is_bounded() {
        let end = Vec2::new(800.0, 0.0);
        let segments = dash_segments(Vec2::ZERO, end, 0.00001, 0.0);
        assert_eq!(segments.len(), MAX_DASH_SEGMENTS);

        // Half-pixel dashes over 800 px stay under the cap
        assert_eq!(dash_segments(Vec2::ZERO, end, 0.5, 0.0).len(), 1600);
        assert_eq!(dash_segments(Vec2::ZERO, end, f32::NAN, 4.0), vec![(Vec2::ZERO, end)]);
    }

    #[test]
    fn test_guide_color_falls_back() {
        let style = GuideStyle {
            color: "not-a-color".to_string(),
            ..GuideStyle::default()
        };
        assert_eq!(guide_color(&style), GUIDE_FALLBACK_COLOR);
    }
}
