//! Field drag and resize handling for the preview editor
//!
//! Pointer press picks a field (or its resize handle), every frame while the
//! button is held the field is snapped and the guides redrawn, and release
//! hides the guides again.

use crate::core::settings::{SnapSettings, RESIZE_HANDLE_SIZE};
use crate::geometry::{FieldId, FieldLayout, Rectangle};
use crate::rendering::overlay::stage_to_world;
use crate::rendering::{
    hide_snap_guides, show_multiple_snap_guides, show_snap_guides, GuideOverlay, GuideSurface,
};
use crate::snapping::AlignmentEngine;
use bevy::log::{debug, info};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use kurbo::Point;

/// The layout being edited
#[derive(Resource, Debug, Clone, Default)]
pub struct PreviewLayout {
    pub fields: FieldLayout,
}

/// What a pointer drag does to the picked field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    Move,
    Resize,
}

/// An in-progress drag
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveDrag {
    pub field: FieldId,
    pub mode: DragMode,
    /// Pointer position at press time
    pub start_pointer: Point,
    /// Field bounds at press time
    pub start_bounds: Rectangle,
}

/// Resource to track the field drag, at most one at a time
#[derive(Resource, Debug, Default)]
pub struct FieldDragState {
    pub active: Option<ActiveDrag>,
}

/// Square handle centered on the bottom-right corner of `bounds`
pub fn resize_handle(bounds: &Rectangle) -> Rectangle {
    let half = RESIZE_HANDLE_SIZE / 2.0;
    Rectangle::new(
        bounds.right() - half,
        bounds.bottom() - half,
        RESIZE_HANDLE_SIZE,
        RESIZE_HANDLE_SIZE,
    )
}

/// Field under the pointer, topmost (last in layout order) first
pub fn hit_test(layout: &FieldLayout, pointer: Point) -> Option<(FieldId, DragMode)> {
    layout.iter().rev().find_map(|field| {
        if resize_handle(&field.bounds).contains(pointer) {
            Some((field.id.clone(), DragMode::Resize))
        } else if field.bounds.contains(pointer) {
            Some((field.id.clone(), DragMode::Move))
        } else {
            None
        }
    })
}

/// Start a drag if the pointer is over a field
pub fn begin_drag(layout: &FieldLayout, pointer: Point) -> Option<ActiveDrag> {
    let (field, mode) = hit_test(layout, pointer)?;
    let start_bounds = layout.get(&field)?.bounds;
    Some(ActiveDrag {
        field,
        mode,
        start_pointer: pointer,
        start_bounds,
    })
}

/// Snap the dragged field to `pointer`, apply the result to the layout and
/// show the guides that fired
pub fn update_drag<S: GuideSurface + ?Sized>(
    engine: &AlignmentEngine,
    layout: &mut FieldLayout,
    drag: &ActiveDrag,
    pointer: Point,
    guides: &mut S,
    stage_size: (f64, f64),
) -> Option<Rectangle> {
    let delta = pointer - drag.start_pointer;
    let (stage_width, stage_height) = stage_size;

    let bounds = match drag.mode {
        DragMode::Move => {
            let moving = layout.get(&drag.field)?.clone();
            let result = engine.snapped_position(
                layout,
                &moving,
                drag.start_bounds.x + delta.x,
                drag.start_bounds.y + delta.y,
            );
            show_snap_guides(
                Some(guides),
                result.horizontal_guide,
                result.vertical_guide,
                Some(stage_width),
                Some(stage_height),
            );
            drag.start_bounds.with_origin(result.x, result.y)
        }
        DragMode::Resize => {
            let start = &drag.start_bounds;
            let result = engine.snapped_resize(
                layout,
                &drag.field,
                start.x,
                start.y,
                (start.width + delta.x).max(RESIZE_HANDLE_SIZE),
                (start.height + delta.y).max(RESIZE_HANDLE_SIZE),
            );
            show_multiple_snap_guides(
                Some(guides),
                &result.horizontal_guides,
                &result.vertical_guides,
                stage_width,
                stage_height,
            );
            result.bounds()
        }
    };

    *layout.bounds_mut(&drag.field)? = bounds;
    Some(bounds)
}

/// Plugin wiring pointer input to the snapping engine
pub struct FieldEditingPlugin;

impl Plugin for FieldEditingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FieldDragState>()
            .init_resource::<PreviewLayout>()
            .add_systems(
                Update,
                (
                    handle_field_press,
                    handle_field_drag,
                    handle_field_release,
                    draw_fields,
                )
                    .chain(),
            );
    }
}

fn cursor_in_stage(windows: &Query<&Window, With<PrimaryWindow>>) -> Option<(Point, (f64, f64))> {
    let window = windows.single().ok()?;
    // Window coordinates already match stage space: top-left origin, y down
    let cursor = window.cursor_position()?;
    Some((
        Point::new(cursor.x as f64, cursor.y as f64),
        (window.width() as f64, window.height() as f64),
    ))
}

/// System to start a drag on left press
pub fn handle_field_press(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    layout: Res<PreviewLayout>,
    mut drag_state: ResMut<FieldDragState>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Some((pointer, _)) = cursor_in_stage(&windows) else {
        return;
    };

    drag_state.active = begin_drag(&layout.fields, pointer);
    if let Some(drag) = &drag_state.active {
        debug!("Started {:?} of field '{}'", drag.mode, drag.field);
    }
}

/// System to snap the dragged field while the button is held
pub fn handle_field_drag(
    windows: Query<&Window, With<PrimaryWindow>>,
    settings: Res<SnapSettings>,
    drag_state: Res<FieldDragState>,
    mut layout: ResMut<PreviewLayout>,
    mut overlay: ResMut<GuideOverlay>,
) {
    let Some(drag) = &drag_state.active else {
        return;
    };
    let Some((pointer, stage_size)) = cursor_in_stage(&windows) else {
        return;
    };

    update_drag(
        &settings.engine(),
        &mut layout.fields,
        drag,
        pointer,
        &mut *overlay,
        stage_size,
    );
}

/// System to end the drag and hide the guides on release
pub fn handle_field_release(
    mouse: Res<ButtonInput<MouseButton>>,
    layout: Res<PreviewLayout>,
    mut drag_state: ResMut<FieldDragState>,
    mut overlay: ResMut<GuideOverlay>,
) {
    if !mouse.just_released(MouseButton::Left) {
        return;
    }
    let Some(drag) = drag_state.active.take() else {
        return;
    };

    hide_snap_guides(Some(&mut *overlay));
    if let Some(field) = layout.fields.get(&drag.field) {
        let b = field.bounds;
        info!(
            "Placed '{}' at ({:.1}, {:.1}) size {:.1}x{:.1}",
            field.id, b.x, b.y, b.width, b.height
        );
    }
}

/// Draw field outlines and their resize handles
pub fn draw_fields(
    layout: Res<PreviewLayout>,
    drag_state: Res<FieldDragState>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut gizmos: Gizmos,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let stage_size = Vec2::new(window.width(), window.height());
    let active = drag_state.active.as_ref().map(|drag| &drag.field);

    for field in layout.fields.iter() {
        let color = if active == Some(&field.id) {
            Color::srgb(0.98, 0.62, 0.18)
        } else {
            Color::srgb(0.75, 0.75, 0.78)
        };
        draw_rect(&mut gizmos, &field.bounds, stage_size, color);
        draw_rect(&mut gizmos, &resize_handle(&field.bounds), stage_size, color);
    }
}

fn draw_rect(gizmos: &mut Gizmos, bounds: &Rectangle, stage_size: Vec2, color: Color) {
    let center = stage_to_world(Point::new(bounds.center_x(), bounds.center_y()), stage_size);
    let size = Vec2::new(bounds.width.abs() as f32, bounds.height.abs() as f32);
    gizmos.rect_2d(bevy::math::Isometry2d::from_translation(center), size, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::{GuideAxis, GuideStyle, Layer};

    fn layout() -> FieldLayout {
        let mut layout = FieldLayout::new();
        layout.insert("signature", Rectangle::new(0.0, 0.0, 100.0, 50.0));
        layout.insert("date", Rectangle::new(300.0, 200.0, 80.0, 30.0));
        layout
    }

    #[test]
    fn test_hit_test_prefers_handle_and_topmost() {
        let mut layout = layout();
        assert_eq!(
            hit_test(&layout, Point::new(10.0, 10.0)),
            Some((FieldId::new("signature"), DragMode::Move))
        );
        assert_eq!(
            hit_test(&layout, Point::new(101.0, 51.0)),
            Some((FieldId::new("signature"), DragMode::Resize))
        );
        assert_eq!(hit_test(&layout, Point::new(200.0, 150.0)), None);

        // An overlapping field added later sits on top
        layout.insert("overlay", Rectangle::new(5.0, 5.0, 20.0, 20.0));
        assert_eq!(
            hit_test(&layout, Point::new(10.0, 10.0)).map(|(id, _)| id),
            Some(FieldId::new("overlay"))
        );
    }

    #[test]
    fn test_move_drag_snaps_and_shows_guide() {
        let mut layout = layout();
        let engine = AlignmentEngine::new(10.0);
        let mut guides = Layer::new("snap-guides", GuideStyle::default());

        let drag = begin_drag(&layout, Point::new(320.0, 220.0)).expect("drag");
        assert_eq!(drag.mode, DragMode::Move);

        // Move the date field up by 196: its top lands 4 px below the signature top
        let bounds = update_drag(
            &engine,
            &mut layout,
            &drag,
            Point::new(320.0, 24.0),
            &mut guides,
            (800.0, 600.0),
        )
        .expect("bounds");

        assert_eq!(bounds, Rectangle::new(300.0, 0.0, 80.0, 30.0));
        assert_eq!(layout.get(&FieldId::new("date")).map(|f| f.bounds), Some(bounds));
        assert_eq!(guides.line_count(), 1);
        assert_eq!(guides.lines()[0].axis, GuideAxis::Horizontal);
    }

    #[test]
    fn test_resize_drag_snaps_width() {
        let mut layout = layout();
        let engine = AlignmentEngine::new(10.0);
        let mut guides = Layer::new("snap-guides", GuideStyle::default());

        let drag = begin_drag(&layout, Point::new(380.0, 230.0)).expect("drag");
        assert_eq!(drag.mode, DragMode::Resize);

        let bounds = update_drag(
            &engine,
            &mut layout,
            &drag,
            Point::new(396.0, 230.0),
            &mut guides,
            (800.0, 600.0),
        )
        .expect("bounds");

        // 80 + 16 = 96 is within 10 px of the signature width (100)
        assert_eq!(bounds.width, 100.0);
        assert_eq!(bounds.height, 30.0);
        assert_eq!((bounds.x, bounds.y), (300.0, 200.0));
    }

    #[test]
    fn test_unknown_field_is_left_alone() {
        let mut layout = layout();
        let engine = AlignmentEngine::default();
        let mut guides = Layer::new("snap-guides", GuideStyle::default());
        let drag = ActiveDrag {
            field: FieldId::new("gone"),
            mode: DragMode::Move,
            start_pointer: Point::ZERO,
            start_bounds: Rectangle::default(),
        };

        assert!(update_drag(&engine, &mut layout, &drag, Point::ZERO, &mut guides, (1.0, 1.0))
            .is_none());
        assert_eq!(layout, self::layout());
    }
}
