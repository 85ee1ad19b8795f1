//! Field rectangles and the caller-owned layout they live in
//!
//! All coordinates are stage pixels with the origin in the top-left corner
//! and Y growing downwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An axis-aligned box, stored as origin plus size
///
/// Sizes are not normalized, so a negative width simply produces a `right`
/// edge left of `left`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Center on the X axis (the vertical center line)
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Center on the Y axis (the horizontal center line)
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Same size, new origin
    pub fn with_origin(self, x: f64, y: f64) -> Self {
        Self { x, y, ..self }
    }

    /// Normalized kurbo rect, used for hit testing
    pub fn to_kurbo(&self) -> kurbo::Rect {
        kurbo::Rect::new(self.left(), self.top(), self.right(), self.bottom()).abs()
    }

    pub fn contains(&self, point: kurbo::Point) -> bool {
        self.to_kurbo().contains(point)
    }
}

/// Opaque identifier of a placed field
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(pub String);

impl FieldId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One placed field: its id and bounding box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: FieldId,
    #[serde(flatten)]
    pub bounds: Rectangle,
}

impl Field {
    pub fn new(id: impl Into<FieldId>, bounds: Rectangle) -> Self {
        Self {
            id: id.into(),
            bounds,
        }
    }
}

/// Ordered id -> rectangle mapping owned by the editor
///
/// Order matters: every "first match wins" rule of the snapping engine
/// follows the order fields were inserted in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldLayout {
    fields: Vec<Field>,
}

impl FieldLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, or replace the bounds of an existing one in place
    pub fn insert(&mut self, id: impl Into<FieldId>, bounds: Rectangle) {
        let id = id.into();
        match self.fields.iter_mut().find(|field| field.id == id) {
            Some(existing) => existing.bounds = bounds,
            None => self.fields.push(Field { id, bounds }),
        }
    }

    pub fn get(&self, id: &FieldId) -> Option<&Field> {
        self.fields.iter().find(|field| &field.id == id)
    }

    pub fn bounds_mut(&mut self, id: &FieldId) -> Option<&mut Rectangle> {
        self.fields
            .iter_mut()
            .find(|field| &field.id == id)
            .map(|field| &mut field.bounds)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Field> {
        self.fields.iter()
    }

    /// Every field except `exclude`; `None` keeps them all
    pub fn peers<'a>(&'a self, exclude: Option<&'a FieldId>) -> impl Iterator<Item = &'a Field> {
        self.fields
            .iter()
            .filter(move |field| exclude != Some(&field.id))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<Field> for FieldLayout {
    fn from_iter<T: IntoIterator<Item = Field>>(iter: T) -> Self {
        let mut layout = FieldLayout::new();
        for field in iter {
            layout.insert(field.id, field.bounds);
        }
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_edges() {
        let rect = Rectangle::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.bottom(), 70.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.center_x(), 60.0);
        assert_eq!(rect.center_y(), 45.0);
    }

    #[test]
    fn test_negative_size_is_not_normalized() {
        let rect = Rectangle::new(50.0, 50.0, -20.0, 10.0);
        assert_eq!(rect.right(), 30.0);
        // Hit testing still works on the normalized box
        assert!(rect.contains(kurbo::Point::new(40.0, 55.0)));
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut layout = FieldLayout::new();
        layout.insert("a", Rectangle::new(0.0, 0.0, 10.0, 10.0));
        layout.insert("b", Rectangle::new(20.0, 0.0, 10.0, 10.0));
        layout.insert("a", Rectangle::new(5.0, 5.0, 10.0, 10.0));

        let ids: Vec<_> = layout.iter().map(|field| field.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(layout.get(&"a".into()).map(|f| f.bounds.x), Some(5.0));
    }

    #[test]
    fn test_peers_excludes_id() {
        let layout: FieldLayout = [
            Field::new("a", Rectangle::new(0.0, 0.0, 10.0, 10.0)),
            Field::new("b", Rectangle::new(20.0, 0.0, 10.0, 10.0)),
        ]
        .into_iter()
        .collect();

        let exclude = FieldId::new("a");
        let peers: Vec<_> = layout.peers(Some(&exclude)).map(|f| f.id.as_str()).collect();
        assert_eq!(peers, vec!["b"]);
        assert_eq!(layout.peers(None).count(), 2);
    }
}
