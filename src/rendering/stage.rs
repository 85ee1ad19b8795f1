//! In-memory stage made of named layers
//!
//! This is the headless counterpart of the editor canvas: the CLI renders
//! guides onto it and tests inspect what was drawn.

use super::guides::{GuideLine, GuideStyle, GuideSurface};

/// Name tag of the overlay layer holding snap guides
pub const SNAP_GUIDE_LAYER: &str = "snap-guides";

/// A named drawing layer
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    name: String,
    lines: Vec<GuideLine>,
    style: GuideStyle,
    redraw_count: u64,
}

impl Layer {
    pub fn new(name: impl Into<String>, style: GuideStyle) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
            style,
            redraw_count: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lines(&self) -> &[GuideLine] {
        &self.lines
    }

    /// How many times the layer was asked to repaint
    pub fn redraw_count(&self) -> u64 {
        self.redraw_count
    }
}

impl GuideSurface for Layer {
    fn clear(&mut self) {
        self.lines.clear();
    }

    fn add_line(&mut self, line: GuideLine) {
        self.lines.push(line);
    }

    fn redraw(&mut self) {
        self.redraw_count += 1;
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn style(&self) -> &GuideStyle {
        &self.style
    }
}

/// A fixed-size canvas hosting layers in paint order
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    width: f64,
    height: f64,
    guide_style: GuideStyle,
    layers: Vec<Layer>,
}

impl Stage {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            guide_style: GuideStyle::default(),
            layers: Vec::new(),
        }
    }

    /// Style given to guide layers created on this stage
    pub fn with_guide_style(mut self, style: GuideStyle) -> Self {
        self.guide_style = style;
        self
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn guide_style(&self) -> &GuideStyle {
        &self.guide_style
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layers_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Layer> {
        self.layers.iter().filter(move |layer| layer.name == name)
    }

    /// First layer with the given name
    pub fn layer_mut(&mut self, name: &str) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|layer| layer.name == name)
    }

    /// Attach a layer on top and return it
    pub fn add_layer(&mut self, layer: Layer) -> &mut Layer {
        let index = self.layers.len();
        self.layers.push(layer);
        &mut self.layers[index]
    }

    /// Detach every layer with the given name, returning how many went away
    pub fn remove_layers_named(&mut self, name: &str) -> usize {
        let before = self.layers.len();
        self.layers.retain(|layer| layer.name != name);
        before - self.layers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_only_named_layers() {
        let mut stage = Stage::new(100.0, 100.0);
        stage.add_layer(Layer::new("fields", GuideStyle::default()));
        stage.add_layer(Layer::new(SNAP_GUIDE_LAYER, GuideStyle::default()));
        stage.add_layer(Layer::new(SNAP_GUIDE_LAYER, GuideStyle::default()));

        assert_eq!(stage.remove_layers_named(SNAP_GUIDE_LAYER), 2);
        assert_eq!(stage.layers().len(), 1);
        assert_eq!(stage.layers()[0].name(), "fields");
    }

    #[test]
    fn test_guide_style_is_carried_to_layers() {
        let style = GuideStyle {
            color: "#ff0000".to_string(),
            ..GuideStyle::default()
        };
        let mut stage = Stage::new(100.0, 100.0).with_guide_style(style.clone());
        let layer = crate::rendering::initialize_snap_guides(&mut stage);
        assert_eq!(layer.style(), &style);
    }
}
