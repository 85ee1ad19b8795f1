//! Layout file I/O
//!
//! A layout is a stage size plus the ordered list of placed fields:
//!
//! ```json
//! {
//!   "stage": { "width": 800, "height": 600 },
//!   "fields": [ { "id": "signature-1", "x": 40, "y": 60, "width": 200, "height": 60 } ]
//! }
//! ```

use crate::geometry::{FieldLayout, Rectangle};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Stage extent in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageSize {
    pub width: f64,
    pub height: f64,
}

impl Default for StageSize {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Contents of a layout file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutFile {
    #[serde(default)]
    pub stage: StageSize,
    pub fields: FieldLayout,
}

impl LayoutFile {
    /// Load a layout from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read layout file {}", path.display()))?;
        let layout: LayoutFile = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse layout file {}", path.display()))?;
        tracing::debug!("Loaded {} fields from {:?}", layout.fields.len(), path);
        Ok(layout)
    }

    /// Write the layout as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write layout file {}", path.display()))?;
        Ok(())
    }

    /// A small signing-form layout used when no file is given
    pub fn demo() -> Self {
        let mut fields = FieldLayout::new();
        fields.insert("signature", Rectangle::new(80.0, 80.0, 220.0, 60.0));
        fields.insert("date", Rectangle::new(400.0, 80.0, 140.0, 60.0));
        fields.insert("name", Rectangle::new(80.0, 220.0, 220.0, 40.0));
        fields.insert("email", Rectangle::new(400.0, 220.0, 260.0, 40.0));
        fields.insert("initials", Rectangle::new(80.0, 360.0, 80.0, 80.0));
        Self {
            stage: StageSize::default(),
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_keeps_field_order() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{
                "stage": {{ "width": 1000, "height": 700 }},
                "fields": [
                    {{ "id": "b", "x": 0, "y": 0, "width": 10, "height": 10 }},
                    {{ "id": "a", "x": 20, "y": 0, "width": 10, "height": 10 }}
                ]
            }}"#
        )
        .expect("write layout");

        let layout = LayoutFile::load(file.path()).expect("load layout");
        assert_eq!(layout.stage.width, 1000.0);
        let ids: Vec<_> = layout.fields.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_stage_defaults_when_missing() {
        let layout: LayoutFile = serde_json::from_str(r#"{ "fields": [] }"#).expect("parse");
        assert_eq!(layout.stage, StageSize::default());
        assert!(layout.fields.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("layout.json");

        let layout = LayoutFile::demo();
        layout.save(&path).expect("save layout");
        assert_eq!(LayoutFile::load(&path).expect("load layout"), layout);
    }

    #[test]
    fn test_missing_file_names_path() {
        let error = LayoutFile::load("/definitely/not/here.json").unwrap_err();
        assert!(error.to_string().contains("/definitely/not/here.json"));
    }
}
