//! Command line interface for fieldsnap
//!
//! Handles parsing command line arguments and provides validation for user
//! inputs.

use crate::geometry::{FieldId, FieldLayout};
use clap::Parser;
use std::path::PathBuf;

/// fieldsnap CLI arguments
///
/// Examples:
///   fieldsnap --preview                                # Drag fields of the demo layout
///   fieldsnap -l form.json --preview                   # Edit a layout file interactively
///   fieldsnap -l form.json -f date --x 310 --y 84      # Where would "date" snap?
///   fieldsnap -l form.json -f date --x 310 --y 84 --width 215
///                                                      # Resize query
///   fieldsnap --threshold 4 -f name --x 90 --y 228     # Tighter snapping
///   fieldsnap --new-config                             # Write default settings.json
#[derive(Parser, Debug, Clone, Default)]
#[clap(
    name = "fieldsnap",
    version,
    about = "Alignment guides and snapping for placed fields",
    long_about = "fieldsnap snaps a dragged or resized field to the edges, centers and sizes of the other fields in a layout, and reports the guide lines that would be shown."
)]
pub struct CliArgs {
    /// Layout file (JSON) with the stage size and placed fields
    #[clap(
        long = "layout",
        short = 'l',
        help = "Layout file to load",
        long_help = "JSON layout file with a \"stage\" size and an ordered \"fields\" list. Field order decides which peer wins when several are in range. If not specified, a built-in demo layout is used."
    )]
    pub layout: Option<PathBuf>,

    /// Field to drag or resize
    #[clap(long = "field", short = 'f', help = "Id of the field to query")]
    pub field: Option<String>,

    /// Proposed X of the field
    #[clap(long = "x", allow_negative_numbers = true, help = "Proposed X position")]
    pub x: Option<f64>,

    /// Proposed Y of the field
    #[clap(long = "y", allow_negative_numbers = true, help = "Proposed Y position")]
    pub y: Option<f64>,

    /// Proposed width; turns the query into a resize
    #[clap(
        long = "width",
        allow_negative_numbers = true,
        help = "Proposed width (resize query)"
    )]
    pub width: Option<f64>,

    /// Proposed height; turns the query into a resize
    #[clap(
        long = "height",
        allow_negative_numbers = true,
        help = "Proposed height (resize query)"
    )]
    pub height: Option<f64>,

    /// Snap distance override
    #[clap(
        long = "threshold",
        short = 't',
        allow_negative_numbers = true,
        help = "Snap threshold in pixels",
        long_help = "Maximum distance in pixels at which a field snaps to a peer. Overrides the value from ~/.config/fieldsnap/settings.json (default 10)."
    )]
    pub threshold: Option<f64>,

    /// Open the interactive preview window
    #[clap(
        long = "preview",
        help = "Open the preview editor",
        long_help = "Open a window showing the layout. Drag a field to move it, or drag its bottom-right handle to resize it; guides appear while snapping."
    )]
    pub preview: bool,

    /// Initialize user configuration directory with default settings
    #[clap(
        long = "new-config",
        help = "Initialize user config directory with default settings"
    )]
    pub new_config: bool,

    /// Enable debug logging
    #[clap(long = "verbose", short = 'v', help = "Enable debug logging")]
    pub verbose: bool,
}

/// What a headless run asks the engine
#[derive(Debug, Clone, PartialEq)]
pub enum SnapQuery {
    Drag {
        field: FieldId,
        x: f64,
        y: f64,
    },
    Resize {
        field: FieldId,
        x: f64,
        y: f64,
        width: Option<f64>,
        height: Option<f64>,
    },
}

impl SnapQuery {
    pub fn field(&self) -> &FieldId {
        match self {
            SnapQuery::Drag { field, .. } | SnapQuery::Resize { field, .. } => field,
        }
    }
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// This ensures that paths exist and that a headless run has everything
    /// it needs, providing clear error messages for common mistakes.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.layout {
            if !path.is_file() {
                return Err(format!(
                    "Layout file does not exist: {}\nMake sure the path is correct and the file exists.",
                    path.display()
                ));
            }
        }

        if let Some(threshold) = self.threshold {
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(format!(
                    "Invalid threshold: {threshold}\nThe threshold must be a non-negative number of pixels."
                ));
            }
        }

        if self.preview {
            return Ok(());
        }

        match (&self.field, self.x, self.y) {
            (Some(_), Some(_), Some(_)) => Ok(()),
            (Some(field), _, _) => Err(format!(
                "Missing position for field '{field}'\nPass both --x and --y."
            )),
            (None, _, _) => Err(
                "Nothing to do\nPass --field with --x and --y for a query, or --preview to open the editor."
                    .to_string(),
            ),
        }
    }

    /// The headless query described by the arguments, if any
    pub fn query(&self) -> Option<SnapQuery> {
        let field = FieldId::new(self.field.clone()?);
        let (x, y) = (self.x?, self.y?);

        if self.width.is_some() || self.height.is_some() {
            Some(SnapQuery::Resize {
                field,
                x,
                y,
                width: self.width,
                height: self.height,
            })
        } else {
            Some(SnapQuery::Drag { field, x, y })
        }
    }

    /// Check that the queried field exists in the layout
    pub fn validate_against(&self, layout: &FieldLayout) -> Result<(), String> {
        let Some(query) = self.query() else {
            return Ok(());
        };
        if layout.get(query.field()).is_some() {
            return Ok(());
        }
        let available = layout
            .iter()
            .map(|field| field.id.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Err(format!(
            "Unknown field: '{}'\nAvailable fields: {available}",
            query.field()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rectangle;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("fieldsnap").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn test_drag_query() {
        let args = parse(&["-f", "date", "--x", "310", "--y", "-4"]);
        assert!(args.validate().is_ok());
        assert_eq!(
            args.query(),
            Some(SnapQuery::Drag {
                field: FieldId::new("date"),
                x: 310.0,
                y: -4.0,
            })
        );
    }

    #[test]
    fn test_width_makes_resize_query() {
        let args = parse(&["-f", "date", "--x", "1", "--y", "2", "--width", "125"]);
        assert!(matches!(
            args.query(),
            Some(SnapQuery::Resize {
                width: Some(w),
                height: None,
                ..
            }) if w == 125.0
        ));
    }

    #[test]
    fn test_missing_position_is_rejected() {
        let args = parse(&["-f", "date", "--x", "1"]);
        let error = args.validate().unwrap_err();
        assert!(error.contains("--y"));
    }

    #[test]
    fn test_preview_needs_no_query() {
        assert!(parse(&["--preview"]).validate().is_ok());
        assert!(parse(&[]).validate().is_err());
    }

    #[test]
    fn test_negative_threshold_is_rejected() {
        let args = parse(&["--preview", "--threshold", "-1"]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_unknown_field_lists_available() {
        let mut layout = FieldLayout::new();
        layout.insert("name", Rectangle::new(0.0, 0.0, 10.0, 10.0));

        let args = parse(&["-f", "nope", "--x", "0", "--y", "0"]);
        let error = args.validate_against(&layout).unwrap_err();
        assert!(error.contains("'nope'"));
        assert!(error.contains("name"));
    }
}
