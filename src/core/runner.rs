//! Application runner logic
//!
//! Handles the different ways to run fieldsnap: writing the default config,
//! answering a headless snap query, or opening the preview editor.

use crate::core::cli::{CliArgs, SnapQuery};
use crate::core::config_file::ConfigFile;
use crate::core::settings::SnapSettings;
use crate::data::LayoutFile;
use crate::geometry::FieldId;
use crate::logging;
use crate::rendering::{
    initialize_snap_guides, show_multiple_snap_guides, show_snap_guides, GuideLine, Stage,
};
use crate::snapping::{ResizeSnapResult, SnapResult};
use anyhow::{anyhow, Result};
use serde::Serialize;
use tracing::info;

/// Engine answer for one query
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum QueryOutcome {
    Drag(SnapResult),
    Resize(ResizeSnapResult),
}

/// What a headless run prints
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryReport {
    pub field: FieldId,
    pub threshold: f64,
    #[serde(flatten)]
    pub outcome: QueryOutcome,
    /// Guide lines as drawn on a stage of the layout's size
    pub guides: Vec<GuideLine>,
}

/// Create and run the application with the given CLI arguments.
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    if cli_args.new_config {
        return ConfigFile::initialize_config_directory();
    }

    cli_args
        .validate()
        .map_err(|e| anyhow!("CLI validation failed: {}", e))?;

    // Bevy installs its own subscriber in preview mode
    let _log_guard = if cli_args.preview {
        None
    } else {
        logging::init_logging(cli_args.verbose)?
    };

    let layout = match &cli_args.layout {
        Some(path) => LayoutFile::load(path)?,
        None => LayoutFile::demo(),
    };

    if cli_args.preview {
        let mut app = crate::core::app::create_app(cli_args, layout)?;
        app.run();
        return Ok(());
    }

    let settings = SnapSettings::load(cli_args.threshold);

    cli_args
        .validate_against(&layout.fields)
        .map_err(|e| anyhow!("CLI validation failed: {}", e))?;
    let query = cli_args
        .query()
        .ok_or_else(|| anyhow!("No query given"))?;

    let report = run_query(&layout, &settings, &query)?;
    info!(
        "Queried '{}' with {} guide(s)",
        report.field,
        report.guides.len()
    );
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Answer a query against a layout and render its guides on a fresh stage
pub fn run_query(
    layout: &LayoutFile,
    settings: &SnapSettings,
    query: &SnapQuery,
) -> Result<QueryReport> {
    let engine = settings.engine();
    let field = layout
        .fields
        .get(query.field())
        .ok_or_else(|| anyhow!("Unknown field: '{}'", query.field()))?;

    let mut stage = Stage::new(layout.stage.width, layout.stage.height)
        .with_guide_style(settings.guide_style.clone());
    let (width, height) = (stage.width(), stage.height());
    let guide_layer = initialize_snap_guides(&mut stage);

    let outcome = match *query {
        SnapQuery::Drag { x, y, .. } => {
            let result = engine.snapped_position(&layout.fields, field, x, y);
            show_snap_guides(
                Some(&mut *guide_layer),
                result.horizontal_guide,
                result.vertical_guide,
                Some(width),
                Some(height),
            );
            QueryOutcome::Drag(result)
        }
        SnapQuery::Resize {
            x,
            y,
            width: new_width,
            height: new_height,
            ..
        } => {
            let result = engine.snapped_resize(
                &layout.fields,
                &field.id,
                x,
                y,
                new_width.unwrap_or(field.bounds.width),
                new_height.unwrap_or(field.bounds.height),
            );
            show_multiple_snap_guides(
                Some(&mut *guide_layer),
                &result.horizontal_guides,
                &result.vertical_guides,
                width,
                height,
            );
            QueryOutcome::Resize(result)
        }
    };

    Ok(QueryReport {
        field: field.id.clone(),
        threshold: engine.threshold(),
        outcome,
        guides: guide_layer.lines().to_vec(),
    })
}
