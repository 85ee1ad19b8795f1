//! Preview application initialization and configuration

use crate::core::cli::CliArgs;
use crate::core::settings::{SnapSettings, WINDOW_TITLE};
use crate::data::LayoutFile;
use crate::editing::{FieldEditingPlugin, PreviewLayout};
use crate::rendering::SnapGuidePlugin;
use anyhow::Result;
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy::winit::WinitSettings;

/// Creates a configured Bevy preview editor ready to run
///
/// Settings are resolved after `LogPlugin` is added so config warnings reach
/// Bevy's subscriber.
pub fn create_app(cli_args: CliArgs, layout: LayoutFile) -> Result<App> {
    let mut app = App::new();
    configure_window_plugins(&mut app, &cli_args, &layout);
    let settings = SnapSettings::load(cli_args.threshold);
    configure_resources(&mut app, layout, settings);
    app.add_systems(Startup, spawn_camera)
        .add_systems(Update, exit_on_esc);
    Ok(app)
}

/// Configure logging the same way for every preview run
fn configure_logging(verbose: bool) -> LogPlugin {
    if verbose {
        LogPlugin {
            level: Level::DEBUG,
            filter: "fieldsnap=debug,bevy_render=warn,bevy_winit=warn,wgpu=error,naga=warn".to_string(),
            ..default()
        }
    } else {
        LogPlugin {
            level: Level::INFO,
            filter: "fieldsnap=info,bevy=warn,wgpu=error,naga=warn".to_string(),
            ..default()
        }
    }
}

/// Window sized to the layout's stage
fn configure_window_plugins(app: &mut App, cli_args: &CliArgs, layout: &LayoutFile) {
    let window = Window {
        title: WINDOW_TITLE.to_string(),
        resolution: (layout.stage.width as f32, layout.stage.height as f32).into(),
        resizable: false,
        ..default()
    };

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(window),
                ..default()
            })
            .set(configure_logging(cli_args.verbose)),
    );
}

fn configure_resources(app: &mut App, layout: LayoutFile, settings: SnapSettings) {
    debug!(
        "Preview with {} fields, snap threshold {}px",
        layout.fields.len(),
        settings.threshold
    );

    app.insert_resource(WinitSettings::desktop_app())
        .insert_resource(ClearColor(Color::srgb(0.09, 0.09, 0.11)))
        .add_plugins((
            SnapGuidePlugin {
                style: settings.guide_style.clone(),
            },
            FieldEditingPlugin,
        ))
        .insert_resource(PreviewLayout {
            fields: layout.fields,
        })
        .insert_resource(settings);
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn exit_on_esc(keys: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
