//! Core application functionality
//!
//! This module contains the core application logic, including:
//! - Preview application setup
//! - Settings, user config file and CLI handling
//! - Headless query runner

pub mod app;
pub mod cli;
pub mod config_file;
pub mod platform;
pub mod runner;
pub mod settings;

// Re-export commonly used items
pub use app::create_app;
pub use cli::CliArgs;
pub use config_file::ConfigFile;
pub use runner::run_app;
pub use settings::SnapSettings;
