//! Snap dragged and resized fields to their neighbours.
//!
//! Answers one-off queries from the command line, or opens a small preview
//! editor with live alignment guides.

use fieldsnap::core;

fn main() {
    let cli_args = core::platform::get_cli_args();
    if let Err(error) = core::runner::run_app(cli_args) {
        core::platform::handle_error(error);
    }
}
