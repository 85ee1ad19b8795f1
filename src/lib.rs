//! fieldsnap
pub mod core;
pub mod data;
pub mod editing;
pub mod geometry;
pub mod logging;
pub mod rendering;
pub mod snapping;
