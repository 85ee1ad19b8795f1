//! Data files read and written by the editor

pub mod layout;

pub use layout::{LayoutFile, StageSize};
