//! Application layer: the example program's use case and its output.

pub mod listing;
pub mod update_config;

pub use listing::render_listing;
pub use update_config::{apply_updates, run, RunReport};
