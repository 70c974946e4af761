//! Storage: config file persistence.
//!
//! The codec works on strings and streams; this module adds the file-system
//! side (opening, creating, buffering, closing) and attaches the path to every
//! I/O error.

pub mod file;

pub use file::{parse_config, write_config};
