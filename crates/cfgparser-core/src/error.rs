//! Error type shared by the schema, codec and storage layers.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::value::Section;

/// Errors that can occur while parsing, validating or writing a config.
///
/// Parse errors carry the 1-based line number of the offending line so that a
/// caller can point the user at the exact place in the file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Opening, creating, reading or writing a config file failed.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from or writing to a caller-provided stream failed.
    #[error("I/O error on config stream: {0}")]
    Stream(#[from] std::io::Error),

    /// A line that is neither blank, a comment, a header nor `key=value`.
    #[error("malformed line {line_no}: {line}")]
    MalformedLine { line_no: usize, line: String },

    /// A key line appeared before any header (`name` is `None`), or a header
    /// named a section other than `bool`, `string`, `int` or `float`.
    #[error("unknown section on line {line_no}: {}", describe_section(name))]
    UnknownSection {
        line_no: usize,
        name: Option<String>,
    },

    /// The key is not part of the schema for that section.
    ///
    /// `line_no` is `None` when the key was rejected while validating a config
    /// before serialization rather than while parsing a file.
    #[error("unknown {section} key: {key}{}", at_line(line_no))]
    UnknownKey {
        line_no: Option<usize>,
        section: Section,
        key: String,
    },

    /// The raw value text could not be converted to the section's type.
    #[error("invalid {section} value for key {key} on line {line_no}: {raw:?}")]
    InvalidValue {
        line_no: usize,
        section: Section,
        key: String,
        raw: String,
    },
}

impl ConfigError {
    /// Returns `true` for the two I/O variants.
    pub fn is_io(&self) -> bool {
        matches!(self, ConfigError::Io { .. } | ConfigError::Stream(_))
    }

    /// Returns the 1-based line number the error refers to, if any.
    pub fn line_no(&self) -> Option<usize> {
        match self {
            ConfigError::MalformedLine { line_no, .. }
            | ConfigError::UnknownSection { line_no, .. }
            | ConfigError::InvalidValue { line_no, .. } => Some(*line_no),
            ConfigError::UnknownKey { line_no, .. } => *line_no,
            ConfigError::Io { .. } | ConfigError::Stream(_) => None,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type ConfigResult<T> = Result<T, ConfigError>;

fn describe_section(name: &Option<String>) -> String {
    match name {
        Some(name) => format!("[{name}]"),
        None => "no section header before this line".to_string(),
    }
}

fn at_line(line_no: &Option<usize>) -> String {
    match line_no {
        Some(n) => format!(" (line {n})"),
        None => String::new(),
    }
}
