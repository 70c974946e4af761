//! Path-based parse and write.
//!
//! Thin adapter between the file system and the [`crate::codec`]:
//!
//! - [`parse_config`] opens a file and decodes it against a schema.
//! - [`write_config`] validates a config, then creates (or truncates) the
//!   target file and writes the encoding.
//!
//! File handles are owned by the functions and closed on every return path.
//! I/O failures are reported as [`ConfigError::Io`] carrying the path.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::codec::{encode_config, read_config};
use crate::domain::config::Config;
use crate::domain::schema::Schema;
use crate::error::{ConfigError, ConfigResult};

/// Reads and decodes the config file at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be opened or read, or any
/// decoding error (see [`crate::codec::decode_config`]).
pub fn parse_config(path: impl AsRef<Path>, schema: &Schema) -> ConfigResult<Config> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config = read_config(BufReader::new(file), schema).map_err(|e| match e {
        ConfigError::Stream(source) => ConfigError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;

    debug!(path = %path.display(), keys = config.len(), "parsed config file");
    Ok(config)
}

/// Validates `config` against `schema` and writes it to `path`.
///
/// The file is only created once validation has passed, so a rejected config
/// never truncates an existing file.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownKey`] if validation fails, or
/// [`ConfigError::Io`] if the file cannot be created or written.
pub fn write_config(path: impl AsRef<Path>, config: &Config, schema: &Schema) -> ConfigResult<()> {
    let path = path.as_ref();
    schema.validate(config)?;

    let io_err = |source: std::io::Error| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(encode_config(config).as_bytes())
        .map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    debug!(path = %path.display(), keys = config.len(), "wrote config file");
    Ok(())
}
