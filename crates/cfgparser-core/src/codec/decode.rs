//! Text → [`Config`] decoding.
//!
//! Line grammar (after trimming surrounding whitespace):
//! ```text
//! <empty>            ignored
//! # anything         ignored
//! [name]             switch section (bool | string | int | float); any other
//!                    name is only rejected when a key line follows it
//! key=value          set key in the current section (split on the first '=')
//! ```
//! Every key must already exist in the schema's defaults for the current
//! section.  Decoding is all-or-nothing: the first error aborts and no
//! partially filled config is returned.

use std::io::BufRead;

use tracing::{debug, trace};

use crate::domain::config::Config;
use crate::domain::schema::Schema;
use crate::domain::value::{Section, UnknownSectionName};
use crate::error::{ConfigError, ConfigResult};

/// Decodes config text, starting from a copy of the schema's defaults.
///
/// # Errors
///
/// Returns [`ConfigError::MalformedLine`], [`ConfigError::UnknownSection`],
/// [`ConfigError::UnknownKey`] or [`ConfigError::InvalidValue`] for the first
/// offending line.
///
/// # Examples
///
/// ```rust
/// use cfgparser_core::{decode_config, Config, Schema};
///
/// let schema = Schema::new(Config::new().with("debug", false).with("port", 8080));
/// let config = decode_config("[int]\nport=9090\n", &schema).unwrap();
///
/// assert_eq!(config.get::<i64>("port"), 9090);
/// assert!(!config.get::<bool>("debug")); // untouched default
/// ```
pub fn decode_config(input: &str, schema: &Schema) -> ConfigResult<Config> {
    read_config(input.as_bytes(), schema)
}

/// Decodes config text from a buffered reader.
///
/// # Errors
///
/// Returns [`ConfigError::Stream`] if the reader fails (including invalid
/// UTF-8), or any of the errors documented on [`decode_config`].
pub fn read_config<R: BufRead>(reader: R, schema: &Schema) -> ConfigResult<Config> {
    let mut decoder = Decoder::new(schema);
    for (idx, line) in reader.lines().enumerate() {
        decoder.feed(idx + 1, &line?)?;
    }
    Ok(decoder.finish())
}

/// Line-by-line decoding state.
struct Decoder<'a> {
    schema: &'a Schema,
    config: Config,
    /// `None` until the first header has been seen; `Err` holds the text of
    /// an unrecognized header, which only fails once a key appears under it.
    section: Option<Result<Section, UnknownSectionName>>,
    lines: usize,
    overrides: usize,
}

impl<'a> Decoder<'a> {
    fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            config: schema.instantiate(),
            section: None,
            lines: 0,
            overrides: 0,
        }
    }

    fn feed(&mut self, line_no: usize, raw: &str) -> ConfigResult<()> {
        self.lines = line_no;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        if let Some(name) = header_name(line) {
            trace!(line_no, section = name, "entering section");
            self.section = Some(name.parse::<Section>());
            return Ok(());
        }

        let (key, raw_value) = line
            .split_once('=')
            .ok_or_else(|| ConfigError::MalformedLine {
                line_no,
                line: line.to_string(),
            })?;

        let section = match &self.section {
            Some(Ok(section)) => *section,
            Some(Err(UnknownSectionName(name))) => {
                return Err(ConfigError::UnknownSection {
                    line_no,
                    name: Some(name.clone()),
                })
            }
            None => return Err(ConfigError::UnknownSection { line_no, name: None }),
        };

        if !self.schema.permits(section, key) {
            return Err(ConfigError::UnknownKey {
                line_no: Some(line_no),
                section,
                key: key.to_string(),
            });
        }

        let value = section
            .parse_value(raw_value)
            .ok_or_else(|| ConfigError::InvalidValue {
                line_no,
                section,
                key: key.to_string(),
                raw: raw_value.to_string(),
            })?;

        self.config.set_value(key, value);
        self.overrides += 1;
        Ok(())
    }

    fn finish(self) -> Config {
        debug!(
            lines = self.lines,
            overrides = self.overrides,
            keys = self.config.len(),
            "decoded config"
        );
        self.config
    }
}

/// Returns the enclosed text of a `[...]` header line.
fn header_name(line: &str) -> Option<&str> {
    line.strip_prefix('[')?.strip_suffix(']')
}

// ── Tests ─────────────────────────────────────────────────────────────────────
