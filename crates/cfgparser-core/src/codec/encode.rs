//! [`Config`] → text encoding.
//!
//! Output layout:
//! ```text
//! [bool]
//! debug=true
//! [string]
//! app_name=MyApp
//! [int]
//! port=8080
//! [float]
//! version=1.000000
//! ```
//! Sections appear in the fixed order bool, string, int, float and a section
//! with no keys is left out entirely (no empty header).  String values are
//! written verbatim: a value containing a newline will not read back.

use std::fmt::Write as _;
use std::io::Write;

use tracing::debug;

use crate::domain::config::Config;
use crate::domain::schema::Schema;
use crate::domain::value::Section;
use crate::error::ConfigResult;

/// Renders a config in the sectioned text format.
///
/// This does not consult a schema; use [`write_config_to`] to validate keys
/// before writing.
///
/// # Examples
///
/// ```rust
/// use cfgparser_core::{encode_config, Config};
///
/// let config = Config::new().with("debug", true).with("port", 9090);
/// assert_eq!(encode_config(&config), "[bool]\ndebug=true\n[int]\nport=9090\n");
/// ```
pub fn encode_config(config: &Config) -> String {
    let mut out = String::new();
    for section in Section::ALL {
        if config.section_len(section) == 0 {
            continue;
        }
        // Writing into a String cannot fail.
        let _ = writeln!(out, "[{section}]");
        for (key, value) in config.entries(section) {
            let _ = writeln!(out, "{key}={value}");
        }
    }
    out
}

/// Validates `config` against `schema`, then writes its encoding to `writer`.
///
/// Nothing is written when validation fails.  The writer is flushed before
/// returning.
///
/// # Errors
///
/// Returns [`crate::ConfigError::UnknownKey`] if the config holds a key the
/// schema does not know, or [`crate::ConfigError::Stream`] on write failure.
pub fn write_config_to<W: Write>(mut writer: W, config: &Config, schema: &Schema) -> ConfigResult<()> {
    schema.validate(config)?;
    let text = encode_config(config);
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    debug!(bytes = text.len(), keys = config.len(), "encoded config");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
