//! Human-readable listing of a config.
//!
//! Unlike [`cfgparser_core::encode_config`], the listing always prints all
//! four section headers, including empty ones, so the user can see at a
//! glance which sections hold no keys.

use std::fmt::Write as _;

use cfgparser_core::{Config, Section};

/// Renders every section header followed by its `key=value` lines.
pub fn render_listing(config: &Config) -> String {
    let mut out = String::new();
    for section in Section::ALL {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "[{section}]");
        for (key, value) in config.entries(section) {
            let _ = writeln!(out, "{key}={value}");
        }
    }
    out
}
