//! UpdateConfigUseCase: load a config file, modify it, write it back.
//!
//! ```text
//! run()
//!  ├─ parse_config(input)     -- defaults + overrides from the file
//!  ├─ render_listing()        -- snapshot shown to the user
//!  ├─ apply_updates()         -- debug=true, app_name=UpdatedApp
//!  └─ write_config(output)    -- validated against the same schema
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use cfgparser_core::{parse_config, write_config, Config, Schema};
use tracing::info;

use crate::application::listing::render_listing;

/// Value written to `app_name` by [`apply_updates`].
pub const UPDATED_APP_NAME: &str = "UpdatedApp";

/// Outcome of a successful [`run`].
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Listing of the config as loaded, before updates.
    pub listing: String,
    /// The config as written.
    pub updated: Config,
    /// Where the updated config was written.
    pub output: PathBuf,
}

/// Applies the example program's modifications.
pub fn apply_updates(config: &mut Config) {
    config.set("debug", true);
    config.set("app_name", UPDATED_APP_NAME);
}

/// Parses `input`, applies [`apply_updates`] and writes the result to
/// `output`.
///
/// # Errors
///
/// Returns an error (with the offending path as context) if the input cannot
/// be parsed or the output cannot be written.
pub fn run(input: &Path, output: &Path, schema: &Schema) -> anyhow::Result<RunReport> {
    let mut config = parse_config(input, schema)
        .with_context(|| format!("error parsing config file {}", input.display()))?;
    info!(path = %input.display(), keys = config.len(), "loaded configuration");

    let listing = render_listing(&config);

    apply_updates(&mut config);

    write_config(output, &config, schema)
        .with_context(|| format!("error writing config file {}", output.display()))?;
    info!(path = %output.display(), "wrote updated configuration");

    Ok(RunReport {
        listing,
        updated: config,
        output: output.to_path_buf(),
    })
}
