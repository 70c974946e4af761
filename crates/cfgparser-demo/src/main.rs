//! cfgparser example program: entry point.
//!
//! Loads a typed config file against the built-in default schema, prints the
//! current configuration, flips `debug` on, renames the app and writes the
//! result to a second file.
//!
//! # Usage
//!
//! ```text
//! cfgparser-demo [OPTIONS]
//!
//! Options:
//!   --input  <PATH>   Config file to read   [default: example.cfg]
//!   --output <PATH>   Config file to write  [default: updated_example.cfg]
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable            | Default               | Description               |
//! |---------------------|-----------------------|---------------------------|
//! | `CFGPARSER_INPUT`   | `example.cfg`         | Config file to read       |
//! | `CFGPARSER_OUTPUT`  | `updated_example.cfg` | Config file to write      |
//! | `RUST_LOG`          | `info`                | Log filter (to stderr)    |

use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cfgparser_demo::application::run;
use cfgparser_demo::defaults::default_schema;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Read a typed config file, print it, update it and write it back.
#[derive(Debug, Parser)]
#[command(
    name = "cfgparser-demo",
    about = "Example program for the sectioned bool/string/int/float config format",
    version
)]
struct Cli {
    /// Config file to read.
    #[arg(long, default_value = "example.cfg", env = "CFGPARSER_INPUT")]
    input: PathBuf,

    /// Config file to write the updated configuration to.
    #[arg(long, default_value = "updated_example.cfg", env = "CFGPARSER_OUTPUT")]
    output: PathBuf,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the listing.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!(input = %cli.input.display(), output = %cli.output.display(), "cfgparser-demo starting");

    let schema = default_schema();
    let report = run(&cli.input, &cli.output, &schema)?;

    println!("Current Configuration:");
    print!("{}", report.listing);
    println!("Updated configuration written to {}", report.output.display());
    Ok(())
}
