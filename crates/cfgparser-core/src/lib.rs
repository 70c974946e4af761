//! # cfgparser-core
//!
//! Reading and writing typed, sectioned `key=value` configuration files.
//!
//! ```text
//! # comments and blank lines are ignored
//! [bool]
//! debug=true
//! [string]
//! app_name=MyApp
//! [int]
//! port=8080
//! [float]
//! version=1.000000
//! ```
//!
//! A [`Schema`] holds the default [`Config`]: it defines which keys are
//! permitted in each section and supplies the value of every key a file does
//! not mention.  The schema is passed explicitly to both parse and write; there
//! is no global default.
//!
//! - **`domain`**: [`Section`], [`Value`], [`Config`] and [`Schema`].
//! - **`codec`**: [`decode_config`] / [`read_config`] and [`encode_config`] /
//!   [`write_config_to`] on strings and streams.
//! - **`storage`**: [`parse_config`] / [`write_config`] on file paths.
//!
//! The library never prints.  It emits `tracing` events at `debug` and
//! `trace` level, which are only visible when the application installs a
//! subscriber.
//!
//! # Example
//!
//! ```rust
//! use cfgparser_core::{decode_config, encode_config, Config, Schema};
//!
//! let schema = Schema::new(Config::new().with("debug", false).with("port", 8080));
//!
//! let mut config = decode_config("[bool]\ndebug=true\n[int]\nport=9090\n", &schema)?;
//! assert!(config.get::<bool>("debug"));
//!
//! config.set("port", 10_000);
//! assert_eq!(encode_config(&config), "[bool]\ndebug=true\n[int]\nport=10000\n");
//! # Ok::<(), cfgparser_core::ConfigError>(())
//! ```

pub mod codec;
pub mod domain;
pub mod error;
pub mod storage;

pub use codec::{decode_config, encode_config, read_config, write_config_to};
pub use domain::config::Config;
pub use domain::schema::Schema;
pub use domain::value::{ConfigType, Section, Value, FLOAT_PRECISION};
pub use error::{ConfigError, ConfigResult};
pub use storage::{parse_config, write_config};
