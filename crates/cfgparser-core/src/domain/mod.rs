//! Domain types for typed configuration files.
//!
//! Nothing in here touches the file system or knows about the text format;
//! the [`crate::codec`] and [`crate::storage`] modules build on these types.
//!
//! - [`value`]: the four [`value::Section`]s and the tagged [`value::Value`].
//! - [`config`]: the [`config::Config`] container with typed accessors.
//! - [`schema`]: the [`schema::Schema`] of permitted keys and defaults.

pub mod config;
pub mod schema;
pub mod value;
