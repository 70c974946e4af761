//! Text codec for the sectioned `key=value` format.

pub mod decode;
pub mod encode;

pub use decode::{decode_config, read_config};
pub use encode::{encode_config, write_config_to};
