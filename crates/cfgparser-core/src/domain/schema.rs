//! The schema: permitted keys and their default values.
//!
//! A [`Schema`] is a [`Config`] of defaults that is passed explicitly to the
//! codec.  It decides which keys a file may mention in each section and which
//! values a freshly parsed config starts from.

use tracing::debug;

use crate::domain::config::Config;
use crate::domain::value::Section;
use crate::error::{ConfigError, ConfigResult};

/// Permitted key set and fallback values for parsing and writing.
///
/// # Examples
///
/// ```rust
/// use cfgparser_core::{Config, Schema, Section};
///
/// let schema = Schema::new(Config::new().with("debug", false).with("port", 8080));
///
/// assert!(schema.permits(Section::Int, "port"));
/// assert!(!schema.permits(Section::Bool, "port"));
///
/// let fresh = schema.instantiate();
/// assert_eq!(fresh.get::<i64>("port"), 8080);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    defaults: Config,
}

impl Schema {
    /// Creates a schema whose permitted keys and defaults are those of
    /// `defaults`.
    pub fn new(defaults: Config) -> Self {
        Self { defaults }
    }

    /// The default values.
    pub fn defaults(&self) -> &Config {
        &self.defaults
    }

    /// Returns a fresh, independent copy of the defaults.
    pub fn instantiate(&self) -> Config {
        self.defaults.clone()
    }

    /// Returns `true` if `key` is a known key of `section`.
    pub fn permits(&self, section: Section, key: &str) -> bool {
        self.defaults.contains(section, key)
    }

    /// Checks that every key of `config` is known to this schema.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownKey`] (with `line_no: None`) for the first
    /// unknown key, scanning sections in file order.
    pub fn validate(&self, config: &Config) -> ConfigResult<()> {
        for section in Section::ALL {
            if let Some(key) = config
                .section_keys(section)
                .into_iter()
                .find(|key| !self.permits(section, key))
            {
                debug!(%section, key, "config key not permitted by schema");
                return Err(ConfigError::UnknownKey {
                    line_no: None,
                    section,
                    key: key.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl From<Config> for Schema {
    fn from(defaults: Config) -> Self {
        Self::new(defaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Schema {
        Schema::new(Config::new().with("debug", false).with("port", 8080))
    }

    #[test]
    fn test_permits_is_per_section() {
        let schema = schema();
        assert!(schema.permits(Section::Bool, "debug"));
        assert!(!schema.permits(Section::Int, "debug"));
        assert!(!schema.permits(Section::Float, "anything"));
    }

    #[test]
    fn test_instantiate_returns_copy_of_defaults() {
        let schema = schema();
        let mut config = schema.instantiate();
        config.set("debug", true);

        assert!(!schema.defaults().get::<bool>("debug"));
        assert!(config.get::<bool>("debug"));
    }

    #[test]
    fn test_validate_accepts_subset_of_known_keys() {
        let schema = schema();
        let config = Config::new().with("port", 1);
        assert!(schema.validate(&config).is_ok());
        assert!(schema.validate(&Config::new()).is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_key() {
        let schema = schema();
        let config = schema.instantiate().with("bogus", 1);

        let err = schema.validate(&config).unwrap_err();

        assert!(matches!(
            err,
            ConfigError::UnknownKey { line_no: None, section: Section::Int, ref key } if key == "bogus"
        ));
    }

    #[test]
    fn test_validate_rejects_known_name_in_wrong_section() {
        // `port` exists in [int] but not in [string].
        let schema = schema();
        let config = Config::new().with("port", "8080");
        assert!(matches!(
            schema.validate(&config),
            Err(ConfigError::UnknownKey { section: Section::String, .. })
        ));
    }
}
