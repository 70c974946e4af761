//! The typed key/value container.
//!
//! A [`Config`] holds one mapping per [`Section`].  Each mapping goes from a
//! key name to a [`Value`] whose variant matches the section, so the same key
//! name may appear in `[bool]` and `[int]` without conflict.
//!
//! Keys are enumerated in ascending order.  The file format does not promise
//! any order, but a stable one keeps written files diff-friendly.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::domain::schema::Schema;
use crate::domain::value::{ConfigType, Section, Value};

/// Typed configuration values grouped by section.
///
/// # Examples
///
/// ```rust
/// use cfgparser_core::Config;
///
/// let mut config = Config::new();
/// config.set("port", 8080);
/// config.set("debug", true);
///
/// assert_eq!(config.get::<i64>("port"), 8080);
/// assert!(config.get::<bool>("debug"));
/// // Absent keys read as the zero value of their type.
/// assert_eq!(config.get::<String>("app_name"), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Config {
    /// Invariant: every value under a section has that section's variant.
    sections: BTreeMap<Section, BTreeMap<String, Value>>,
}

impl Config {
    /// Creates an empty config with no keys in any section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a config whose four mappings are exactly the given literals.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use cfgparser_core::Config;
    ///
    /// let config = Config::from_literals(
    ///     HashMap::from([("debug".to_string(), false)]),
    ///     HashMap::new(),
    ///     HashMap::from([("port".to_string(), 8080)]),
    ///     HashMap::new(),
    /// );
    /// assert_eq!(config.len(), 2);
    /// ```
    pub fn from_literals(
        bools: HashMap<String, bool>,
        strings: HashMap<String, String>,
        ints: HashMap<String, i64>,
        floats: HashMap<String, f64>,
    ) -> Self {
        let mut config = Self::new();
        config.replace_literals(bools, strings, ints, floats);
        config
    }

    /// Replaces all four mappings wholesale with the given literals.
    pub fn replace_literals(
        &mut self,
        bools: HashMap<String, bool>,
        strings: HashMap<String, String>,
        ints: HashMap<String, i64>,
        floats: HashMap<String, f64>,
    ) {
        self.sections.clear();
        for (key, v) in bools {
            self.set(key, v);
        }
        for (key, v) in strings {
            self.set(key, v);
        }
        for (key, v) in ints {
            self.set(key, v);
        }
        for (key, v) in floats {
            self.set(key, v);
        }
    }

    /// Replaces this config's contents with a copy of the schema's defaults.
    pub fn copy_from_schema(&mut self, schema: &Schema) {
        self.clone_from(schema.defaults());
    }

    /// Builder-style [`Config::set`].
    ///
    /// ```rust
    /// use cfgparser_core::Config;
    ///
    /// let config = Config::new().with("debug", false).with("version", 1.0);
    /// assert_eq!(config.get::<f64>("version"), 1.0);
    /// ```
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Inserts or overwrites `key`.
    ///
    /// The section is chosen by the value's type: `bool` → `[bool]`,
    /// `String`/`&str` → `[string]`, `i64`/`i32` → `[int]`, `f64` → `[float]`.
    /// No check against a schema happens here; unknown keys are only rejected
    /// when parsing or writing.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.set_value(key, value.into());
    }

    /// Inserts or overwrites `key` in the section of the given value.
    pub fn set_value(&mut self, key: impl Into<String>, value: Value) {
        self.sections
            .entry(value.section())
            .or_default()
            .insert(key.into(), value);
    }

    /// Returns the value of `key` in `T`'s section, or `T`'s zero value
    /// (`false`, `""`, `0`, `0.0`) when the key is absent.
    ///
    /// Use [`Config::try_get`] to tell an absent key from an explicit zero.
    pub fn get<T: ConfigType>(&self, key: &str) -> T {
        self.try_get(key).unwrap_or_default()
    }

    /// Returns the value of `key` in `T`'s section, or `None` when absent.
    pub fn try_get<T: ConfigType>(&self, key: &str) -> Option<T> {
        self.value(T::SECTION, key).and_then(T::from_value)
    }

    /// Returns the raw tagged value of `key` in `section`.
    pub fn value(&self, section: Section, key: &str) -> Option<&Value> {
        self.sections.get(&section)?.get(key)
    }

    /// Removes `key` from `section`, returning its previous value.
    pub fn remove(&mut self, section: Section, key: &str) -> Option<Value> {
        let map = self.sections.get_mut(&section)?;
        let removed = map.remove(key);
        if map.is_empty() {
            self.sections.remove(&section);
        }
        removed
    }

    /// Returns `true` if `key` is present in `section`.
    pub fn contains(&self, section: Section, key: &str) -> bool {
        self.value(section, key).is_some()
    }

    /// Keys currently present in `T`'s section.
    pub fn keys<T: ConfigType>(&self) -> Vec<&str> {
        self.section_keys(T::SECTION)
    }

    /// Keys currently present in `section`.
    pub fn section_keys(&self, section: Section) -> Vec<&str> {
        self.entries(section).map(|(key, _)| key).collect()
    }

    /// Iterates over the `(key, value)` pairs of one section.
    pub fn entries(&self, section: Section) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.sections
            .get(&section)
            .into_iter()
            .flat_map(|map| map.iter().map(|(k, v)| (k.as_str(), v)))
    }

    /// Number of keys in `section`.
    pub fn section_len(&self, section: Section) -> usize {
        self.sections.get(&section).map_or(0, BTreeMap::len)
    }

    /// Total number of keys across all sections.
    pub fn len(&self) -> usize {
        self.sections.values().map(BTreeMap::len).sum()
    }

    /// Returns `true` when no section holds any key.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
