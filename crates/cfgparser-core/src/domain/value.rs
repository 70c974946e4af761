//! Sections and the tagged value type stored in a [`crate::Config`].
//!
//! Every value carries its own type tag, and the tag decides which section of
//! the file the value lives in:
//!
//! | Variant           | Section    | Zero value | Written as          |
//! |-------------------|------------|------------|---------------------|
//! | `Value::Bool`     | `[bool]`   | `false`    | `true` / `false`    |
//! | `Value::Text`     | `[string]` | `""`       | verbatim            |
//! | `Value::Integer`  | `[int]`    | `0`        | base-10             |
//! | `Value::Float`    | `[float]`  | `0.0`      | 6 fractional digits |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of fractional digits used when writing a float value.
pub const FLOAT_PRECISION: usize = 6;

/// One of the four typed groups of a config file.
///
/// The declaration order is the order in which sections are serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Bool,
    String,
    Int,
    Float,
}

impl Section {
    /// All sections in serialization order.
    pub const ALL: [Section; 4] = [Section::Bool, Section::String, Section::Int, Section::Float];

    /// The literal name used inside the `[...]` header.
    pub fn name(self) -> &'static str {
        match self {
            Section::Bool => "bool",
            Section::String => "string",
            Section::Int => "int",
            Section::Float => "float",
        }
    }

    /// The zero value returned by [`crate::Config::get`] for absent keys.
    pub fn zero_value(self) -> Value {
        match self {
            Section::Bool => Value::Bool(false),
            Section::String => Value::Text(String::new()),
            Section::Int => Value::Integer(0),
            Section::Float => Value::Float(0.0),
        }
    }

    /// Converts raw value text from a file into a value of this section.
    ///
    /// Returns `None` when the text is not valid for the section's type.
    /// Floats accept decimal and exponent forms (`1.5`, `-2e3`, `inf`, `NaN`);
    /// hex floats and `_` digit separators are rejected.
    /// String values are taken verbatim and never fail.
    pub fn parse_value(self, raw: &str) -> Option<Value> {
        match self {
            Section::Bool => parse_bool(raw).map(Value::Bool),
            Section::String => Some(Value::Text(raw.to_string())),
            Section::Int => raw.parse::<i64>().ok().map(Value::Integer),
            Section::Float => raw.parse::<f64>().ok().map(Value::Float),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a header names a section that does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSectionName(pub String);

impl FromStr for Section {
    type Err = UnknownSectionName;

    /// Section names are case-sensitive: `[Bool]` is not `[bool]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bool" => Ok(Section::Bool),
            "string" => Ok(Section::String),
            "int" => Ok(Section::Int),
            "float" => Ok(Section::Float),
            other => Err(UnknownSectionName(other.to_string())),
        }
    }
}

/// Parses the textual boolean forms accepted in a `[bool]` section.
///
/// Accepted: `1`, `t`, `T`, `TRUE`, `true`, `True` and `0`, `f`, `F`,
/// `FALSE`, `false`, `False`. Anything else (including `yes`/`no` and mixed
/// case such as `tRUE`) is rejected.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// A single typed config value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    Text(String),
    Integer(i64),
    Float(f64),
}

impl Value {
    /// The section this value belongs to, derived from its variant.
    pub fn section(&self) -> Section {
        match self {
            Value::Bool(_) => Section::Bool,
            Value::Text(_) => Section::String,
            Value::Integer(_) => Section::Int,
            Value::Float(_) => Section::Float,
        }
    }
}

/// Renders the value exactly as it appears after `key=` in a config file.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Text(s) => f.write_str(s),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x:.prec$}", prec = FLOAT_PRECISION),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

/// A Rust type that can be read from one section of a [`crate::Config`].
///
/// Implemented for `bool`, `String`, `i64` and `f64`; the associated
/// [`ConfigType::SECTION`] ties each type to its section so that
/// `config.get::<i64>("port")` looks in `[int]`.
pub trait ConfigType: Sized + Default {
    /// The section values of this type are stored in.
    const SECTION: Section;

    /// Extracts the typed value, or `None` if the variant does not match.
    fn from_value(value: &Value) -> Option<Self>;
}

impl ConfigType for bool {
    const SECTION: Section = Section::Bool;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl ConfigType for String {
    const SECTION: Section = Section::String;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl ConfigType for i64 {
    const SECTION: Section = Section::Int;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

impl ConfigType for f64 {
    const SECTION: Section = Section::Float;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
