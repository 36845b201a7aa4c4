//! Type tags, coerced outcomes, and per-call options

use crate::Error;
use chrono::{NaiveDate, NaiveDateTime};
use propmap_value::Value;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The requested coercion target.
///
/// The set is fixed; dispatch over it is an exhaustive match. Tags arriving
/// as text (from configuration, mapping definitions, and the like) go
/// through [`FromStr`], which rejects anything outside the set with
/// [`Error::UnsupportedType`] before any lookup happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// Opaque nested mapping, passed through untouched
    Object,

    /// Trimmed text
    Str,

    /// Signed integer
    Int,

    /// Date and time without timezone
    DateTime,

    /// Calendar date
    Date,

    /// Boolean
    Bool,

    /// Fixed-point decimal
    Decimal,

    /// Ordered sequence, re-materialized on access
    List,

    /// Floating-point number
    Float,
}

impl DataType {
    /// Canonical lowercase tag for this type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Object => "object",
            DataType::Str => "str",
            DataType::Int => "int",
            DataType::DateTime => "datetime",
            DataType::Date => "date",
            DataType::Bool => "bool",
            DataType::Decimal => "decimal",
            DataType::List => "list",
            DataType::Float => "float",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "object" => Ok(DataType::Object),
            "str" => Ok(DataType::Str),
            "int" => Ok(DataType::Int),
            "datetime" => Ok(DataType::DateTime),
            "date" => Ok(DataType::Date),
            "bool" => Ok(DataType::Bool),
            "decimal" => Ok(DataType::Decimal),
            "list" => Ok(DataType::List),
            "float" => Ok(DataType::Float),
            other => Err(Error::unsupported(other)),
        }
    }
}

/// A successfully coerced value, tagged with its runtime type.
#[derive(Debug, Clone, PartialEq)]
pub enum Coerced {
    /// Nested value passed through unchanged
    Object(Value),

    /// Stringified (and, on the optional path, trimmed) text
    Str(String),

    /// Parsed integer
    Int(i64),

    /// Parsed datetime
    DateTime(NaiveDateTime),

    /// Parsed date
    Date(NaiveDate),

    /// Parsed boolean
    Bool(bool),

    /// Parsed fixed-point decimal
    Decimal(Decimal),

    /// Re-materialized sequence
    List(Vec<Value>),

    /// Parsed float
    Float(f64),
}

/// Per-call configuration for optional access.
///
/// The default is a [`Value`] so it flows through the same coercion as a
/// stored entry; the format string applies to the date and datetime targets
/// only.
#[derive(Debug, Clone, Default)]
pub struct GetOptions {
    /// Substituted when the field is absent or blank
    pub default: Option<Value>,

    /// strftime format for date/datetime targets
    pub format: Option<String>,
}

impl GetOptions {
    /// Create empty options: no default, no explicit format.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default value.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Set the strftime format.
    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}

/// Per-call configuration for required access. Required fields have no
/// defaults; only the missing-value message can be overridden.
#[derive(Debug, Clone, Default)]
pub struct RequiredOptions {
    /// Overrides the default missing-value message
    pub missing_error: Option<String>,

    /// strftime format for date/datetime targets
    pub format: Option<String>,
}

impl RequiredOptions {
    /// Create empty options: default message, no explicit format.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the missing-value message.
    #[must_use]
    pub fn missing_error(mut self, message: impl Into<String>) -> Self {
        self.missing_error = Some(message.into());
        self
    }

    /// Set the strftime format.
    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}
