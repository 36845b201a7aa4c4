#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # propmap-access
//!
//! Typed optional/required access over heterogeneous key-value mappings.
//!
//! Given a [`Map`](propmap_value::Map) with loosely-typed values, this crate
//! extracts a field by key, coerces it to a requested semantic type, applies
//! a caller default when the field is absent, and raises a distinguished
//! error when a required field is missing or unconvertible. Two parallel
//! call surfaces exist for every target type: optional-with-default
//! (`get_*`) and required-with-overridable-message (`get_required_*`), plus
//! a tag-dispatched pair ([`get_value`] / [`get_required_value`]) and a
//! dotted-path convenience operation ([`get_by_path`]).

/// Optional and required typed getters plus the tag-dispatched surfaces.
pub mod accessor;
/// Dotted-path descent into nested mappings.
pub mod path;
/// Type tags, coerced outcomes, and per-call option structures.
pub mod types;

pub use accessor::{
    get_bool, get_date, get_datetime, get_decimal, get_float, get_int, get_list, get_object,
    get_required_bool, get_required_date, get_required_datetime, get_required_decimal,
    get_required_float, get_required_int, get_required_list, get_required_object,
    get_required_str, get_required_value, get_str, get_value,
};
pub use path::get_by_path;
pub use types::{Coerced, DataType, GetOptions, RequiredOptions};

use thiserror::Error;

/// Errors raised by the access layer
#[derive(Error, Debug)]
pub enum Error {
    /// A required field's raw value is absent. The message is
    /// caller-overridable; the default embeds the key name.
    #[error("{message}")]
    MissingParameter { message: String },

    /// A present value could not be parsed into the requested type.
    #[error("Parameter \"{key}\" could not be converted to a {target}")]
    InvalidParameter { key: String, target: String },

    /// A type tag outside the fixed set. A defect in the calling code, not
    /// bad input data.
    #[error("Not implemented for data type '{tag}'")]
    UnsupportedType { tag: String },
}

impl Error {
    /// Build a missing-parameter error, preferring the caller's message.
    pub fn missing(key: &str, override_message: Option<&str>) -> Self {
        let message = match override_message {
            Some(text) => text.to_string(),
            None => format!("Parameter \"{key}\" is missing"),
        };
        Self::MissingParameter { message }
    }

    /// Build an invalid-coercion error naming the key and the target type.
    pub fn invalid(key: impl Into<String>, target: impl Into<String>) -> Self {
        Self::InvalidParameter {
            key: key.into(),
            target: target.into(),
        }
    }

    /// Build an unsupported-type error for a tag outside the fixed set.
    pub fn unsupported(tag: impl Into<String>) -> Self {
        Self::UnsupportedType { tag: tag.into() }
    }
}

/// Crate-local result type for access operations.
pub type Result<T> = std::result::Result<T, Error>;
