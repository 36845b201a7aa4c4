#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # propmap-value
//!
//! Heterogeneous value model for key-value mappings.
//!
//! This crate provides the closed [`Value`] variant used everywhere a mapping
//! with loosely-typed entries is read: parsed configuration, request payloads,
//! settings trees. Values round-trip untagged through serde, so a JSON object
//! deserializes directly into a [`Map`].

/// Core value variant, mapping alias, and emptiness predicate.
pub mod value;

/// Heterogeneous value and string-keyed mapping types.
pub use value::{Map, Value, text_is_blank};
