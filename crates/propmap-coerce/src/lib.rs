#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

//! # propmap-coerce
//!
//! Fallible scalar coercions for heterogeneous mapping values.
//!
//! Every parser here takes `Option<&Value>` and answers with `Option<T>`:
//! absent or null input reports failure instead of panicking, and no parser
//! ever raises. Callers decide what a failed coercion means (default, error,
//! skip); this crate only answers "did it parse, and to what".

/// Integer, float, and fixed-point decimal coercions.
pub mod numeric;
/// Boolean coercion from booleans, 0/1 integers, and common literals.
pub mod logical;
/// Date and datetime coercions with optional explicit formats.
pub mod temporal;

pub use logical::try_bool;
pub use numeric::{try_decimal, try_float, try_int};
pub use temporal::{try_date, try_datetime};
