//! Optional and required typed access
//!
//! Raw retrieval treats a null mapping, a blank key, a missing key, and a
//! stored null all as "absent". The optional surface substitutes the caller
//! default when a field is absent, or blank for the scalar targets; the
//! required surface raises [`Error::MissingParameter`] before any coercion
//! is attempted.

use crate::types::{Coerced, DataType, GetOptions, RequiredOptions};
use crate::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime};
use propmap_value::{Map, Value};
use rust_decimal::Decimal;
use tracing::trace;

/// Raw entry lookup. Stored nulls count as absent.
fn raw_value<'a>(map: Option<&'a Map>, key: &str) -> Option<&'a Value> {
    let map = map?;
    if key.trim().is_empty() {
        return None;
    }
    map.get(key).filter(|entry| !entry.is_null())
}

/// Raw entry lookup for the required surface.
fn required_raw<'a>(
    map: Option<&'a Map>,
    key: &str,
    missing_error: Option<&str>,
) -> Result<&'a Value> {
    raw_value(map, key).ok_or_else(|| Error::missing(key, missing_error))
}

/// Scalar coercion with default substitution: a blank stored value falls
/// back to the default, and the picked value (stored or default) goes
/// through the same parser.
fn optional_scalar<T>(
    map: Option<&Map>,
    key: &str,
    default: Option<&Value>,
    target: &str,
    parse: impl Fn(Option<&Value>) -> Option<T>,
) -> Result<T> {
    let picked = match raw_value(map, key) {
        Some(entry) if !entry.is_blank() => Some(entry),
        _ => default,
    };
    parse(picked).ok_or_else(|| Error::invalid(key, target))
}

/// Scalar coercion on the required surface: absence raises before parsing.
fn required_scalar<T>(
    map: Option<&Map>,
    key: &str,
    missing_error: Option<&str>,
    target: &str,
    parse: impl Fn(Option<&Value>) -> Option<T>,
) -> Result<T> {
    let entry = required_raw(map, key, missing_error)?;
    parse(Some(entry)).ok_or_else(|| Error::invalid(key, target))
}

/// Text access with a [`Value`]-typed default. A blank stored value falls
/// back to the default; whichever side is picked is stringified and trimmed.
fn str_value(map: Option<&Map>, key: &str, default: Option<&Value>) -> Option<String> {
    let rendered = match raw_value(map, key) {
        Some(entry) if !entry.is_blank() => entry.as_text(),
        _ => default?.as_text(),
    };
    rendered.map(|s| s.trim().to_string())
}

/// Sequence access with a [`Value`]-typed default. No blank-string check
/// applies; the default is only consulted on true absence.
fn list_value(map: Option<&Map>, key: &str, default: Option<&Value>) -> Result<Option<Vec<Value>>> {
    match raw_value(map, key) {
        None => Ok(default.and_then(Value::as_list).map(<[Value]>::to_vec)),
        Some(Value::List(items)) => Ok(Some(items.clone())),
        Some(_) => Err(Error::invalid(key, "list")),
    }
}

/// Get a nested value untouched: identity pass-through of the stored entry,
/// or the caller's default when absent. No emptiness check applies.
#[must_use]
pub fn get_object<'a>(
    map: Option<&'a Map>,
    key: &str,
    default: Option<&'a Value>,
) -> Option<&'a Value> {
    raw_value(map, key).or(default)
}

/// Get a text field, trimmed. Absent or blank values fall back to the
/// default, which is itself trimmed; with no default the result is `None`.
#[must_use]
pub fn get_str(map: Option<&Map>, key: &str, default: Option<&str>) -> Option<String> {
    let default = default.map(Value::from);
    str_value(map, key, default.as_ref())
}

/// Get an integer field.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] (target `number`) when neither the
/// stored value nor the default yields an integer.
pub fn get_int(map: Option<&Map>, key: &str, default: Option<i64>) -> Result<i64> {
    let default = default.map(Value::Integer);
    optional_scalar(map, key, default.as_ref(), "number", propmap_coerce::try_int)
}

/// Get a float field.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] (target `float`) when neither the
/// stored value nor the default yields a float.
pub fn get_float(map: Option<&Map>, key: &str, default: Option<f64>) -> Result<f64> {
    let default = default.map(Value::Float);
    optional_scalar(map, key, default.as_ref(), "float", propmap_coerce::try_float)
}

/// Get a fixed-point decimal field.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] (target `decimal`) when neither the
/// stored value nor the default yields a decimal.
pub fn get_decimal(map: Option<&Map>, key: &str, default: Option<Decimal>) -> Result<Decimal> {
    // Decimal has no Value variant; its text form round-trips losslessly.
    let default = default.map(|d| Value::String(d.to_string()));
    optional_scalar(map, key, default.as_ref(), "decimal", propmap_coerce::try_decimal)
}

/// Get a boolean field.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] (target `bool`) when neither the
/// stored value nor the default yields a boolean.
pub fn get_bool(map: Option<&Map>, key: &str, default: Option<bool>) -> Result<bool> {
    let default = default.map(Value::Boolean);
    optional_scalar(map, key, default.as_ref(), "bool", propmap_coerce::try_bool)
}

/// Get a date field, honoring an explicit strftime format.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] (target `date`) when the stored value
/// does not parse, or when the field is absent and no default was given.
pub fn get_date(
    map: Option<&Map>,
    key: &str,
    default: Option<NaiveDate>,
    format: Option<&str>,
) -> Result<NaiveDate> {
    match raw_value(map, key) {
        Some(entry) if !entry.is_blank() => propmap_coerce::try_date(Some(entry), format)
            .ok_or_else(|| Error::invalid(key, "date")),
        _ => default.ok_or_else(|| Error::invalid(key, "date")),
    }
}

/// Get a datetime field, honoring an explicit strftime format.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] (target `datetime`) when the stored
/// value does not parse, or when the field is absent and no default was
/// given.
pub fn get_datetime(
    map: Option<&Map>,
    key: &str,
    default: Option<NaiveDateTime>,
    format: Option<&str>,
) -> Result<NaiveDateTime> {
    match raw_value(map, key) {
        Some(entry) if !entry.is_blank() => propmap_coerce::try_datetime(Some(entry), format)
            .ok_or_else(|| Error::invalid(key, "datetime")),
        _ => default.ok_or_else(|| Error::invalid(key, "datetime")),
    }
}

/// Get a sequence field as a newly built `Vec`; mutating the result never
/// touches the mapping. Absence yields the default as-is.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] (target `list`) when a present value
/// is not a sequence.
pub fn get_list(
    map: Option<&Map>,
    key: &str,
    default: Option<&[Value]>,
) -> Result<Option<Vec<Value>>> {
    let default = default.map(|items| Value::List(items.to_vec()));
    list_value(map, key, default.as_ref())
}

/// Get a required nested value.
///
/// # Errors
///
/// Returns [`Error::MissingParameter`] when absent.
pub fn get_required_object<'a>(
    map: Option<&'a Map>,
    key: &str,
    missing_error: Option<&str>,
) -> Result<&'a Value> {
    required_raw(map, key, missing_error)
}

/// Get a required text field, stringified without trimming. A present empty
/// string is preserved, not treated as missing.
///
/// # Errors
///
/// Returns [`Error::MissingParameter`] when absent.
pub fn get_required_str(
    map: Option<&Map>,
    key: &str,
    missing_error: Option<&str>,
) -> Result<String> {
    let entry = required_raw(map, key, missing_error)?;
    Ok(entry.as_text().unwrap_or_default())
}

/// Get a required integer field.
///
/// # Errors
///
/// Returns [`Error::MissingParameter`] when absent, or
/// [`Error::InvalidParameter`] (target `int`) when unconvertible.
pub fn get_required_int(
    map: Option<&Map>,
    key: &str,
    missing_error: Option<&str>,
) -> Result<i64> {
    required_scalar(map, key, missing_error, "int", propmap_coerce::try_int)
}

/// Get a required float field.
///
/// # Errors
///
/// Returns [`Error::MissingParameter`] when absent, or
/// [`Error::InvalidParameter`] (target `float`) when unconvertible.
pub fn get_required_float(
    map: Option<&Map>,
    key: &str,
    missing_error: Option<&str>,
) -> Result<f64> {
    required_scalar(map, key, missing_error, "float", propmap_coerce::try_float)
}

/// Get a required fixed-point decimal field.
///
/// # Errors
///
/// Returns [`Error::MissingParameter`] when absent, or
/// [`Error::InvalidParameter`] (target `decimal`) when unconvertible.
pub fn get_required_decimal(
    map: Option<&Map>,
    key: &str,
    missing_error: Option<&str>,
) -> Result<Decimal> {
    required_scalar(map, key, missing_error, "decimal", propmap_coerce::try_decimal)
}

/// Get a required boolean field.
///
/// # Errors
///
/// Returns [`Error::MissingParameter`] when absent, or
/// [`Error::InvalidParameter`] (target `bool`) when unconvertible.
pub fn get_required_bool(
    map: Option<&Map>,
    key: &str,
    missing_error: Option<&str>,
) -> Result<bool> {
    required_scalar(map, key, missing_error, "bool", propmap_coerce::try_bool)
}

/// Get a required date field, honoring an explicit strftime format.
///
/// # Errors
///
/// Returns [`Error::MissingParameter`] when absent, or
/// [`Error::InvalidParameter`] (target `date`) when unconvertible.
pub fn get_required_date(
    map: Option<&Map>,
    key: &str,
    missing_error: Option<&str>,
    format: Option<&str>,
) -> Result<NaiveDate> {
    required_scalar(map, key, missing_error, "date", |value| {
        propmap_coerce::try_date(value, format)
    })
}

/// Get a required datetime field, honoring an explicit strftime format.
///
/// # Errors
///
/// Returns [`Error::MissingParameter`] when absent, or
/// [`Error::InvalidParameter`] (target `datetime`) when unconvertible.
pub fn get_required_datetime(
    map: Option<&Map>,
    key: &str,
    missing_error: Option<&str>,
    format: Option<&str>,
) -> Result<NaiveDateTime> {
    required_scalar(map, key, missing_error, "datetime", |value| {
        propmap_coerce::try_datetime(value, format)
    })
}

/// Get a required sequence field as a newly built `Vec`.
///
/// # Errors
///
/// Returns [`Error::MissingParameter`] when absent, or
/// [`Error::InvalidParameter`] (target `list`) when the value is not a
/// sequence.
pub fn get_required_list(
    map: Option<&Map>,
    key: &str,
    missing_error: Option<&str>,
) -> Result<Vec<Value>> {
    match required_raw(map, key, missing_error)? {
        Value::List(items) => Ok(items.clone()),
        _ => Err(Error::invalid(key, "list")),
    }
}

/// Get a field coerced to the tagged type, with default substitution.
///
/// `Ok(None)` means the field was absent and no usable default was given
/// (only the object, text, and list targets can answer this way; the scalar
/// targets report an unusable default as a coercion failure).
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] when the picked value cannot be
/// coerced to the tagged type.
pub fn get_value(
    map: Option<&Map>,
    key: &str,
    data_type: DataType,
    opts: &GetOptions,
) -> Result<Option<Coerced>> {
    trace!(key, data_type = %data_type, "optional access");
    let default = opts.default.as_ref();
    let format = opts.format.as_deref();

    match data_type {
        DataType::Object => Ok(get_object(map, key, default).cloned().map(Coerced::Object)),
        DataType::Str => Ok(str_value(map, key, default).map(Coerced::Str)),
        DataType::Int => optional_scalar(map, key, default, "number", propmap_coerce::try_int)
            .map(|v| Some(Coerced::Int(v))),
        DataType::DateTime => optional_scalar(map, key, default, "datetime", |value| {
            propmap_coerce::try_datetime(value, format)
        })
        .map(|v| Some(Coerced::DateTime(v))),
        DataType::Date => optional_scalar(map, key, default, "date", |value| {
            propmap_coerce::try_date(value, format)
        })
        .map(|v| Some(Coerced::Date(v))),
        DataType::Bool => optional_scalar(map, key, default, "bool", propmap_coerce::try_bool)
            .map(|v| Some(Coerced::Bool(v))),
        DataType::Decimal => {
            optional_scalar(map, key, default, "decimal", propmap_coerce::try_decimal)
                .map(|v| Some(Coerced::Decimal(v)))
        }
        DataType::List => list_value(map, key, default).map(|v| v.map(Coerced::List)),
        DataType::Float => optional_scalar(map, key, default, "float", propmap_coerce::try_float)
            .map(|v| Some(Coerced::Float(v))),
    }
}

/// Get a required field coerced to the tagged type.
///
/// # Errors
///
/// Returns [`Error::MissingParameter`] when the field is absent (before any
/// coercion is attempted), or [`Error::InvalidParameter`] when the present
/// value cannot be coerced.
pub fn get_required_value(
    map: Option<&Map>,
    key: &str,
    data_type: DataType,
    opts: &RequiredOptions,
) -> Result<Coerced> {
    trace!(key, data_type = %data_type, "required access");
    let missing = opts.missing_error.as_deref();
    let format = opts.format.as_deref();

    match data_type {
        DataType::Object => {
            get_required_object(map, key, missing).map(|v| Coerced::Object(v.clone()))
        }
        DataType::Str => get_required_str(map, key, missing).map(Coerced::Str),
        DataType::Int => get_required_int(map, key, missing).map(Coerced::Int),
        DataType::DateTime => {
            get_required_datetime(map, key, missing, format).map(Coerced::DateTime)
        }
        DataType::Date => get_required_date(map, key, missing, format).map(Coerced::Date),
        DataType::Bool => get_required_bool(map, key, missing).map(Coerced::Bool),
        DataType::Decimal => get_required_decimal(map, key, missing).map(Coerced::Decimal),
        DataType::List => get_required_list(map, key, missing).map(Coerced::List),
        DataType::Float => get_required_float(map, key, missing).map(Coerced::Float),
    }
}
