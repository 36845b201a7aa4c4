//! Numeric coercions

use propmap_value::Value;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use std::str::FromStr;

/// Coerce a value to a signed integer.
///
/// Accepts integers, floats with no fractional part, and numeric strings
/// (trimmed). Absent and null input fail.
#[must_use]
pub fn try_int(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Integer(i) => Some(*i),
        Value::Float(x) => integral_float(*x),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Coerce a value to a float.
///
/// Accepts integers, floats, and numeric strings (trimmed).
#[must_use]
pub fn try_float(value: Option<&Value>) -> Option<f64> {
    match value? {
        // Round-trip through text to avoid a silent precision-losing cast
        // for integers beyond 2^53.
        Value::Integer(i) => i.to_string().parse::<f64>().ok(),
        Value::Float(x) => Some(*x),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Coerce a value to a fixed-point decimal.
///
/// Accepts integers, finite floats, and decimal strings (trimmed).
#[must_use]
pub fn try_decimal(value: Option<&Value>) -> Option<Decimal> {
    match value? {
        Value::Integer(i) => Some(Decimal::from(*i)),
        Value::Float(x) => Decimal::from_f64(*x),
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn integral_float(x: f64) -> Option<i64> {
    if !x.is_finite() || x.fract() != 0.0 {
        return None;
    }
    let truncated = x as i64;
    (truncated as f64 == x).then_some(truncated)
}
