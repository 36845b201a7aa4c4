//! Boolean coercion

use propmap_value::Value;

/// Coerce a value to a boolean.
///
/// Accepts booleans, the integers 0 and 1, and the string literals
/// `true`/`false`, `yes`/`no`, `on`/`off`, `1`/`0` (case-insensitive,
/// trimmed).
#[must_use]
pub fn try_bool(value: Option<&Value>) -> Option<bool> {
    match value? {
        Value::Boolean(b) => Some(*b),
        Value::Integer(0) => Some(false),
        Value::Integer(1) => Some(true),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Some(true),
            "false" | "no" | "off" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}
