//! Value variant and mapping alias

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// String-keyed mapping with heterogeneous values.
pub type Map = HashMap<String, Value>;

/// A loosely-typed value as produced by parsing textual configuration or
/// request payloads.
///
/// The variant set is closed: every consumer pattern-matches explicitly
/// instead of relying on duck-typed stringification. Untagged serde lets a
/// JSON document deserialize straight into this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/absent value
    Null,

    /// Boolean value
    Boolean(bool),

    /// Integer value
    Integer(i64),

    /// Floating-point value
    Float(f64),

    /// String value
    String(String),

    /// Ordered sequence of values
    List(Vec<Value>),

    /// Nested mapping
    Map(Map),
}

impl Value {
    /// Check if value is null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Emptiness predicate: null, or a string whose trimmed representation
    /// is empty. Non-string scalars and containers always render non-empty
    /// text, so they are never blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Textual rendering of the value, `None` for null.
    ///
    /// Strings render as-is (no quoting); containers render JSON-style.
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    /// Borrow as a nested mapping, if this is one.
    #[must_use]
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Borrow as a sequence, if this is one.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::String(s) => f.write_str(s),
            Value::List(_) | Value::Map(_) => write_nested(self, f),
        }
    }
}

/// JSON-style rendering for container elements; strings are quoted here so
/// list and map renderings stay unambiguous.
fn write_nested(value: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        Value::Null => f.write_str("null"),
        Value::String(s) => write!(f, "\"{s}\""),
        Value::List(items) => {
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_nested(item, f)?;
            }
            f.write_str("]")
        }
        Value::Map(entries) => {
            f.write_str("{")?;
            let mut keys: Vec<&String> = entries.keys().collect();
            keys.sort();
            for (i, key) in keys.into_iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "\"{key}\": ")?;
                write_nested(&entries[key], f)?;
            }
            f.write_str("}")
        }
        scalar => write!(f, "{scalar}"),
    }
}

/// Blank-string test shared with callers that hold raw text rather than a
/// [`Value`].
#[must_use]
pub fn text_is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Map> for Value {
    fn from(entries: Map) -> Self {
        Value::Map(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_predicate_null() {
        assert!(Value::Null.is_blank());
    }

    #[test]
    fn test_blank_predicate_whitespace_string() {
        assert!(Value::String("   ".to_string()).is_blank());
        assert!(Value::String(String::new()).is_blank());
        assert!(!Value::String(" x ".to_string()).is_blank());
    }

    #[test]
    fn test_blank_predicate_non_string_scalars() {
        assert!(!Value::Integer(0).is_blank());
        assert!(!Value::Float(0.0).is_blank());
        assert!(!Value::Boolean(false).is_blank());
        assert!(!Value::List(vec![]).is_blank());
        assert!(!Value::Map(Map::new()).is_blank());
    }

    #[test]
    fn test_as_text_scalars() {
        assert_eq!(Value::Null.as_text(), None);
        assert_eq!(Value::Boolean(true).as_text().unwrap(), "true");
        assert_eq!(Value::Integer(42).as_text().unwrap(), "42");
        assert_eq!(Value::Float(2.02).as_text().unwrap(), "2.02");
        assert_eq!(Value::String("Hello!".to_string()).as_text().unwrap(), "Hello!");
    }

    #[test]
    fn test_as_text_containers() {
        let list = Value::List(vec![
            Value::Integer(1),
            Value::String("a".to_string()),
        ]);
        assert_eq!(list.as_text().unwrap(), "[1, \"a\"]");

        let mut entries = Map::new();
        entries.insert("k".to_string(), Value::Integer(1));
        assert_eq!(Value::Map(entries).as_text().unwrap(), "{\"k\": 1}");
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(5), Value::Integer(5));
        assert_eq!(Value::from("x"), Value::String("x".to_string()));
        assert_eq!(Value::from(true), Value::Boolean(true));
        assert_eq!(Value::from(1.5), Value::Float(1.5));
    }

    #[test]
    fn test_deserialize_untagged_from_json() {
        let json = r#"{"name": "order", "count": 3, "ratio": 0.5,
                       "live": true, "tags": ["a", "b"],
                       "meta": {"id": 1}, "gone": null}"#;
        let map: Map = serde_json::from_str(json).unwrap();

        assert_eq!(map["name"], Value::String("order".to_string()));
        assert_eq!(map["count"], Value::Integer(3));
        assert_eq!(map["ratio"], Value::Float(0.5));
        assert_eq!(map["live"], Value::Boolean(true));
        assert_eq!(
            map["tags"],
            Value::List(vec![
                Value::String("a".to_string()),
                Value::String("b".to_string())
            ])
        );
        assert!(map["meta"].as_map().is_some());
        assert!(map["gone"].is_null());
    }
}
