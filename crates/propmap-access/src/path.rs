//! Dotted-path access into nested mappings

use crate::accessor::get_value;
use crate::types::{Coerced, DataType, GetOptions};
use crate::Result;
use propmap_value::{Map, Value, text_is_blank};
use tracing::trace;

/// Resolve a dotted path ("a.b.c") against a nested mapping and coerce the
/// value at its end.
///
/// The walk descends one segment at a time through nested maps and gives up
/// with `Ok(None)` as soon as the path is blank, the parent is absent, an
/// intermediate segment is missing or not a map, or the final segment is not
/// present. Only the value at the final segment is coerced, via [`get_value`]
/// on the map that contains it.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`](crate::Error::InvalidParameter) when
/// the value at the end of the path cannot be coerced to the tagged type.
/// Missing path segments never raise.
pub fn get_by_path(
    parent: Option<&Map>,
    path: &str,
    data_type: DataType,
    opts: &GetOptions,
) -> Result<Option<Coerced>> {
    if text_is_blank(path) {
        return Ok(None);
    }
    let Some(mut current) = parent else {
        return Ok(None);
    };

    let segments: Vec<&str> = path.split('.').collect();
    let Some((last, intermediate)) = segments.split_last() else {
        return Ok(None);
    };

    for segment in intermediate {
        match current.get(*segment) {
            Some(Value::Map(inner)) => {
                trace!(path, segment, "descending");
                current = inner;
            }
            _ => return Ok(None),
        }
    }

    if !current.contains_key(*last) {
        return Ok(None);
    }
    get_value(Some(current), last, data_type, opts)
}
