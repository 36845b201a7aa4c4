//! Integration tests for the typed access surfaces

use chrono::{NaiveDate, NaiveDateTime};
use propmap_access::{
    Coerced, DataType, Error, GetOptions, RequiredOptions, get_bool, get_by_path, get_date,
    get_datetime, get_decimal, get_float, get_int, get_list, get_object, get_required_bool,
    get_required_date, get_required_datetime, get_required_decimal, get_required_float,
    get_required_int, get_required_list, get_required_object, get_required_str,
    get_required_value, get_str, get_value,
};
use propmap_value::{Map, Value};
use rust_decimal::Decimal;
use serde_json::json;
use std::str::FromStr;

/// The all-types fixture: every tag has a well-formed entry and a null twin.
fn properties() -> Map {
    serde_json::from_value(json!({
        "object": {"object_1": 1},
        "object_none": null,
        "str": "Hello!",
        "str_none": null,
        "int": "1",
        "int_none": null,
        "datetime": "2018-11-23 01:45:59",
        "datetime_none": null,
        "date": "23.11.2018",
        "date_none": null,
        "bool": "true",
        "bool_none": null,
        "decimal": "1.01",
        "decimal_none": null,
        "list": [1, 2, 3],
        "list_none": null,
        "float": "2.02",
        "float_none": null
    }))
    .unwrap()
}

fn expected_datetime() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2018, 11, 23)
        .unwrap()
        .and_hms_opt(1, 45, 59)
        .unwrap()
}

#[test]
fn test_typed_getters_well_formed_values() -> anyhow::Result<()> {
    let map = properties();

    assert_eq!(get_str(Some(&map), "str", None).unwrap(), "Hello!");
    assert_eq!(get_int(Some(&map), "int", None)?, 1);
    assert_eq!(get_datetime(Some(&map), "datetime", None, None)?, expected_datetime());
    assert_eq!(
        get_date(Some(&map), "date", None, Some("%d.%m.%Y"))?,
        NaiveDate::from_ymd_opt(2018, 11, 23).unwrap()
    );
    assert!(get_bool(Some(&map), "bool", None)?);
    assert_eq!(get_decimal(Some(&map), "decimal", None)?, Decimal::from_str("1.01")?);
    assert_eq!(
        get_list(Some(&map), "list", None)?.unwrap(),
        vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]
    );
    assert_eq!(get_float(Some(&map), "float", None)?, 2.02);

    let object = get_object(Some(&map), "object", None).unwrap();
    assert_eq!(object, &map["object"]);
    Ok(())
}

#[test]
fn test_required_getters_well_formed_values() -> anyhow::Result<()> {
    let map = properties();

    assert_eq!(get_required_str(Some(&map), "str", None)?, "Hello!");
    assert_eq!(get_required_int(Some(&map), "int", None)?, 1);
    assert_eq!(
        get_required_datetime(Some(&map), "datetime", None, None)?,
        expected_datetime()
    );
    assert_eq!(
        get_required_date(Some(&map), "date", None, Some("%d.%m.%Y"))?,
        NaiveDate::from_ymd_opt(2018, 11, 23).unwrap()
    );
    assert!(get_required_bool(Some(&map), "bool", None)?);
    assert_eq!(
        get_required_decimal(Some(&map), "decimal", None)?,
        Decimal::from_str("1.01")?
    );
    assert_eq!(
        get_required_list(Some(&map), "list", None)?,
        vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]
    );
    assert_eq!(get_required_float(Some(&map), "float", None)?, 2.02);
    assert_eq!(get_required_object(Some(&map), "object", None)?, &map["object"]);
    Ok(())
}

#[test]
fn test_optional_and_required_dispatch_agree_on_well_formed_values() {
    let map = properties();
    let cases = [
        ("object", DataType::Object),
        ("str", DataType::Str),
        ("int", DataType::Int),
        ("datetime", DataType::DateTime),
        ("bool", DataType::Bool),
        ("decimal", DataType::Decimal),
        ("list", DataType::List),
        ("float", DataType::Float),
    ];

    for (key, data_type) in cases {
        let optional = get_value(Some(&map), key, data_type, &GetOptions::new())
            .unwrap()
            .unwrap();
        let required =
            get_required_value(Some(&map), key, data_type, &RequiredOptions::new()).unwrap();
        assert_eq!(optional, required, "surfaces disagree for key '{key}'");
    }

    // The date entry needs its explicit format on both surfaces.
    let optional = get_value(
        Some(&map),
        "date",
        DataType::Date,
        &GetOptions::new().format("%d.%m.%Y"),
    )
    .unwrap()
    .unwrap();
    let required = get_required_value(
        Some(&map),
        "date",
        DataType::Date,
        &RequiredOptions::new().format("%d.%m.%Y"),
    )
    .unwrap();
    assert_eq!(optional, required);
    assert_eq!(
        optional,
        Coerced::Date(NaiveDate::from_ymd_opt(2018, 11, 23).unwrap())
    );
}

#[test]
fn test_null_entries_required_surface_raises_missing() {
    let map = properties();
    let null_keys = [
        ("object_none", DataType::Object),
        ("str_none", DataType::Str),
        ("int_none", DataType::Int),
        ("datetime_none", DataType::DateTime),
        ("date_none", DataType::Date),
        ("bool_none", DataType::Bool),
        ("decimal_none", DataType::Decimal),
        ("list_none", DataType::List),
        ("float_none", DataType::Float),
    ];

    for (key, data_type) in null_keys {
        let err = get_required_value(Some(&map), key, data_type, &RequiredOptions::new())
            .unwrap_err();
        assert!(
            matches!(err, Error::MissingParameter { .. }),
            "expected missing-parameter for '{key}', got {err}"
        );
    }

    // A key that was never present behaves the same as a stored null.
    let err = get_required_value(
        Some(&map),
        "object_none2",
        DataType::Str,
        &RequiredOptions::new(),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "Parameter \"object_none2\" is missing");
}

#[test]
fn test_null_entries_optional_surface_returns_defaults_identically() {
    let map = properties();

    assert_eq!(get_str(Some(&map), "str_none", Some("z")).unwrap(), "z");
    assert_eq!(get_int(Some(&map), "int_none", Some(42)).unwrap(), 42);
    assert_eq!(get_float(Some(&map), "float_none", Some(1.5)).unwrap(), 1.5);
    assert!(!get_bool(Some(&map), "bool_none", Some(false)).unwrap());
    assert_eq!(
        get_decimal(Some(&map), "decimal_none", Some(Decimal::from_str("9.99").unwrap())).unwrap(),
        Decimal::from_str("9.99").unwrap()
    );

    let today = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    assert_eq!(get_date(Some(&map), "date_none", Some(today), None).unwrap(), today);
    let stamp = today.and_hms_opt(12, 0, 0).unwrap();
    assert_eq!(
        get_datetime(Some(&map), "datetime_none", Some(stamp), None).unwrap(),
        stamp
    );

    let fallback = [Value::Integer(9)];
    assert_eq!(
        get_list(Some(&map), "list_none", Some(&fallback)).unwrap(),
        Some(vec![Value::Integer(9)])
    );

    let fallback_object = Value::from("fallback");
    assert_eq!(
        get_object(Some(&map), "object_none", Some(&fallback_object)),
        Some(&fallback_object)
    );
}

#[test]
fn test_text_empty_string_asymmetry() {
    let mut map = Map::new();
    map.insert("k".to_string(), Value::from(""));

    // Optional: empty string defaults.
    assert_eq!(get_str(Some(&map), "k", Some("z")).unwrap(), "z");
    // Required: empty string is present, preserved verbatim.
    assert_eq!(get_required_str(Some(&map), "k", None).unwrap(), "");
}

#[test]
fn test_integer_error_label_asymmetry() {
    let mut map = Map::new();
    map.insert("k".to_string(), Value::from("abc"));

    let optional = get_int(Some(&map), "k", None).unwrap_err();
    assert_eq!(
        optional.to_string(),
        "Parameter \"k\" could not be converted to a number"
    );

    let required = get_required_int(Some(&map), "k", None).unwrap_err();
    assert_eq!(
        required.to_string(),
        "Parameter \"k\" could not be converted to a int"
    );
}

#[test]
fn test_list_access_returns_detached_sequence() {
    let map = properties();
    let mut fetched = get_required_list(Some(&map), "list", None).unwrap();
    fetched.clear();
    assert_eq!(
        map["list"],
        Value::List(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)])
    );
}

#[test]
fn test_path_access() {
    let map: Map = serde_json::from_value(json!({
        "a": {"b": "5", "deep": {"flag": "true"}}
    }))
    .unwrap();

    assert_eq!(
        get_by_path(Some(&map), "a.b", DataType::Int, &GetOptions::new()).unwrap(),
        Some(Coerced::Int(5))
    );
    assert_eq!(
        get_by_path(Some(&map), "a.deep.flag", DataType::Bool, &GetOptions::new()).unwrap(),
        Some(Coerced::Bool(true))
    );
    assert_eq!(
        get_by_path(Some(&map), "a.missing.flag", DataType::Bool, &GetOptions::new()).unwrap(),
        None
    );
}

#[test]
fn test_unknown_tag_is_unsupported_not_a_data_error() {
    let err = DataType::from_str("uuid").unwrap_err();
    assert!(matches!(err, Error::UnsupportedType { .. }));
    assert_eq!(err.to_string(), "Not implemented for data type 'uuid'");
}

#[test]
fn test_null_mapping_treated_as_no_value() {
    assert_eq!(get_str(None, "k", Some("d")).unwrap(), "d");
    assert!(matches!(
        get_required_str(None, "k", None).unwrap_err(),
        Error::MissingParameter { .. }
    ));
    assert_eq!(
        get_value(None, "k", DataType::Object, &GetOptions::new()).unwrap(),
        None
    );
}
