//! Integration tests for the nullable wrappers
//!
//! Exercises every kind through the text, JSON and storage interfaces and
//! checks that null survives each of them.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use nullscalar::prelude::*;
use nullscalar::AppConfig;
use serde::{Deserialize, Serialize};

fn doomsday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2012, 12, 21).unwrap()
}

fn doomsday_time() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2012, 12, 21, 21, 21, 21)
        .unwrap()
}

/// Push a null through every codec and check it comes back null
fn assert_null_survives<T: Scalar>() {
    let null = Nullable::<T>::null();

    assert_eq!(null.to_json().unwrap(), b"null", "{} to_json", T::KIND);
    assert!(Nullable::<T>::from_json(b"null").unwrap().is_null());

    assert!(null.encode_text().is_empty(), "{} encode_text", T::KIND);
    assert!(Nullable::<T>::from_text(b"").unwrap().is_null());

    assert_eq!(null.to_scalar_value(), ScalarValue::Null);
    assert!(Nullable::<T>::from_scalar(&ScalarValue::Null).unwrap().is_null());
}

#[test]
fn test_null_round_trips_every_kind() {
    assert_null_survives::<bool>();
    assert_null_survives::<i64>();
    assert_null_survives::<u64>();
    assert_null_survives::<f64>();
    assert_null_survives::<String>();
    assert_null_survives::<NaiveDate>();
    assert_null_survives::<DateTime<FixedOffset>>();
}

#[test]
fn test_zero_values_are_not_null() {
    assert_eq!(NullBool::from(false).to_json().unwrap(), b"false");
    assert_eq!(NullInt::from(0i64).to_json().unwrap(), b"0");
    assert_eq!(NullUint::from(0u64).to_json().unwrap(), b"0");
    assert_eq!(NullString::from(String::new()).to_json().unwrap(), b"\"\"");

    assert_eq!(NullInt::from(0i64).encode_text(), b"0");
    assert_eq!(NullBool::from(false).encode_text(), b"false");
}

#[test]
fn test_text_and_json_agree() {
    let date = NullDate::from(doomsday());
    let date_time = NullDateTime::from(doomsday_time());

    assert_eq!(date.to_string(), "2012-12-21");
    assert_eq!(date_time.to_string(), "2012-12-21T21:21:21+0000");

    let parsed: NullDate = "2012-12-21".parse().unwrap();
    assert_eq!(parsed, date);
    let parsed: NullDateTime = "2012-12-21T21:21:21+0000".parse().unwrap();
    assert_eq!(parsed, date_time);
}

#[test]
fn test_storage_round_trip() {
    let written = NullInt::from(-42i64).to_scalar_value();
    assert_eq!(written, ScalarValue::Int(-42));
    assert_eq!(NullInt::from_scalar(&written).unwrap(), NullInt::from(-42i64));

    let written = NullString::from("hello".to_string()).to_scalar_value();
    assert_eq!(NullString::from_scalar(&written).unwrap().value, "hello");

    let written = NullDate::from(doomsday()).to_scalar_value();
    assert_eq!(written, ScalarValue::Date(doomsday()));
}

#[test]
fn test_scan_converts_driver_text() {
    let mut count = NullInt::null();
    count.scan(&ScalarValue::from(&b"12345"[..])).unwrap();
    assert_eq!(count, NullInt::from(12345i64));

    let mut flag = NullBool::null();
    flag.scan(&ScalarValue::from("t")).unwrap();
    assert_eq!(flag, NullBool::from(true));

    let mut ratio = NullFloat::null();
    ratio.scan(&ScalarValue::Int(3)).unwrap();
    assert_eq!(ratio.value, 3.0);
}

#[test]
fn test_scan_failure_leaves_wrapper_null() {
    let mut count = NullInt::from(7i64);
    let err = count.scan(&ScalarValue::from("9223372036854775808")).unwrap_err();
    assert!(err.is_out_of_range());
    assert!(count.is_null());

    let mut unsigned = NullUint::from(7u64);
    assert!(unsigned.scan(&ScalarValue::Int(-1)).is_err());
    assert!(unsigned.is_null());
}

#[test]
fn test_assign_into_nullable_uses_scanner() {
    let mut count = NullInt::null();
    assign(&mut count, &ScalarValue::from("99")).unwrap();
    assert_eq!(count, NullInt::from(99i64));
    assert_eq!(count.as_slot().type_name(), "int");

    assign(&mut count, &ScalarValue::Null).unwrap();
    assert!(count.is_null());
}

#[test]
fn test_scan_reports_conversion_error() {
    let mut count = NullInt::null();
    let err = count.scan(&ScalarValue::from("twelve")).unwrap_err();
    assert_eq!(err.parse_failure(), Some(ParseFailure::Malformed));

    let wrapped: NullError = err.into();
    assert!(matches!(wrapped, NullError::Conversion(_)));
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Account {
    id: NullInt,
    name: NullString,
    active: NullBool,
    balance: NullFloat,
    opened: NullDate,
    last_login: NullDateTime,
}

#[test]
fn test_struct_with_nullable_fields() {
    let json = r#"{
        "id": 7,
        "name": null,
        "active": true,
        "balance": 12.5,
        "opened": "2012-12-21",
        "last_login": null
    }"#;

    let account: Account = serde_json::from_str(json).unwrap();
    assert_eq!(account.id, NullInt::from(7i64));
    assert!(account.name.is_null());
    assert_eq!(account.active, NullBool::from(true));
    assert_eq!(account.balance, NullFloat::from(12.5));
    assert_eq!(account.opened, NullDate::from(doomsday()));
    assert!(account.last_login.is_null());

    let encoded = serde_json::to_value(&account).unwrap();
    assert_eq!(
        encoded,
        serde_json::json!({
            "id": 7,
            "name": null,
            "active": true,
            "balance": 12.5,
            "opened": "2012-12-21",
            "last_login": null
        })
    );
}

#[test]
fn test_struct_rejects_wrong_shape() {
    let json = r#"{
        "id": "seven",
        "name": null,
        "active": true,
        "balance": 1.0,
        "opened": null,
        "last_login": null
    }"#;
    let err = serde_json::from_str::<Account>(json).unwrap_err();
    assert!(err.to_string().contains("cannot decode string into nullable int"), "{}", err);
}

#[test]
fn test_sql_type_from_config() {
    let config = AppConfig::from_toml_str(
        r#"
        [types]
        string = "VARCHAR(255)"
        "#,
    )
    .unwrap();

    assert_eq!(NullString::sql_type(&config.types), "VARCHAR(255)");
    assert_eq!(NullInt::sql_type(&config.types), "BIGINT");
    assert_eq!(NullUint::sql_type(&config.types), "BIGINT");
    assert_eq!(NullDateTime::sql_type(&config.types), "TIMESTAMP WITH TIME ZONE");
}
