//! Integration tests for text-protocol results.
//!
//! Run with: cargo test --test test_text_protocol

use chrono::{NaiveDate, NaiveDateTime};
use mysql_rows_rs::protocol::constants::{BINARY_CHARSET_NR, UNSIGNED_FLAG};
use mysql_rows_rs::{
    assemble_table, iterate, DecodeOptions, Error, FieldDescriptor, FieldErrorPolicy, FieldType,
    MemoryResult, Row, SemanticType, Value,
};

fn datetime(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

/// `SELECT id, name, created FROM users` with two rows.
fn users() -> MemoryResult {
    MemoryResult::new(vec![
        FieldDescriptor::new("id", FieldType::Long),
        FieldDescriptor::new("name", FieldType::VarString).with_length(64),
        FieldDescriptor::new("created", FieldType::DateTime),
    ])
    .with_row(vec![Some("1"), Some("ann"), Some("2023-05-01 09:00:00")])
    .with_row(vec![Some("2"), None, Some("2023-05-02 10:15:30")])
}

#[test]
fn test_assemble_users() {
    let table = assemble_table(&mut users(), &DecodeOptions::default()).unwrap();

    assert_eq!(table.column_names(), vec!["id", "name", "created"]);
    assert_eq!(
        table.column_types(),
        vec![SemanticType::Int32, SemanticType::Text, SemanticType::DateTime]
    );
    assert_eq!(table.len(), 2);
    assert_eq!(
        table.rows()[0].values(),
        &[
            Value::Int32(1),
            Value::Text("ann".to_string()),
            Value::DateTime(datetime("2023-05-01 09:00:00")),
        ]
    );
    assert_eq!(
        table.rows()[1].values(),
        &[
            Value::Int32(2),
            Value::Null,
            Value::DateTime(datetime("2023-05-02 10:15:30")),
        ]
    );
    assert!(table.warnings().is_empty());
}

#[test]
fn test_lazy_matches_eager() {
    let table = assemble_table(&mut users(), &DecodeOptions::default()).unwrap();

    let mut result = users();
    let mut rows = iterate(&mut result, &DecodeOptions::default());
    let mut lazy: Vec<Row> = Vec::new();
    while let Some(row) = rows.advance().unwrap() {
        assert_eq!(row.len(), 3);
        lazy.push(row.clone());
    }

    assert_eq!(lazy, table.rows());
    assert_eq!(rows.rowcount(), 2);
}

#[test]
fn test_lazy_matches_eager_with_low_hint() {
    // Three rows arrive but the native layer reports two
    let long = || {
        users()
            .with_row(vec![Some("3"), Some("cy"), Some("2023-05-03 11:00:00")])
            .with_row_count_hint(Some(2))
    };

    let mut result = long();
    let table = assemble_table(&mut result, &DecodeOptions::default()).unwrap();
    assert_eq!(table.len(), 2);
    assert!(table.warnings().is_empty());
    assert_eq!(result.unread(), 1);

    let mut result = long();
    let lazy = iterate(&mut result, &DecodeOptions::default())
        .fetch_all()
        .unwrap();
    assert_eq!(lazy, table.rows());
}

#[test]
fn test_malformed_number_aborts_table() {
    let mut result = MemoryResult::new(vec![FieldDescriptor::new("n", FieldType::Long)])
        .with_row(vec![Some("12x")]);

    let err = assemble_table(&mut result, &DecodeOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedNumericField {
            ref value,
            target: SemanticType::Int32
        } if value == "12x"
    ));
}

#[test]
fn test_null_fill_keeps_table() {
    let mut result = MemoryResult::new(vec![
        FieldDescriptor::new("n", FieldType::Long),
        FieldDescriptor::new("d", FieldType::Date),
    ])
    .with_row(vec![Some("12x"), Some("2024-13-45")])
    .with_row(vec![Some("3"), Some("2024-02-29")]);
    let options = DecodeOptions::new().with_malformed_fields(FieldErrorPolicy::NullFill);

    let table = assemble_table(&mut result, &options).unwrap();
    assert_eq!(table.rows()[0].values(), &[Value::Null, Value::Null]);
    assert_eq!(
        table.rows()[1].values(),
        &[
            Value::Int32(3),
            Value::Date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
        ]
    );
}

#[test]
fn test_empty_and_zero_values_are_null() {
    let mut result = MemoryResult::new(vec![
        FieldDescriptor::new("n", FieldType::LongLong),
        FieldDescriptor::new("d", FieldType::Date),
        FieldDescriptor::new("ts", FieldType::Timestamp),
        FieldDescriptor::new("f", FieldType::Double),
    ])
    .with_row(vec![Some(""), Some("0000-00-00"), Some("0000-00-00 00:00:00"), None]);

    let table = assemble_table(&mut result, &DecodeOptions::default()).unwrap();
    assert!(table.rows()[0].iter().all(Value::is_null));
}

#[test]
fn test_unsigned_and_custom_formats() {
    let mut result = MemoryResult::new(vec![
        FieldDescriptor::new("big", FieldType::LongLong).with_flags(UNSIGNED_FLAG),
        FieldDescriptor::new("day", FieldType::Date),
    ])
    .with_row(vec![Some("18446744073709551615"), Some("01/05/2023")]);
    let options = DecodeOptions::new().with_date_format("%d/%m/%Y");

    let table = assemble_table(&mut result, &options).unwrap();
    assert_eq!(table.get(0, 0), Some(&Value::UInt64(u64::MAX)));
    assert_eq!(
        table.get_by_name(0, "DAY"),
        Some(&Value::Date(NaiveDate::from_ymd_opt(2023, 5, 1).unwrap()))
    );
}

#[test]
fn test_row_count_mismatch_truncates_with_warning() {
    let mut result = users().with_row_count_hint(Some(3));

    let table = assemble_table(&mut result, &DecodeOptions::default()).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(
        table.warnings(),
        &[Error::RowCountMismatch {
            expected: 3,
            actual: 2
        }]
    );
}

#[test]
fn test_iterator_exhaustion_touches_native_once() {
    let mut result = users();
    {
        let mut rows = iterate(&mut result, &DecodeOptions::default());
        assert_eq!(rows.fetch_all().unwrap().len(), 2);
        assert!(rows.is_exhausted());
        assert!(rows.advance().unwrap().is_none());
        assert!(rows.advance().unwrap().is_none());
    }
    // The hint ends iteration without an extra end-of-data fetch
    assert_eq!(result.fetch_calls(), 2);
}

#[test]
fn test_into_rows_collects() {
    let mut result = users();
    let rows: Vec<Row> = iterate(&mut result, &DecodeOptions::default())
        .into_rows()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].get_by_name("id"), Some(&Value::Int32(2)));
}

#[test]
fn test_charset_selects_text_or_bytes() {
    let mut result = MemoryResult::new(vec![
        FieldDescriptor::new("note", FieldType::Blob).with_charset(45),
        FieldDescriptor::new("hash", FieldType::VarString).with_charset(BINARY_CHARSET_NR),
    ])
    .with_row(vec![Some("hello"), Some("ab")]);

    let table = assemble_table(&mut result, &DecodeOptions::default()).unwrap();
    assert_eq!(table.column_types(), vec![SemanticType::Text, SemanticType::Bytes]);
    assert_eq!(
        table.rows()[0].values(),
        &[Value::Text("hello".to_string()), Value::Bytes(b"ab".to_vec())]
    );
}
