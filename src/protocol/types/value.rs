//! Value types for materialized result fields.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use std::fmt;

/// Value enum representing a single field of a row.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// NULL value.
    #[default]
    Null,
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    /// Text value (VARCHAR, CHAR, DECIMAL, ENUM, ...).
    Text(String),
    /// Raw binary value (BLOB, BIT, GEOMETRY, non-UTF-8 text).
    Bytes(Vec<u8>),
    /// Calendar date (DATE).
    Date(NaiveDate),
    /// Date/time value (DATETIME, TIMESTAMP).
    DateTime(NaiveDateTime),
    /// Signed time interval (TIME).
    Time(TimeDelta),
}

impl Value {
    /// Check if the value is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Try to get the value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to convert to i64.
    ///
    /// Unsigned values above `i64::MAX` and non-integer values return `None`.
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            Value::Int8(v) => Some(i64::from(*v)),
            Value::Int16(v) => Some(i64::from(*v)),
            Value::Int32(v) => Some(i64::from(*v)),
            Value::Int64(v) => Some(*v),
            Value::UInt8(v) => Some(i64::from(*v)),
            Value::UInt16(v) => Some(i64::from(*v)),
            Value::UInt32(v) => Some(i64::from(*v)),
            Value::UInt64(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Try to convert to f64.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Value::Float32(v) => Some(f64::from(*v)),
            Value::Float64(v) => Some(*v),
            Value::Text(s) => s.parse().ok(),
            other => other.to_i64().map(|v| v as f64),
        }
    }

    /// Try to get the value as a date.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(d) => Some(*d),
            Value::DateTime(dt) => Some(dt.date()),
            _ => None,
        }
    }

    /// Try to get the value as a date-time.
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Value::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Try to get the value as a time interval.
    pub fn as_time(&self) -> Option<TimeDelta> {
        match self {
            Value::Time(t) => Some(*t),
            _ => None,
        }
    }

    /// Try to get the value as raw bytes.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(bytes) => Some(bytes),
            Value::Text(s) => Some(s.as_bytes()),
            _ => None,
        }
    }
}

/// Format a time interval as `[-]H:MM:SS[.ffffff]`.
pub(crate) fn format_time(delta: &TimeDelta) -> String {
    let sign = if *delta < TimeDelta::zero() { "-" } else { "" };
    let abs = delta.abs();
    let secs = abs.num_seconds();
    let micros = abs.subsec_nanos() / 1_000;
    let (h, m, s) = (secs / 3600, (secs / 60) % 60, secs % 60);
    if micros == 0 {
        format!("{}{}:{:02}:{:02}", sign, h, m, s)
    } else {
        format!("{}{}:{:02}:{:02}.{:06}", sign, h, m, s, micros)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Int8(v) => write!(f, "{}", v),
            Value::Int16(v) => write!(f, "{}", v),
            Value::Int32(v) => write!(f, "{}", v),
            Value::Int64(v) => write!(f, "{}", v),
            Value::UInt8(v) => write!(f, "{}", v),
            Value::UInt16(v) => write!(f, "{}", v),
            Value::UInt32(v) => write!(f, "{}", v),
            Value::UInt64(v) => write!(f, "{}", v),
            Value::Float32(v) => write!(f, "{}", v),
            Value::Float64(v) => write!(f, "{}", v),
            Value::Text(s) => write!(f, "{}", s),
            Value::Bytes(bytes) => write!(f, "<BYTES: {} bytes>", bytes.len()),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Value::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            Value::Time(t) => write!(f, "{}", format_time(t)),
        }
    }
}
