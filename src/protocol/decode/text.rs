//! Text-protocol field decoder.
//!
//! In the text protocol every field arrives as a textual payload or the
//! null sentinel. Empty payloads are treated as NULL for every type.

use std::str::FromStr;

use crate::config::DecodeOptions;
use crate::error::{Error, Result};
use crate::protocol::types::{SemanticType, TypeInfo, Value};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

/// Decode one raw text field.
///
/// `None` is the null sentinel. A zero-length payload is NULL as well,
/// whatever the target type.
///
/// # Example
///
/// ```
/// use mysql_rows_rs::{decode_text, DecodeOptions, SemanticType, Value};
///
/// let options = DecodeOptions::default();
/// let value = decode_text(Some(b"42".as_slice()), SemanticType::Int32.into(), &options).unwrap();
/// assert_eq!(value, Value::Int32(42));
/// ```
pub fn decode_text(raw: Option<&[u8]>, ty: TypeInfo, options: &DecodeOptions) -> Result<Value> {
    let bytes = match raw {
        None => return Ok(Value::Null),
        Some(bytes) if bytes.is_empty() => return Ok(Value::Null),
        Some(bytes) => bytes,
    };

    match ty.semantic {
        SemanticType::Bytes => Ok(Value::Bytes(bytes.to_vec())),
        SemanticType::Text => Ok(match std::str::from_utf8(bytes) {
            Ok(text) => Value::Text(text.to_string()),
            Err(_) => Value::Bytes(bytes.to_vec()),
        }),
        SemanticType::Time if options.time_as_text => {
            Ok(Value::Text(String::from_utf8_lossy(bytes).into_owned()))
        }
        semantic => {
            let text = std::str::from_utf8(bytes)
                .map_err(|_| malformed(semantic, &String::from_utf8_lossy(bytes), options))?;
            decode_str(text, ty, options)
        }
    }
}

fn decode_str(text: &str, ty: TypeInfo, options: &DecodeOptions) -> Result<Value> {
    let semantic = ty.semantic;
    let value = match (semantic, ty.unsigned) {
        (SemanticType::Int8, false) => Value::Int8(parse_number(text, semantic)?),
        (SemanticType::Int16, false) => Value::Int16(parse_number(text, semantic)?),
        (SemanticType::Int32, false) => Value::Int32(parse_number(text, semantic)?),
        (SemanticType::Int64, false) => Value::Int64(parse_number(text, semantic)?),
        (SemanticType::Int8, true) => Value::UInt8(parse_number(text, semantic)?),
        (SemanticType::Int16, true) => Value::UInt16(parse_number(text, semantic)?),
        (SemanticType::Int32, true) => Value::UInt32(parse_number(text, semantic)?),
        (SemanticType::Int64, true) => Value::UInt64(parse_number(text, semantic)?),
        (SemanticType::Float32, _) => Value::Float32(parse_number(text, semantic)?),
        (SemanticType::Float64, _) => Value::Float64(parse_number(text, semantic)?),
        (SemanticType::Date, _) => {
            if is_zero_temporal(text) {
                return Ok(Value::Null);
            }
            NaiveDate::parse_from_str(text, &options.date_format)
                .map(Value::Date)
                .map_err(|_| malformed(semantic, text, options))?
        }
        (SemanticType::DateTime, _) => {
            if is_zero_temporal(text) {
                return Ok(Value::Null);
            }
            NaiveDateTime::parse_from_str(text, &options.datetime_format)
                .map(Value::DateTime)
                .map_err(|_| malformed(semantic, text, options))?
        }
        (SemanticType::Time, _) => {
            parse_time(text).ok_or_else(|| malformed(semantic, text, options))?
        }
        (SemanticType::Text, _) => Value::Text(text.to_string()),
        (SemanticType::Bytes, _) => Value::Bytes(text.as_bytes().to_vec()),
    };
    Ok(value)
}

/// Parse a numeric literal as the server prints it.
///
/// Only an optional leading `-` followed by a digit is accepted, which rules
/// out `+12`, `inf` and `NaN` that `str::parse` would take.
fn parse_number<T: FromStr>(text: &str, target: SemanticType) -> Result<T> {
    let malformed = || Error::MalformedNumericField {
        value: text.to_string(),
        target,
    };
    let digits = text.strip_prefix('-').unwrap_or(text);
    let literal = match target {
        SemanticType::Float32 | SemanticType::Float64 => {
            digits.starts_with(|c: char| c.is_ascii_digit())
                && digits
                    .bytes()
                    .all(|b| matches!(b, b'0'..=b'9' | b'.' | b'e' | b'E' | b'+' | b'-'))
        }
        _ => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
    };
    if !literal {
        return Err(malformed());
    }
    text.parse().map_err(|_| malformed())
}

fn malformed(semantic: SemanticType, text: &str, options: &DecodeOptions) -> Error {
    match semantic {
        SemanticType::Date => Error::MalformedDateField {
            value: text.to_string(),
            format: options.date_format.clone(),
        },
        SemanticType::DateTime => Error::MalformedDateTimeField {
            value: text.to_string(),
            format: options.datetime_format.clone(),
        },
        SemanticType::Time => Error::MalformedTimeField {
            value: text.to_string(),
        },
        target => Error::MalformedNumericField {
            value: text.to_string(),
            target,
        },
    }
}

/// `0000-00-00`, `0000-00-00 00:00:00` and friends.
fn is_zero_temporal(text: &str) -> bool {
    text.starts_with("0000-00-00")
        && text
            .bytes()
            .all(|b| matches!(b, b'0' | b'-' | b':' | b' ' | b'.'))
}

/// Parse `[-]H+:MM:SS[.ffffff]`.
fn parse_time(text: &str) -> Option<Value> {
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (clock, fraction) = match rest.split_once('.') {
        Some((clock, fraction)) => (clock, Some(fraction)),
        None => (rest, None),
    };

    let mut parts = clock.split(':');
    let hours: i64 = parse_digits(parts.next()?)?;
    let minutes: i64 = parse_digits(parts.next()?)?;
    let seconds: i64 = parse_digits(parts.next()?)?;
    if parts.next().is_some() || minutes > 59 || seconds > 59 {
        return None;
    }

    let micros = match fraction {
        None => 0,
        Some(f) if f.is_empty() || f.len() > 6 => return None,
        Some(f) => parse_digits::<i64>(f)? * 10i64.pow(6 - f.len() as u32),
    };

    let delta = TimeDelta::seconds(hours * 3600 + minutes * 60 + seconds)
        + TimeDelta::microseconds(micros);
    Some(Value::Time(if negative { -delta } else { delta }))
}

fn parse_digits<T: FromStr>(part: &str) -> Option<T> {
    if part.is_empty() || part.len() > 9 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldErrorPolicy;

    fn decode(raw: &[u8], semantic: SemanticType) -> Result<Value> {
        decode_text(Some(raw), semantic.into(), &DecodeOptions::default())
    }

    #[test]
    fn test_integers_round_trip() {
        assert_eq!(decode(b"-128", SemanticType::Int8).unwrap(), Value::Int8(-128));
        assert_eq!(decode(b"32767", SemanticType::Int16).unwrap(), Value::Int16(32767));
        assert_eq!(decode(b"-42", SemanticType::Int32).unwrap(), Value::Int32(-42));
        assert_eq!(
            decode(i64::MIN.to_string().as_bytes(), SemanticType::Int64).unwrap(),
            Value::Int64(i64::MIN)
        );
    }

    #[test]
    fn test_unsigned_integers() {
        let options = DecodeOptions::default();
        let ty = TypeInfo::unsigned(SemanticType::Int64);
        assert_eq!(
            decode_text(Some(b"18446744073709551615".as_slice()), ty, &options).unwrap(),
            Value::UInt64(u64::MAX)
        );
        let ty = TypeInfo::unsigned(SemanticType::Int8);
        assert_eq!(
            decode_text(Some(b"255".as_slice()), ty, &options).unwrap(),
            Value::UInt8(255)
        );
        assert!(matches!(
            decode_text(Some(b"-1".as_slice()), ty, &options),
            Err(Error::MalformedNumericField { .. })
        ));
    }

    #[test]
    fn test_floats_round_trip() {
        for v in [0.0f64, -1.5, 3.141592653589793, 1e300] {
            assert_eq!(
                decode(v.to_string().as_bytes(), SemanticType::Float64).unwrap(),
                Value::Float64(v)
            );
        }
        assert_eq!(decode(b"2.5", SemanticType::Float32).unwrap(), Value::Float32(2.5));
    }

    #[test]
    fn test_malformed_integer_is_not_truncated() {
        match decode(b"12x", SemanticType::Int32) {
            Err(Error::MalformedNumericField { value, target }) => {
                assert_eq!(value, "12x");
                assert_eq!(target, SemanticType::Int32);
            }
            other => panic!("Expected MalformedNumericField, got {:?}", other),
        }
    }

    #[test]
    fn test_non_server_literals_rejected() {
        for raw in [&b"+12"[..], b" 12", b"-", b"0x1F"] {
            assert!(
                matches!(
                    decode(raw, SemanticType::Int32),
                    Err(Error::MalformedNumericField { .. })
                ),
                "{:?}",
                raw
            );
        }
        for raw in [&b"inf"[..], b"-inf", b"NaN", b"+1.5", b".5"] {
            assert!(
                matches!(
                    decode(raw, SemanticType::Float64),
                    Err(Error::MalformedNumericField { .. })
                ),
                "{:?}",
                raw
            );
        }
        assert_eq!(decode(b"1.5e-7", SemanticType::Float64).unwrap(), Value::Float64(1.5e-7));
        assert_eq!(decode(b"-0", SemanticType::Int16).unwrap(), Value::Int16(0));
    }

    #[test]
    fn test_integer_out_of_range() {
        assert!(matches!(
            decode(b"128", SemanticType::Int8),
            Err(Error::MalformedNumericField { .. })
        ));
    }

    #[test]
    fn test_date_round_trip() {
        assert_eq!(
            decode(b"2024-01-15", SemanticType::Date).unwrap(),
            Value::Date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
        );
        assert!(matches!(
            decode(b"2024/01/15", SemanticType::Date),
            Err(Error::MalformedDateField { .. })
        ));
    }

    #[test]
    fn test_datetime_round_trip() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert_eq!(
            decode(b"2024-01-15 10:30:00", SemanticType::DateTime).unwrap(),
            Value::DateTime(expected)
        );
        assert!(matches!(
            decode(b"2024-01-15", SemanticType::DateTime),
            Err(Error::MalformedDateTimeField { .. })
        ));
    }

    #[test]
    fn test_custom_formats() {
        let options = DecodeOptions::new()
            .with_date_format("%d/%m/%Y")
            .with_datetime_format("%d/%m/%Y %H:%M");
        assert_eq!(
            decode_text(Some(b"15/01/2024".as_slice()), SemanticType::Date.into(), &options).unwrap(),
            Value::Date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
        );
        assert_eq!(
            decode_text(Some(b"15/01/2024 10:30".as_slice()), SemanticType::DateTime.into(), &options)
                .unwrap(),
            Value::DateTime(
                NaiveDate::from_ymd_opt(2024, 1, 15)
                    .unwrap()
                    .and_hms_opt(10, 30, 0)
                    .unwrap()
            )
        );
    }

    #[test]
    fn test_zero_dates_are_null() {
        assert_eq!(decode(b"0000-00-00", SemanticType::Date).unwrap(), Value::Null);
        assert_eq!(
            decode(b"0000-00-00 00:00:00", SemanticType::DateTime).unwrap(),
            Value::Null
        );
    }

    #[test]
    fn test_null_and_empty_for_every_type() {
        let options = DecodeOptions::default();
        for semantic in [
            SemanticType::Int8,
            SemanticType::Int64,
            SemanticType::Float64,
            SemanticType::Text,
            SemanticType::Date,
            SemanticType::DateTime,
            SemanticType::Time,
            SemanticType::Bytes,
        ] {
            assert_eq!(decode_text(None, semantic.into(), &options).unwrap(), Value::Null);
            assert_eq!(
                decode_text(Some(b"".as_slice()), semantic.into(), &options).unwrap(),
                Value::Null
            );
        }
    }

    #[test]
    fn test_text_and_bytes_pass_through() {
        assert_eq!(
            decode(b"ann", SemanticType::Text).unwrap(),
            Value::Text("ann".to_string())
        );
        assert_eq!(
            decode(b"123.4500", SemanticType::Text).unwrap(),
            Value::Text("123.4500".to_string())
        );
        assert_eq!(
            decode(&[0xde, 0xad], SemanticType::Bytes).unwrap(),
            Value::Bytes(vec![0xde, 0xad])
        );
        // invalid UTF-8 in a text column falls back to bytes
        assert_eq!(
            decode(&[0xff, 0x00], SemanticType::Text).unwrap(),
            Value::Bytes(vec![0xff, 0x00])
        );
    }

    #[test]
    fn test_time() {
        assert_eq!(
            decode(b"10:30:05", SemanticType::Time).unwrap(),
            Value::Time(TimeDelta::seconds(10 * 3600 + 30 * 60 + 5))
        );
        assert_eq!(
            decode(b"-838:59:59", SemanticType::Time).unwrap(),
            Value::Time(TimeDelta::seconds(-(838 * 3600 + 59 * 60 + 59)))
        );
        assert_eq!(
            decode(b"00:00:01.5", SemanticType::Time).unwrap(),
            Value::Time(TimeDelta::milliseconds(1500))
        );
        assert!(matches!(
            decode(b"10:61:00", SemanticType::Time),
            Err(Error::MalformedTimeField { .. })
        ));
    }

    #[test]
    fn test_time_as_text() {
        let options = DecodeOptions::new().with_time_as_text(true);
        assert_eq!(
            decode_text(Some(b"10:30:05".as_slice()), SemanticType::Time.into(), &options).unwrap(),
            Value::Text("10:30:05".to_string())
        );
    }

    #[test]
    fn test_policy_does_not_change_decoder() {
        // The decoder always reports; the row materializer applies the policy.
        let options = DecodeOptions::new().with_malformed_fields(FieldErrorPolicy::NullFill);
        assert!(decode_text(Some(b"abc".as_slice()), SemanticType::Int16.into(), &options).is_err());
    }
}
