//! Fixed-size temporal record used by DATE, TIME and DATETIME bindings.
//!
//! The record is 40 bytes, little-endian:
//! - `[0..4]`   year
//! - `[4..8]`   month (1-12)
//! - `[8..12]`  day (1-31)
//! - `[12..16]` hour (0-23, up to 838 for TIME)
//! - `[16..20]` minute (0-59)
//! - `[20..24]` second (0-59)
//! - `[24..32]` second_part (microseconds)
//! - `[32]`     negative (TIME only)
//! - `[36..40]` kind (date / datetime / time)

use crate::error::{Error, Result};
use crate::protocol::buffer::{ReadBuffer, WriteBuffer};
use crate::protocol::constants::*;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

/// Decoded temporal record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TemporalRecord {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Microseconds.
    pub second_part: u64,
    pub negative: bool,
    pub kind: i32,
}

impl TemporalRecord {
    /// Read a record from the leading `TEMPORAL_RECORD_LEN` bytes of `data`.
    ///
    /// # Errors
    /// Returns `Error::BufferTooSmall` if `data` is shorter than a record.
    #[track_caller]
    pub fn read(data: &[u8]) -> Result<Self> {
        let mut buf = ReadBuffer::new(data);
        if !buf.has_remaining(TEMPORAL_RECORD_LEN) {
            return Err(Error::BufferTooSmall {
                needed: TEMPORAL_RECORD_LEN,
                available: buf.remaining(),
                location: std::panic::Location::caller(),
            });
        }
        let year = buf.read_u32_le()?;
        let month = buf.read_u32_le()?;
        let day = buf.read_u32_le()?;
        let hour = buf.read_u32_le()?;
        let minute = buf.read_u32_le()?;
        let second = buf.read_u32_le()?;
        let second_part = buf.read_u64_le()?;
        let negative = buf.read_u8()? != 0;
        buf.skip(TEMPORAL_OFFSET_KIND - TEMPORAL_OFFSET_NEGATIVE - 1)?;
        let kind = buf.read_i32_le()?;
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            second_part,
            negative,
            kind,
        })
    }

    /// Encode the record into its 40-byte layout.
    pub fn encode(&self) -> [u8; TEMPORAL_RECORD_LEN] {
        let mut out = WriteBuffer::with_capacity(TEMPORAL_RECORD_LEN);
        out.write_u32_le(self.year);
        out.write_u32_le(self.month);
        out.write_u32_le(self.day);
        out.write_u32_le(self.hour);
        out.write_u32_le(self.minute);
        out.write_u32_le(self.second);
        out.write_u64_le(self.second_part);
        out.write_u8(u8::from(self.negative));
        out.write_zeros(TEMPORAL_OFFSET_KIND - TEMPORAL_OFFSET_NEGATIVE - 1);
        out.write_i32_le(self.kind);

        let mut record = [0u8; TEMPORAL_RECORD_LEN];
        record.copy_from_slice(out.as_bytes());
        record
    }

    /// Build a DATE record.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year().max(0) as u32,
            month: date.month(),
            day: date.day(),
            kind: TEMPORAL_KIND_DATE,
            ..Default::default()
        }
    }

    /// Build a DATETIME record.
    pub fn from_datetime(dt: NaiveDateTime) -> Self {
        Self {
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
            second_part: u64::from(dt.nanosecond() / 1_000),
            kind: TEMPORAL_KIND_DATETIME,
            ..Self::from_date(dt.date())
        }
    }

    /// Build a TIME record.
    pub fn from_time(delta: TimeDelta) -> Self {
        let abs = delta.abs();
        let secs = abs.num_seconds();
        Self {
            hour: (secs / 3600) as u32,
            minute: ((secs / 60) % 60) as u32,
            second: (secs % 60) as u32,
            second_part: u64::from(abs.subsec_nanos().unsigned_abs() / 1_000),
            negative: delta < TimeDelta::zero(),
            kind: TEMPORAL_KIND_TIME,
            ..Default::default()
        }
    }

    /// Whether year, month and day are all zero (`0000-00-00`).
    pub fn is_zero_date(&self) -> bool {
        self.year == 0 && self.month == 0 && self.day == 0
    }

    fn date_text(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    fn datetime_text(&self) -> String {
        format!(
            "{} {:02}:{:02}:{:02}",
            self.date_text(),
            self.hour,
            self.minute,
            self.second
        )
    }

    /// Interpret year/month/day as a calendar date.
    ///
    /// Returns `Ok(None)` for the zero date.
    pub fn to_date(&self) -> Result<Option<NaiveDate>> {
        if self.is_zero_date() {
            return Ok(None);
        }
        i32::try_from(self.year)
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, self.month, self.day))
            .map(Some)
            .ok_or_else(|| Error::MalformedDateField {
                value: self.date_text(),
                format: "temporal record".to_string(),
            })
    }

    /// Interpret year..second as a date-time. The sub-second part is dropped.
    ///
    /// Returns `Ok(None)` for the zero date-time.
    pub fn to_datetime(&self) -> Result<Option<NaiveDateTime>> {
        if self.is_zero_date() && self.hour == 0 && self.minute == 0 && self.second == 0 {
            return Ok(None);
        }
        let malformed = || Error::MalformedDateTimeField {
            value: self.datetime_text(),
            format: "temporal record".to_string(),
        };
        let date = i32::try_from(self.year)
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, self.month, self.day))
            .ok_or_else(malformed)?;
        let time =
            NaiveTime::from_hms_opt(self.hour, self.minute, self.second).ok_or_else(malformed)?;
        Ok(Some(NaiveDateTime::new(date, time)))
    }

    /// Interpret day/hour/minute/second/second_part as a signed interval.
    pub fn to_time(&self) -> Result<TimeDelta> {
        let hours = u64::from(self.day) * 24 + u64::from(self.hour);
        if hours > u64::from(TIME_MAX_HOURS)
            || self.minute > 59
            || self.second > 59
            || self.second_part >= 1_000_000
        {
            return Err(Error::MalformedTimeField {
                value: format!(
                    "{}{}:{:02}:{:02}",
                    if self.negative { "-" } else { "" },
                    hours,
                    self.minute,
                    self.second
                ),
            });
        }
        let secs = hours as i64 * 3600 + i64::from(self.minute) * 60 + i64::from(self.second);
        let delta = TimeDelta::seconds(secs) + TimeDelta::microseconds(self.second_part as i64);
        Ok(if self.negative { -delta } else { delta })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_datetime_2024_10_21() {
        let record = TemporalRecord {
            year: 2024,
            month: 10,
            day: 21,
            hour: 12,
            minute: 36,
            second: 5,
            second_part: 250_000,
            kind: TEMPORAL_KIND_DATETIME,
            ..Default::default()
        };
        let bytes = record.encode();
        assert_eq!(bytes.len(), TEMPORAL_RECORD_LEN);
        assert_eq!(&bytes[0..4], &2024u32.to_le_bytes());

        let decoded = TemporalRecord::read(&bytes).unwrap();
        assert_eq!(decoded, record);

        let dt = decoded.to_datetime().unwrap().unwrap();
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.month(), 10);
        assert_eq!(dt.day(), 21);
        assert_eq!(dt.hour(), 12);
        assert_eq!(dt.minute(), 36);
        assert_eq!(dt.second(), 5);
        assert_eq!(dt.nanosecond(), 0);
    }

    #[test]
    fn test_decode_date_ignores_time_fields() {
        let record = TemporalRecord {
            year: 1999,
            month: 6,
            day: 15,
            hour: 12,
            kind: TEMPORAL_KIND_DATE,
            ..Default::default()
        };
        let date = record.to_date().unwrap().unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1999, 6, 15).unwrap());
    }

    #[test]
    fn test_zero_date_is_none() {
        let record = TemporalRecord::default();
        assert_eq!(record.to_date().unwrap(), None);
        assert_eq!(record.to_datetime().unwrap(), None);
    }

    #[test]
    fn test_decode_date_invalid_month() {
        let record = TemporalRecord {
            year: 2024,
            month: 13,
            day: 1,
            ..Default::default()
        };
        assert!(matches!(
            record.to_date(),
            Err(Error::MalformedDateField { .. })
        ));
    }

    #[test]
    fn test_decode_datetime_invalid_hour() {
        let record = TemporalRecord {
            year: 2024,
            month: 1,
            day: 1,
            hour: 24,
            ..Default::default()
        };
        assert!(matches!(
            record.to_datetime(),
            Err(Error::MalformedDateTimeField { .. })
        ));
    }

    #[test]
    fn test_decode_time() {
        let record = TemporalRecord {
            hour: 838,
            minute: 59,
            second: 59,
            negative: true,
            kind: TEMPORAL_KIND_TIME,
            ..Default::default()
        };
        let delta = record.to_time().unwrap();
        assert_eq!(delta.num_seconds(), -(838 * 3600 + 59 * 60 + 59));

        let back = TemporalRecord::from_time(delta);
        assert_eq!(back, record);
    }

    #[test]
    fn test_decode_time_out_of_range() {
        let record = TemporalRecord {
            day: 40,
            kind: TEMPORAL_KIND_TIME,
            ..Default::default()
        };
        assert!(matches!(
            record.to_time(),
            Err(Error::MalformedTimeField { .. })
        ));
    }

    #[test]
    fn test_read_wrong_length() {
        let data = [0u8; 12];
        assert!(matches!(
            TemporalRecord::read(&data),
            Err(Error::BufferTooSmall { needed: 40, .. })
        ));
    }

    #[test]
    fn test_short_record_reports_caller() {
        let result = TemporalRecord::read(&[0u8; 10]);
        let line = line!() - 1;
        match result {
            Err(Error::BufferTooSmall {
                needed,
                available,
                location,
            }) => {
                assert_eq!(needed, TEMPORAL_RECORD_LEN);
                assert_eq!(available, 10);
                assert_eq!(location.line(), line);
            }
            other => panic!("Expected BufferTooSmall, got {:?}", other),
        }
    }
}
