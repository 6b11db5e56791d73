//! Wire-level field type tags.
//!
//! Every raw tag byte maps to exactly one [`FieldType`]; tags the crate does
//! not know about are kept as [`FieldType::Unknown`] so the mapping stays total.

use crate::protocol::constants::*;

use super::semantic::SemanticType;

/// MySQL field type as reported in column metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Decimal,
    Tiny,
    Short,
    Long,
    Float,
    Double,
    Null,
    Timestamp,
    LongLong,
    Int24,
    Date,
    Time,
    DateTime,
    Year,
    NewDate,
    Varchar,
    Bit,
    Timestamp2,
    DateTime2,
    Time2,
    Json,
    NewDecimal,
    Enum,
    Set,
    TinyBlob,
    MediumBlob,
    LongBlob,
    Blob,
    VarString,
    String,
    Geometry,
    /// Any tag not listed above.
    Unknown(u8),
}

impl FieldType {
    /// Create from a raw type number. Never fails.
    pub fn from_raw(type_num: u8) -> Self {
        match type_num {
            MYSQL_TYPE_DECIMAL => FieldType::Decimal,
            MYSQL_TYPE_TINY => FieldType::Tiny,
            MYSQL_TYPE_SHORT => FieldType::Short,
            MYSQL_TYPE_LONG => FieldType::Long,
            MYSQL_TYPE_FLOAT => FieldType::Float,
            MYSQL_TYPE_DOUBLE => FieldType::Double,
            MYSQL_TYPE_NULL => FieldType::Null,
            MYSQL_TYPE_TIMESTAMP => FieldType::Timestamp,
            MYSQL_TYPE_LONGLONG => FieldType::LongLong,
            MYSQL_TYPE_INT24 => FieldType::Int24,
            MYSQL_TYPE_DATE => FieldType::Date,
            MYSQL_TYPE_TIME => FieldType::Time,
            MYSQL_TYPE_DATETIME => FieldType::DateTime,
            MYSQL_TYPE_YEAR => FieldType::Year,
            MYSQL_TYPE_NEWDATE => FieldType::NewDate,
            MYSQL_TYPE_VARCHAR => FieldType::Varchar,
            MYSQL_TYPE_BIT => FieldType::Bit,
            MYSQL_TYPE_TIMESTAMP2 => FieldType::Timestamp2,
            MYSQL_TYPE_DATETIME2 => FieldType::DateTime2,
            MYSQL_TYPE_TIME2 => FieldType::Time2,
            MYSQL_TYPE_JSON => FieldType::Json,
            MYSQL_TYPE_NEWDECIMAL => FieldType::NewDecimal,
            MYSQL_TYPE_ENUM => FieldType::Enum,
            MYSQL_TYPE_SET => FieldType::Set,
            MYSQL_TYPE_TINY_BLOB => FieldType::TinyBlob,
            MYSQL_TYPE_MEDIUM_BLOB => FieldType::MediumBlob,
            MYSQL_TYPE_LONG_BLOB => FieldType::LongBlob,
            MYSQL_TYPE_BLOB => FieldType::Blob,
            MYSQL_TYPE_VAR_STRING => FieldType::VarString,
            MYSQL_TYPE_STRING => FieldType::String,
            MYSQL_TYPE_GEOMETRY => FieldType::Geometry,
            other => FieldType::Unknown(other),
        }
    }

    /// Get the raw type number.
    pub fn type_num(&self) -> u8 {
        match self {
            FieldType::Decimal => MYSQL_TYPE_DECIMAL,
            FieldType::Tiny => MYSQL_TYPE_TINY,
            FieldType::Short => MYSQL_TYPE_SHORT,
            FieldType::Long => MYSQL_TYPE_LONG,
            FieldType::Float => MYSQL_TYPE_FLOAT,
            FieldType::Double => MYSQL_TYPE_DOUBLE,
            FieldType::Null => MYSQL_TYPE_NULL,
            FieldType::Timestamp => MYSQL_TYPE_TIMESTAMP,
            FieldType::LongLong => MYSQL_TYPE_LONGLONG,
            FieldType::Int24 => MYSQL_TYPE_INT24,
            FieldType::Date => MYSQL_TYPE_DATE,
            FieldType::Time => MYSQL_TYPE_TIME,
            FieldType::DateTime => MYSQL_TYPE_DATETIME,
            FieldType::Year => MYSQL_TYPE_YEAR,
            FieldType::NewDate => MYSQL_TYPE_NEWDATE,
            FieldType::Varchar => MYSQL_TYPE_VARCHAR,
            FieldType::Bit => MYSQL_TYPE_BIT,
            FieldType::Timestamp2 => MYSQL_TYPE_TIMESTAMP2,
            FieldType::DateTime2 => MYSQL_TYPE_DATETIME2,
            FieldType::Time2 => MYSQL_TYPE_TIME2,
            FieldType::Json => MYSQL_TYPE_JSON,
            FieldType::NewDecimal => MYSQL_TYPE_NEWDECIMAL,
            FieldType::Enum => MYSQL_TYPE_ENUM,
            FieldType::Set => MYSQL_TYPE_SET,
            FieldType::TinyBlob => MYSQL_TYPE_TINY_BLOB,
            FieldType::MediumBlob => MYSQL_TYPE_MEDIUM_BLOB,
            FieldType::LongBlob => MYSQL_TYPE_LONG_BLOB,
            FieldType::Blob => MYSQL_TYPE_BLOB,
            FieldType::VarString => MYSQL_TYPE_VAR_STRING,
            FieldType::String => MYSQL_TYPE_STRING,
            FieldType::Geometry => MYSQL_TYPE_GEOMETRY,
            FieldType::Unknown(n) => *n,
        }
    }

    /// Whether the tag carries character or binary string payloads, decided
    /// by the column's character set.
    pub fn is_string(&self) -> bool {
        matches!(
            self,
            FieldType::Varchar
                | FieldType::VarString
                | FieldType::String
                | FieldType::TinyBlob
                | FieldType::MediumBlob
                | FieldType::LongBlob
                | FieldType::Blob
        )
    }

    /// Target semantic type for this tag.
    ///
    /// This is the single tag table of the crate: buffer sizing and binary
    /// reinterpretation are derived from the semantic type it returns.
    pub fn semantic_type(&self) -> SemanticType {
        match self {
            FieldType::Tiny => SemanticType::Int8,
            FieldType::Short | FieldType::Year => SemanticType::Int16,
            FieldType::Long | FieldType::Int24 => SemanticType::Int32,
            FieldType::LongLong => SemanticType::Int64,
            FieldType::Float => SemanticType::Float32,
            FieldType::Double => SemanticType::Float64,
            FieldType::Date | FieldType::NewDate => SemanticType::Date,
            FieldType::DateTime
            | FieldType::DateTime2
            | FieldType::Timestamp
            | FieldType::Timestamp2 => SemanticType::DateTime,
            FieldType::Time | FieldType::Time2 => SemanticType::Time,
            FieldType::Bit
            | FieldType::TinyBlob
            | FieldType::MediumBlob
            | FieldType::LongBlob
            | FieldType::Blob
            | FieldType::Geometry => SemanticType::Bytes,
            FieldType::Decimal
            | FieldType::NewDecimal
            | FieldType::Null
            | FieldType::Varchar
            | FieldType::VarString
            | FieldType::String
            | FieldType::Enum
            | FieldType::Set
            | FieldType::Json
            | FieldType::Unknown(_) => SemanticType::Text,
        }
    }
}

impl From<u8> for FieldType {
    fn from(type_num: u8) -> Self {
        FieldType::from_raw(type_num)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldType::Decimal => write!(f, "DECIMAL"),
            FieldType::Tiny => write!(f, "TINY"),
            FieldType::Short => write!(f, "SHORT"),
            FieldType::Long => write!(f, "LONG"),
            FieldType::Float => write!(f, "FLOAT"),
            FieldType::Double => write!(f, "DOUBLE"),
            FieldType::Null => write!(f, "NULL"),
            FieldType::Timestamp => write!(f, "TIMESTAMP"),
            FieldType::LongLong => write!(f, "LONGLONG"),
            FieldType::Int24 => write!(f, "INT24"),
            FieldType::Date => write!(f, "DATE"),
            FieldType::Time => write!(f, "TIME"),
            FieldType::DateTime => write!(f, "DATETIME"),
            FieldType::Year => write!(f, "YEAR"),
            FieldType::NewDate => write!(f, "NEWDATE"),
            FieldType::Varchar => write!(f, "VARCHAR"),
            FieldType::Bit => write!(f, "BIT"),
            FieldType::Timestamp2 => write!(f, "TIMESTAMP2"),
            FieldType::DateTime2 => write!(f, "DATETIME2"),
            FieldType::Time2 => write!(f, "TIME2"),
            FieldType::Json => write!(f, "JSON"),
            FieldType::NewDecimal => write!(f, "NEWDECIMAL"),
            FieldType::Enum => write!(f, "ENUM"),
            FieldType::Set => write!(f, "SET"),
            FieldType::TinyBlob => write!(f, "TINY_BLOB"),
            FieldType::MediumBlob => write!(f, "MEDIUM_BLOB"),
            FieldType::LongBlob => write!(f, "LONG_BLOB"),
            FieldType::Blob => write!(f, "BLOB"),
            FieldType::VarString => write!(f, "VAR_STRING"),
            FieldType::String => write!(f, "STRING"),
            FieldType::Geometry => write!(f, "GEOMETRY"),
            FieldType::Unknown(n) => write!(f, "UNKNOWN({})", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_round_trips_every_tag() {
        for raw in 0..=u8::MAX {
            assert_eq!(FieldType::from_raw(raw).type_num(), raw);
        }
    }

    #[test]
    fn test_from_raw_known() {
        assert_eq!(FieldType::from_raw(MYSQL_TYPE_LONG), FieldType::Long);
        assert_eq!(FieldType::from_raw(MYSQL_TYPE_VAR_STRING), FieldType::VarString);
        assert_eq!(FieldType::from_raw(MYSQL_TYPE_DATETIME), FieldType::DateTime);
    }

    #[test]
    fn test_from_raw_unknown() {
        assert_eq!(FieldType::from_raw(100), FieldType::Unknown(100));
        assert_eq!(FieldType::Unknown(100).semantic_type(), SemanticType::Text);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", FieldType::LongLong), "LONGLONG");
        assert_eq!(format!("{}", FieldType::Unknown(42)), "UNKNOWN(42)");
    }
}
