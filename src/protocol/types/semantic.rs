//! Semantic (target) types chosen for each wire field type.

use crate::protocol::constants::TEMPORAL_RECORD_LEN;

use super::field_type::FieldType;
use super::metadata::FieldDescriptor;

/// Representation a column's values are materialized into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticType {
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    /// UTF-8 text (also used for DECIMAL, ENUM, SET, JSON and unknown tags).
    Text,
    /// Calendar date.
    Date,
    /// Date and time without timezone, second precision.
    DateTime,
    /// Signed time interval (MySQL TIME).
    Time,
    /// Raw byte sequence.
    Bytes,
}

/// Map a wire field type to its semantic type.
///
/// Total and deterministic: unknown tags map to [`SemanticType::Text`].
pub fn semantic_type_for(tag: FieldType) -> SemanticType {
    tag.semantic_type()
}

impl SemanticType {
    /// Exact byte width of the binary representation.
    ///
    /// `None` for variable-length types, whose binding is sized from the
    /// declared column length instead.
    pub fn binding_width(&self) -> Option<usize> {
        match self {
            SemanticType::Int8 => Some(1),
            SemanticType::Int16 => Some(2),
            SemanticType::Int32 | SemanticType::Float32 => Some(4),
            SemanticType::Int64 | SemanticType::Float64 => Some(8),
            SemanticType::Date | SemanticType::DateTime | SemanticType::Time => {
                Some(TEMPORAL_RECORD_LEN)
            }
            SemanticType::Text | SemanticType::Bytes => None,
        }
    }

    /// Buffer type a binding for this semantic type is registered with.
    pub fn canonical_tag(&self) -> FieldType {
        match self {
            SemanticType::Int8 => FieldType::Tiny,
            SemanticType::Int16 => FieldType::Short,
            SemanticType::Int32 => FieldType::Long,
            SemanticType::Int64 => FieldType::LongLong,
            SemanticType::Float32 => FieldType::Float,
            SemanticType::Float64 => FieldType::Double,
            SemanticType::Date => FieldType::Date,
            SemanticType::DateTime => FieldType::DateTime,
            SemanticType::Time => FieldType::Time,
            SemanticType::Text => FieldType::String,
            SemanticType::Bytes => FieldType::Blob,
        }
    }

    /// Whether this is one of the integer types.
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            SemanticType::Int8 | SemanticType::Int16 | SemanticType::Int32 | SemanticType::Int64
        )
    }
}

impl std::fmt::Display for SemanticType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SemanticType::Int8 => "INT8",
            SemanticType::Int16 => "INT16",
            SemanticType::Int32 => "INT32",
            SemanticType::Int64 => "INT64",
            SemanticType::Float32 => "FLOAT32",
            SemanticType::Float64 => "FLOAT64",
            SemanticType::Text => "TEXT",
            SemanticType::Date => "DATE",
            SemanticType::DateTime => "DATETIME",
            SemanticType::Time => "TIME",
            SemanticType::Bytes => "BYTES",
        };
        f.write_str(name)
    }
}

/// Cached per-column decoding information.
///
/// Built once per column per result set; rows never consult the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeInfo {
    /// Target semantic type.
    pub semantic: SemanticType,
    /// Whether integers are unsigned.
    pub unsigned: bool,
}

impl TypeInfo {
    /// Signed type info for a semantic type.
    pub fn new(semantic: SemanticType) -> Self {
        Self {
            semantic,
            unsigned: false,
        }
    }

    /// Unsigned type info for a semantic type.
    pub fn unsigned(semantic: SemanticType) -> Self {
        Self {
            semantic,
            unsigned: true,
        }
    }

    /// Resolve the type info of a field descriptor.
    ///
    /// String-family tags follow the character set when one is reported:
    /// `binary` gives bytes (VARBINARY, BLOB), anything else gives text
    /// (VARCHAR, TEXT). Charset 0 falls back to the tag table.
    pub fn for_field(field: &FieldDescriptor) -> Self {
        let semantic = if field.field_type.is_string() && field.charset != 0 {
            if field.is_binary() {
                SemanticType::Bytes
            } else {
                SemanticType::Text
            }
        } else {
            semantic_type_for(field.field_type)
        };
        Self {
            semantic,
            unsigned: field.is_unsigned(),
        }
    }
}

impl From<SemanticType> for TypeInfo {
    fn from(semantic: SemanticType) -> Self {
        TypeInfo::new(semantic)
    }
}
