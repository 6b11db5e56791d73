//! Wire-level result metadata, buffers and field decoders.

pub mod buffer;
pub mod constants;
pub mod decode;
pub mod types;

pub use buffer::{ReadBuffer, WriteBuffer};
pub use decode::{bind_columns, decode_text, materialize, ColumnBinding, TemporalRecord};
pub use types::{
    semantic_type_for, Column, ColumnInfo, FieldDescriptor, FieldType, Row, SemanticType,
    TypeInfo, Value,
};
