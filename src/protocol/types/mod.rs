//! Result metadata and value types.

mod column;
mod field_type;
mod metadata;
mod row;
mod semantic;
mod value;

pub use column::{Column, ColumnInfo};
pub use field_type::FieldType;
pub use metadata::FieldDescriptor;
pub use row::Row;
pub use semantic::{semantic_type_for, SemanticType, TypeInfo};
pub use value::Value;
pub(crate) use value::format_time;
