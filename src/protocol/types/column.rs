//! Column and ColumnInfo types for the user-facing API.
//!
//! These types are derived once per result set from the native field
//! metadata and carry the resolved per-column decoding information.

use super::field_type::FieldType;
use super::metadata::FieldDescriptor;
use super::semantic::{SemanticType, TypeInfo};

/// A column in a result set (user-facing representation).
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Whether NULL values are allowed.
    pub nullable: bool,
    /// Wire field type.
    pub field_type: FieldType,
    /// Resolved decoding information.
    pub type_info: TypeInfo,
    /// Declared maximum length in bytes.
    pub length: u32,
}

impl Column {
    /// Create a column from a field descriptor.
    pub fn from_descriptor(field: &FieldDescriptor) -> Self {
        Self {
            name: field.name.clone(),
            nullable: field.is_nullable(),
            field_type: field.field_type,
            type_info: TypeInfo::for_field(field),
            length: field.length,
        }
    }

    /// Semantic type of this column.
    pub fn semantic_type(&self) -> SemanticType {
        self.type_info.semantic
    }
}

/// Shared column information for all rows in a result set.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInfo {
    /// Column definitions.
    pub columns: Vec<Column>,
}

impl ColumnInfo {
    /// Create new column info from columns.
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Create column info from field descriptors.
    pub fn from_fields(fields: &[FieldDescriptor]) -> Self {
        Self {
            columns: fields.iter().map(Column::from_descriptor).collect(),
        }
    }

    /// Get column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Get column semantic types.
    pub fn column_types(&self) -> Vec<SemanticType> {
        self.columns.iter().map(Column::semantic_type).collect()
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Get column by index.
    pub fn get(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Find column index by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(name))
    }
}
