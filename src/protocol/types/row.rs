//! One materialized row.
//!
//! A lazy [`RowIterator`](crate::RowIterator) overwrites the same `Row` on
//! every fetch; eager assembly keeps one clone per fetched row.

use std::sync::Arc;

use super::column::{Column, ColumnInfo};
use super::value::Value;

/// Values of one fetched row, in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    values: Vec<Value>,
    column_info: Arc<ColumnInfo>,
}

impl Row {
    /// Build a row from decoded values.
    pub fn new(values: Vec<Value>, column_info: Arc<ColumnInfo>) -> Self {
        Self {
            values,
            column_info,
        }
    }

    /// All-NULL row; the starting state of a reusable buffer.
    pub fn nulls(column_info: Arc<ColumnInfo>) -> Self {
        Self {
            values: vec![Value::Null; column_info.len()],
            column_info,
        }
    }

    /// Value at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Value of the first column named `name`, ignoring ASCII case.
    pub fn get_by_name(&self, name: &str) -> Option<&Value> {
        self.column_info
            .find_by_name(name)
            .and_then(|idx| self.values.get(idx))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values as a slice.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Decoder target; the slice length is fixed at the column count.
    pub(crate) fn values_mut(&mut self) -> &mut [Value] {
        &mut self.values
    }

    /// Columns this row was decoded against.
    pub fn columns(&self) -> &[Column] {
        &self.column_info.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.column_info.column_names()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.values.iter()
    }
}

impl IntoIterator for Row {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::types::{FieldDescriptor, FieldType};

    fn two_columns() -> Arc<ColumnInfo> {
        Arc::new(ColumnInfo::from_fields(&[
            FieldDescriptor::new("NAME", FieldType::VarString).with_length(100),
            FieldDescriptor::new("VALUE", FieldType::Long),
        ]))
    }

    #[test]
    fn test_row_access() {
        let row = Row::new(
            vec![Value::Text("test".to_string()), Value::Int32(42)],
            two_columns(),
        );

        assert_eq!(row.len(), 2);
        assert_eq!(row.get(0), Some(&Value::Text("test".to_string())));
        assert_eq!(row.get_by_name("value"), Some(&Value::Int32(42)));
        assert_eq!(row.get_by_name("VALUE"), row.get_by_name("value"));
        assert_eq!(row.get(2), None);
    }

    #[test]
    fn test_row_nulls() {
        let row = Row::nulls(two_columns());
        assert_eq!(row.len(), 2);
        assert!(row.iter().all(Value::is_null));
        assert_eq!(row.column_names(), vec!["NAME", "VALUE"]);
    }

    #[test]
    fn test_overwrite_in_place() {
        let mut row = Row::nulls(two_columns());
        row.values_mut()[1] = Value::Int32(7);
        assert_eq!(row.get_by_name("value"), Some(&Value::Int32(7)));

        let snapshot = row.clone();
        row.values_mut()[1] = Value::Int32(8);
        assert_eq!(snapshot.get(1), Some(&Value::Int32(7)));
        assert_eq!(row.values(), &[Value::Null, Value::Int32(8)]);
    }
}
