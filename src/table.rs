//! Eager assembly of a whole result set into a [`ResultTable`].

use std::sync::Arc;

use crate::config::DecodeOptions;
use crate::cursor::RowIterator;
use crate::error::{Error, Result};
use crate::materializer::{BinarySource, RowSource, TextSource};
use crate::native::{BinaryStatement, TextResult};
use crate::protocol::constants::MAX_PREALLOCATED_ROWS;
use crate::protocol::types::{ColumnInfo, Row, SemanticType, Value};

/// A fully materialized result set.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    /// Shared column information.
    column_info: Arc<ColumnInfo>,
    /// Rows in native fetch order.
    rows: Vec<Row>,
    /// Non-fatal conditions seen while assembling.
    warnings: Vec<Error>,
}

impl ResultTable {
    /// Get column information.
    pub fn columns(&self) -> &Arc<ColumnInfo> {
        &self.column_info
    }

    /// Get column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.column_info.column_names()
    }

    /// Get column semantic types.
    pub fn column_types(&self) -> Vec<SemanticType> {
        self.column_info.column_types()
    }

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get all rows.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Iterate over rows.
    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Get a cell by row and column index.
    pub fn get(&self, row: usize, col: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Get a cell by row index and column name (case-insensitive).
    pub fn get_by_name(&self, row: usize, name: &str) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get_by_name(name))
    }

    /// Column-wise view of one column.
    pub fn column(&self, index: usize) -> Result<Vec<&Value>> {
        if index >= self.column_info.len() {
            return Err(Error::ColumnIndexOutOfBounds {
                index,
                count: self.column_info.len(),
            });
        }
        Ok(self.rows.iter().filter_map(|r| r.get(index)).collect())
    }

    /// Column-wise view of one column, by name (case-insensitive).
    pub fn column_by_name(&self, name: &str) -> Result<Vec<&Value>> {
        let index = self
            .column_info
            .find_by_name(name)
            .ok_or_else(|| Error::ColumnNotFound {
                name: name.to_string(),
            })?;
        self.column(index)
    }

    /// Non-fatal conditions, such as a row count that differs from the hint.
    pub fn warnings(&self) -> &[Error] {
        &self.warnings
    }
}

impl IntoIterator for ResultTable {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Materialize a whole text-protocol result.
pub fn assemble_table<R: TextResult>(result: &mut R, options: &DecodeOptions) -> Result<ResultTable> {
    collect_table(TextSource::new(result, options))
}

/// Materialize a whole prepared-statement result.
///
/// The result is buffered by the native layer before the first fetch. A
/// rejected binding layout fails before any row is read.
pub fn assemble_statement_table<S: BinaryStatement>(
    stmt: &mut S,
    options: &DecodeOptions,
) -> Result<ResultTable> {
    collect_table(BinarySource::buffered(stmt, options)?)
}

/// Drain a row source with the same stopping rule as [`RowIterator`].
///
/// Iteration ends at end of data or once the hint is used up. Fewer rows
/// than hinted are recorded as a warning.
fn collect_table<S: RowSource>(source: S) -> Result<ResultTable> {
    let mut iter = RowIterator::new(source);
    let column_info = Arc::clone(iter.column_info());
    let hint = iter.remaining();
    let capacity = hint
        .map(|n| usize::try_from(n).unwrap_or(usize::MAX).min(MAX_PREALLOCATED_ROWS))
        .unwrap_or(0);

    let mut rows = Vec::with_capacity(capacity);
    while let Some(row) = iter.advance()? {
        rows.push(row.clone());
    }

    let mut warnings = Vec::new();
    if let Some(expected) = hint {
        let actual = rows.len() as u64;
        if actual < expected {
            tracing::warn!(expected, actual, "fewer rows than the native hint");
            warnings.push(Error::RowCountMismatch { expected, actual });
        }
    }
    tracing::debug!(rows = rows.len(), columns = column_info.len(), "assembled result table");

    Ok(ResultTable {
        column_info,
        rows,
        warnings,
    })
}
