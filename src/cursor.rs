//! Lazy row-by-row consumption of a result set.
//!
//! A [`RowIterator`] performs exactly one native fetch per [`advance`] and
//! materializes that row into a single reusable [`Row`]. The returned
//! reference borrows the iterator, so a row must be cloned to outlive the
//! next `advance`.
//!
//! [`advance`]: RowIterator::advance

use std::sync::Arc;

use crate::config::DecodeOptions;
use crate::error::Result;
use crate::materializer::{BinarySource, RowSource, TextSource};
use crate::native::{BinaryStatement, TextResult};
use crate::protocol::types::{ColumnInfo, Row};

/// Row-by-row iterator over a result set.
///
/// # Lifecycle
///
/// 1. Created by [`iterate`] or [`iterate_statement`]
/// 2. Advanced via `advance()`, `fetch_all()` or `into_rows()`
/// 3. Exhausted when the native layer reports end of data or the row-count
///    hint is used up; never rewinds
///
/// # Example
///
/// ```
/// use mysql_rows_rs::{iterate, DecodeOptions, FieldDescriptor, FieldType, MemoryResult, Value};
///
/// let mut result = MemoryResult::new(vec![FieldDescriptor::new("id", FieldType::Long)])
///     .with_row(vec![Some("1")])
///     .with_row(vec![Some("2")]);
///
/// let mut rows = iterate(&mut result, &DecodeOptions::default());
/// let mut ids = Vec::new();
/// while let Some(row) = rows.advance()? {
///     ids.push(row.get(0).cloned());
/// }
/// assert_eq!(ids, vec![Some(Value::Int32(1)), Some(Value::Int32(2))]);
/// # Ok::<(), mysql_rows_rs::Error>(())
/// ```
pub struct RowIterator<S: RowSource> {
    /// Source of materialized rows.
    source: S,
    /// Reusable row buffer.
    row: Row,
    /// Rows left according to the native hint.
    remaining: Option<u64>,
    /// Total rows fetched so far.
    rows_fetched: u64,
    /// Set once end of data is seen.
    exhausted: bool,
}

impl<S: RowSource> RowIterator<S> {
    /// Create an iterator over a row source.
    pub fn new(source: S) -> Self {
        let column_info = Arc::clone(source.column_info());
        let remaining = source.row_count_hint();
        tracing::debug!(
            columns = column_info.len(),
            hint = ?remaining,
            "opened row iterator"
        );
        Self {
            source,
            row: Row::nulls(column_info),
            remaining,
            rows_fetched: 0,
            exhausted: false,
        }
    }

    /// Fetch and materialize the next row.
    ///
    /// Returns `Ok(None)` when exhausted. An error leaves the iterator usable;
    /// the failed row is skipped.
    pub fn advance(&mut self) -> Result<Option<&Row>> {
        if self.exhausted {
            return Ok(None);
        }
        if self.remaining == Some(0) {
            self.exhausted = true;
            return Ok(None);
        }
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }

        if !self.source.fetch_into(self.row.values_mut())? {
            tracing::trace!(rows = self.rows_fetched, "end of data");
            self.exhausted = true;
            return Ok(None);
        }
        self.rows_fetched += 1;
        tracing::trace!(row = self.rows_fetched, "fetched row");
        Ok(Some(&self.row))
    }

    /// Drain all remaining rows into owned copies.
    pub fn fetch_all(&mut self) -> Result<Vec<Row>> {
        let mut rows = Vec::new();
        while let Some(row) = self.advance()? {
            rows.push(row.clone());
        }
        Ok(rows)
    }

    /// Convert into a std iterator of owned rows.
    pub fn into_rows(self) -> IntoRows<S> {
        IntoRows { inner: self }
    }

    /// Get column information.
    pub fn column_info(&self) -> &Arc<ColumnInfo> {
        self.source.column_info()
    }

    /// Get column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.source.column_info().column_names()
    }

    /// Number of rows fetched so far.
    pub fn rowcount(&self) -> u64 {
        self.rows_fetched
    }

    /// Rows left according to the native hint, if one was reported.
    pub fn remaining(&self) -> Option<u64> {
        self.remaining
    }

    /// Check if the iterator is exhausted.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

/// Owned-row adapter returned by [`RowIterator::into_rows`].
pub struct IntoRows<S: RowSource> {
    inner: RowIterator<S>,
}

impl<S: RowSource> Iterator for IntoRows<S> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.inner.advance() {
            Ok(Some(row)) => Some(Ok(row.clone())),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// Lazily iterate a text-protocol result.
pub fn iterate<'r, R: TextResult>(
    result: &'r mut R,
    options: &DecodeOptions,
) -> RowIterator<TextSource<'r, R>> {
    RowIterator::new(TextSource::new(result, options))
}

/// Lazily iterate a prepared-statement result without buffering it.
///
/// Fails with `BindRejected` if the native layer refuses the bindings.
pub fn iterate_statement<'s, S: BinaryStatement>(
    stmt: &'s mut S,
    options: &DecodeOptions,
) -> Result<RowIterator<BinarySource<'s, S>>> {
    Ok(RowIterator::new(BinarySource::new(stmt, options)?))
}
