//! Contracts of the native client layer.
//!
//! Connection handling, statement execution and handle lifecycle live in the
//! native client. This crate only needs the handful of primitives below to
//! read a result set that is already in hand.

pub mod memory;

use bytes::Bytes;

use crate::error::Result;
use crate::protocol::decode::ColumnBinding;
use crate::protocol::types::FieldDescriptor;

/// One fetched text-protocol row: a raw payload or the null sentinel per column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextRow {
    fields: Vec<Option<Bytes>>,
}

impl TextRow {
    /// Create a row from raw fields.
    pub fn new(fields: Vec<Option<Bytes>>) -> Self {
        Self { fields }
    }

    /// Raw fields, in column order.
    pub fn fields(&self) -> &[Option<Bytes>] {
        &self.fields
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the row has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<T: Into<Bytes>> FromIterator<Option<T>> for TextRow {
    fn from_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|f| f.map(Into::into)).collect())
    }
}

/// A completed text-protocol query result.
pub trait TextResult {
    /// Field metadata, one per column, in column order.
    fn fields(&self) -> &[FieldDescriptor];

    /// Number of rows the native layer reports, if known.
    fn row_count_hint(&self) -> Option<u64>;

    /// Fetch the next row. Returns `Ok(None)` at end of data.
    fn fetch_row(&mut self) -> Result<Option<TextRow>>;
}

/// Outcome of a binary-protocol fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    /// The bindings hold a new row.
    Row,
    /// No more rows.
    NoData,
}

/// An executed prepared statement with a pending result set.
pub trait BinaryStatement {
    /// Field metadata, one per column, in column order.
    fn fields(&self) -> &[FieldDescriptor];

    /// Register the binding layout. Fails if the layout is refused.
    fn bind_result(&mut self, bindings: &[ColumnBinding]) -> Result<()>;

    /// Buffer the whole result client-side. Returns the buffered row count.
    fn store_result(&mut self) -> Result<u64>;

    /// Write the next row into `bindings`.
    fn fetch(&mut self, bindings: &mut [ColumnBinding]) -> Result<FetchStatus>;
}
