//! Row materialization for the text and binary protocols.
//!
//! A [`RowSource`] performs one native fetch and writes the decoded values of
//! that row into a caller-owned slice, one value per column in field order.
//! The same slice is reused for every row of a result set.

use std::sync::Arc;

use crate::config::{DecodeOptions, FieldErrorPolicy};
use crate::error::{Error, Result};
use crate::native::{BinaryStatement, FetchStatus, TextResult};
use crate::protocol::decode::{bind_columns, decode_text, materialize, ColumnBinding};
use crate::protocol::types::{Column, ColumnInfo, Value};

/// A result set that can materialize its rows one at a time.
pub trait RowSource {
    /// Column information, resolved once for the whole result set.
    fn column_info(&self) -> &Arc<ColumnInfo>;

    /// Row count reported by the native layer, if known.
    fn row_count_hint(&self) -> Option<u64>;

    /// Fetch the next row into `values`.
    ///
    /// Returns `Ok(false)` at end of data. `values` must hold one slot per
    /// column.
    fn fetch_into(&mut self, values: &mut [Value]) -> Result<bool>;
}

/// Apply the malformed-field policy to one decoded field.
fn apply_policy(decoded: Result<Value>, column: &Column, options: &DecodeOptions) -> Result<Value> {
    match decoded {
        Err(err) if err.is_field_error() => match options.malformed_fields {
            FieldErrorPolicy::Fail => {
                tracing::debug!(column = %column.name, error = %err, "malformed field");
                Err(err)
            }
            FieldErrorPolicy::NullFill => {
                tracing::warn!(column = %column.name, error = %err, "malformed field replaced with NULL");
                Ok(Value::Null)
            }
        },
        other => other,
    }
}

/// Text-protocol row source.
pub struct TextSource<'r, R: TextResult> {
    result: &'r mut R,
    column_info: Arc<ColumnInfo>,
    options: DecodeOptions,
}

impl<'r, R: TextResult> TextSource<'r, R> {
    /// Resolve column information and wrap a text result.
    pub fn new(result: &'r mut R, options: &DecodeOptions) -> Self {
        let column_info = Arc::new(ColumnInfo::from_fields(result.fields()));
        Self {
            result,
            column_info,
            options: options.clone(),
        }
    }
}

impl<R: TextResult> RowSource for TextSource<'_, R> {
    fn column_info(&self) -> &Arc<ColumnInfo> {
        &self.column_info
    }

    fn row_count_hint(&self) -> Option<u64> {
        self.result.row_count_hint()
    }

    fn fetch_into(&mut self, values: &mut [Value]) -> Result<bool> {
        let Some(row) = self.result.fetch_row()? else {
            return Ok(false);
        };
        let columns = &self.column_info.columns;
        if row.len() != columns.len() || values.len() != columns.len() {
            return Err(Error::ColumnCountMismatch {
                expected: columns.len(),
                actual: row.len(),
            });
        }
        for ((slot, raw), column) in values.iter_mut().zip(row.fields()).zip(columns) {
            let decoded = decode_text(raw.as_deref(), column.type_info, &self.options);
            *slot = apply_policy(decoded, column, &self.options)?;
        }
        Ok(true)
    }
}

/// Binary-protocol row source.
///
/// Owns the column bindings for the lifetime of the consumption; the native
/// statement overwrites them on every fetch.
pub struct BinarySource<'s, S: BinaryStatement> {
    stmt: &'s mut S,
    column_info: Arc<ColumnInfo>,
    bindings: Vec<ColumnBinding>,
    options: DecodeOptions,
    row_count_hint: Option<u64>,
}

impl<'s, S: BinaryStatement> BinarySource<'s, S> {
    /// Allocate and register bindings for an unbuffered (streaming) fetch.
    pub fn new(stmt: &'s mut S, options: &DecodeOptions) -> Result<Self> {
        let column_info = Arc::new(ColumnInfo::from_fields(stmt.fields()));
        let bindings = bind_columns(stmt.fields(), options);
        stmt.bind_result(&bindings).map_err(|err| match err {
            Error::BindRejected { .. } => err,
            other => Error::bind_rejected(other.to_string()),
        })?;
        tracing::debug!(columns = bindings.len(), "bound result buffers");
        Ok(Self {
            stmt,
            column_info,
            bindings,
            options: options.clone(),
            row_count_hint: None,
        })
    }

    /// Allocate and register bindings, then buffer the whole result natively.
    pub fn buffered(stmt: &'s mut S, options: &DecodeOptions) -> Result<Self> {
        let mut source = Self::new(stmt, options)?;
        let rows = source.stmt.store_result()?;
        tracing::debug!(rows, "buffered statement result");
        source.row_count_hint = Some(rows);
        Ok(source)
    }

    /// The column bindings.
    pub fn bindings(&self) -> &[ColumnBinding] {
        &self.bindings
    }
}

impl<S: BinaryStatement> RowSource for BinarySource<'_, S> {
    fn column_info(&self) -> &Arc<ColumnInfo> {
        &self.column_info
    }

    fn row_count_hint(&self) -> Option<u64> {
        self.row_count_hint
    }

    fn fetch_into(&mut self, values: &mut [Value]) -> Result<bool> {
        if values.len() != self.bindings.len() {
            return Err(Error::ColumnCountMismatch {
                expected: self.bindings.len(),
                actual: values.len(),
            });
        }
        if self.stmt.fetch(&mut self.bindings)? == FetchStatus::NoData {
            return Ok(false);
        }
        let columns = &self.column_info.columns;
        for ((slot, binding), column) in values.iter_mut().zip(&self.bindings).zip(columns) {
            let decoded = materialize(binding, &self.options);
            *slot = apply_policy(decoded, column, &self.options)?;
        }
        Ok(true)
    }
}
