//! In-memory native layer.
//!
//! [`MemoryResult`] and [`MemoryStatement`] hold rows that were already read
//! off the wire and serve them through the native traits. `MemoryStatement`
//! writes values into bindings the way a native client does: little-endian
//! fixed-width numbers, temporal records, and full lengths for oversized
//! payloads.

use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::protocol::decode::{ColumnBinding, TemporalRecord};
use crate::protocol::types::{FieldDescriptor, SemanticType, TypeInfo, Value};

use super::{BinaryStatement, FetchStatus, TextResult, TextRow};

// Client error codes reported by the in-memory layer
const CR_PARAMS_NOT_BOUND: u32 = 2031;
const CR_UNSUPPORTED_PARAM_TYPE: u32 = 2036;

/// Text-protocol result held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryResult {
    fields: Vec<FieldDescriptor>,
    rows: VecDeque<TextRow>,
    row_count_hint: Option<u64>,
    hint_fixed: bool,
    fetch_calls: u64,
}

impl MemoryResult {
    /// Create an empty result with the given fields.
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self {
            fields,
            row_count_hint: Some(0),
            ..Default::default()
        }
    }

    /// Append a row.
    pub fn with_row(mut self, row: impl Into<TextRow>) -> Self {
        self.rows.push_back(row.into());
        if !self.hint_fixed {
            self.row_count_hint = Some(self.rows.len() as u64);
        }
        self
    }

    /// Override the reported row count.
    pub fn with_row_count_hint(mut self, hint: Option<u64>) -> Self {
        self.row_count_hint = hint;
        self.hint_fixed = true;
        self
    }

    /// Number of `fetch_row` calls served so far.
    pub fn fetch_calls(&self) -> u64 {
        self.fetch_calls
    }

    /// Rows not yet fetched.
    pub fn unread(&self) -> usize {
        self.rows.len()
    }
}

impl From<Vec<Option<&'static str>>> for TextRow {
    fn from(fields: Vec<Option<&'static str>>) -> Self {
        fields.into_iter().collect()
    }
}

impl TextResult for MemoryResult {
    fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    fn row_count_hint(&self) -> Option<u64> {
        self.row_count_hint
    }

    fn fetch_row(&mut self) -> Result<Option<TextRow>> {
        self.fetch_calls += 1;
        Ok(self.rows.pop_front())
    }
}

/// Prepared-statement result held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStatement {
    fields: Vec<FieldDescriptor>,
    rows: VecDeque<Vec<Value>>,
    bound: bool,
    stored: bool,
    bind_rejection: Option<String>,
    stored_row_count: Option<u64>,
    fetch_calls: u64,
}

impl MemoryStatement {
    /// Create an empty statement result with the given fields.
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self {
            fields,
            ..Default::default()
        }
    }

    /// Append a row of values.
    pub fn with_row(mut self, row: Vec<Value>) -> Self {
        self.rows.push_back(row);
        self
    }

    /// Override the row count reported by `store_result`.
    pub fn with_stored_row_count(mut self, rows: u64) -> Self {
        self.stored_row_count = Some(rows);
        self
    }

    /// Make `bind_result` refuse every layout with `reason`.
    pub fn with_bind_rejection(mut self, reason: impl Into<String>) -> Self {
        self.bind_rejection = Some(reason.into());
        self
    }

    /// Whether `store_result` was called.
    pub fn is_stored(&self) -> bool {
        self.stored
    }

    /// Number of `fetch` calls served so far.
    pub fn fetch_calls(&self) -> u64 {
        self.fetch_calls
    }
}

impl BinaryStatement for MemoryStatement {
    fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    fn bind_result(&mut self, bindings: &[ColumnBinding]) -> Result<()> {
        if let Some(reason) = &self.bind_rejection {
            return Err(Error::native(CR_UNSUPPORTED_PARAM_TYPE, reason.clone()));
        }
        if bindings.len() != self.fields.len() {
            return Err(Error::native(
                CR_UNSUPPORTED_PARAM_TYPE,
                format!(
                    "{} bindings for {} columns",
                    bindings.len(),
                    self.fields.len()
                ),
            ));
        }
        for (binding, field) in bindings.iter().zip(&self.fields) {
            let expected = TypeInfo::for_field(field).semantic;
            if binding.type_info.semantic != expected {
                return Err(Error::native(
                    CR_UNSUPPORTED_PARAM_TYPE,
                    format!(
                        "buffer type {} cannot hold column {} ({})",
                        binding.buffer_type, field.name, field.field_type
                    ),
                ));
            }
        }
        self.bound = true;
        Ok(())
    }

    fn store_result(&mut self) -> Result<u64> {
        self.stored = true;
        Ok(self
            .stored_row_count
            .unwrap_or(self.rows.len() as u64))
    }

    fn fetch(&mut self, bindings: &mut [ColumnBinding]) -> Result<FetchStatus> {
        if !self.bound {
            return Err(Error::native(CR_PARAMS_NOT_BOUND, "result buffers not bound"));
        }
        self.fetch_calls += 1;
        let Some(row) = self.rows.pop_front() else {
            return Ok(FetchStatus::NoData);
        };
        if row.len() != bindings.len() {
            return Err(Error::ColumnCountMismatch {
                expected: bindings.len(),
                actual: row.len(),
            });
        }
        for (binding, value) in bindings.iter_mut().zip(&row) {
            write_value(binding, value)?;
        }
        Ok(FetchStatus::Row)
    }
}

/// Convert a value to the binding's buffer type and write it.
///
/// Temporal bindings also accept `Value::Bytes` holding a raw record.
fn write_value(binding: &mut ColumnBinding, value: &Value) -> Result<()> {
    if value.is_null() {
        binding.set_null();
        return Ok(());
    }
    let semantic = binding.type_info.semantic;
    match (semantic, value) {
        (SemanticType::Int8 | SemanticType::Int16 | SemanticType::Int32 | SemanticType::Int64, _) => {
            let wide = match value {
                Value::UInt64(v) => i128::from(*v),
                other => i128::from(other.to_i64().ok_or_else(|| unconvertible(binding, value))?),
            };
            let width = semantic.binding_width().unwrap_or(8);
            binding.write(&wide.to_le_bytes()[..width]);
        }
        (SemanticType::Float32 | SemanticType::Float64, Value::Text(_)) => {
            return Err(unconvertible(binding, value));
        }
        (SemanticType::Float32, _) => {
            let v = value.to_f64().ok_or_else(|| unconvertible(binding, value))? as f32;
            binding.write(&v.to_le_bytes());
        }
        (SemanticType::Float64, _) => {
            let v = value.to_f64().ok_or_else(|| unconvertible(binding, value))?;
            binding.write(&v.to_le_bytes());
        }
        (SemanticType::Date | SemanticType::DateTime | SemanticType::Time, Value::Bytes(raw)) => {
            binding.write(raw);
        }
        (SemanticType::Date, Value::Date(d)) => binding.write(&TemporalRecord::from_date(*d).encode()),
        (SemanticType::DateTime, Value::Date(d)) => {
            binding.write(&TemporalRecord::from_date(*d).encode())
        }
        (SemanticType::DateTime, Value::DateTime(dt)) => {
            binding.write(&TemporalRecord::from_datetime(*dt).encode())
        }
        (SemanticType::Time, Value::Time(t)) => binding.write(&TemporalRecord::from_time(*t).encode()),
        (SemanticType::Date | SemanticType::DateTime | SemanticType::Time, _) => {
            return Err(unconvertible(binding, value));
        }
        (SemanticType::Text | SemanticType::Bytes, Value::Text(s)) => binding.write(s.as_bytes()),
        (SemanticType::Text | SemanticType::Bytes, Value::Bytes(b)) => binding.write(b),
        (SemanticType::Text | SemanticType::Bytes, other) => binding.write(other.to_string().as_bytes()),
    }
    Ok(())
}

fn unconvertible(binding: &ColumnBinding, value: &Value) -> Error {
    Error::native(
        CR_UNSUPPORTED_PARAM_TYPE,
        format!(
            "value {:?} cannot be written to column {} ({})",
            value, binding.name, binding.buffer_type
        ),
    )
}
