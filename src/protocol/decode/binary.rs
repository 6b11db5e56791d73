//! Binary-protocol column bindings.
//!
//! For prepared statements the native client writes each column of a fetched
//! row straight into a buffer registered for that column. A [`ColumnBinding`]
//! is that buffer plus the bookkeeping the native layer fills in (written
//! length, null indicator). Bindings are allocated once per result and reused
//! for every fetch.

use bytes::BytesMut;

use crate::config::DecodeOptions;
use crate::error::{Error, Result};
use crate::protocol::buffer::ReadBuffer;
use crate::protocol::constants::MIN_BINDING_LEN;
use crate::protocol::types::{
    format_time, FieldDescriptor, FieldType, SemanticType, TypeInfo, Value,
};

use super::temporal::TemporalRecord;

/// Scratch buffer for one result column.
#[derive(Debug, Clone)]
pub struct ColumnBinding {
    /// Column name, for diagnostics.
    pub name: String,
    /// Resolved decoding information.
    pub type_info: TypeInfo,
    /// Buffer type registered with the native layer.
    pub buffer_type: FieldType,
    /// Backing storage; its length is the binding capacity.
    buffer: BytesMut,
    /// Bytes written by the last fetch (may exceed capacity on truncation).
    length: usize,
    /// Whether the last fetched value was NULL.
    is_null: bool,
}

impl ColumnBinding {
    /// Allocate a binding for one field.
    pub fn for_field(field: &FieldDescriptor, options: &DecodeOptions) -> Self {
        let type_info = TypeInfo::for_field(field);
        let capacity = match type_info.semantic.binding_width() {
            Some(width) => width,
            None => (field.length as usize)
                .min(options.max_binding_len)
                .max(MIN_BINDING_LEN),
        };
        Self {
            name: field.name.clone(),
            type_info,
            buffer_type: type_info.semantic.canonical_tag(),
            buffer: BytesMut::zeroed(capacity),
            length: 0,
            is_null: true,
        }
    }

    /// Buffer capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Bytes written by the last fetch.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Whether the last fetched value was NULL.
    pub fn is_null(&self) -> bool {
        self.is_null
    }

    /// Whether the last fetch wrote more bytes than the buffer holds.
    pub fn is_truncated(&self) -> bool {
        !self.is_null && self.length > self.buffer.len()
    }

    /// Raw buffer contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Mark the binding NULL. Called by the native layer.
    pub fn set_null(&mut self) {
        self.is_null = true;
        self.length = 0;
    }

    /// Write a value's bytes into the binding. Called by the native layer.
    ///
    /// Bytes beyond the capacity are dropped; the full `data` length is kept
    /// so truncation can be detected.
    pub fn write(&mut self, data: &[u8]) {
        let n = data.len().min(self.buffer.len());
        self.buffer[..n].copy_from_slice(&data[..n]);
        self.length = data.len();
        self.is_null = false;
    }

    /// Reinterpret the fetched bytes as a value.
    pub fn materialize(&self, options: &DecodeOptions) -> Result<Value> {
        materialize(self, options)
    }
}

/// Allocate one binding per field, in field order.
///
/// Text and byte columns are sized from their declared length (capped by
/// `options.max_binding_len`); every other column gets the exact width of
/// its representation.
pub fn bind_columns(fields: &[FieldDescriptor], options: &DecodeOptions) -> Vec<ColumnBinding> {
    fields
        .iter()
        .map(|field| ColumnBinding::for_field(field, options))
        .collect()
}

/// Reinterpret a binding's fetched bytes according to its type.
pub fn materialize(binding: &ColumnBinding, options: &DecodeOptions) -> Result<Value> {
    if binding.is_null {
        return Ok(Value::Null);
    }
    if binding.is_truncated() {
        return Err(Error::DataTruncated {
            column: binding.name.clone(),
            needed: binding.length,
            capacity: binding.capacity(),
        });
    }

    let mut buf = ReadBuffer::new(&binding.buffer);
    let TypeInfo { semantic, unsigned } = binding.type_info;
    let value = match (semantic, unsigned) {
        (SemanticType::Int8, false) => Value::Int8(buf.read_i8()?),
        (SemanticType::Int8, true) => Value::UInt8(buf.read_u8()?),
        (SemanticType::Int16, false) => Value::Int16(buf.read_i16_le()?),
        (SemanticType::Int16, true) => Value::UInt16(buf.read_u16_le()?),
        (SemanticType::Int32, false) => Value::Int32(buf.read_i32_le()?),
        (SemanticType::Int32, true) => Value::UInt32(buf.read_u32_le()?),
        (SemanticType::Int64, false) => Value::Int64(buf.read_i64_le()?),
        (SemanticType::Int64, true) => Value::UInt64(buf.read_u64_le()?),
        (SemanticType::Float32, _) => Value::Float32(buf.read_f32_le()?),
        (SemanticType::Float64, _) => Value::Float64(buf.read_f64_le()?),
        (SemanticType::Date, _) => TemporalRecord::read(&binding.buffer)?
            .to_date()?
            .map_or(Value::Null, Value::Date),
        (SemanticType::DateTime, _) => TemporalRecord::read(&binding.buffer)?
            .to_datetime()?
            .map_or(Value::Null, Value::DateTime),
        (SemanticType::Time, _) => {
            let delta = TemporalRecord::read(&binding.buffer)?.to_time()?;
            if options.time_as_text {
                let whole = chrono::TimeDelta::seconds(delta.num_seconds());
                Value::Text(format_time(&whole))
            } else {
                Value::Time(delta)
            }
        }
        (SemanticType::Text, _) => {
            let payload = buf.read_bytes(binding.length)?;
            match std::str::from_utf8(payload) {
                Ok(text) => Value::Text(text.to_string()),
                Err(_) => Value::Bytes(payload.to_vec()),
            }
        }
        (SemanticType::Bytes, _) => Value::Bytes(buf.read_bytes(binding.length)?.to_vec()),
    };
    Ok(value)
}
