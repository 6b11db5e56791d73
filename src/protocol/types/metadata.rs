//! Field metadata as reported by the native client.
//!
//! This struct preserves the raw wire metadata.
//! For the user-facing API, use `Column` which carries the resolved types.

use crate::protocol::constants::{BINARY_CHARSET_NR, NOT_NULL_FLAG, UNSIGNED_FLAG};

use super::field_type::FieldType;

/// Per-column field metadata of a result set.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Column name (alias if one was given).
    pub name: String,
    /// Wire field type.
    pub field_type: FieldType,
    /// Declared maximum length in bytes.
    pub length: u32,
    /// Column definition flags.
    pub flags: u16,
    /// Number of decimals (scale).
    pub decimals: u8,
    /// Character set number.
    pub charset: u16,
}

impl FieldDescriptor {
    /// Create a nullable, signed descriptor with minimal info.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            length: 0,
            flags: 0,
            decimals: 0,
            charset: 0,
        }
    }

    /// Set the declared length.
    pub fn with_length(mut self, length: u32) -> Self {
        self.length = length;
        self
    }

    /// Set the column flags.
    pub fn with_flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    /// Set the number of decimals.
    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = decimals;
        self
    }

    /// Set the character set number.
    pub fn with_charset(mut self, charset: u16) -> Self {
        self.charset = charset;
        self
    }

    /// Whether NULL values are allowed.
    pub fn is_nullable(&self) -> bool {
        self.flags & NOT_NULL_FLAG == 0
    }

    /// Whether integer values are unsigned.
    pub fn is_unsigned(&self) -> bool {
        self.flags & UNSIGNED_FLAG != 0
    }

    /// Whether the column uses the `binary` character set.
    ///
    /// `BINARY_FLAG` is not consulted: the server also sets it for `_bin`
    /// collations of character columns.
    pub fn is_binary(&self) -> bool {
        self.charset == BINARY_CHARSET_NR
    }
}
