//! Result materialization for MySQL-style client results.
//!
//! Turns a completed query result into typed rows, either all at once as a
//! [`ResultTable`] or one row at a time through a [`RowIterator`]. Both the
//! text protocol (every field a textual payload or NULL) and the prepared
//! statement binary protocol (fixed-layout column bindings) are supported.
//!
//! The native client is reached through the [`TextResult`] and
//! [`BinaryStatement`] traits; [`MemoryResult`] and [`MemoryStatement`] serve
//! rows already held in memory.
//!
//! # Example
//!
//! ```
//! use mysql_rows_rs::{assemble_table, DecodeOptions, FieldDescriptor, FieldType, MemoryResult, Value};
//!
//! let mut result = MemoryResult::new(vec![
//!     FieldDescriptor::new("id", FieldType::Long),
//!     FieldDescriptor::new("name", FieldType::VarString),
//! ])
//! .with_row(vec![Some("1"), Some("ann")])
//! .with_row(vec![Some("2"), None]);
//!
//! let table = assemble_table(&mut result, &DecodeOptions::default())?;
//! assert_eq!(table.column_names(), vec!["id", "name"]);
//! assert_eq!(table.get(1, 0), Some(&Value::Int32(2)));
//! assert_eq!(table.get_by_name(1, "NAME"), Some(&Value::Null));
//! # Ok::<(), mysql_rows_rs::Error>(())
//! ```

pub mod config;
pub mod cursor;
pub mod error;
pub mod materializer;
pub mod native;
pub mod protocol;
pub mod table;

// Re-export main types
pub use config::{DecodeOptions, FieldErrorPolicy};
pub use cursor::{iterate, iterate_statement, IntoRows, RowIterator};
pub use error::{Error, Result};
pub use materializer::{BinarySource, RowSource, TextSource};
pub use native::memory::{MemoryResult, MemoryStatement};
pub use native::{BinaryStatement, FetchStatus, TextResult, TextRow};
pub use protocol::decode::{bind_columns, decode_text, materialize, ColumnBinding, TemporalRecord};
pub use protocol::types::{
    semantic_type_for, Column, ColumnInfo, FieldDescriptor, FieldType, Row, SemanticType,
    TypeInfo, Value,
};
pub use table::{assemble_statement_table, assemble_table, ResultTable};
