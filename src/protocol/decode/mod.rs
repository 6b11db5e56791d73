//! Field decoders for both result protocols.
//!
//! | Protocol | Module | Input |
//! |----------|--------|-------|
//! | text     | `text` | null sentinel or textual payload |
//! | binary   | `binary` | fixed-layout column binding |
//!
//! DATE, TIME and DATETIME bindings share the record layout in `temporal`.

mod binary;
mod temporal;
mod text;

pub use binary::{bind_columns, materialize, ColumnBinding};
pub use temporal::TemporalRecord;
pub use text::decode_text;
