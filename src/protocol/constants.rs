//! Protocol constants for MySQL result metadata.

// Field type numbers (enum_field_types)
pub const MYSQL_TYPE_DECIMAL: u8 = 0;
pub const MYSQL_TYPE_TINY: u8 = 1;
pub const MYSQL_TYPE_SHORT: u8 = 2;
pub const MYSQL_TYPE_LONG: u8 = 3;
pub const MYSQL_TYPE_FLOAT: u8 = 4;
pub const MYSQL_TYPE_DOUBLE: u8 = 5;
pub const MYSQL_TYPE_NULL: u8 = 6;
pub const MYSQL_TYPE_TIMESTAMP: u8 = 7;
pub const MYSQL_TYPE_LONGLONG: u8 = 8;
pub const MYSQL_TYPE_INT24: u8 = 9;
pub const MYSQL_TYPE_DATE: u8 = 10;
pub const MYSQL_TYPE_TIME: u8 = 11;
pub const MYSQL_TYPE_DATETIME: u8 = 12;
pub const MYSQL_TYPE_YEAR: u8 = 13;
pub const MYSQL_TYPE_NEWDATE: u8 = 14;
pub const MYSQL_TYPE_VARCHAR: u8 = 15;
pub const MYSQL_TYPE_BIT: u8 = 16;
pub const MYSQL_TYPE_TIMESTAMP2: u8 = 17;
pub const MYSQL_TYPE_DATETIME2: u8 = 18;
pub const MYSQL_TYPE_TIME2: u8 = 19;
pub const MYSQL_TYPE_JSON: u8 = 245;
pub const MYSQL_TYPE_NEWDECIMAL: u8 = 246;
pub const MYSQL_TYPE_ENUM: u8 = 247;
pub const MYSQL_TYPE_SET: u8 = 248;
pub const MYSQL_TYPE_TINY_BLOB: u8 = 249;
pub const MYSQL_TYPE_MEDIUM_BLOB: u8 = 250;
pub const MYSQL_TYPE_LONG_BLOB: u8 = 251;
pub const MYSQL_TYPE_BLOB: u8 = 252;
pub const MYSQL_TYPE_VAR_STRING: u8 = 253;
pub const MYSQL_TYPE_STRING: u8 = 254;
pub const MYSQL_TYPE_GEOMETRY: u8 = 255;

// Column definition flags
pub const NOT_NULL_FLAG: u16 = 0x0001;
pub const PRI_KEY_FLAG: u16 = 0x0002;
pub const UNIQUE_KEY_FLAG: u16 = 0x0004;
pub const MULTIPLE_KEY_FLAG: u16 = 0x0008;
pub const BLOB_FLAG: u16 = 0x0010;
pub const UNSIGNED_FLAG: u16 = 0x0020;
pub const ZEROFILL_FLAG: u16 = 0x0040;
pub const BINARY_FLAG: u16 = 0x0080;
pub const ENUM_FLAG: u16 = 0x0100;
pub const AUTO_INCREMENT_FLAG: u16 = 0x0200;
pub const TIMESTAMP_FLAG: u16 = 0x0400;
pub const SET_FLAG: u16 = 0x0800;

// Character set number reported for binary columns
pub const BINARY_CHARSET_NR: u16 = 63;

// Temporal record (date / time / datetime binding layout)
pub const TEMPORAL_RECORD_LEN: usize = 40;
pub const TEMPORAL_OFFSET_YEAR: usize = 0;
pub const TEMPORAL_OFFSET_MONTH: usize = 4;
pub const TEMPORAL_OFFSET_DAY: usize = 8;
pub const TEMPORAL_OFFSET_HOUR: usize = 12;
pub const TEMPORAL_OFFSET_MINUTE: usize = 16;
pub const TEMPORAL_OFFSET_SECOND: usize = 20;
pub const TEMPORAL_OFFSET_SECOND_PART: usize = 24;
pub const TEMPORAL_OFFSET_NEGATIVE: usize = 32;
pub const TEMPORAL_OFFSET_KIND: usize = 36;

// Temporal record kinds (enum_mysql_timestamp_type)
pub const TEMPORAL_KIND_NONE: i32 = -2;
pub const TEMPORAL_KIND_ERROR: i32 = -1;
pub const TEMPORAL_KIND_DATE: i32 = 0;
pub const TEMPORAL_KIND_DATETIME: i32 = 1;
pub const TEMPORAL_KIND_TIME: i32 = 2;

// Largest hour value MySQL TIME accepts (838:59:59)
pub const TIME_MAX_HOURS: u32 = 838;

// Binding buffer limits
pub const DEFAULT_MAX_BINDING_LEN: usize = 16 * 1024 * 1024;
pub const MIN_BINDING_LEN: usize = 1;

// Default text formats
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Upper bound on rows preallocated from a native row-count hint
pub const MAX_PREALLOCATED_ROWS: usize = 65_536;
