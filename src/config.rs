//! Decoder configuration.

use crate::protocol::constants::{
    DEFAULT_DATETIME_FORMAT, DEFAULT_DATE_FORMAT, DEFAULT_MAX_BINDING_LEN, MIN_BINDING_LEN,
};

/// What to do when a single field fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldErrorPolicy {
    /// Propagate the error and abort the result-set consumption.
    #[default]
    Fail,
    /// Replace the field with NULL and log a warning.
    NullFill,
}

/// Options for decoding result fields.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeOptions {
    /// `chrono` format for text-protocol DATE fields.
    pub date_format: String,
    /// `chrono` format for text-protocol DATETIME/TIMESTAMP fields.
    pub datetime_format: String,
    /// Return TIME values as `H:M:S` text instead of `Value::Time`.
    pub time_as_text: bool,
    /// Policy for malformed numeric/temporal fields.
    pub malformed_fields: FieldErrorPolicy,
    /// Upper bound for variable-length binding buffers (bytes).
    pub max_binding_len: usize,
}

impl DecodeOptions {
    /// Create options with the default formats and policies.
    pub fn new() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
            time_as_text: false,
            malformed_fields: FieldErrorPolicy::Fail,
            max_binding_len: DEFAULT_MAX_BINDING_LEN,
        }
    }

    /// Set the DATE format.
    ///
    /// # Example
    ///
    /// ```
    /// use mysql_rows_rs::DecodeOptions;
    ///
    /// let options = DecodeOptions::new().with_date_format("%d/%m/%Y");
    /// assert_eq!(options.date_format, "%d/%m/%Y");
    /// ```
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Set the DATETIME format.
    pub fn with_datetime_format(mut self, format: impl Into<String>) -> Self {
        self.datetime_format = format.into();
        self
    }

    /// Decode TIME values as text.
    pub fn with_time_as_text(mut self, enabled: bool) -> Self {
        self.time_as_text = enabled;
        self
    }

    /// Set the malformed-field policy.
    pub fn with_malformed_fields(mut self, policy: FieldErrorPolicy) -> Self {
        self.malformed_fields = policy;
        self
    }

    /// Set the binding buffer cap. Values below one byte are raised to one.
    pub fn with_max_binding_len(mut self, len: usize) -> Self {
        self.max_binding_len = len.max(MIN_BINDING_LEN);
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = DecodeOptions::default();
        assert_eq!(options.date_format, "%Y-%m-%d");
        assert_eq!(options.datetime_format, "%Y-%m-%d %H:%M:%S");
        assert!(!options.time_as_text);
        assert_eq!(options.malformed_fields, FieldErrorPolicy::Fail);
        assert_eq!(options.max_binding_len, 16 * 1024 * 1024);
    }

    #[test]
    fn test_builder() {
        let options = DecodeOptions::new()
            .with_datetime_format("%Y/%m/%d %H:%M")
            .with_time_as_text(true)
            .with_malformed_fields(FieldErrorPolicy::NullFill)
            .with_max_binding_len(0);
        assert_eq!(options.datetime_format, "%Y/%m/%d %H:%M");
        assert!(options.time_as_text);
        assert_eq!(options.malformed_fields, FieldErrorPolicy::NullFill);
        assert_eq!(options.max_binding_len, 1);
    }
}
