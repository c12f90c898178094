//! Error types for CSON encoding.
//!
//! Every failure aborts the current `serialize` call; no partial document is
//! ever returned.
//!
//! ## Error Categories
//!
//! - **Input errors**: the top-level value is absent or array-shaped
//! - **Schema errors**: unsupported field types, duplicate exposed names
//! - **Value errors**: absent values, values that do not match their tag, or
//!   values the metadata provider cannot read
//! - **Configuration errors**: colliding or empty markers
//!
//! ## Examples
//!
//! ```rust
//! use cson::{to_string, Error};
//!
//! let records: Vec<i32> = vec![1, 2, 3];
//! let err = to_string(&records).unwrap_err();
//! assert!(matches!(err, Error::InvalidInput(_)));
//! ```

use crate::types::CsonType;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur during CSON encoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The top-level value is absent or is an array/collection
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A field's semantic type has no CSON type tag
    #[error("Unsupported field type: {0}")]
    UnsupportedType(String),

    /// Two fields of one type resolve to the same exposed name
    #[error("Duplicate field name detected in schema: {0}")]
    DuplicateFieldName(String),

    /// A field's runtime value is absent
    #[error("Null value in field '{field}'")]
    NullValue { field: String },

    /// The metadata provider could not read a field's value
    #[error("Unable to access field value '{field}': {reason}")]
    FieldAccess { field: String, reason: String },

    /// A runtime value does not have the shape announced by its type tag
    #[error("Value mismatch: expected {expected}, found {found}")]
    ValueMismatch {
        expected: CsonType,
        found: &'static str,
    },

    /// Markers or boolean tokens cannot produce an unambiguous document
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// IO error while writing the document
    #[error("IO error: {0}")]
    Io(String),
}

/// The name the format's documentation uses for [`Error`].
pub type SerializationError = Error;

impl Error {
    /// Creates an invalid-input error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cson::Error;
    ///
    /// let err = Error::invalid_input("arrays are not supported");
    /// assert!(err.to_string().contains("arrays"));
    /// ```
    pub fn invalid_input<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidInput(msg.to_string())
    }

    /// Creates an unsupported-type error naming the offending type.
    pub fn unsupported_type<T: fmt::Display>(type_name: T) -> Self {
        Error::UnsupportedType(type_name.to_string())
    }

    /// Creates a duplicate-field error naming the repeated exposed name.
    pub fn duplicate_field_name(name: &str) -> Self {
        Error::DuplicateFieldName(name.to_string())
    }

    /// Creates a null-value error for the given field.
    pub fn null_value(field: &str) -> Self {
        Error::NullValue {
            field: field.to_string(),
        }
    }

    /// Creates a field-access error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cson::Error;
    ///
    /// let err = Error::field_access("age", "no such field");
    /// assert!(err.to_string().contains("age"));
    /// ```
    pub fn field_access<T: fmt::Display>(field: &str, reason: T) -> Self {
        Error::FieldAccess {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates a value-mismatch error naming the expected tag and the found kind.
    pub fn value_mismatch(expected: CsonType, found: &'static str) -> Self {
        Error::ValueMismatch { expected, found }
    }

    /// Creates an invalid-options error.
    pub fn invalid_options<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidOptions(msg.to_string())
    }

    /// Creates an I/O error from a writer failure message.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Attaches a field name to errors raised below the field level.
    ///
    /// Value encoding does not know which field it is working on, so a
    /// `NullValue` raised there carries an empty field name until the
    /// serializer fills it in.
    pub(crate) fn in_field(self, field: &str) -> Self {
        match self {
            Error::NullValue { field: f } if f.is_empty() => Error::null_value(field),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
