//! Semantic field types and their CSON type tags.
//!
//! A [`SemanticType`] is the abstract category of a field's values as seen by
//! the metadata provider. [`map_type`] turns the six supported categories into
//! a [`CsonType`] tag; everything else is rejected.
//!
//! ## Examples
//!
//! ```rust
//! use cson::{map_type, CsonType, SemanticType};
//!
//! assert_eq!(map_type(&SemanticType::Int64).unwrap(), CsonType::Int64);
//! assert!(map_type(&SemanticType::Optional(Box::new(SemanticType::Int32))).is_err());
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Type tag written into a schema clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CsonType {
    Int32,
    Int64,
    Float32,
    Float64,
    Boolean,
    String,
}

impl CsonType {
    /// Returns the tag text as it appears in the document.
    ///
    /// ```rust
    /// use cson::CsonType;
    ///
    /// assert_eq!(CsonType::Float32.as_str(), "float32");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            CsonType::Int32 => "int32",
            CsonType::Int64 => "int64",
            CsonType::Float32 => "float32",
            CsonType::Float64 => "float64",
            CsonType::Boolean => "boolean",
            CsonType::String => "string",
        }
    }
}

impl fmt::Display for CsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The value category of a field, independent of its Rust spelling.
///
/// Only the first six variants have a CSON tag. The wrapper variants exist so
/// that unsupported fields can be reported with a readable type name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SemanticType {
    Int32,
    Int64,
    Float32,
    Float64,
    Boolean,
    String,
    /// A value that may be absent, such as `Option<T>`.
    Optional(Box<SemanticType>),
    /// A sequence of values, such as `Vec<T>` or `[T; N]`.
    Array(Box<SemanticType>),
    /// Any other type: composites, enums, unsigned or narrow integers.
    Other(Cow<'static, str>),
}

impl SemanticType {
    /// Shorthand for [`SemanticType::Other`] with a static name.
    #[must_use]
    pub const fn other(name: &'static str) -> Self {
        SemanticType::Other(Cow::Borrowed(name))
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticType::Int32 => f.write_str("i32"),
            SemanticType::Int64 => f.write_str("i64"),
            SemanticType::Float32 => f.write_str("f32"),
            SemanticType::Float64 => f.write_str("f64"),
            SemanticType::Boolean => f.write_str("bool"),
            SemanticType::String => f.write_str("String"),
            SemanticType::Optional(inner) => write!(f, "Option<{}>", inner),
            SemanticType::Array(inner) => write!(f, "Vec<{}>", inner),
            SemanticType::Other(name) => f.write_str(name),
        }
    }
}

/// Maps a semantic type to its CSON tag.
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] carrying the type's display name for
/// anything outside the six primitive categories.
pub fn map_type(semantic: &SemanticType) -> Result<CsonType> {
    match semantic {
        SemanticType::Int32 => Ok(CsonType::Int32),
        SemanticType::Int64 => Ok(CsonType::Int64),
        SemanticType::Float32 => Ok(CsonType::Float32),
        SemanticType::Float64 => Ok(CsonType::Float64),
        SemanticType::Boolean => Ok(CsonType::Boolean),
        SemanticType::String => Ok(CsonType::String),
        unsupported => Err(Error::unsupported_type(unsupported)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitives_map_to_tags() {
        let cases = [
            (SemanticType::Int32, "int32"),
            (SemanticType::Int64, "int64"),
            (SemanticType::Float32, "float32"),
            (SemanticType::Float64, "float64"),
            (SemanticType::Boolean, "boolean"),
            (SemanticType::String, "string"),
        ];
        for (semantic, tag) in cases {
            assert_eq!(map_type(&semantic).unwrap().as_str(), tag);
        }
    }

    #[test]
    fn test_wrappers_are_unsupported() {
        let nullable = SemanticType::Optional(Box::new(SemanticType::Int32));
        assert_eq!(
            map_type(&nullable),
            Err(Error::UnsupportedType("Option<i32>".to_string()))
        );

        let array = SemanticType::Array(Box::new(SemanticType::String));
        assert_eq!(
            map_type(&array),
            Err(Error::UnsupportedType("Vec<String>".to_string()))
        );

        assert_eq!(
            map_type(&SemanticType::other("u8")),
            Err(Error::UnsupportedType("u8".to_string()))
        );
    }

    #[test]
    fn test_tag_serializes_lowercase() {
        let json = serde_json::to_string(&CsonType::Boolean).unwrap();
        assert_eq!(json, "\"boolean\"");
    }
}
