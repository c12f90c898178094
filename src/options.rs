//! Configuration options for CSON encoding.
//!
//! This module provides types to customize the literal tokens of a document:
//!
//! - [`Markers`]: the six structural markers
//! - [`CsonOptions`]: markers plus the boolean tokens
//!
//! The defaults reproduce the reference encoding. Both types implement serde's
//! `Serialize`/`Deserialize` with field defaults, so a partial configuration
//! can be loaded from any serde format.
//!
//! ## Examples
//!
//! ```rust
//! use cson::{CsonOptions, Markers};
//!
//! let options = CsonOptions::new().with_bool_tokens("T", "F");
//! assert!(options.validate().is_ok());
//!
//! let ascii = Markers::new().with_schema_data_sep("|");
//! let options = CsonOptions::new().with_markers(ascii);
//! assert_eq!(options.markers.schema_data_sep, "|");
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

pub const TYPE_DEF: &str = "🍽";
pub const FIELD_DEF: &str = "🥣";
pub const FIELD_DEF_TYPE: &str = "🧂";
pub const SCHEMA_DATA_SEP: &str = "🔥";
pub const OBJECT_VAL: &str = "🍲";
pub const FIELD_VAL: &str = "🌶\u{fe0f}";
pub const TRUE: &str = "✅";
pub const FALSE: &str = "❌";

/// Character that prefixes every escaped character in text content.
pub const ESCAPE: char = '\\';

/// The structural markers of a CSON document.
///
/// # Examples
///
/// ```rust
/// use cson::Markers;
///
/// let markers = Markers::default();
/// assert_eq!(markers.schema_data_sep, "🔥");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    /// Begins a schema clause, followed by the type name.
    pub type_def: String,
    /// Precedes each field's exposed name in a schema clause.
    pub field_def: String,
    /// Separates a field's exposed name from its type tag.
    pub field_type: String,
    /// Sits once between the schema section and the data section.
    pub schema_data_sep: String,
    /// Begins a data clause, followed by the type name.
    pub object_val: String,
    /// Precedes each encoded value in a data clause.
    pub field_val: String,
}

impl Default for Markers {
    fn default() -> Self {
        Markers {
            type_def: TYPE_DEF.to_string(),
            field_def: FIELD_DEF.to_string(),
            field_type: FIELD_DEF_TYPE.to_string(),
            schema_data_sep: SCHEMA_DATA_SEP.to_string(),
            object_val: OBJECT_VAL.to_string(),
            field_val: FIELD_VAL.to_string(),
        }
    }
}

impl Markers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_type_def(mut self, marker: &str) -> Self {
        self.type_def = marker.to_string();
        self
    }

    #[must_use]
    pub fn with_field_def(mut self, marker: &str) -> Self {
        self.field_def = marker.to_string();
        self
    }

    #[must_use]
    pub fn with_field_type(mut self, marker: &str) -> Self {
        self.field_type = marker.to_string();
        self
    }

    #[must_use]
    pub fn with_schema_data_sep(mut self, marker: &str) -> Self {
        self.schema_data_sep = marker.to_string();
        self
    }

    #[must_use]
    pub fn with_object_val(mut self, marker: &str) -> Self {
        self.object_val = marker.to_string();
        self
    }

    #[must_use]
    pub fn with_field_val(mut self, marker: &str) -> Self {
        self.field_val = marker.to_string();
        self
    }

    fn named(&self) -> [(&'static str, &str); 6] {
        [
            ("type_def", self.type_def.as_str()),
            ("field_def", self.field_def.as_str()),
            ("field_type", self.field_type.as_str()),
            ("schema_data_sep", self.schema_data_sep.as_str()),
            ("object_val", self.object_val.as_str()),
            ("field_val", self.field_val.as_str()),
        ]
    }
}

/// Configuration options for CSON encoding.
///
/// # Examples
///
/// ```rust
/// use cson::CsonOptions;
///
/// let options: CsonOptions = serde_json::from_str(r#"{"true_token": "yes"}"#).unwrap();
/// assert_eq!(options.true_token, "yes");
/// assert_eq!(options.false_token, "❌");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsonOptions {
    pub markers: Markers,
    pub true_token: String,
    pub false_token: String,
}

impl Default for CsonOptions {
    fn default() -> Self {
        CsonOptions {
            markers: Markers::default(),
            true_token: TRUE.to_string(),
            false_token: FALSE.to_string(),
        }
    }
}

impl CsonOptions {
    /// Creates the default options, matching the reference encoding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    /// Sets the literal tokens emitted for boolean values.
    #[must_use]
    pub fn with_bool_tokens(mut self, true_token: &str, false_token: &str) -> Self {
        self.true_token = true_token.to_string();
        self.false_token = false_token.to_string();
        self
    }

    /// Checks that the configured tokens can produce an unambiguous document.
    ///
    /// Every token must be non-empty, must not start with the escape
    /// character, and must not equal or prefix any other token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`] naming the offending token.
    pub fn validate(&self) -> Result<()> {
        let tokens = self.tokens();
        for (name, token) in &tokens {
            if token.is_empty() {
                return Err(Error::invalid_options(format!("{} is empty", name)));
            }
            if token.starts_with(ESCAPE) {
                return Err(Error::invalid_options(format!(
                    "{} starts with the escape character",
                    name
                )));
            }
        }
        for (i, (name, token)) in tokens.iter().enumerate() {
            for (other_name, other) in &tokens[i + 1..] {
                if token.starts_with(*other) || other.starts_with(*token) {
                    return Err(Error::invalid_options(format!(
                        "{} and {} collide",
                        name, other_name
                    )));
                }
            }
        }
        Ok(())
    }

    /// Returns true if `ch` must be escaped inside text content.
    #[inline]
    pub(crate) fn is_reserved(&self, ch: char) -> bool {
        ch == ESCAPE
            || self
                .tokens()
                .iter()
                .any(|(_, token)| token.starts_with(ch))
    }

    fn tokens(&self) -> [(&'static str, &str); 8] {
        let [a, b, c, d, e, f] = self.markers.named();
        [
            a,
            b,
            c,
            d,
            e,
            f,
            ("true_token", self.true_token.as_str()),
            ("false_token", self.false_token.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(CsonOptions::default().validate().is_ok());
    }

    #[test]
    fn test_field_val_carries_variation_selector() {
        assert_eq!(FIELD_VAL, "🌶️");
        assert_eq!(FIELD_VAL.chars().count(), 2);
    }

    #[test]
    fn test_colliding_tokens_are_rejected() {
        let options = CsonOptions::new().with_bool_tokens("🔥", "no");
        let err = options.validate().unwrap_err();
        assert_eq!(
            err,
            Error::InvalidOptions("schema_data_sep and true_token collide".to_string())
        );

        let prefix = CsonOptions::new().with_bool_tokens("yes", "yes!");
        assert!(prefix.validate().is_err());
    }

    #[test]
    fn test_empty_and_escape_tokens_are_rejected() {
        let empty = CsonOptions::new().with_markers(Markers::new().with_field_val(""));
        assert_eq!(
            empty.validate(),
            Err(Error::InvalidOptions("field_val is empty".to_string()))
        );

        let empty_bool = CsonOptions::new().with_bool_tokens("", "no");
        assert_eq!(
            empty_bool.validate(),
            Err(Error::InvalidOptions("true_token is empty".to_string()))
        );

        let escape = CsonOptions::new().with_markers(Markers::new().with_type_def("\\t"));
        assert_eq!(
            escape.validate(),
            Err(Error::InvalidOptions(
                "type_def starts with the escape character".to_string()
            ))
        );
    }

    #[test]
    fn test_reserved_characters() {
        let options = CsonOptions::default();
        assert!(options.is_reserved('\\'));
        assert!(options.is_reserved('🔥'));
        assert!(options.is_reserved('🌶'));
        assert!(options.is_reserved('✅'));
        assert!(!options.is_reserved('a'));
        assert!(!options.is_reserved('\u{fe0f}'));
    }

    #[test]
    fn test_partial_config_from_json() {
        let json = r#"{"markers": {"schema_data_sep": "||"}}"#;
        let options: CsonOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.markers.schema_data_sep, "||");
        assert_eq!(options.markers.type_def, TYPE_DEF);
        assert_eq!(options.true_token, TRUE);
    }
}
