//! Runtime field values and their textual encoding.
//!
//! [`FieldValue`] is what a [`Record`](crate::Record) hands back for one
//! field. [`encode_value`] turns it into data-clause text for a given
//! [`CsonType`], and [`escape_str`] is the escaping routine shared by
//! strings, type names and field names.
//!
//! ## Escaping
//!
//! The escape character is `\`. A backslash, and any character that begins a
//! marker or boolean token, is written with a `\` in front of it. Escaped text
//! therefore never contains a token, and `\X` always reads back as `X`.
//!
//! ```rust
//! use cson::value::{escape_str, unescape_str};
//!
//! let escaped = escape_str("hot 🔥 take");
//! assert_eq!(escaped, "hot \\🔥 take");
//! assert_eq!(unescape_str(&escaped), "hot 🔥 take");
//! ```

use crate::options::ESCAPE;
use crate::{CsonOptions, CsonType, Error, Result};
use std::borrow::Cow;
use std::fmt::Write;

/// The value of one field of one record.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue<'a> {
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Boolean(bool),
    String(Cow<'a, str>),
    /// The field holds no value.
    Null,
}

impl<'a> FieldValue<'a> {
    /// Short name of the value's variant, used in mismatch errors.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            FieldValue::Int32(_) => "int32",
            FieldValue::Int64(_) => "int64",
            FieldValue::Float32(_) => "float32",
            FieldValue::Float64(_) => "float64",
            FieldValue::Boolean(_) => "boolean",
            FieldValue::String(_) => "string",
            FieldValue::Null => "null",
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl From<i32> for FieldValue<'_> {
    fn from(v: i32) -> Self {
        FieldValue::Int32(v)
    }
}

impl From<i64> for FieldValue<'_> {
    fn from(v: i64) -> Self {
        FieldValue::Int64(v)
    }
}

impl From<f32> for FieldValue<'_> {
    fn from(v: f32) -> Self {
        FieldValue::Float32(v)
    }
}

impl From<f64> for FieldValue<'_> {
    fn from(v: f64) -> Self {
        FieldValue::Float64(v)
    }
}

impl From<bool> for FieldValue<'_> {
    fn from(v: bool) -> Self {
        FieldValue::Boolean(v)
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(v: &'a str) -> Self {
        FieldValue::String(Cow::Borrowed(v))
    }
}

impl From<String> for FieldValue<'_> {
    fn from(v: String) -> Self {
        FieldValue::String(Cow::Owned(v))
    }
}

impl<'a, T: Into<FieldValue<'a>>> From<Option<T>> for FieldValue<'a> {
    fn from(v: Option<T>) -> Self {
        v.map_or(FieldValue::Null, Into::into)
    }
}

/// Encodes one value for the given tag using the default tokens.
///
/// # Examples
///
/// ```rust
/// use cson::{encode_value, CsonOptions, CsonType, FieldValue};
///
/// let options = CsonOptions::default();
/// assert_eq!(encode_value(&FieldValue::Int32(42), CsonType::Int32, &options).unwrap(), "42");
/// assert_eq!(encode_value(&FieldValue::Boolean(true), CsonType::Boolean, &options).unwrap(), "✅");
/// ```
///
/// # Errors
///
/// - [`Error::NullValue`] if the value is [`FieldValue::Null`]
/// - [`Error::ValueMismatch`] if the value's variant does not match `tag`
pub fn encode_value(value: &FieldValue<'_>, tag: CsonType, options: &CsonOptions) -> Result<String> {
    let mut output = String::new();
    write_value(&mut output, value, tag, options)?;
    Ok(output)
}

/// Appends the encoding of `value` to `output`.
///
/// Nothing is appended when an error is returned.
pub fn write_value(
    output: &mut String,
    value: &FieldValue<'_>,
    tag: CsonType,
    options: &CsonOptions,
) -> Result<()> {
    match (tag, value) {
        (_, FieldValue::Null) => return Err(Error::null_value("")),
        (CsonType::Boolean, FieldValue::Boolean(b)) => {
            output.push_str(if *b {
                &options.true_token
            } else {
                &options.false_token
            });
        }
        (CsonType::String, FieldValue::String(s)) => write_escaped(output, s, options),
        (CsonType::Int32, FieldValue::Int32(n)) => write_display(output, n),
        (CsonType::Int64, FieldValue::Int64(n)) => write_display(output, n),
        (CsonType::Float32, FieldValue::Float32(x)) => write_float(output, x),
        (CsonType::Float64, FieldValue::Float64(x)) => write_float(output, x),
        (expected, found) => return Err(Error::value_mismatch(expected, found.kind())),
    }
    Ok(())
}

#[inline]
fn write_display<T: std::fmt::Display>(output: &mut String, v: T) {
    // Writing into a String cannot fail
    let _ = write!(output, "{}", v);
}

/// Shortest round-trip form: `42.0`, `0.1`, `1e21`, `NaN`, `inf`.
#[inline]
fn write_float<T: std::fmt::Debug>(output: &mut String, v: T) {
    let _ = write!(output, "{:?}", v);
}

/// Escapes `s` against the default markers and boolean tokens.
#[must_use]
pub fn escape_str(s: &str) -> String {
    escape_str_with(s, &CsonOptions::default())
}

/// Escapes `s` against the tokens configured in `options`.
#[must_use]
pub fn escape_str_with(s: &str, options: &CsonOptions) -> String {
    let mut output = String::with_capacity(s.len());
    write_escaped(&mut output, s, options);
    output
}

pub(crate) fn write_escaped(output: &mut String, s: &str, options: &CsonOptions) {
    for ch in s.chars() {
        if options.is_reserved(ch) {
            output.push(ESCAPE);
        }
        output.push(ch);
    }
}

/// Reverses [`escape_str`]: every `\X` becomes `X`.
///
/// A trailing lone `\` is kept as is.
#[must_use]
pub fn unescape_str(s: &str) -> String {
    let mut output = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch == ESCAPE {
            output.push(chars.next().unwrap_or(ESCAPE));
        } else {
            output.push(ch);
        }
    }
    output
}
