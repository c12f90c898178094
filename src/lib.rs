//! # cson
//!
//! An encoder for CSON, a self-describing textual format for flat records.
//!
//! ## What is CSON?
//!
//! A CSON document has two sections. The schema section holds one clause per
//! distinct record type, naming the type and listing its fields with their
//! primitive type tags. The data section holds one clause per record, listing
//! its values in schema order. A single marker separates the two, so a reader
//! needs no external type information.
//!
//! ## Key Features
//!
//! - **Heterogeneous batches**: records of different types share one document;
//!   each type's schema is written once, at its first occurrence
//! - **Deterministic**: fields are ordered by declared identifier, so the same
//!   input always yields byte-identical output
//! - **Rename and skip**: per-field configuration through [`FieldMeta`] or the
//!   [`cson_record!`] macro
//! - **Safe text**: strings and names are escaped so they can never be
//!   mistaken for a marker
//!
//! ## Quick Start
//!
//! ```rust
//! use cson::{cson_record, to_string_batch, Record};
//!
//! cson_record! {
//!     #[allow(non_snake_case)]
//!     struct Foo { fooField: i32 }
//! }
//!
//! cson_record! {
//!     #[allow(non_snake_case)]
//!     struct Bar { barField: String }
//! }
//!
//! let foo = Foo { fooField: 42 };
//! let bar = Bar { barField: "Hello".to_string() };
//! let records: [&dyn Record; 2] = [&foo, &bar];
//!
//! let cson = to_string_batch(records).unwrap();
//! assert_eq!(
//!     cson,
//!     "🍽Foo🥣fooField🧂int32🍽Bar🥣barField🧂string🔥🍲Foo🌶️42🍲Bar🌶️Hello"
//! );
//! ```
//!
//! ## Supported Field Types
//!
//! | Rust type | Tag |
//! |-----------|-----|
//! | `i32` | `int32` |
//! | `i64` | `int64` |
//! | `f32` | `float32` |
//! | `f64` | `float64` |
//! | `bool` | `boolean` |
//! | `String`, `&str`, `Cow<str>` | `string` |
//!
//! Anything else, including `Option<T>`, `Vec<T>` and nested records, is
//! rejected with [`Error::UnsupportedType`].
//!
//! ## Format Reference
//!
//! See the [`format`] module for the document grammar, the default tokens
//! and the escaping rule.

pub mod error;
pub mod format;
mod macros;
pub mod map;
pub mod options;
pub mod record;
pub mod schema;
pub mod ser;
pub mod types;
pub mod value;

pub use error::{Error, Result, SerializationError};
pub use map::SchemaMap;
pub use options::{CsonOptions, Markers};
pub use record::{FieldMeta, FieldType, Record, RecordKind};
pub use schema::{introspect, FieldDescriptor, TypeSchema};
pub use ser::{encode_schema, Serializer};
pub use types::{map_type, CsonType, SemanticType};
pub use value::{encode_value, FieldValue};

use std::io;

/// Serialize a single record to a CSON string.
///
/// # Examples
///
/// ```rust
/// use cson::{cson_record, to_string};
///
/// cson_record! {
///     struct Point { y: i32, x: i32 }
/// }
///
/// let cson = to_string(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(cson, "🍽Point🥣x🧂int32🥣y🧂int32🔥🍲Point🌶️1🌶️2");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `record` is absent (`None`) or a
/// sequence (`Vec`, slice, array), and any schema or value error otherwise.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<R>(record: &R) -> Result<String>
where
    R: ?Sized + Record,
{
    to_string_with_options(record, CsonOptions::default())
}

/// Serialize a single record to a CSON string with custom options.
///
/// # Errors
///
/// Returns [`Error::InvalidOptions`] if the options are ambiguous, and
/// otherwise the same errors as [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<R>(record: &R, options: CsonOptions) -> Result<String>
where
    R: ?Sized + Record,
{
    match record.kind() {
        RecordKind::Struct => to_string_batch_with_options(std::iter::once(record), options),
        RecordKind::Array => Err(Error::invalid_input(
            "arrays are not supported as top-level input",
        )),
        RecordKind::Absent => Err(Error::invalid_input("null records are not supported")),
    }
}

/// Serialize a batch of records, possibly of different types, to one CSON
/// string.
///
/// An empty batch yields an empty string.
///
/// # Examples
///
/// ```rust
/// use cson::{cson_record, to_string_batch};
///
/// cson_record! {
///     struct Tick { n: i32 }
/// }
///
/// let ticks = vec![Tick { n: 1 }, Tick { n: 2 }];
/// assert_eq!(
///     to_string_batch(&ticks).unwrap(),
///     "🍽Tick🥣n🧂int32🔥🍲Tick🌶️1🍲Tick🌶️2"
/// );
///
/// let none: Vec<Tick> = Vec::new();
/// assert_eq!(to_string_batch(&none).unwrap(), "");
/// ```
///
/// # Errors
///
/// Fails on the first record that cannot be encoded; no partial document is
/// returned.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_batch<I>(records: I) -> Result<String>
where
    I: IntoIterator,
    I::Item: Record,
{
    to_string_batch_with_options(records, CsonOptions::default())
}

/// Serialize a batch of records with custom options.
///
/// # Examples
///
/// ```rust
/// use cson::{cson_record, to_string_batch_with_options, CsonOptions};
///
/// cson_record! {
///     struct Flag { on: bool }
/// }
///
/// let options = CsonOptions::new().with_bool_tokens("Y", "N");
/// let cson = to_string_batch_with_options(&[Flag { on: true }], options).unwrap();
/// assert!(cson.ends_with("🍲Flag🌶️Y"));
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidOptions`] if the options are ambiguous, and
/// otherwise the same errors as [`to_string_batch`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_batch_with_options<I>(records: I, options: CsonOptions) -> Result<String>
where
    I: IntoIterator,
    I::Item: Record,
{
    options.validate()?;
    let mut serializer = Serializer::new(options);
    for record in records {
        serializer.push(&record)?;
    }
    Ok(serializer.finish())
}

/// Serialize a single record to a writer.
///
/// # Errors
///
/// Returns an error if encoding fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, R>(mut writer: W, record: &R) -> Result<()>
where
    W: io::Write,
    R: ?Sized + Record,
{
    let cson = to_string(record)?;
    writer
        .write_all(cson.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))
}

/// Serialize a batch of records to a writer.
///
/// # Examples
///
/// ```rust
/// use cson::{cson_record, to_writer_batch};
///
/// cson_record! {
///     struct Tick { n: i32 }
/// }
///
/// let mut buffer = Vec::new();
/// to_writer_batch(&mut buffer, &[Tick { n: 7 }]).unwrap();
/// assert!(String::from_utf8(buffer).unwrap().ends_with("🌶️7"));
/// ```
///
/// # Errors
///
/// Returns an error if encoding fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_batch<W, I>(mut writer: W, records: I) -> Result<()>
where
    W: io::Write,
    I: IntoIterator,
    I::Item: Record,
{
    let cson = to_string_batch(records)?;
    writer
        .write_all(cson.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))
}

/// Derive the schema a record's type would be written with.
///
/// # Errors
///
/// Returns the schema errors [`to_string`] would raise for this record's
/// type, or [`Error::InvalidInput`] for absent and array-shaped values.
pub fn schema_of<R>(record: &R) -> Result<TypeSchema>
where
    R: ?Sized + Record,
{
    match record.kind() {
        RecordKind::Struct => introspect(record),
        _ => Err(Error::invalid_input("only records have a schema")),
    }
}
