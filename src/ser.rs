//! CSON document assembly.
//!
//! This module provides the [`Serializer`], which turns a sequence of
//! [`Record`]s into one CSON document, and [`encode_schema`], which writes a
//! single schema clause.
//!
//! ## Overview
//!
//! For every record the serializer:
//!
//! - rejects absent and array-shaped values
//! - derives the record type's schema the first time its type name is seen,
//!   and reuses it for every later record of that name
//! - writes the data clause, reading values in schema order
//!
//! [`Serializer::finish`] then joins the schema clauses (first-seen order),
//! the schema/data separator and the data clauses (input order).
//!
//! ## Direct Serializer Usage
//!
//! Most users should use the functions in the crate root. The serializer is
//! useful when records arrive one at a time:
//!
//! ```rust
//! use cson::{cson_record, CsonOptions, Serializer};
//!
//! cson_record! {
//!     struct Ping { seq: i64 }
//! }
//!
//! let mut serializer = Serializer::new(CsonOptions::default());
//! for seq in 0..3 {
//!     serializer.push(&Ping { seq }).unwrap();
//! }
//! assert_eq!(
//!     serializer.finish(),
//!     "🍽Ping🥣seq🧂int64🔥🍲Ping🌶️0🍲Ping🌶️1🍲Ping🌶️2"
//! );
//! ```

use crate::schema::introspect;
use crate::value::{write_escaped, write_value};
use crate::{CsonOptions, Error, Record, RecordKind, Result, SchemaMap, TypeSchema};

/// The CSON serializer.
///
/// Holds the schemas registered so far and the data section written so far.
/// Created via [`Serializer::new`].
pub struct Serializer {
    options: CsonOptions,
    schemas: SchemaMap,
    data: String,
    records: usize,
}

impl Serializer {
    pub fn new(options: CsonOptions) -> Self {
        Serializer {
            options,
            schemas: SchemaMap::new(),
            data: String::with_capacity(256),
            records: 0,
        }
    }

    /// Appends one record to the document.
    ///
    /// A failed push leaves the serializer exactly as it was.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] if `record` is absent or array-shaped
    /// - any schema error from the first record of a new type name
    /// - any value error raised while reading or encoding field values
    pub fn push<R: Record + ?Sized>(&mut self, record: &R) -> Result<()> {
        match record.kind() {
            RecordKind::Struct => {}
            RecordKind::Array => {
                tracing::debug!(index = self.records, "rejected array-shaped record");
                return Err(Error::invalid_input("arrays are not supported"));
            }
            RecordKind::Absent => {
                tracing::debug!(index = self.records, "rejected absent record");
                return Err(Error::invalid_input("null records are not supported"));
            }
        }

        let type_name = record.type_name();
        let mut clause = String::new();
        if let Some(schema) = self.schemas.get(type_name) {
            write_data_clause(&mut clause, schema, record, &self.options)?;
        } else {
            let schema = introspect(record)?;
            write_data_clause(&mut clause, &schema, record, &self.options)?;
            tracing::debug!(
                type_name = %schema.type_name,
                fields = schema.len(),
                "registered schema"
            );
            self.schemas.insert(schema);
        }

        tracing::trace!(type_name, bytes = clause.len(), "encoded data clause");
        self.data.push_str(&clause);
        self.records += 1;
        Ok(())
    }

    /// Number of records pushed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records == 0
    }

    /// Schemas registered so far, in first-seen order.
    #[must_use]
    pub fn schemas(&self) -> &SchemaMap {
        &self.schemas
    }

    /// Assembles the document. An empty serializer yields an empty string.
    #[must_use]
    pub fn finish(self) -> String {
        if self.records == 0 {
            return String::new();
        }

        let mut output = String::with_capacity(self.data.len() + 64 * self.schemas.len());
        for schema in &self.schemas {
            encode_schema(&mut output, schema, &self.options);
        }
        output.push_str(&self.options.markers.schema_data_sep);
        output.push_str(&self.data);
        output
    }
}

/// Appends the schema clause of `schema` to `output`.
///
/// Type and field names go through the same escaping routine as string
/// values; ordinary identifiers are written unchanged.
///
/// # Examples
///
/// ```rust
/// use cson::{encode_schema, CsonOptions, CsonType, FieldDescriptor, TypeSchema};
///
/// let schema = TypeSchema {
///     type_name: "Foo".into(),
///     fields: vec![FieldDescriptor {
///         ident: "fooField".into(),
///         name: "fooField".into(),
///         cson_type: CsonType::Int32,
///     }],
/// };
/// let mut output = String::new();
/// encode_schema(&mut output, &schema, &CsonOptions::default());
/// assert_eq!(output, "🍽Foo🥣fooField🧂int32");
/// ```
pub fn encode_schema(output: &mut String, schema: &TypeSchema, options: &CsonOptions) {
    let markers = &options.markers;
    output.push_str(&markers.type_def);
    write_escaped(output, &schema.type_name, options);
    for field in &schema.fields {
        output.push_str(&markers.field_def);
        write_escaped(output, &field.name, options);
        output.push_str(&markers.field_type);
        output.push_str(field.cson_type.as_str());
    }
}

fn write_data_clause<R: Record + ?Sized>(
    output: &mut String,
    schema: &TypeSchema,
    record: &R,
    options: &CsonOptions,
) -> Result<()> {
    output.push_str(&options.markers.object_val);
    write_escaped(output, &schema.type_name, options);
    for field in &schema.fields {
        let value = record.field_value(&field.ident)?;
        output.push_str(&options.markers.field_val);
        write_value(output, &value, field.cson_type, options)
            .map_err(|e| e.in_field(&field.name))?;
    }
    Ok(())
}
