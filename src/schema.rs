//! Field discovery and ordering.
//!
//! [`introspect`] asks a [`Record`] for its field metadata and turns it into a
//! [`TypeSchema`]: ignored fields dropped, names resolved, types mapped,
//! fields sorted by declared identifier and exposed names checked for
//! collisions.
//!
//! ## Examples
//!
//! ```rust
//! use cson::{cson_record, schema_of};
//!
//! cson_record! {
//!     struct Student {
//!         #[cson(rename = "fullName")]
//!         name: String,
//!         age: i32,
//!     }
//! }
//!
//! let schema = schema_of(&Student { name: "Ada".into(), age: 36 }).unwrap();
//! let names: Vec<_> = schema.fields.iter().map(|f| &*f.name).collect();
//! assert_eq!(names, ["age", "fullName"]);
//! ```

use crate::types::map_type;
use crate::{CsonType, Error, Record, Result};
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashSet;

/// One encodable field of a record type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Declared identifier, used to read the value back from a record.
    pub ident: Cow<'static, str>,
    /// Exposed name written into the schema clause.
    pub name: Cow<'static, str>,
    #[serde(rename = "type")]
    pub cson_type: CsonType,
}

/// The schema of one record type: its name and its ordered fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TypeSchema {
    pub type_name: String,
    pub fields: Vec<FieldDescriptor>,
}

impl TypeSchema {
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Derives the schema of `record`'s type.
///
/// Fields are sorted by declared identifier, so the result does not depend on
/// the order in which the provider lists them.
///
/// # Errors
///
/// - [`Error::UnsupportedType`] for a non-ignored field without a CSON tag
/// - [`Error::DuplicateFieldName`] when two fields share an exposed name
pub fn introspect<R: Record + ?Sized>(record: &R) -> Result<TypeSchema> {
    let mut fields = record
        .fields()
        .into_iter()
        .filter(|meta| !meta.ignored)
        .map(|meta| -> Result<FieldDescriptor> {
            let cson_type = map_type(&meta.semantic_type)?;
            let name = meta.rename.unwrap_or_else(|| meta.ident.clone());
            Ok(FieldDescriptor {
                ident: meta.ident,
                name,
                cson_type,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    fields.sort_by(|a, b| a.ident.cmp(&b.ident));

    // Renames are applied above, so collisions between them are caught here.
    let mut seen = HashSet::with_capacity(fields.len());
    for field in &fields {
        if !seen.insert(&*field.name) {
            return Err(Error::duplicate_field_name(&field.name));
        }
    }

    Ok(TypeSchema {
        type_name: record.type_name().to_string(),
        fields,
    })
}
