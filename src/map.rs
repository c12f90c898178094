//! First-seen ordered schema registry.
//!
//! [`SchemaMap`] is a thin wrapper around [`IndexMap`] keyed by type name.
//! Iteration follows insertion order, which is exactly the order in which
//! schema clauses must appear in a document.
//!
//! ## Why IndexMap?
//!
//! - **First-seen order**: schema clauses are emitted in the order types were
//!   first encountered, without a separate order vector
//! - **Cheap lookups**: repeated types hit the cached schema by name
//!
//! ## Examples
//!
//! ```rust
//! use cson::{SchemaMap, TypeSchema};
//!
//! let mut map = SchemaMap::new();
//! map.insert(TypeSchema { type_name: "Foo".into(), fields: vec![] });
//! map.insert(TypeSchema { type_name: "Bar".into(), fields: vec![] });
//!
//! let order: Vec<_> = map.type_names().collect();
//! assert_eq!(order, ["Foo", "Bar"]);
//! ```

use crate::TypeSchema;
use indexmap::IndexMap;

/// Schemas keyed by type name, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaMap(IndexMap<String, TypeSchema>);

impl SchemaMap {
    #[must_use]
    pub fn new() -> Self {
        SchemaMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        SchemaMap(IndexMap::with_capacity(capacity))
    }

    /// Registers `schema` unless its type name is already known.
    ///
    /// Returns `true` if the schema was inserted. An existing entry is never
    /// replaced, so the first schema derived for a type name wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cson::{SchemaMap, TypeSchema};
    ///
    /// let mut map = SchemaMap::new();
    /// assert!(map.insert(TypeSchema { type_name: "Foo".into(), fields: vec![] }));
    /// assert!(!map.insert(TypeSchema { type_name: "Foo".into(), fields: vec![] }));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, schema: TypeSchema) -> bool {
        if self.0.contains_key(&schema.type_name) {
            return false;
        }
        self.0.insert(schema.type_name.clone(), schema);
        true
    }

    #[must_use]
    pub fn get(&self, type_name: &str) -> Option<&TypeSchema> {
        self.0.get(type_name)
    }

    #[must_use]
    pub fn contains(&self, type_name: &str) -> bool {
        self.0.contains_key(type_name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over schemas in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeSchema> {
        self.0.values()
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a SchemaMap {
    type Item = &'a TypeSchema;
    type IntoIter = indexmap::map::Values<'a, String, TypeSchema>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CsonType, FieldDescriptor};
    use std::borrow::Cow;

    fn schema(name: &str, field: &'static str) -> TypeSchema {
        TypeSchema {
            type_name: name.to_string(),
            fields: vec![FieldDescriptor {
                ident: Cow::Borrowed(field),
                name: Cow::Borrowed(field),
                cson_type: CsonType::Int32,
            }],
        }
    }

    #[test]
    fn test_first_schema_wins() {
        let mut map = SchemaMap::new();
        assert!(map.insert(schema("Foo", "first")));
        assert!(!map.insert(schema("Foo", "second")));
        assert_eq!(map.get("Foo").unwrap().fields[0].name, "first");
    }

    #[test]
    fn test_iteration_follows_first_sight() {
        let mut map = SchemaMap::with_capacity(3);
        map.insert(schema("C", "c"));
        map.insert(schema("A", "a"));
        map.insert(schema("C", "again"));
        map.insert(schema("B", "b"));

        let names: Vec<_> = (&map).into_iter().map(|s| s.type_name.as_str()).collect();
        assert_eq!(names, ["C", "A", "B"]);
        assert!(map.contains("A"));
        assert!(!map.contains("D"));
    }
}
