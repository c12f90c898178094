//! The field metadata provider.
//!
//! A type takes part in CSON encoding by implementing [`Record`]: it names
//! itself, lists its fields as [`FieldMeta`] entries and hands out field
//! values by declared identifier. The [`cson_record!`](crate::cson_record)
//! macro writes the implementation for plain structs; manual implementations
//! are equally valid.
//!
//! ## Examples
//!
//! ```rust
//! use cson::{to_string, FieldMeta, FieldValue, Record, Result, Error, SemanticType};
//!
//! struct Point { x: i32, y: i32 }
//!
//! impl Record for Point {
//!     fn type_name(&self) -> &str { "Point" }
//!
//!     fn fields(&self) -> Vec<FieldMeta> {
//!         vec![
//!             FieldMeta::new("y", SemanticType::Int32),
//!             FieldMeta::new("x", SemanticType::Int32).rename("horizontal"),
//!         ]
//!     }
//!
//!     fn field_value(&self, field: &str) -> Result<FieldValue<'_>> {
//!         match field {
//!             "x" => Ok(self.x.into()),
//!             "y" => Ok(self.y.into()),
//!             _ => Err(Error::field_access(field, "no such field")),
//!         }
//!     }
//! }
//!
//! let cson = to_string(&Point { x: 1, y: 2 }).unwrap();
//! assert_eq!(cson, "🍽Point🥣horizontal🧂int32🥣y🧂int32🔥🍲Point🌶️1🌶️2");
//! ```

use crate::{Error, FieldValue, Result, SemanticType};
use std::borrow::Cow;

/// Runtime shape of a top-level value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    /// A flat record with named fields.
    Struct,
    /// A sequence of records. Never valid as input.
    Array,
    /// No value at all. Never valid as input.
    Absent,
}

/// Configuration of one declared field, as supplied by the metadata provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldMeta {
    /// The declared identifier. Fields are ordered by this name.
    pub ident: Cow<'static, str>,
    pub semantic_type: SemanticType,
    /// Exposed name written into the document instead of `ident`.
    pub rename: Option<Cow<'static, str>>,
    /// Ignored fields take no part in the schema or the data.
    pub ignored: bool,
}

impl FieldMeta {
    #[must_use]
    pub fn new(ident: impl Into<Cow<'static, str>>, semantic_type: SemanticType) -> Self {
        FieldMeta {
            ident: ident.into(),
            semantic_type,
            rename: None,
            ignored: false,
        }
    }

    /// Creates the entry for a field of Rust type `T`.
    ///
    /// ```rust
    /// use cson::{FieldMeta, SemanticType};
    ///
    /// let meta = FieldMeta::of::<Option<String>>("nickname");
    /// assert_eq!(meta.semantic_type, SemanticType::Optional(Box::new(SemanticType::String)));
    /// ```
    #[must_use]
    pub fn of<T: FieldType + ?Sized>(ident: &'static str) -> Self {
        Self::new(ident, T::semantic_type())
    }

    #[must_use]
    pub fn rename(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.rename = Some(name.into());
        self
    }

    #[must_use]
    pub fn ignore(mut self) -> Self {
        self.ignored = true;
        self
    }

    /// The name written into the document.
    #[must_use]
    pub fn exposed_name(&self) -> &str {
        self.rename.as_deref().unwrap_or(&self.ident)
    }
}

/// A value that can be encoded as one CSON record.
///
/// The trait is object safe so heterogeneous batches can be passed as
/// `&[&dyn Record]`.
pub trait Record {
    /// Name written after the type-definition and object-value markers.
    ///
    /// All records sharing a type name share one schema clause.
    fn type_name(&self) -> &str;

    /// Every declared field, in any order, including ignored ones.
    fn fields(&self) -> Vec<FieldMeta>;

    /// Reads the current value of the field declared as `field`.
    ///
    /// # Errors
    ///
    /// Implementations return [`Error::FieldAccess`] when the value cannot be
    /// read, for example because `field` is not one of their fields.
    fn field_value(&self, field: &str) -> Result<FieldValue<'_>>;

    fn kind(&self) -> RecordKind {
        RecordKind::Struct
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn type_name(&self) -> &str {
        (**self).type_name()
    }

    fn fields(&self) -> Vec<FieldMeta> {
        (**self).fields()
    }

    fn field_value(&self, field: &str) -> Result<FieldValue<'_>> {
        (**self).field_value(field)
    }

    fn kind(&self) -> RecordKind {
        (**self).kind()
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn type_name(&self) -> &str {
        (**self).type_name()
    }

    fn fields(&self) -> Vec<FieldMeta> {
        (**self).fields()
    }

    fn field_value(&self, field: &str) -> Result<FieldValue<'_>> {
        (**self).field_value(field)
    }

    fn kind(&self) -> RecordKind {
        (**self).kind()
    }
}

/// `None` is the absent record; `Some` is transparent.
impl<R: Record> Record for Option<R> {
    fn type_name(&self) -> &str {
        self.as_ref().map_or("", Record::type_name)
    }

    fn fields(&self) -> Vec<FieldMeta> {
        self.as_ref().map(Record::fields).unwrap_or_default()
    }

    fn field_value(&self, field: &str) -> Result<FieldValue<'_>> {
        match self {
            Some(record) => record.field_value(field),
            None => Err(Error::field_access(field, "record is absent")),
        }
    }

    fn kind(&self) -> RecordKind {
        match self {
            Some(record) => record.kind(),
            None => RecordKind::Absent,
        }
    }
}

macro_rules! array_record {
    ($($ty:ty => [$($gen:tt)*]),* $(,)?) => {
        $(
            impl<$($gen)*> Record for $ty {
                fn type_name(&self) -> &str {
                    ""
                }

                fn fields(&self) -> Vec<FieldMeta> {
                    Vec::new()
                }

                fn field_value(&self, field: &str) -> Result<FieldValue<'_>> {
                    Err(Error::field_access(field, "arrays have no fields"))
                }

                fn kind(&self) -> RecordKind {
                    RecordKind::Array
                }
            }
        )*
    };
}

// Sequences never qualify as records, whatever they hold.
array_record! {
    [T] => [T],
    Vec<T> => [T],
    [T; N] => [T, const N: usize],
}

/// Rust types usable as field types in [`cson_record!`](crate::cson_record).
///
/// Every implementation reports its [`SemanticType`]; only the six primitive
/// categories can actually be encoded, the rest surface as
/// [`Error::UnsupportedType`] when a schema is built.
pub trait FieldType {
    fn semantic_type() -> SemanticType;

    /// Reads the value for encoding.
    ///
    /// # Errors
    ///
    /// Types without a CSON representation return
    /// [`Error::UnsupportedType`].
    fn field_value(&self) -> Result<FieldValue<'_>>;
}

macro_rules! primitive_field_type {
    ($($ty:ty => $semantic:ident),* $(,)?) => {
        $(
            impl FieldType for $ty {
                fn semantic_type() -> SemanticType {
                    SemanticType::$semantic
                }

                fn field_value(&self) -> Result<FieldValue<'_>> {
                    Ok(FieldValue::$semantic(*self))
                }
            }
        )*
    };
}

primitive_field_type! {
    i32 => Int32,
    i64 => Int64,
    f32 => Float32,
    f64 => Float64,
    bool => Boolean,
}

impl FieldType for String {
    fn semantic_type() -> SemanticType {
        SemanticType::String
    }

    fn field_value(&self) -> Result<FieldValue<'_>> {
        Ok(FieldValue::String(Cow::Borrowed(self)))
    }
}

impl FieldType for &str {
    fn semantic_type() -> SemanticType {
        SemanticType::String
    }

    fn field_value(&self) -> Result<FieldValue<'_>> {
        Ok(FieldValue::String(Cow::Borrowed(*self)))
    }
}

impl FieldType for Cow<'_, str> {
    fn semantic_type() -> SemanticType {
        SemanticType::String
    }

    fn field_value(&self) -> Result<FieldValue<'_>> {
        Ok(FieldValue::String(Cow::Borrowed(self)))
    }
}

macro_rules! unsupported_field_type {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldType for $ty {
                fn semantic_type() -> SemanticType {
                    SemanticType::other(stringify!($ty))
                }

                fn field_value(&self) -> Result<FieldValue<'_>> {
                    Err(Error::unsupported_type(stringify!($ty)))
                }
            }
        )*
    };
}

unsupported_field_type!(i8, i16, i128, isize, u8, u16, u32, u64, u128, usize, char);

impl<T: FieldType> FieldType for Option<T> {
    fn semantic_type() -> SemanticType {
        SemanticType::Optional(Box::new(T::semantic_type()))
    }

    fn field_value(&self) -> Result<FieldValue<'_>> {
        match self {
            Some(v) => v.field_value(),
            None => Ok(FieldValue::Null),
        }
    }
}

impl<T: FieldType> FieldType for Vec<T> {
    fn semantic_type() -> SemanticType {
        SemanticType::Array(Box::new(T::semantic_type()))
    }

    fn field_value(&self) -> Result<FieldValue<'_>> {
        Err(Error::unsupported_type(Self::semantic_type()))
    }
}

impl<T: FieldType, const N: usize> FieldType for [T; N] {
    fn semantic_type() -> SemanticType {
        SemanticType::Array(Box::new(T::semantic_type()))
    }

    fn field_value(&self) -> Result<FieldValue<'_>> {
        Err(Error::unsupported_type(Self::semantic_type()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe;

    impl Record for Probe {
        fn type_name(&self) -> &str {
            "Probe"
        }

        fn fields(&self) -> Vec<FieldMeta> {
            vec![FieldMeta::of::<i32>("n")]
        }

        fn field_value(&self, field: &str) -> Result<FieldValue<'_>> {
            match field {
                "n" => Ok(FieldValue::Int32(7)),
                _ => Err(Error::field_access(field, "no such field")),
            }
        }
    }

    #[test]
    fn test_exposed_name_prefers_rename() {
        let meta = FieldMeta::new("field1", SemanticType::Int32);
        assert_eq!(meta.exposed_name(), "field1");
        assert_eq!(meta.rename("renamed").exposed_name(), "renamed");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Probe.kind(), RecordKind::Struct);
        assert_eq!(Some(Probe).kind(), RecordKind::Struct);
        assert_eq!(None::<Probe>.kind(), RecordKind::Absent);
        assert_eq!(vec![Probe].kind(), RecordKind::Array);
        assert_eq!([Probe, Probe].kind(), RecordKind::Array);
        assert_eq!(Box::new(Probe).kind(), RecordKind::Struct);
    }

    #[test]
    fn test_wrappers_forward_to_inner_record() {
        let boxed: Box<dyn Record> = Box::new(Probe);
        assert_eq!(boxed.type_name(), "Probe");
        assert_eq!(boxed.field_value("n").unwrap(), FieldValue::Int32(7));
        assert!(matches!(
            boxed.field_value("missing"),
            Err(Error::FieldAccess { .. })
        ));
    }

    #[test]
    fn test_field_type_semantics() {
        assert_eq!(i64::semantic_type(), SemanticType::Int64);
        assert_eq!(<&str>::semantic_type(), SemanticType::String);
        assert_eq!(u8::semantic_type(), SemanticType::other("u8"));
        assert_eq!(
            <[f32; 3]>::semantic_type(),
            SemanticType::Array(Box::new(SemanticType::Float32))
        );
    }

    #[test]
    fn test_field_type_values() {
        assert_eq!(
            FieldType::field_value(&2.5f32).unwrap(),
            FieldValue::Float32(2.5)
        );
        assert_eq!(
            FieldType::field_value(&"hi".to_string()).unwrap(),
            FieldValue::String(Cow::Borrowed("hi"))
        );
        assert_eq!(
            FieldType::field_value(&None::<i32>).unwrap(),
            FieldValue::Null
        );
        assert_eq!(
            FieldType::field_value(&vec![1i32]),
            Err(Error::unsupported_type("Vec<i32>"))
        );
    }
}
