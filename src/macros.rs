/// Declares a struct and implements [`Record`](crate::Record) for it.
///
/// Each field may carry `#[cson(...)]` options:
///
/// - `rename = "name"`: write `name` into the document instead of the field
///   identifier
/// - `skip`: leave the field out of the schema and the data
///
/// Every field type must implement [`FieldType`](crate::FieldType). Types
/// without a CSON tag (such as `Vec<T>` or `Option<T>`) are accepted by the
/// macro and rejected with `UnsupportedType` when the schema is built, unless
/// the field is skipped.
///
/// # Examples
///
/// ```rust
/// use cson::{cson_record, to_string};
///
/// cson_record! {
///     #[derive(Debug, Clone)]
///     pub struct Student {
///         /// Shown as `fullName` in the document.
///         #[cson(rename = "fullName")]
///         pub name: String,
///         pub age: i32,
///         #[cson(skip)]
///         pub grades: Vec<i32>,
///     }
/// }
///
/// let student = Student { name: "Ada".into(), age: 36, grades: vec![90] };
/// assert_eq!(
///     to_string(&student).unwrap(),
///     "🍽Student🥣age🧂int32🥣fullName🧂string🔥🍲Student🌶️36🌶️Ada"
/// );
/// ```
#[macro_export]
macro_rules! cson_record {
    (
        $(#[$sattr:meta])*
        $svis:vis struct $name:ident {
            $(
                $(#[doc = $doc:literal])*
                $(#[cson($($key:ident $(= $val:literal)?),* $(,)?)])*
                $fvis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$sattr])*
        $svis struct $name {
            $(
                $(#[doc = $doc])*
                $fvis $field: $ty,
            )*
        }

        impl $crate::Record for $name {
            fn type_name(&self) -> &str {
                stringify!($name)
            }

            fn fields(&self) -> ::std::vec::Vec<$crate::FieldMeta> {
                ::std::vec![
                    $({
                        #[allow(unused_mut)]
                        let mut meta = $crate::FieldMeta::of::<$ty>(stringify!($field));
                        $($(
                            meta = $crate::__cson_field_option!(meta, $key $(= $val)?);
                        )*)*
                        meta
                    }),*
                ]
            }

            fn field_value(
                &self,
                field: &str,
            ) -> $crate::Result<$crate::FieldValue<'_>> {
                match field {
                    $(stringify!($field) => $crate::FieldType::field_value(&self.$field),)*
                    _ => ::std::result::Result::Err($crate::Error::field_access(
                        field,
                        concat!("no such field on ", stringify!($name)),
                    )),
                }
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __cson_field_option {
    ($meta:ident, rename = $name:literal) => {
        $meta.rename($name)
    };
    ($meta:ident, skip) => {
        $meta.ignore()
    };
    ($meta:ident, $other:ident $(= $val:literal)?) => {
        compile_error!(concat!("unknown cson option `", stringify!($other), "`"))
    };
}
