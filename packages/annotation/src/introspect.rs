//! Field Introspection
//!
//! Destinations describe their writable fields explicitly: an ordered list of
//! named descriptors, each able to convert an `AnnotationValue` into the field
//! type and store it.

use std::fmt;

use crate::error::Result;
use crate::value::AnnotationValue;

/// Writes a value into one field of `D`
pub type FieldWriter<D> = fn(&mut D, AnnotationValue) -> Result<()>;

/// A named, writable field of a destination
pub struct FieldDescriptor<D> {
    name: &'static str,
    write: FieldWriter<D>,
}

impl<D> FieldDescriptor<D> {
    pub const fn new(name: &'static str, write: FieldWriter<D>) -> Self {
        FieldDescriptor { name, write }
    }

    /// Name the field is matched under
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn write(&self, target: &mut D, value: AnnotationValue) -> Result<()> {
        (self.write)(target, value)
    }
}

impl<D> Clone for FieldDescriptor<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for FieldDescriptor<D> {}

impl<D> fmt::Debug for FieldDescriptor<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Exposes the writable fields of a destination, in declaration order
pub trait Introspect: Sized {
    fn fields(&self) -> Vec<FieldDescriptor<Self>>;
}

/// Build the field descriptors of a struct
///
/// Every listed field must implement `FromAnnotationValue`. Fields are matched
/// under their Rust identifier unless an external name is given with `as`:
///
/// ```ignore
/// impl Introspect for Case {
///     fn fields(&self) -> Vec<FieldDescriptor<Self>> {
///         annotation_fields!(Self { a_camel_case_value as "aCamelCaseValue", other })
///     }
/// }
/// ```
#[macro_export]
macro_rules! annotation_fields {
    (@name $field:ident $name:literal) => {
        $name
    };
    (@name $field:ident) => {
        stringify!($field)
    };
    ($target:ty { $($field:ident $(as $name:literal)?),* $(,)? }) => {
        vec![$(
            $crate::FieldDescriptor::new(
                $crate::annotation_fields!(@name $field $($name)?),
                |target: &mut $target, value: $crate::AnnotationValue|
                    -> ::core::result::Result<(), $crate::AnnotationError> {
                    target.$field = $crate::FromAnnotationValue::from_annotation_value(value)?;
                    Ok(())
                },
            )
        ),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Limits {
        min: i64,
        max: Option<i64>,
    }

    impl Introspect for Limits {
        fn fields(&self) -> Vec<FieldDescriptor<Self>> {
            annotation_fields!(Self { min, max as "maximum" })
        }
    }

    #[test]
    fn test_descriptors_write_fields() {
        let mut limits = Limits::default();
        let fields = limits.fields();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name(), "min");
        assert_eq!(fields[1].name(), "maximum");

        fields[0].write(&mut limits, 3i64.into()).unwrap();
        fields[1].write(&mut limits, 9i64.into()).unwrap();
        assert_eq!(limits.min, 3);
        assert_eq!(limits.max, Some(9));

        assert!(fields[0].write(&mut limits, "x".into()).is_err());
        assert_eq!(limits.min, 3);
    }
}
