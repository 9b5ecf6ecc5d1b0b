//! Record descriptors.
//!
//! A [`Record`] describes the shape of one row: the ordered tuple of its
//! field types and the conversions between the struct and that tuple. Each
//! field is named by a zero-sized [`FieldTag`] type, which is how the
//! container and its cursors and proxies address a single column.
//!
//! Both traits are normally implemented by the [`record!`](crate::record!)
//! macro.

use crate::field::{FieldInfo, FieldValue};
use crate::field_list::FieldList;

/// Field tuple of `R` (the container's value representation).
pub type Fields<R> = <R as Record>::Fields;
/// One `Vec` per field of `R`.
pub type Columns<R> = <<R as Record>::Fields as FieldList>::Columns;
/// One shared reference per field of `R`.
pub type Refs<'a, R> = <<R as Record>::Fields as FieldList>::Refs<'a>;
/// One exclusive reference per field of `R`.
pub type Muts<'a, R> = <<R as Record>::Fields as FieldList>::Muts<'a>;

/// Shape of a record stored column by column.
///
/// # Contract
/// - `Fields` lists the field types in declaration order.
/// - `FIELDS[i]` describes the field at tuple position `i`.
/// - `from_fields(into_fields(r))` rebuilds `r`.
pub trait Record: Sized + 'static {
    /// Ordered tuple of field types.
    type Fields: FieldList;

    /// Record type name.
    const NAME: &'static str;
    /// Field metadata in declaration order.
    const FIELDS: &'static [FieldInfo];

    /// Splits the record into its field tuple.
    fn into_fields(self) -> Self::Fields;

    /// Rebuilds a record from its field tuple.
    fn from_fields(fields: Self::Fields) -> Self;
}

/// Zero-sized name of one field of a [`Record`].
///
/// The projections pick this field out of each per-field aggregate the
/// container works with.
pub trait FieldTag: Sized + 'static {
    /// Record the field belongs to.
    type Record: Record;
    /// Field value type.
    type Value: FieldValue;

    /// Field name.
    const NAME: &'static str;
    /// Position of the field in declaration order.
    const INDEX: usize;

    fn column(columns: &Columns<Self::Record>) -> &Vec<Self::Value>;
    fn column_mut(columns: &mut Columns<Self::Record>) -> &mut Vec<Self::Value>;
    fn slot<'a>(refs: Refs<'a, Self::Record>) -> &'a Self::Value;
    fn slot_mut<'a>(muts: Muts<'a, Self::Record>) -> &'a mut Self::Value;
    fn value(fields: &Fields<Self::Record>) -> &Self::Value;
    fn value_mut(fields: &mut Fields<Self::Record>) -> &mut Self::Value;
    fn of(record: &Self::Record) -> &Self::Value;
    fn of_mut(record: &mut Self::Record) -> &mut Self::Value;
}

/// Uniform field lookup, implemented for vectors (the whole column), column
/// cursors, record proxies and record values.
pub trait FieldAccess<T: FieldTag> {
    type Output;

    fn field(self) -> Self::Output;
}

/// Looks up the field named by `T` in `x`.
///
/// ```
/// use scattered::{get, record, Vector};
///
/// record! {
///     #[derive(Debug, Clone, Default, PartialEq)]
///     pub struct Point in point {
///         pub x: f32 as X,
///         pub y: f32 as Y,
///     }
/// }
///
/// let mut points = Vector::<Point>::with_len(2);
/// *get::<point::Y, _>(&mut points.row_mut(1)) = 4.0;
/// assert_eq!(get::<point::Y, _>(&points), &[0.0, 4.0]);
/// assert_eq!(*get::<point::Y, _>(points.row(1)), 4.0);
///
/// let p = Point { x: 1.0, y: 2.0 };
/// assert_eq!(*get::<point::X, _>(&p), 1.0);
/// ```
pub fn get<T: FieldTag, X: FieldAccess<T>>(x: X) -> X::Output {
    x.field()
}

/// Declares a record struct and implements [`Record`] for it.
///
/// `struct Name in tags { field: Type as Tag, ... }` also declares a module
/// `tags` with one zero-sized [`FieldTag`] per field. Records have 1 to 12
/// fields, and every field type must implement
/// [`FieldValue`](crate::FieldValue).
///
/// ```
/// scattered::record! {
///     #[derive(Debug, Clone, Copy, Default, PartialEq)]
///     pub struct Particle in particle {
///         pub x: f32 as X,
///         pub y: f64 as Y,
///         pub i: i32 as I,
///         pub b: bool as B,
///     }
/// }
///
/// use scattered::{FieldTag, Record};
///
/// assert_eq!(Particle::FIELDS[2].name, "i");
/// assert_eq!(<particle::Y as FieldTag>::INDEX, 1);
/// ```
#[macro_export]
macro_rules! record {
    (@tags $name:ident, $tags:ident, [$($unused:tt)*]) => {};
    (
        @tags $name:ident, $tags:ident, [$idx:tt $($rest_idx:tt)*]
        $field:ident : $ty:ty as $tag:ident $(, $($rest:tt)*)?
    ) => {
        impl $crate::FieldTag for $tags::$tag {
            type Record = $name;
            type Value = $ty;

            const NAME: &'static str = stringify!($field);
            const INDEX: usize = $idx;

            #[inline]
            fn column(columns: &$crate::Columns<$name>) -> &Vec<$ty> {
                &columns.$idx
            }

            #[inline]
            fn column_mut(columns: &mut $crate::Columns<$name>) -> &mut Vec<$ty> {
                &mut columns.$idx
            }

            #[inline]
            fn slot<'a>(refs: $crate::Refs<'a, $name>) -> &'a $ty {
                refs.$idx
            }

            #[inline]
            fn slot_mut<'a>(muts: $crate::Muts<'a, $name>) -> &'a mut $ty {
                muts.$idx
            }

            #[inline]
            fn value(fields: &$crate::Fields<$name>) -> &$ty {
                &fields.$idx
            }

            #[inline]
            fn value_mut(fields: &mut $crate::Fields<$name>) -> &mut $ty {
                &mut fields.$idx
            }

            #[inline]
            fn of(record: &$name) -> &$ty {
                &record.$field
            }

            #[inline]
            fn of_mut(record: &mut $name) -> &mut $ty {
                &mut record.$field
            }
        }

        impl<'b> $crate::FieldAccess<$tags::$tag> for &'b $name {
            type Output = &'b $ty;

            fn field(self) -> Self::Output {
                &self.$field
            }
        }

        impl<'b> $crate::FieldAccess<$tags::$tag> for &'b mut $name {
            type Output = &'b mut $ty;

            fn field(self) -> Self::Output {
                &mut self.$field
            }
        }

        $crate::record!(@tags $name, $tags, [$($rest_idx)*] $($($rest)*)?);
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident in $tags:ident {
            $($(#[$field_meta:meta])* $field_vis:vis $field:ident : $ty:ty as $tag:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $($(#[$field_meta])* $field_vis $field: $ty,)+
        }

        #[doc = concat!("Field tags of [`", stringify!($name), "`].")]
        $vis mod $tags {
            $(
                #[doc = concat!("Tag of `", stringify!($field), "`.")]
                #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
                pub struct $tag;
            )+
        }

        impl $crate::Record for $name {
            type Fields = ($($ty,)+);

            const NAME: &'static str = stringify!($name);
            const FIELDS: &'static [$crate::FieldInfo] =
                &[$($crate::FieldInfo::new(stringify!($field), stringify!($ty))),+];

            fn into_fields(self) -> Self::Fields {
                ($(self.$field,)+)
            }

            fn from_fields(fields: Self::Fields) -> Self {
                let ($($field,)+) = fields;
                Self { $($field),+ }
            }
        }

        $crate::record!(
            @tags $name, $tags, [0 1 2 3 4 5 6 7 8 9 10 11]
            $($field : $ty as $tag),+
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntest::timeout;

    crate::record! {
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct Sample in sample {
            id: u64 as Id,
            label: String as Label,
            weight: Option<f32> as Weight,
        }
    }

    #[timeout(1000)]
    #[test]
    fn test_descriptor_metadata() {
        assert_eq!(Sample::NAME, "Sample");
        let names: Vec<_> = Sample::FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["id", "label", "weight"]);
        assert_eq!(Sample::FIELDS[0].type_name, "u64");
        assert_eq!(<sample::Label as FieldTag>::INDEX, 1);
        assert_eq!(<sample::Weight as FieldTag>::NAME, "weight");
    }

    #[timeout(1000)]
    #[test]
    fn test_record_field_round_trip() {
        let record = Sample {
            id: 7,
            label: "seven".to_string(),
            weight: Some(0.5),
        };
        let fields = record.clone().into_fields();
        assert_eq!(fields, (7, "seven".to_string(), Some(0.5)));
        assert_eq!(Sample::from_fields(fields), record);
    }

    #[timeout(1000)]
    #[test]
    fn test_get_on_record_values() {
        let mut record = Sample::default();
        *get::<sample::Id, _>(&mut record) = 9;
        get::<sample::Label, _>(&mut record).push_str("nine");
        assert_eq!(*get::<sample::Id, _>(&record), 9);
        assert_eq!(get::<sample::Label, _>(&record), "nine");

        let mut fields = record.into_fields();
        *sample::Weight::value_mut(&mut fields) = Some(1.0);
        assert_eq!(sample::Weight::value(&fields), &Some(1.0));
        assert_eq!(sample::Id::value(&fields), &9);
    }
}
