//! Per-field value capability and field metadata.

use std::fmt;

/// A type that can be stored as one column of a [`Vector`](crate::Vector).
///
/// `field_eq` is the equality used by record proxies and container
/// comparison. It is exact unless overridden; `f32` and `f64` compare within
/// their machine epsilon so values that went through a few arithmetic passes
/// still compare equal.
///
/// User-defined field types opt in with an empty impl:
///
/// ```
/// use scattered::FieldValue;
///
/// #[derive(Debug, Clone, Default, PartialEq, PartialOrd)]
/// struct Color(u8, u8, u8);
///
/// impl FieldValue for Color {}
/// ```
pub trait FieldValue: Clone + Default + PartialEq + PartialOrd + fmt::Debug + 'static {
    /// Field-wise equality.
    fn field_eq(&self, other: &Self) -> bool {
        self == other
    }
}

macro_rules! exact_field_value {
    ($($ty:ty),+ $(,)?) => {
        $(impl FieldValue for $ty {})+
    };
}

exact_field_value!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, String,
);

impl FieldValue for f32 {
    fn field_eq(&self, other: &Self) -> bool {
        self == other || (self - other).abs() < f32::EPSILON
    }
}

impl FieldValue for f64 {
    fn field_eq(&self, other: &Self) -> bool {
        self == other || (self - other).abs() < f64::EPSILON
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn field_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.field_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Name and declared type of one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    /// Field name as declared on the record
    pub name: &'static str,
    /// Field type as written in the declaration (e.g. "f32")
    pub type_name: &'static str,
}

impl FieldInfo {
    /// Creates field metadata.
    pub const fn new(name: &'static str, type_name: &'static str) -> Self {
        Self { name, type_name }
    }
}
