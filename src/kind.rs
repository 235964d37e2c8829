//! Value kinds and their classification for message dispatch.
//!
//! The validation engine reports the runtime kind of the failing field as a
//! [`ValueKind`]. Formatters never inspect it directly: they work on the
//! [`Classification`] computed once per field error.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};

/// Runtime kind of a validated value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum ValueKind {
    /// Unknown or absent value (e.g. JSON `null`).
    Invalid,
    Bool,
    Int,
    Uint,
    Float,
    String,
    Slice,
    Array,
    Map,
    /// A struct. `temporal` marks date/time values.
    Struct { temporal: bool },
    /// A pointer-like wrapper (`Option<T>`, `Box<T>`) around another kind.
    Pointer(Box<ValueKind>),
}

/// Formatter-facing classification of a [`ValueKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Strings: counted in characters.
    Text,
    /// Slices, arrays and maps: counted in items.
    Collection,
    /// Date/time structs.
    Temporal,
    /// Everything else is compared as a number.
    Numeric,
    /// Structs that are not date/time values.
    Unsupported,
}

impl ValueKind {
    /// Kind of a date/time struct.
    pub fn temporal() -> Self {
        ValueKind::Struct { temporal: true }
    }

    /// Kind of any non date/time struct.
    pub fn opaque_struct() -> Self {
        ValueKind::Struct { temporal: false }
    }

    /// Wrap a kind in a pointer.
    pub fn pointer_to(inner: ValueKind) -> Self {
        ValueKind::Pointer(Box::new(inner))
    }

    /// Follow pointers down to the pointee kind.
    pub fn resolve(&self) -> &ValueKind {
        let mut kind = self;
        while let ValueKind::Pointer(inner) = kind {
            kind = inner;
        }
        kind
    }

    /// Classify the (resolved) kind.
    ///
    /// ```
    /// use vld_i18n::kind::{Classification, ValueKind};
    ///
    /// let kind = ValueKind::pointer_to(ValueKind::String);
    /// assert_eq!(kind.classify(), Classification::Text);
    /// assert_eq!(ValueKind::opaque_struct().classify(), Classification::Unsupported);
    /// ```
    pub fn classify(&self) -> Classification {
        match self.resolve() {
            ValueKind::String => Classification::Text,
            ValueKind::Slice | ValueKind::Array | ValueKind::Map => Classification::Collection,
            ValueKind::Struct { temporal: true } => Classification::Temporal,
            ValueKind::Struct { temporal: false } => Classification::Unsupported,
            _ => Classification::Numeric,
        }
    }

    /// Kind of a JSON value.
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => ValueKind::Invalid,
            serde_json::Value::Bool(_) => ValueKind::Bool,
            serde_json::Value::Number(n) if n.is_u64() => ValueKind::Uint,
            serde_json::Value::Number(n) if n.is_i64() => ValueKind::Int,
            serde_json::Value::Number(_) => ValueKind::Float,
            serde_json::Value::String(_) => ValueKind::String,
            serde_json::Value::Array(_) => ValueKind::Slice,
            serde_json::Value::Object(_) => ValueKind::Map,
        }
    }
}

/// Types with a statically known [`ValueKind`].
///
/// Implemented for the std types a validated struct usually holds. Implement
/// it for your own structs with [`ValueKind::opaque_struct`], or with
/// [`ValueKind::temporal`] for date/time wrappers.
pub trait Kinded {
    fn value_kind() -> ValueKind;
}

macro_rules! impl_kinded {
    ($kind:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl Kinded for $ty {
                fn value_kind() -> ValueKind {
                    $kind
                }
            }
        )+
    };
}

impl_kinded!(ValueKind::String => String, str, std::borrow::Cow<'_, str>);
impl_kinded!(ValueKind::Bool => bool);
impl_kinded!(ValueKind::Int => i8, i16, i32, i64, i128, isize, char);
impl_kinded!(ValueKind::Uint => u8, u16, u32, u64, u128, usize);
impl_kinded!(ValueKind::Float => f32, f64);
impl_kinded!(ValueKind::temporal() => std::time::SystemTime);

impl<T> Kinded for Vec<T> {
    fn value_kind() -> ValueKind {
        ValueKind::Slice
    }
}

impl<T> Kinded for [T] {
    fn value_kind() -> ValueKind {
        ValueKind::Slice
    }
}

impl<T> Kinded for VecDeque<T> {
    fn value_kind() -> ValueKind {
        ValueKind::Slice
    }
}

impl<T> Kinded for LinkedList<T> {
    fn value_kind() -> ValueKind {
        ValueKind::Slice
    }
}

impl<T, const N: usize> Kinded for [T; N] {
    fn value_kind() -> ValueKind {
        ValueKind::Array
    }
}

impl<K, V, S> Kinded for HashMap<K, V, S> {
    fn value_kind() -> ValueKind {
        ValueKind::Map
    }
}

impl<K, V> Kinded for BTreeMap<K, V> {
    fn value_kind() -> ValueKind {
        ValueKind::Map
    }
}

// Sets have no dedicated kind; they count items like maps.
impl<T, S> Kinded for HashSet<T, S> {
    fn value_kind() -> ValueKind {
        ValueKind::Map
    }
}

impl<T> Kinded for BTreeSet<T> {
    fn value_kind() -> ValueKind {
        ValueKind::Map
    }
}

impl<T: Kinded + ?Sized> Kinded for &T {
    fn value_kind() -> ValueKind {
        T::value_kind()
    }
}

impl<T: Kinded> Kinded for Option<T> {
    fn value_kind() -> ValueKind {
        ValueKind::pointer_to(T::value_kind())
    }
}

impl<T: Kinded + ?Sized> Kinded for Box<T> {
    fn value_kind() -> ValueKind {
        ValueKind::pointer_to(T::value_kind())
    }
}

#[cfg(feature = "chrono")]
mod chrono_kinds {
    use super::{Kinded, ValueKind};

    impl_kinded!(ValueKind::temporal() =>
        chrono::NaiveDate,
        chrono::NaiveTime,
        chrono::NaiveDateTime,
    );

    impl<Tz: chrono::TimeZone> Kinded for chrono::DateTime<Tz> {
        fn value_kind() -> ValueKind {
            ValueKind::temporal()
        }
    }
}
