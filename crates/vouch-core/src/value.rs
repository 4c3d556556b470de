//! Kind-specific equality and expectation views.

use std::any::{self, Any};

use crate::render::{compress_type, Render};

/// Exact equality as defined by a value's kind.
///
/// Floats compare by bit pattern with every NaN equal to every other NaN, so
/// `0.0` and `-0.0` are distinct. Other kinds use their natural equality.
pub trait ExactEq {
    /// Returns whether `self` and `other` are exactly equal.
    fn exact_eq(&self, other: &Self) -> bool;
}

macro_rules! exact_eq_by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ExactEq for $ty {
                fn exact_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

exact_eq_by_value!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, String, &str
);

macro_rules! exact_eq_by_bits {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ExactEq for $ty {
                fn exact_eq(&self, other: &Self) -> bool {
                    (self.is_nan() && other.is_nan()) || self.to_bits() == other.to_bits()
                }
            }
        )*
    };
}

exact_eq_by_bits!(f32, f64);

impl<T: ExactEq> ExactEq for [T] {
    fn exact_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.exact_eq(b))
    }
}

impl<T: ExactEq> ExactEq for Vec<T> {
    fn exact_eq(&self, other: &Self) -> bool {
        self.as_slice().exact_eq(other.as_slice())
    }
}

impl<T: ExactEq> ExactEq for Option<T> {
    fn exact_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.exact_eq(b),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Values a subject can hold: renderable, exactly comparable, and downcastable.
pub trait SubjectValue: Render + ExactEq + Any {}

impl<T: Render + ExactEq + Any> SubjectValue for T {}

/// An expectation argument of arbitrary type.
///
/// Implemented for every `'static` type so any value can be handed to an
/// equality proposition; the subject then decides whether it is comparable.
pub trait Expected: Any {
    /// Returns the value as [`Any`] for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Returns the short type name used in bad-type messages.
    fn type_label(&self) -> String;
}

impl<T: Any> Expected for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_label(&self) -> String {
        compress_type(any::type_name::<T>())
    }
}

/// Outcome of viewing an expectation as the subject's own kind.
#[derive(Debug)]
pub enum KindView<'e, T: ?Sized> {
    /// The expectation is of the subject's kind.
    SameKind(&'e T),
    /// The expectation is of some other kind.
    Incompatible {
        /// Short type name of the expectation.
        type_label: String,
    },
}

impl<'e, T: ?Sized> KindView<'e, T> {
    /// Returns the viewed value, if compatible.
    pub fn same_kind(&self) -> Option<&'e T> {
        match self {
            KindView::SameKind(value) => Some(value),
            KindView::Incompatible { .. } => None,
        }
    }
}

/// Attempts to view `expected` as a `T`.
pub fn view_as<T: Any>(expected: &dyn Expected) -> KindView<'_, T> {
    match expected.as_any().downcast_ref::<T>() {
        Some(value) => KindView::SameKind(value),
        None => KindView::Incompatible {
            type_label: expected.type_label(),
        },
    }
}

/// Returns whether `actual` and `expected` are the same object in memory.
pub fn is_same_object<T: Any>(actual: &T, expected: &dyn Expected) -> bool {
    std::ptr::eq(
        actual as *const T as *const (),
        expected.as_any() as *const dyn Any as *const (),
    )
}
