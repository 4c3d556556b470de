//! Element kinds and the array view over expectations.

use std::any::Any;

use vouch_core::{Expected, KindView, SubjectValue};

/// A primitive element kind an [`ArraySubject`](crate::ArraySubject) can hold.
///
/// Equality is the kind's [`ExactEq`](vouch_core::ExactEq): bit patterns for
/// floats, values for everything else.
pub trait ArrayElement: SubjectValue + Copy {
    /// Element kind label used in diagnostics.
    const KIND: &'static str;
}

macro_rules! array_element {
    ($($ty:ty => $kind:literal),* $(,)?) => {
        $(
            impl ArrayElement for $ty {
                const KIND: &'static str = $kind;
            }
        )*
    };
}

array_element!(
    i8 => "byte",
    u8 => "unsigned byte",
    i16 => "short",
    i32 => "int",
    i64 => "long",
    f32 => "float",
    f64 => "double",
    bool => "boolean",
    char => "char",
);

/// Views `expected` as an array of `E`.
///
/// `Vec<E>`, `Box<[E]>`, `&'static [E]`, and `[E; N]` up to `N = 32` are
/// recognized; anything else is incompatible.
pub fn view_as_array<E: ArrayElement>(expected: &dyn Expected) -> KindView<'_, [E]> {
    let any = expected.as_any();
    let viewed = any
        .downcast_ref::<Vec<E>>()
        .map(Vec::as_slice)
        .or_else(|| any.downcast_ref::<Box<[E]>>().map(|boxed| &**boxed))
        .or_else(|| any.downcast_ref::<&'static [E]>().copied())
        .or_else(|| view_fixed::<E>(any));
    match viewed {
        Some(slice) => KindView::SameKind(slice),
        None => KindView::Incompatible {
            type_label: expected.type_label(),
        },
    }
}

fn view_fixed<E: Any>(any: &dyn Any) -> Option<&[E]> {
    macro_rules! try_lengths {
        ($($len:literal)*) => {
            $(
                if let Some(array) = any.downcast_ref::<[E; $len]>() {
                    return Some(array.as_slice());
                }
            )*
        };
    }
    try_lengths!(0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32);
    None
}
