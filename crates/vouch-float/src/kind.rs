//! The float kinds a subject can hold.

use std::ops::{Add, Neg, Sub};

use vouch_core::SubjectValue;

/// A floating-point kind a [`FloatSubject`](crate::FloatSubject) can hold.
pub trait FloatKind:
    SubjectValue
    + Copy
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
{
    /// Positive zero.
    const ZERO: Self;
    /// Positive infinity.
    const INFINITY: Self;
    /// Negative infinity.
    const NEG_INFINITY: Self;
    /// Canonical NaN.
    const NAN: Self;
    /// Kind label used in diagnostics.
    const LABEL: &'static str;

    /// Neither infinite nor NaN.
    fn is_finite(self) -> bool;
    /// NaN of any payload.
    fn is_nan(self) -> bool;
    /// Sign bit set, including `-0.0`.
    fn is_sign_negative(self) -> bool;
    /// Absolute value.
    fn abs(self) -> Self;
}

macro_rules! float_kind {
    ($ty:ident, $label:literal) => {
        impl FloatKind for $ty {
            const ZERO: Self = 0.0;
            const INFINITY: Self = $ty::INFINITY;
            const NEG_INFINITY: Self = $ty::NEG_INFINITY;
            const NAN: Self = $ty::NAN;
            const LABEL: &'static str = $label;

            fn is_finite(self) -> bool {
                $ty::is_finite(self)
            }

            fn is_nan(self) -> bool {
                $ty::is_nan(self)
            }

            fn is_sign_negative(self) -> bool {
                $ty::is_sign_negative(self)
            }

            fn abs(self) -> Self {
                $ty::abs(self)
            }
        }
    };
}

float_kind!(f32, "float");
float_kind!(f64, "double");
