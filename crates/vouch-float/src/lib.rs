#![deny(missing_docs)]
//! Floating-point subjects with exact tolerance comparison.
//!
//! Tolerance checks are defined only over finite values: a NaN or infinite
//! operand fails both [`FloatSubject::is_within`] and
//! [`FloatSubject::is_not_within`], whatever the tolerance.

pub mod kind;
pub mod subject;
pub mod tolerance;

pub use kind::FloatKind;
pub use subject::{FloatSubject, TolerantComparison};
pub use tolerance::{compare_distance, Tolerance};

/// Subject over an `f32`.
pub type F32Subject<'a> = FloatSubject<'a, f32>;
/// Subject over an `f64`.
pub type F64Subject<'a> = FloatSubject<'a, f64>;
