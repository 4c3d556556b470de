#![deny(missing_docs)]
//! Subjects for primitive arrays and the sequences they convert to.
//!
//! One generic [`ArraySubject`] covers every element kind; the kind supplies
//! its label and exact equality through [`ArrayElement`].

pub mod element;
pub mod list;
pub mod subject;

pub use element::{view_as_array, ArrayElement};
pub use list::{ListSubject, Ordered};
pub use subject::ArraySubject;

/// Subject over a `byte` (`i8`) array.
pub type ByteArraySubject<'a> = ArraySubject<'a, i8>;
/// Subject over a `short` (`i16`) array.
pub type ShortArraySubject<'a> = ArraySubject<'a, i16>;
/// Subject over an `int` (`i32`) array.
pub type IntArraySubject<'a> = ArraySubject<'a, i32>;
/// Subject over a `long` (`i64`) array.
pub type LongArraySubject<'a> = ArraySubject<'a, i64>;
/// Subject over a `float` (`f32`) array.
pub type FloatArraySubject<'a> = ArraySubject<'a, f32>;
/// Subject over a `double` (`f64`) array.
pub type DoubleArraySubject<'a> = ArraySubject<'a, f64>;
/// Subject over a `boolean` array.
pub type BooleanArraySubject<'a> = ArraySubject<'a, bool>;
/// Subject over a `char` array.
pub type CharArraySubject<'a> = ArraySubject<'a, char>;
