//! Validated tolerances and the exact distance comparison behind them.

use std::cmp::Ordering;

use vouch_core::{ErrorInfo, Render, VouchError};

use crate::kind::FloatKind;

fn tolerance_error(code: &str, message: String, tolerance: impl Render) -> VouchError {
    tracing::debug!(target: "vouch", code, %message, "tolerance rejected");
    VouchError::Usage(
        ErrorInfo::new(code, message)
            .with_context("tolerance", tolerance.render())
            .with_hint("tolerances must be finite and non-negative"),
    )
}

/// A tolerance in `[0, +Infinity)`; never NaN and never `-0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance<F>(F);

impl<F: FloatKind> Tolerance<F> {
    /// Validates a raw tolerance.
    ///
    /// NaN is rejected first, then any value with the sign bit set, then
    /// positive infinity.
    pub fn new(value: F) -> Result<Self, VouchError> {
        if value.is_nan() {
            return Err(tolerance_error(
                "tolerance-nan",
                "tolerance cannot be NaN".to_string(),
                value,
            ));
        }
        if value.is_sign_negative() {
            return Err(tolerance_error(
                "tolerance-negative",
                format!("tolerance ({}) cannot be negative", value.render()),
                value,
            ));
        }
        if value == F::INFINITY {
            return Err(tolerance_error(
                "tolerance-infinite",
                "tolerance cannot be POSITIVE_INFINITY".to_string(),
                value,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the raw tolerance.
    pub fn value(self) -> F {
        self.0
    }

    /// Whether `actual` and `expected` are finite and at most the tolerance apart.
    pub fn admits(self, actual: F, expected: F) -> bool {
        both_finite(actual, expected) && compare_distance(actual, expected, self.0).is_le()
    }

    /// Whether `actual` and `expected` are finite and more than the tolerance apart.
    pub fn excludes(self, actual: F, expected: F) -> bool {
        both_finite(actual, expected) && compare_distance(actual, expected, self.0).is_gt()
    }
}

fn both_finite<F: FloatKind>(a: F, b: F) -> bool {
    a.is_finite() && b.is_finite()
}

/// Compares the exact distance `|a - b|` with `limit`.
///
/// `a`, `b`, and `limit` must be finite. The rounded difference is corrected
/// by its two-sum residual so neighbouring values never collapse onto the
/// limit, and a difference that overflows exceeds every finite limit.
pub fn compare_distance<F: FloatKind>(a: F, b: F, limit: F) -> Ordering {
    let c = -b;
    let sum = a + c;
    if !sum.is_finite() {
        return Ordering::Greater;
    }
    // Knuth two-sum: a + c == sum + residual exactly.
    let a_part = sum - c;
    let c_part = sum - a_part;
    let residual = (a - a_part) + (c - c_part);
    let residual = if residual.is_finite() { residual } else { F::ZERO };

    let magnitude = sum.abs();
    match magnitude.partial_cmp(&limit) {
        Some(Ordering::Equal) => {
            // |a - b| == magnitude + residual, with the residual oriented by sum's sign.
            let toward = if sum.is_sign_negative() { -residual } else { residual };
            toward.partial_cmp(&F::ZERO).unwrap_or(Ordering::Greater)
        }
        Some(order) => order,
        None => Ordering::Greater,
    }
}
