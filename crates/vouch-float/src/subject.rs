//! The float subject and its tolerance comparisons.

use vouch_core::{FailureStrategy, Subject, VouchError};

use crate::kind::FloatKind;
use crate::tolerance::Tolerance;

/// Propositions for `f32` and `f64` values.
#[derive(Debug)]
pub struct FloatSubject<'a, F> {
    subject: Subject<'a, F>,
}

impl<'a, F: FloatKind> FloatSubject<'a, F> {
    /// Creates a subject over a possibly absent value.
    pub fn new(strategy: &'a dyn FailureStrategy, actual: Option<F>) -> Self {
        Self {
            subject: Subject::new(strategy, actual),
        }
    }

    /// Creates a subject over a present value.
    pub fn of(strategy: &'a dyn FailureStrategy, actual: F) -> Self {
        Self::new(strategy, Some(actual))
    }

    /// Attaches the name used in failure messages.
    pub fn named(self, name: impl Into<String>) -> Self {
        Self {
            subject: self.subject.named(name),
        }
    }

    /// Returns the underlying base subject.
    pub fn subject(&self) -> &Subject<'a, F> {
        &self.subject
    }

    fn actual(&self) -> Option<F> {
        self.subject.actual().copied()
    }

    fn display(&self) -> String {
        self.subject.display_subject()
    }

    /// Prepares a check that the value is finite and within `tolerance` of an
    /// expected value.
    ///
    /// An invalid tolerance is a usage error and is returned before anything
    /// is compared.
    pub fn is_within(&self, tolerance: F) -> Result<TolerantComparison<'_, 'a, F>, VouchError> {
        Ok(TolerantComparison {
            subject: self,
            tolerance: Tolerance::new(tolerance)?,
            proximity: Proximity::Within,
        })
    }

    /// Prepares a check that the value is finite and farther than `tolerance`
    /// from an expected value.
    ///
    /// Non-finite operands fail both this and [`FloatSubject::is_within`].
    pub fn is_not_within(
        &self,
        tolerance: F,
    ) -> Result<TolerantComparison<'_, 'a, F>, VouchError> {
        Ok(TolerantComparison {
            subject: self,
            tolerance: Tolerance::new(tolerance)?,
            proximity: Proximity::NotWithin,
        })
    }

    /// Exact equality: NaN equals NaN, `0.0` differs from `-0.0`.
    pub fn is_equal_to(&self, expected: F) {
        if !self.actual().is_some_and(|actual| actual.exact_eq(&expected)) {
            self.subject.fail("is equal to", &expected);
        }
    }

    /// Negation of [`FloatSubject::is_equal_to`].
    pub fn is_not_equal_to(&self, expected: F) {
        if self.actual().is_some_and(|actual| actual.exact_eq(&expected)) {
            self.subject.fail("is not equal to", &expected);
        }
    }

    /// Fails unless the value is present and neither infinite nor NaN.
    pub fn is_finite(&self) {
        if !self.actual().is_some_and(F::is_finite) {
            self.subject
                .fail_with_raw_message(&format!("{} should have been finite", self.display()));
        }
    }

    /// Fails unless the value is present and not NaN; infinities pass.
    pub fn is_not_nan(&self) {
        if !self.actual().is_some_and(|actual| !actual.is_nan()) {
            self.subject.fail_with_raw_message(&format!(
                "{} should not have been NaN",
                self.display()
            ));
        }
    }

    /// Fails unless the value is NaN.
    pub fn is_nan(&self) {
        if !self.actual().is_some_and(F::is_nan) {
            self.subject.fail("is equal to", &F::NAN);
        }
    }

    /// Fails unless the value is positive infinity.
    pub fn is_positive_infinity(&self) {
        if self.actual() != Some(F::INFINITY) {
            self.subject.fail("is equal to", &F::INFINITY);
        }
    }

    /// Fails unless the value is negative infinity.
    pub fn is_negative_infinity(&self) {
        if self.actual() != Some(F::NEG_INFINITY) {
            self.subject.fail("is equal to", &F::NEG_INFINITY);
        }
    }

    /// Passes for `0.0` and `-0.0`.
    pub fn is_zero(&self) {
        if self.actual() != Some(F::ZERO) {
            self.subject.fail_verb("is zero");
        }
    }

    /// Fails for either zero, NaN passes.
    pub fn is_non_zero(&self) {
        if self.actual().map_or(true, |actual| actual == F::ZERO) {
            self.subject.fail_verb("is non-zero");
        }
    }

    /// Fails unless the value is strictly greater than `other`.
    pub fn is_greater_than(&self, other: F) {
        self.check_order("is greater than", other, |actual| actual > other);
    }

    /// Fails unless the value is strictly less than `other`.
    pub fn is_less_than(&self, other: F) {
        self.check_order("is less than", other, |actual| actual < other);
    }

    /// Fails unless the value is greater than or equal to `other`.
    pub fn is_at_least(&self, other: F) {
        self.check_order("is at least", other, |actual| actual >= other);
    }

    /// Fails unless the value is less than or equal to `other`.
    pub fn is_at_most(&self, other: F) {
        self.check_order("is at most", other, |actual| actual <= other);
    }

    fn check_order(&self, verb: &str, other: F, holds: impl Fn(F) -> bool) {
        if !self.actual().is_some_and(holds) {
            self.subject.fail(verb, &other);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Proximity {
    Within,
    NotWithin,
}

/// A tolerance check awaiting its expected value.
#[must_use = "the comparison only runs once `of` is called"]
#[derive(Debug)]
pub struct TolerantComparison<'s, 'a, F> {
    subject: &'s FloatSubject<'a, F>,
    tolerance: Tolerance<F>,
    proximity: Proximity,
}

impl<F: FloatKind> TolerantComparison<'_, '_, F> {
    /// Runs the comparison against `expected`.
    pub fn of(self, expected: F) {
        let holds = self.subject.actual().is_some_and(|actual| match self.proximity {
            Proximity::Within => self.tolerance.admits(actual, expected),
            Proximity::NotWithin => self.tolerance.excludes(actual, expected),
        });
        if holds {
            return;
        }
        let relation = match self.proximity {
            Proximity::Within => "within",
            Proximity::NotWithin => "not within",
        };
        self.subject.subject.fail_with_raw_message(&format!(
            "{} and <{}> should have been finite values {} <{}> of each other",
            self.subject.display(),
            expected.render(),
            relation,
            self.tolerance.value().render()
        ));
    }
}
