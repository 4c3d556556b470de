//! The base subject shared by every specialized subject.

use std::any;
use std::error::Error;

use crate::render::{compress_type, Render};
use crate::strategy::FailureStrategy;
use crate::value::{is_same_object, view_as, Expected, KindView, SubjectValue};

/// A value under test together with its display name and failure strategy.
///
/// Subjects are built per assertion chain and discarded afterwards. The
/// strategy is borrowed, so one strategy can serve many chains.
pub struct Subject<'a, T> {
    actual: Option<T>,
    name: Option<String>,
    strategy: &'a dyn FailureStrategy,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Subject<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subject")
            .field("actual", &self.actual)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<'a, T> Subject<'a, T> {
    /// Creates a subject over a possibly absent value.
    pub fn new(strategy: &'a dyn FailureStrategy, actual: Option<T>) -> Self {
        Self {
            actual,
            name: None,
            strategy,
        }
    }

    /// Creates a subject over a present value.
    pub fn of(strategy: &'a dyn FailureStrategy, actual: T) -> Self {
        Self::new(strategy, Some(actual))
    }

    /// Attaches the name used in place of the value in failure messages.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if let Some(previous) = &self.name {
            tracing::warn!(target: "vouch", %previous, %name, "subject renamed");
        }
        self.name = Some(name);
        self
    }

    /// Returns the value under test, if present.
    pub fn actual(&self) -> Option<&T> {
        self.actual.as_ref()
    }

    /// Returns the attached display name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the strategy failures are routed to.
    pub fn strategy(&self) -> &'a dyn FailureStrategy {
        self.strategy
    }

    /// Reports a fully rendered message.
    pub fn fail_with_raw_message(&self, message: &str) {
        tracing::trace!(
            target: "vouch",
            subject = self.name.as_deref().unwrap_or_default(),
            %message,
            "proposition failed"
        );
        self.strategy.fail(message, None);
    }

    /// Reports a fully rendered message with the error that caused it.
    pub fn fail_with_cause(&self, message: &str, cause: &(dyn Error + 'static)) {
        tracing::trace!(
            target: "vouch",
            subject = self.name.as_deref().unwrap_or_default(),
            %message,
            %cause,
            "proposition failed"
        );
        self.strategy.fail(message, Some(cause));
    }
}

impl<'a, T: Render> Subject<'a, T> {
    /// Renders `<value>`, or `name (<value>)` once named.
    pub fn display_subject(&self) -> String {
        let rendered = self.actual.render();
        match &self.name {
            Some(name) => format!("{name} (<{rendered}>)"),
            None => format!("<{rendered}>"),
        }
    }

    /// Reports `Not true that <display> <verb> <<other>>`.
    pub fn fail(&self, verb: &str, other: &dyn Render) {
        self.fail_with_raw_message(&format!(
            "Not true that {} {} <{}>",
            self.display_subject(),
            verb,
            other.render()
        ));
    }

    /// Reports `Not true that <display> <verb>`.
    pub fn fail_verb(&self, verb: &str) {
        self.fail_with_raw_message(&format!(
            "Not true that {} {}",
            self.display_subject(),
            verb
        ));
    }

    /// Fails unless the value is absent.
    pub fn is_null(&self) {
        if self.actual.is_some() {
            self.fail_verb("is null");
        }
    }

    /// Fails if the value is absent.
    pub fn is_not_null(&self) {
        if self.actual.is_none() {
            self.fail_with_raw_message("Not true that the subject is not null");
        }
    }
}

impl<'a, T: SubjectValue> Subject<'a, T> {
    /// Fails unless `expected` is the same kind as the value and exactly equal.
    ///
    /// An expectation of another type fails with an incompatible-types message
    /// rather than a plain inequality.
    pub fn is_equal_to(&self, expected: &dyn Expected) {
        if let Some(actual) = &self.actual {
            if is_same_object(actual, expected) {
                return;
            }
        }
        match view_as::<T>(expected) {
            KindView::SameKind(expected) => {
                let equal = self
                    .actual
                    .as_ref()
                    .is_some_and(|actual| actual.exact_eq(expected));
                if !equal {
                    self.fail("is equal to", expected);
                }
            }
            KindView::Incompatible { type_label } => self.fail_with_bad_type(&type_label),
        }
    }

    /// Fails if `expected` is the same kind as the value and exactly equal.
    ///
    /// An expectation of another type is never equal, so it passes.
    pub fn is_not_equal_to(&self, expected: &dyn Expected) {
        let Some(actual) = &self.actual else {
            return;
        };
        let equal = is_same_object(actual, expected)
            || view_as::<T>(expected)
                .same_kind()
                .is_some_and(|expected| actual.exact_eq(expected));
        if equal {
            self.fail("is not equal to", actual);
        }
    }

    /// Reports an expectation whose type cannot be compared with the value.
    pub fn fail_with_bad_type(&self, expected_type: &str) {
        self.fail_with_raw_message(&format!(
            "Incompatible types compared. expected: {}, actual: {}",
            expected_type,
            compress_type(any::type_name::<T>())
        ));
    }
}
