//! The primitive array subject.

use vouch_core::{ExactEq, Expected, FailureStrategy, KindView, Render, Subject};

use crate::element::{view_as_array, ArrayElement};
use crate::list::ListSubject;

/// Propositions for arrays of a primitive element kind.
#[derive(Debug)]
pub struct ArraySubject<'a, E> {
    subject: Subject<'a, &'a [E]>,
}

impl<'a, E: ArrayElement> ArraySubject<'a, E> {
    /// Creates a subject over a possibly absent array.
    pub fn new(strategy: &'a dyn FailureStrategy, actual: Option<&'a [E]>) -> Self {
        Self {
            subject: Subject::new(strategy, actual),
        }
    }

    /// Creates a subject over a present array.
    pub fn of(strategy: &'a dyn FailureStrategy, actual: &'a [E]) -> Self {
        Self::new(strategy, Some(actual))
    }

    /// Attaches the name used in failure messages.
    pub fn named(self, name: impl Into<String>) -> Self {
        Self {
            subject: self.subject.named(name),
        }
    }

    fn actual(&self) -> Option<&'a [E]> {
        self.subject.actual().copied()
    }

    /// Element kind label, for diagnostics only.
    pub fn underlying_type(&self) -> &'static str {
        E::KIND
    }

    /// The elements in order, or `None` for an absent array.
    pub fn list_representation(&self) -> Option<Vec<E>> {
        self.actual().map(<[E]>::to_vec)
    }

    /// `(short[]) [1, 2]`, or `name (<[1, 2]>)` once named.
    pub fn display_subject(&self) -> String {
        let rendered = self.actual().render();
        match self.subject.name() {
            Some(name) => format!("{name} (<{rendered}>)"),
            None => format!("({}[]) {}", E::KIND, rendered),
        }
    }

    /// Fails unless `expected` is an array of the same kind with exactly
    /// equal elements in the same positions.
    ///
    /// An expectation of another type fails with an incompatible-types message.
    pub fn is_equal_to(&self, expected: &dyn Expected) {
        match view_as_array::<E>(expected) {
            KindView::SameKind(expected) => {
                let equal = self.actual().is_some_and(|actual| {
                    is_same_array(actual, expected) || actual.exact_eq(expected)
                });
                if !equal {
                    self.subject.fail_with_raw_message(&format!(
                        "Not true that {} is equal to <{}>",
                        self.display_subject(),
                        expected.render()
                    ));
                }
            }
            KindView::Incompatible { type_label } => {
                self.subject.fail_with_raw_message(&format!(
                    "Incompatible types compared. expected: {}, actual: {}[]",
                    type_label,
                    E::KIND
                ));
            }
        }
    }

    /// Fails if `expected` is an array of the same kind with exactly equal
    /// elements.
    ///
    /// An expectation of another type is never equal, so it passes.
    pub fn is_not_equal_to(&self, expected: &dyn Expected) {
        let expected = match view_as_array::<E>(expected) {
            KindView::SameKind(expected) => expected,
            KindView::Incompatible { type_label } => {
                tracing::trace!(
                    target: "vouch",
                    kind = E::KIND,
                    expected = %type_label,
                    "incompatible expectation is not equal"
                );
                return;
            }
        };
        let equal = self
            .actual()
            .is_some_and(|actual| is_same_array(actual, expected) || actual.exact_eq(expected));
        if equal {
            self.subject.fail_with_raw_message(&format!(
                "{} unexpectedly equal to {}.",
                self.display_subject(),
                expected.render()
            ));
        }
    }

    /// Fails unless the array is present and has no elements.
    pub fn is_empty(&self) {
        if !self.actual().is_some_and(<[E]>::is_empty) {
            self.fail_verb("is empty");
        }
    }

    /// Fails unless the array is present and has at least one element.
    pub fn is_not_empty(&self) {
        if self.actual().map_or(true, <[E]>::is_empty) {
            self.fail_verb("is not empty");
        }
    }

    /// Fails unless the array is present and holds exactly `length` elements.
    pub fn has_length(&self, length: usize) {
        if self.actual().map(<[E]>::len) != Some(length) {
            self.subject.fail_with_raw_message(&format!(
                "Not true that {} has length <{}>",
                self.display_subject(),
                length
            ));
        }
    }

    fn fail_verb(&self, verb: &str) {
        self.subject
            .fail_with_raw_message(&format!("Not true that {} {}", self.display_subject(), verb));
    }

    /// Sequence subject over [`ArraySubject::list_representation`], reporting
    /// to the same strategy under the same name.
    pub fn as_list(&self) -> ListSubject<'a, E> {
        let list = ListSubject::new(self.subject.strategy(), self.list_representation());
        match self.subject.name() {
            Some(name) => list.named(name),
            None => list,
        }
    }
}

fn is_same_array<E>(actual: &[E], expected: &[E]) -> bool {
    std::ptr::eq(actual.as_ptr(), expected.as_ptr()) && actual.len() == expected.len()
}
