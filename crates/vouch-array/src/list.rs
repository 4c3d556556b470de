//! Sequence-backed subject used for array list views.

use vouch_core::{ExactEq, Expected, FailureStrategy, Render, Subject, SubjectValue};

/// Propositions over an ordered sequence.
#[derive(Debug)]
pub struct ListSubject<'a, T> {
    subject: Subject<'a, Vec<T>>,
}

impl<'a, T: SubjectValue + Clone> ListSubject<'a, T> {
    /// Creates a subject over a possibly absent sequence.
    pub fn new(strategy: &'a dyn FailureStrategy, actual: Option<Vec<T>>) -> Self {
        Self {
            subject: Subject::new(strategy, actual),
        }
    }

    /// Creates a subject over a present sequence.
    pub fn of(strategy: &'a dyn FailureStrategy, actual: Vec<T>) -> Self {
        Self::new(strategy, Some(actual))
    }

    /// Attaches the name used in failure messages.
    pub fn named(self, name: impl Into<String>) -> Self {
        Self {
            subject: self.subject.named(name),
        }
    }

    /// Returns the underlying base subject.
    pub fn subject(&self) -> &Subject<'a, Vec<T>> {
        &self.subject
    }

    fn actual(&self) -> Option<&[T]> {
        self.subject.actual().map(Vec::as_slice)
    }

    fn display(&self) -> String {
        self.subject.display_subject()
    }

    /// Delegates to the base subject's equality.
    pub fn is_equal_to(&self, expected: &dyn Expected) {
        self.subject.is_equal_to(expected);
    }

    /// Fails unless the sequence is present and holds exactly `size` elements.
    pub fn has_size(&self, size: usize) {
        let actual_size = self.actual().map(<[T]>::len);
        if actual_size != Some(size) {
            self.subject.fail_with_raw_message(&format!(
                "Not true that {} has a size of <{}>. It is <{}>",
                self.display(),
                size,
                actual_size.render()
            ));
        }
    }

    /// Fails unless the sequence is present and empty.
    pub fn is_empty(&self) {
        if !self.actual().is_some_and(<[T]>::is_empty) {
            self.subject.fail_verb("is empty");
        }
    }

    /// Fails unless the sequence is present and non-empty.
    pub fn is_not_empty(&self) {
        if self.actual().map_or(true, <[T]>::is_empty) {
            self.subject.fail_verb("is not empty");
        }
    }

    /// Fails unless some element is exactly equal to `element`.
    pub fn contains(&self, element: &T) {
        if !self.holds(element) {
            self.subject.fail_with_raw_message(&format!(
                "{} should have contained <{}>",
                self.display(),
                element.render()
            ));
        }
    }

    /// Fails if some element is exactly equal to `element`.
    pub fn does_not_contain(&self, element: &T) {
        if self.holds(element) {
            self.subject.fail_with_raw_message(&format!(
                "{} should not have contained <{}>",
                self.display(),
                element.render()
            ));
        }
    }

    fn holds(&self, element: &T) -> bool {
        self.actual()
            .is_some_and(|items| items.iter().any(|item| item.exact_eq(element)))
    }

    /// Fails unless the sequence holds exactly `expected`, counting duplicates,
    /// in any order. Chain [`Ordered::in_order`] to also require the order.
    pub fn contains_exactly(&self, expected: &[T]) -> Ordered<'_, 'a, T> {
        let Some(actual) = self.actual() else {
            self.subject.fail("contains exactly", &expected);
            return Ordered::already_failed();
        };
        let (missing, unexpected) = multiset_difference(actual, expected);
        if missing.is_empty() && unexpected.is_empty() {
            return Ordered {
                list: Some(self),
                expected: expected.to_vec(),
            };
        }
        let mut detail = String::new();
        if !missing.is_empty() {
            detail.push_str(&format!(". It is missing <{}>", missing.render()));
        }
        if !unexpected.is_empty() {
            let lead = if missing.is_empty() { ". It has" } else { " and has" };
            detail.push_str(&format!("{lead} unexpected items <{}>", unexpected.render()));
        }
        self.subject.fail_with_raw_message(&format!(
            "Not true that {} contains exactly <{}>{}",
            self.display(),
            expected.render(),
            detail
        ));
        Ordered::already_failed()
    }
}

impl<'a, T: SubjectValue + Clone + PartialOrd> ListSubject<'a, T> {
    /// Fails unless each element is at most its successor.
    pub fn is_ordered(&self) {
        self.check_pairs("is ordered", |a, b| a <= b);
    }

    /// Fails unless each element is strictly less than its successor.
    pub fn is_strictly_ordered(&self) {
        self.check_pairs("is strictly ordered", |a, b| a < b);
    }

    // Incomparable pairs (NaN) fail both comparisons and so count as out of order.
    fn check_pairs(&self, verb: &str, in_order: impl Fn(&T, &T) -> bool) {
        let Some(actual) = self.actual() else {
            self.subject.fail_verb(verb);
            return;
        };
        if let Some(pair) = actual.windows(2).find(|pair| !in_order(&pair[0], &pair[1])) {
            self.subject.fail(verb, &pair);
        }
    }
}

/// Result of [`ListSubject::contains_exactly`].
#[derive(Debug)]
pub struct Ordered<'s, 'a, T> {
    list: Option<&'s ListSubject<'a, T>>,
    expected: Vec<T>,
}

impl<T> Ordered<'_, '_, T> {
    fn already_failed() -> Self {
        Self {
            list: None,
            expected: Vec::new(),
        }
    }
}

impl<T: SubjectValue + Clone> Ordered<'_, '_, T> {
    /// Additionally requires the elements to appear in the expected order.
    ///
    /// Does nothing when the preceding check already failed.
    pub fn in_order(self) {
        let Some(list) = self.list else {
            return;
        };
        let ordered = list
            .actual()
            .is_some_and(|actual| actual.exact_eq(self.expected.as_slice()));
        if !ordered {
            list.subject.fail_with_raw_message(&format!(
                "Not true that {} contains only these elements in order <{}>",
                list.display(),
                self.expected.render()
            ));
        }
    }
}

/// Elements of `expected` absent from `actual`, and elements of `actual` not
/// accounted for by `expected`, both counting duplicates.
fn multiset_difference<T: ExactEq + Clone>(actual: &[T], expected: &[T]) -> (Vec<T>, Vec<T>) {
    let mut used = vec![false; actual.len()];
    let mut missing = Vec::new();
    for wanted in expected {
        let slot = actual
            .iter()
            .enumerate()
            .position(|(idx, item)| !used[idx] && item.exact_eq(wanted));
        match slot {
            Some(idx) => used[idx] = true,
            None => missing.push(wanted.clone()),
        }
    }
    let unexpected = actual
        .iter()
        .zip(&used)
        .filter(|(_, used)| !**used)
        .map(|(item, _)| item.clone())
        .collect();
    (missing, unexpected)
}
