//! Failure sinks that receive failed propositions.

use std::error::Error;
use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, VouchError};
use crate::serde::to_canonical_json_bytes;

/// Receives the failure of a proposition.
///
/// A strategy may abort the calling chain (by panicking) or record the
/// failure and return normally. Subjects support both and never run further
/// proposition logic of their own after reporting.
pub trait FailureStrategy: Send + Sync {
    /// Handles a rendered failure message and its optional cause.
    fn fail(&self, message: &str, cause: Option<&(dyn Error + 'static)>);
}

impl<F> FailureStrategy for F
where
    F: Fn(&str, Option<&(dyn Error + 'static)>) + Send + Sync,
{
    fn fail(&self, message: &str, cause: Option<&(dyn Error + 'static)>) {
        self(message, cause)
    }
}

/// A single recorded failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    /// Fully rendered failure message.
    pub message: String,
    /// Rendered cause, when the proposition supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl Failure {
    fn new(message: &str, cause: Option<&(dyn Error + 'static)>) -> Self {
        Self {
            message: message.to_string(),
            cause: cause.map(ToString::to_string),
        }
    }
}

/// "Assert" mode: panics on the first failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssertStrategy;

impl FailureStrategy for AssertStrategy {
    fn fail(&self, message: &str, cause: Option<&(dyn Error + 'static)>) {
        match cause {
            Some(cause) => panic!("{message}\ncaused by: {cause}"),
            None => panic!("{message}"),
        }
    }
}

/// Discards failures.
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreStrategy;

impl FailureStrategy for IgnoreStrategy {
    fn fail(&self, message: &str, _cause: Option<&(dyn Error + 'static)>) {
        tracing::debug!(target: "vouch", %message, "ignored failure");
    }
}

#[derive(Debug, Default)]
struct Recorded {
    failures: Vec<Failure>,
    dropped: usize,
    verified: bool,
}

/// "Expect" mode: records failures in invocation order for later reporting.
///
/// When `verify_on_drop` is set, dropping the strategy with failures that were
/// never passed through [`ExpectStrategy::verify`] panics with the summary,
/// unless the thread is already unwinding.
#[derive(Debug)]
pub struct ExpectStrategy {
    recorded: Mutex<Recorded>,
    max_recorded: Option<usize>,
    verify_on_drop: bool,
}

/// Serializable snapshot of an [`ExpectStrategy`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureReport {
    /// Recorded failures in invocation order.
    pub failures: Vec<Failure>,
    /// Failures received after `max_recorded` was reached.
    pub dropped: usize,
}

impl Default for ExpectStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpectStrategy {
    /// Creates an unbounded recorder that does not check on drop.
    pub fn new() -> Self {
        Self {
            recorded: Mutex::new(Recorded::default()),
            max_recorded: None,
            verify_on_drop: false,
        }
    }

    /// Caps the number of stored failures; later ones are only counted.
    pub fn with_max_recorded(mut self, max: usize) -> Self {
        self.max_recorded = Some(max);
        self
    }

    /// Panics on drop when failures were recorded but never verified.
    pub fn verify_on_drop(mut self, enabled: bool) -> Self {
        self.verify_on_drop = enabled;
        self
    }

    fn lock(&self) -> MutexGuard<'_, Recorded> {
        // A poisoned lock still holds a consistent list.
        self.recorded
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns the recorded failures in invocation order.
    pub fn failures(&self) -> Vec<Failure> {
        self.lock().failures.clone()
    }

    /// Returns the recorded failure messages in invocation order.
    pub fn messages(&self) -> Vec<String> {
        self.lock()
            .failures
            .iter()
            .map(|failure| failure.message.clone())
            .collect()
    }

    /// Returns the number of failures received, stored or dropped.
    pub fn failure_count(&self) -> usize {
        let recorded = self.lock();
        recorded.failures.len() + recorded.dropped
    }

    /// Returns whether no failure has been received.
    pub fn is_clean(&self) -> bool {
        self.failure_count() == 0
    }

    /// Removes and returns the recorded failures.
    pub fn take(&self) -> Vec<Failure> {
        let mut recorded = self.lock();
        recorded.dropped = 0;
        std::mem::take(&mut recorded.failures)
    }

    /// Returns a serializable snapshot of the recorded failures.
    pub fn report(&self) -> FailureReport {
        let recorded = self.lock();
        FailureReport {
            failures: recorded.failures.clone(),
            dropped: recorded.dropped,
        }
    }

    /// Serializes the snapshot as canonical JSON bytes.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, VouchError> {
        to_canonical_json_bytes(&self.report())
    }

    /// Marks the failures as observed and returns them as an error, if any.
    pub fn verify(&self) -> Result<(), VouchError> {
        let mut recorded = self.lock();
        recorded.verified = true;
        summarize(&recorded)
    }
}

fn summarize(recorded: &Recorded) -> Result<(), VouchError> {
    let total = recorded.failures.len() + recorded.dropped;
    if total == 0 {
        return Ok(());
    }
    let mut message = format!("{total} expectation(s) failed:");
    for (idx, failure) in recorded.failures.iter().enumerate() {
        message.push_str(&format!("\n  {}. {}", idx + 1, failure.message));
    }
    let mut info = ErrorInfo::new("unverified-failures", message)
        .with_context("recorded", recorded.failures.len().to_string());
    if recorded.dropped > 0 {
        info = info
            .with_context("dropped", recorded.dropped.to_string())
            .with_hint("raise max_recorded to keep every failure message");
    }
    Err(VouchError::Assertion(info))
}

impl FailureStrategy for ExpectStrategy {
    fn fail(&self, message: &str, cause: Option<&(dyn Error + 'static)>) {
        let mut recorded = self.lock();
        recorded.verified = false;
        if self
            .max_recorded
            .is_some_and(|max| recorded.failures.len() >= max)
        {
            recorded.dropped += 1;
            tracing::warn!(
                target: "vouch",
                %message,
                dropped = recorded.dropped,
                "failure dropped past max_recorded"
            );
            return;
        }
        tracing::debug!(target: "vouch", %message, "recorded failure");
        recorded.failures.push(Failure::new(message, cause));
    }
}

impl Drop for ExpectStrategy {
    fn drop(&mut self) {
        if !self.verify_on_drop || std::thread::panicking() {
            return;
        }
        let recorded = self.lock();
        if recorded.verified {
            return;
        }
        if let Err(err) = summarize(&recorded) {
            panic!("{}", err.info().message);
        }
    }
}
