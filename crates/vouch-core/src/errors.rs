//! Structured error types shared across vouch crates.
//!
//! Failed propositions never surface here: they travel through a
//! [`FailureStrategy`](crate::strategy::FailureStrategy). A [`VouchError`]
//! means the assertion itself was malformed, that an accumulating strategy is
//! surfacing its recorded failures, or that a report could not be encoded.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`VouchError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (offending values, counts, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the vouch engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum VouchError {
    /// The assertion was written incorrectly (invalid tolerance and the like).
    #[error("usage error: {0}")]
    Usage(ErrorInfo),
    /// Failures accumulated by a recording strategy, surfaced on verification.
    #[error("assertion error: {0}")]
    Assertion(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl VouchError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            VouchError::Usage(info) | VouchError::Assertion(info) | VouchError::Serde(info) => {
                info
            }
        }
    }

    /// Returns whether the error signals a malformed assertion.
    pub fn is_usage(&self) -> bool {
        matches!(self, VouchError::Usage(_))
    }
}

/// Builds a [`VouchError::Usage`] with the given code and message.
pub fn usage_error(code: &str, message: impl Into<String>) -> VouchError {
    VouchError::Usage(ErrorInfo::new(code, message.into()))
}
