#![deny(missing_docs)]
#![doc = "Subject, failure-strategy, and rendering core shared by the vouch assertion crates."]

/// Reporting policy and strategy construction.
pub mod config;
pub mod errors;
pub mod render;
/// Canonical JSON helpers.
pub mod serde;
pub mod strategy;
pub mod subject;
pub mod value;

pub use config::{ReportPolicy, StrategyMode};
pub use errors::{usage_error, ErrorInfo, VouchError};
pub use render::{compress_type, Render};
pub use strategy::{
    AssertStrategy, ExpectStrategy, Failure, FailureReport, FailureStrategy, IgnoreStrategy,
};
pub use subject::Subject;
pub use value::{is_same_object, view_as, ExactEq, Expected, KindView, SubjectValue};
