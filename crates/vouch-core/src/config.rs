use serde::{Deserialize, Serialize};

use crate::errors::VouchError;
use crate::serde::{from_json_slice, to_canonical_json_bytes};
use crate::strategy::{AssertStrategy, ExpectStrategy, FailureStrategy, IgnoreStrategy};

/// Which built-in strategy a [`ReportPolicy`] produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StrategyMode {
    /// Panic on the first failure.
    #[default]
    Assert,
    /// Record failures and report them later.
    Expect,
    /// Discard failures.
    Ignore,
}

/// Reporting policy controlling how failures are handled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportPolicy {
    /// Strategy to build.
    #[serde(default)]
    pub mode: StrategyMode,
    /// Upper bound on stored failures in expect mode.
    #[serde(default)]
    pub max_recorded: Option<usize>,
    /// Whether an expect-mode recorder checks for unverified failures on drop.
    #[serde(default = "ReportPolicy::default_verify_on_drop")]
    pub verify_on_drop: bool,
}

impl ReportPolicy {
    const fn default_verify_on_drop() -> bool {
        true
    }

    /// Policy for the given mode with default settings.
    pub fn with_mode(mode: StrategyMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Decodes a policy from JSON, filling omitted fields with defaults.
    pub fn from_json_slice(data: &[u8]) -> Result<Self, VouchError> {
        from_json_slice(data)
    }

    /// Encodes the policy as canonical JSON bytes.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, VouchError> {
        to_canonical_json_bytes(self)
    }

    /// Builds an expect-mode recorder configured by this policy.
    pub fn expect_strategy(&self) -> ExpectStrategy {
        let strategy = ExpectStrategy::new().verify_on_drop(self.verify_on_drop);
        match self.max_recorded {
            Some(max) => strategy.with_max_recorded(max),
            None => strategy,
        }
    }

    /// Builds the strategy selected by [`ReportPolicy::mode`].
    pub fn build_strategy(&self) -> Box<dyn FailureStrategy> {
        match self.mode {
            StrategyMode::Assert => Box::new(AssertStrategy),
            StrategyMode::Expect => Box::new(self.expect_strategy()),
            StrategyMode::Ignore => Box::new(IgnoreStrategy),
        }
    }
}

impl Default for ReportPolicy {
    fn default() -> Self {
        Self {
            mode: StrategyMode::default(),
            max_recorded: None,
            verify_on_drop: Self::default_verify_on_drop(),
        }
    }
}
