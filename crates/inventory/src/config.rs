//! Allocator configuration.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use stockroute_core::{DomainError, DomainResult};

/// Environment variable selecting the fulfillment policy.
pub const POLICY_ENV_VAR: &str = "STOCKROUTE_FULFILLMENT_POLICY";

/// What to do with an item that cannot be filled completely.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentPolicy {
    /// Ship whatever is available.
    #[default]
    Partial,
    /// Ship an item only if total usable stock covers the whole request.
    AllOrNothing,
}

impl FulfillmentPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            FulfillmentPolicy::Partial => "partial",
            FulfillmentPolicy::AllOrNothing => "all_or_nothing",
        }
    }
}

impl core::fmt::Display for FulfillmentPolicy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FulfillmentPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "partial" => Ok(FulfillmentPolicy::Partial),
            "all_or_nothing" => Ok(FulfillmentPolicy::AllOrNothing),
            other => Err(DomainError::validation(format!(
                "unknown fulfillment policy: {other}"
            ))),
        }
    }
}

/// Allocator settings.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocatorConfig {
    #[serde(default)]
    pub policy: FulfillmentPolicy,
}

impl AllocatorConfig {
    pub fn new(policy: FulfillmentPolicy) -> Self {
        Self { policy }
    }

    /// Load from the process environment (see [`POLICY_ENV_VAR`]).
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup. Unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let policy = match lookup(POLICY_ENV_VAR) {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => FulfillmentPolicy::default(),
        };
        Ok(Self { policy })
    }
}
