//! Rule sources.
//!
//! A source inspects a target's element (and form) and produces the rules that
//! apply to it. A source that finds nothing returns an empty list; a source
//! whose configuration payload is malformed returns a [`ConfigError`].

mod attributes;
mod css;
mod equality;
mod remote;

pub use attributes::{
    MaxLengthSource, MaxSource, MinLengthSource, MinSource, RangeLengthSource, RegularExpressionSource,
};
pub use css::{CssAliasRegistry, CssRuleSource};
pub use equality::{FieldEqualityConfig, FieldEqualityEntry, FieldEqualitySource, FieldProperty};
pub use remote::{RemoteRuleConfig, RemoteSource};

use serde::de::DeserializeOwned;

use crate::error::ConfigError;
use crate::rules::RuleRef;
use crate::target::Target;

/// Discovers the rules that apply to a target.
pub trait RuleSource: Send + Sync {
    fn rules_for(&self, target: &Target) -> Result<Vec<RuleRef>, ConfigError>;

    /// Name used in diagnostics.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<F> RuleSource for F
where
    F: Fn(&Target) -> Result<Vec<RuleRef>, ConfigError> + Send + Sync,
{
    fn rules_for(&self, target: &Target) -> Result<Vec<RuleRef>, ConfigError> {
        self(target)
    }
}

/// Parses a JSON attribute payload into its typed configuration.
pub(crate) fn parse_json<T: DeserializeOwned>(attribute: &str, raw: &str) -> Result<T, ConfigError> {
    serde_json::from_str(raw).map_err(|e| ConfigError::malformed(attribute, e))
}
