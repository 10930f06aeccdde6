//! Field equality rules declared on the form.

use std::sync::Arc;

use serde::Deserialize;

use super::{RuleSource, parse_json};
use crate::error::ConfigError;
use crate::rules::{FieldEquality, FieldEqualityOptions, RuleRef};
use crate::target::Target;

/// One side of an equality declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldProperty {
    pub field: String,
    #[serde(default)]
    pub label: String,
}

/// One equality declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldEqualityEntry {
    pub property1: FieldProperty,
    pub property2: FieldProperty,
    #[serde(default)]
    pub targets: Vec<String>,
}

/// Payload of the form's `data-field-equality` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FieldEqualityConfig {
    #[serde(default)]
    pub rules: Vec<FieldEqualityEntry>,
}

impl From<FieldEqualityEntry> for FieldEquality {
    fn from(entry: FieldEqualityEntry) -> Self {
        let label = |p: FieldProperty| if p.label.is_empty() { p.field } else { p.label };
        Self {
            field1: entry.property1.field.clone(),
            label1: label(entry.property1),
            field2: entry.property2.field.clone(),
            label2: label(entry.property2),
            options: FieldEqualityOptions {
                targets: entry.targets,
            },
        }
    }
}

/// One [`FieldEquality`] rule per declaration whose `property1` is the target's field.
///
/// Declarations are only matched on `property1`, so the second field of a
/// pair never receives the rule from this source.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldEqualitySource;

impl FieldEqualitySource {
    pub const ATTRIBUTE: &'static str = "data-field-equality";
}

impl RuleSource for FieldEqualitySource {
    fn rules_for(&self, target: &Target) -> Result<Vec<RuleRef>, ConfigError> {
        let Some(raw) = target.form.as_ref().and_then(|form| form.get_attr(Self::ATTRIBUTE)) else {
            return Ok(Vec::new());
        };
        let config: FieldEqualityConfig = parse_json(Self::ATTRIBUTE, raw)?;

        Ok(config
            .rules
            .into_iter()
            .filter(|entry| entry.property1.field == target.field_name)
            .map(|entry| Arc::new(FieldEquality::from(entry)) as RuleRef)
            .collect())
    }

    fn name(&self) -> &str {
        "fieldequality"
    }
}
