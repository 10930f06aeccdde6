//! Rules attached through CSS class aliases.

use std::collections::HashMap;
use std::sync::Arc;

use super::RuleSource;
use crate::element::Element;
use crate::error::ConfigError;
use crate::rules::{Date, Email, Number, Required, RuleRef};
use crate::target::Target;

/// Maps class-name aliases to rule prototypes.
///
/// # Example
///
/// ```
/// use formcheck::sources::CssAliasRegistry;
///
/// let registry = CssAliasRegistry::basic();
/// assert!(registry.rule_for("required").is_some());
/// assert!(registry.rule_for("input-large").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CssAliasRegistry {
    rules: HashMap<String, RuleRef>,
}

impl CssAliasRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in aliases: `required`, `email`, `date`, `number`.
    pub fn basic() -> Self {
        let mut registry = Self::new();
        registry.register_rule("required", Arc::new(Required));
        registry.register_rule("email", Arc::new(Email));
        registry.register_rule("date", Arc::new(Date));
        registry.register_rule("number", Arc::new(Number));
        registry
    }

    /// Registers a prototype under an alias, replacing any previous one.
    pub fn register_rule(&mut self, alias: impl Into<String>, rule: RuleRef) {
        self.rules.insert(alias.into(), rule);
    }

    /// The prototype for an alias, `None` when unknown.
    pub fn rule_for(&self, alias: &str) -> Option<RuleRef> {
        self.rules.get(alias).cloned()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// One rule per class name that resolves through the registry, in class order.
#[derive(Debug, Clone, Default)]
pub struct CssRuleSource {
    registry: CssAliasRegistry,
}

impl CssRuleSource {
    pub fn new(registry: CssAliasRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &CssAliasRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut CssAliasRegistry {
        &mut self.registry
    }

    pub fn classes_for(element: &Element) -> Vec<&str> {
        element.classes()
    }
}

impl RuleSource for CssRuleSource {
    fn rules_for(&self, target: &Target) -> Result<Vec<RuleRef>, ConfigError> {
        Ok(Self::classes_for(&target.element)
            .into_iter()
            .filter_map(|class| self.registry.rule_for(class))
            .collect())
    }

    fn name(&self) -> &str {
        "css"
    }
}
