//! Validator orchestrating rule sources, mode policy and rule execution.

use std::fmt;
use std::sync::Arc;

use crate::context::Context;
use crate::error::{ConfigError, Result};
use crate::notification::Notification;
use crate::options::{Mode, Options};
use crate::rules::{RemoteTransport, RuleRef};
use crate::sources::{
    CssAliasRegistry, CssRuleSource, FieldEqualitySource, MaxLengthSource, MaxSource, MinLengthSource, MinSource,
    RangeLengthSource, RegularExpressionSource, RemoteSource, RuleSource,
};
use crate::target::Target;

/// Runs every applicable rule against a target.
///
/// Rules are discovered by the registered sources, in registration order, and
/// filtered through the [`Options`] mode policy before they run.
///
/// # Example
///
/// ```
/// use formcheck::{Element, Target, Validator};
///
/// let target = Target::for_element(Element::input().name("Email").class("required email"));
/// let notification = Validator::basic().validate(&target).unwrap();
///
/// assert!(!notification.is_valid());
/// assert_eq!(notification.messages_for("Email").len(), 1);
/// ```
pub struct Validator {
    sources: Vec<Box<dyn RuleSource>>,
}

impl Validator {
    /// Create a validator with no sources.
    pub fn new() -> Self {
        Self { sources: Vec::new() }
    }

    /// Validator with the standard sources and the basic alias registry.
    ///
    /// Remote rules are discovered but not evaluated, as there is no transport.
    pub fn basic() -> Self {
        Self::basic_with(CssAliasRegistry::basic(), None)
    }

    /// Validator with the standard sources, using the given alias registry and
    /// remote transport.
    pub fn basic_with(registry: CssAliasRegistry, transport: Option<Arc<dyn RemoteTransport>>) -> Self {
        let remote = match transport {
            Some(transport) => RemoteSource::with_transport(transport),
            None => RemoteSource::new(),
        };

        Self::new()
            .with_source(CssRuleSource::new(registry))
            .with_source(MinLengthSource)
            .with_source(MaxLengthSource)
            .with_source(RangeLengthSource)
            .with_source(MinSource)
            .with_source(MaxSource)
            .with_source(RegularExpressionSource)
            .with_source(FieldEqualitySource)
            .with_source(remote)
    }

    /// Builder form of [`register_source`](Self::register_source).
    pub fn with_source(mut self, source: impl RuleSource + 'static) -> Self {
        self.register_source(source);
        self
    }

    /// Append a source. Sources registered earlier have their rules run first.
    pub fn register_source(&mut self, source: impl RuleSource + 'static) {
        self.sources.push(Box::new(source));
    }

    pub fn sources(&self) -> &[Box<dyn RuleSource>] {
        &self.sources
    }

    /// Every rule the registered sources find for the target, in source order.
    pub fn rules_for(&self, target: &Target) -> std::result::Result<Vec<RuleRef>, ConfigError> {
        let mut rules = Vec::new();
        for source in &self.sources {
            let found = source.rules_for(target)?;
            log::debug!(
                "Source '{}' found {} rule(s) for '{}'",
                source.name(),
                found.len(),
                target.field_name
            );
            rules.extend(found);
        }
        Ok(rules)
    }

    /// Exhaustive validation: no options, triggered mode.
    pub fn validate(&self, target: &Target) -> Result<Notification> {
        self.validate_with(target, &Options::default(), Mode::Triggered)
    }

    /// Validate the target, running only the rules `options` allows in `mode`.
    pub fn validate_with(&self, target: &Target, options: &Options, mode: Mode) -> Result<Notification> {
        let mut notification = Notification::new();
        self.validate_into(target, options, mode, &mut notification)?;
        Ok(notification)
    }

    /// Like [`validate_with`](Self::validate_with), collecting into a
    /// notification carried across passes.
    ///
    /// When a source or rule fails, the rest of this pass is abandoned but
    /// `notification` keeps every message collected so far.
    pub fn validate_into(
        &self,
        target: &Target,
        options: &Options,
        mode: Mode,
        notification: &mut Notification,
    ) -> Result<()> {
        let rules = self.rules_for(target)?;
        let mut context = Context::with_notification(target, std::mem::take(notification));
        let outcome = Self::run(&rules, &mut context, options, mode);
        *notification = context.into_notification();
        outcome
    }

    fn run(rules: &[RuleRef], context: &mut Context<'_>, options: &Options, mode: Mode) -> Result<()> {
        let target = context.target;
        for rule in rules {
            if !options.should_validate(&target.element, rule.id(), mode) {
                log::debug!(
                    "Skipping rule '{}' on '{}' in {} mode",
                    rule.id(),
                    target.field_name,
                    mode
                );
                continue;
            }

            log::trace!("Running rule '{}' on '{}'", rule.id(), target.field_name);
            context.push_template_context(rule);
            rule.validate(context)?;
        }
        Ok(())
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("sources", &self.sources.iter().map(|s| s.name()).collect::<Vec<_>>())
            .finish()
    }
}
