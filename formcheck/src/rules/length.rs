//! Character-length rules.

use serde::Deserialize;

use super::Rule;
use crate::context::Context;
use crate::error::RuleError;
use crate::message::TemplateContext;
use crate::token::ValidationKeys;

fn char_count(context: &Context<'_>) -> usize {
    context.target.value().chars().count()
}

/// Fails when a non-empty value is shorter than `length` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinLength {
    pub length: usize,
}

impl MinLength {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Rule for MinLength {
    fn id(&self) -> &str {
        ValidationKeys::MIN_LENGTH
    }

    fn template_context(&self) -> TemplateContext {
        TemplateContext::from([("length".to_string(), self.length.into())])
    }

    fn validate(&self, context: &mut Context<'_>) -> Result<(), RuleError> {
        let count = char_count(context);
        if count > 0 && count < self.length {
            let token = context.token_for(ValidationKeys::MIN_LENGTH);
            context.register_message(token);
        }
        Ok(())
    }
}

/// Fails when the value is longer than `length` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxLength {
    pub length: usize,
}

impl MaxLength {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Rule for MaxLength {
    fn id(&self) -> &str {
        ValidationKeys::MAX_LENGTH
    }

    fn template_context(&self) -> TemplateContext {
        TemplateContext::from([("length".to_string(), self.length.into())])
    }

    fn validate(&self, context: &mut Context<'_>) -> Result<(), RuleError> {
        if char_count(context) > self.length {
            let token = context.token_for(ValidationKeys::MAX_LENGTH);
            context.register_message(token);
        }
        Ok(())
    }
}

/// Fails when a non-empty value's length falls outside `[min, max]`.
///
/// Deserializes from the `data-rangelength` payload `{"min": 5, "max": 10}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RangeLength {
    pub min: usize,
    pub max: usize,
}

impl RangeLength {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

impl Rule for RangeLength {
    fn id(&self) -> &str {
        ValidationKeys::RANGE_LENGTH
    }

    fn template_context(&self) -> TemplateContext {
        TemplateContext::from([
            ("min".to_string(), self.min.into()),
            ("max".to_string(), self.max.into()),
        ])
    }

    fn validate(&self, context: &mut Context<'_>) -> Result<(), RuleError> {
        let count = char_count(context);
        if count > 0 && !(self.min..=self.max).contains(&count) {
            let token = context.token_for(ValidationKeys::RANGE_LENGTH);
            context.register_message(token);
        }
        Ok(())
    }
}
