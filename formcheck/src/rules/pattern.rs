//! Regular expression rule.

use regex::Regex;

use super::Rule;
use crate::context::Context;
use crate::error::RuleError;
use crate::message::TemplateContext;
use crate::token::ValidationKeys;

/// Fails when a non-empty value does not match `expression` anywhere.
#[derive(Debug, Clone)]
pub struct RegularExpression {
    pub expression: Regex,
}

impl RegularExpression {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            expression: Regex::new(pattern)?,
        })
    }
}

impl Rule for RegularExpression {
    fn id(&self) -> &str {
        ValidationKeys::REGEX
    }

    fn template_context(&self) -> TemplateContext {
        TemplateContext::from([("expression".to_string(), self.expression.as_str().into())])
    }

    fn validate(&self, context: &mut Context<'_>) -> Result<(), RuleError> {
        let value = context.target.value();
        if !value.is_empty() && !self.expression.is_match(value) {
            let token = context.token_for(ValidationKeys::REGEX);
            context.register_message(token);
        }
        Ok(())
    }
}
