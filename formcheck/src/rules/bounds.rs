//! Numeric bound rules. Values that are not numbers are left to [`Number`](super::Number).

use super::{Rule, number_value, parse_number};
use crate::context::Context;
use crate::error::RuleError;
use crate::message::TemplateContext;
use crate::token::ValidationKeys;

/// Fails when a numeric value is below `bounds`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Min {
    pub bounds: f64,
}

impl Min {
    pub fn new(bounds: f64) -> Self {
        Self { bounds }
    }
}

impl Rule for Min {
    fn id(&self) -> &str {
        ValidationKeys::MIN
    }

    fn template_context(&self) -> TemplateContext {
        TemplateContext::from([("bounds".to_string(), number_value(self.bounds))])
    }

    fn validate(&self, context: &mut Context<'_>) -> Result<(), RuleError> {
        if parse_number(context.target.value()).is_some_and(|n| n < self.bounds) {
            let token = context.token_for(ValidationKeys::MIN);
            context.register_message(token);
        }
        Ok(())
    }
}

/// Fails when a numeric value is above `bounds`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Max {
    pub bounds: f64,
}

impl Max {
    pub fn new(bounds: f64) -> Self {
        Self { bounds }
    }
}

impl Rule for Max {
    fn id(&self) -> &str {
        ValidationKeys::MAX
    }

    fn template_context(&self) -> TemplateContext {
        TemplateContext::from([("bounds".to_string(), number_value(self.bounds))])
    }

    fn validate(&self, context: &mut Context<'_>) -> Result<(), RuleError> {
        if parse_number(context.target.value()).is_some_and(|n| n > self.bounds) {
            let token = context.token_for(ValidationKeys::MAX);
            context.register_message(token);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::rules::RuleRef;
    use crate::target::Target;

    fn rendered(rule: RuleRef, value: &str) -> Vec<String> {
        let target = Target::new("Test", value);
        let mut context = Context::new(&target);
        context.push_template_context(&rule);
        rule.validate(&mut context).unwrap();
        context
            .notification
            .all_messages()
            .iter()
            .map(|m| m.to_string())
            .collect()
    }

    #[test]
    fn test_min() {
        assert!(rendered(Arc::new(Min::new(8.0)), "8").is_empty());
        assert!(rendered(Arc::new(Min::new(8.0)), "").is_empty());
        assert!(rendered(Arc::new(Min::new(8.0)), "abc").is_empty());
        assert!(rendered(Arc::new(Min::new(8.0)), "-inf").is_empty());
        assert_eq!(
            rendered(Arc::new(Min::new(8.0)), "7.5"),
            vec!["Please enter a value greater than or equal to 8"]
        );
    }

    #[test]
    fn test_max() {
        assert!(rendered(Arc::new(Max::new(12.5)), "12").is_empty());
        assert_eq!(rendered(Arc::new(Max::new(12.5)), "1,000").len(), 1);
        for value in ["inf", "1e5", "1,2,3"] {
            assert!(rendered(Arc::new(Max::new(12.5)), value).is_empty(), "{value}");
        }
        assert_eq!(
            rendered(Arc::new(Max::new(12.5)), "13"),
            vec!["Please enter a value less than or equal to 12.5"]
        );
    }
}
