//! Cross-field equality rule.

use super::Rule;
use crate::context::Context;
use crate::error::RuleError;
use crate::message::TemplateContext;
use crate::target::Target;
use crate::token::ValidationKeys;

/// Options for [`FieldEquality`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldEqualityOptions {
    /// Fields that receive the message when the values differ.
    pub targets: Vec<String>,
}

/// Fails when two fields of the same form hold different values.
///
/// Field values are read from the target when the field is the target's own,
/// otherwise from the target's form. If either value cannot be found the rule
/// has nothing to compare and passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEquality {
    pub field1: String,
    pub label1: String,
    pub field2: String,
    pub label2: String,
    pub options: FieldEqualityOptions,
}

impl FieldEquality {
    fn value_of<'t>(target: &'t Target, field: &str) -> Option<&'t str> {
        if field == target.field_name {
            return Some(target.value());
        }
        target
            .form
            .as_ref()?
            .find(field)
            .map(|element| element.get_value())
    }
}

impl Rule for FieldEquality {
    fn id(&self) -> &str {
        ValidationKeys::FIELD_EQUALITY
    }

    fn template_context(&self) -> TemplateContext {
        TemplateContext::from([
            ("field1".to_string(), self.label1.as_str().into()),
            ("field2".to_string(), self.label2.as_str().into()),
        ])
    }

    fn validate(&self, context: &mut Context<'_>) -> Result<(), RuleError> {
        let target = context.target;
        let (Some(value1), Some(value2)) = (
            Self::value_of(target, &self.field1),
            Self::value_of(target, &self.field2),
        ) else {
            log::debug!(
                "Skipping equality of '{}' and '{}': value not found in form",
                self.field1,
                self.field2
            );
            return Ok(());
        };

        if value1 == value2 {
            return Ok(());
        }

        let token = context.token_for(ValidationKeys::FIELD_EQUALITY);
        if self.options.targets.is_empty() {
            context.register_message(token);
        } else {
            for field in &self.options.targets {
                context.register_message_for(field, token.clone());
            }
        }
        Ok(())
    }
}
