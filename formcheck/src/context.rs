//! Per-rule evaluation scope.

use std::sync::Arc;

use crate::element::ElementRef;
use crate::message::{Message, TemplateContext};
use crate::notification::Notification;
use crate::rules::RuleRef;
use crate::target::Target;
use crate::token::{Token, ValidationKeys};

/// Scope a rule runs in: the target under validation, the active template
/// context, and the notification that collects what rules report.
#[derive(Debug)]
pub struct Context<'a> {
    pub target: &'a Target,
    pub template_context: TemplateContext,
    pub notification: Notification,
    source: Option<RuleRef>,
}

impl<'a> Context<'a> {
    pub fn new(target: &'a Target) -> Self {
        Self::with_notification(target, Notification::new())
    }

    /// Continues collecting into an existing notification.
    pub fn with_notification(target: &'a Target, notification: Notification) -> Self {
        Self {
            target,
            template_context: TemplateContext::new(),
            notification,
            source: None,
        }
    }

    /// Makes `rule` the active rule: its parameters become the template context
    /// and it is recorded as the source of subsequent messages.
    pub fn push_template_context(&mut self, rule: &RuleRef) {
        self.template_context = rule.template_context();
        self.source = Some(Arc::clone(rule));
    }

    /// The rule most recently pushed, if any.
    pub fn active_rule(&self) -> Option<&RuleRef> {
        self.source.as_ref()
    }

    /// Token for a key: the target's localized text if any, else the built-in default.
    pub fn token_for(&self, key: &str) -> Token {
        match self.target.localized_message_for(key) {
            Some(text) => Token::new(key, text),
            None => ValidationKeys::token(key),
        }
    }

    /// Reports a failure on the target's field.
    pub fn register_message(&mut self, token: impl Into<Token>) -> bool {
        let element = Some(Arc::clone(&self.target.element));
        let field = self.target.field_name.clone();
        self.register(field, token.into(), element)
    }

    /// Reports a failure on another field of the target's form.
    ///
    /// The message is bound to that field's element when the form has one.
    pub fn register_message_for(&mut self, field: &str, token: impl Into<Token>) -> bool {
        let element = if field == self.target.field_name {
            Some(Arc::clone(&self.target.element))
        } else {
            self.target
                .form
                .as_ref()
                .and_then(|form| form.find(field))
                .cloned()
        };
        self.register(field.to_string(), token.into(), element)
    }

    fn register(&mut self, field: String, token: Token, element: Option<ElementRef>) -> bool {
        let mut message = Message::new(field, token, element, Some(self.template_context.clone()));
        if let Some(source) = &self.source {
            message = message.with_source(Arc::clone(source));
        }
        self.notification.register(message)
    }

    pub fn into_notification(self) -> Notification {
        self.notification
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Element, Form};
    use crate::rules::{MinLength, Required};

    #[test]
    fn test_registers_with_target_element_and_template_context() {
        let element = Arc::new(Element::input().name("Test").value("Value"));
        let target = Target::for_element(Arc::clone(&element));
        let mut context = Context::new(&target);

        let rule: RuleRef = Arc::new(MinLength::new(3));
        context.push_template_context(&rule);
        context.register_message(ValidationKeys::token(ValidationKeys::MIN_LENGTH));

        let messages = context.notification.messages_for("Test");
        assert_eq!(messages.len(), 1);

        let message = messages[0];
        assert!(Arc::ptr_eq(message.element.as_ref().unwrap(), &element));
        assert_eq!(message.context, rule.template_context());
        assert_eq!(message.source.as_ref().map(|s| s.id()), Some("minlength"));
    }

    #[test]
    fn test_token_prefers_localized_text() {
        let mut target = Target::for_element(Element::input().name("Test"));
        target.use_localization_messages([("required", "Please fill this in")]);
        let context = Context::new(&target);

        assert_eq!(context.token_for("required").text, "Please fill this in");
        assert_eq!(context.token_for("email"), ValidationKeys::token("email"));
    }

    #[test]
    fn test_register_for_other_field_uses_form_element() {
        let confirm = Arc::new(Element::input().name("ConfirmPassword"));
        let form = Form::new().element(Arc::clone(&confirm));
        let target = Target::for_element(Element::input().name("Password")).with_form(form);
        let mut context = Context::new(&target);

        let rule: RuleRef = Arc::new(Required);
        context.push_template_context(&rule);
        context.register_message_for("ConfirmPassword", "Mismatch");

        let messages = context.notification.messages_for("ConfirmPassword");
        assert_eq!(messages.len(), 1);
        assert!(Arc::ptr_eq(messages[0].element.as_ref().unwrap(), &confirm));
    }
}
