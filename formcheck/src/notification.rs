//! Deduplicated, mergeable collections of validation messages.

use std::collections::HashSet;

use crate::continuation::Continuation;
use crate::element::ElementRef;
use crate::message::{Message, TemplateContext};
use crate::target::Target;
use crate::token::Token;

/// Result of one validation pass.
///
/// Messages keep insertion order. A message whose hash is already present is
/// dropped on registration, so re-running a rule never duplicates its output.
///
/// # Example
///
/// ```
/// use formcheck::Notification;
///
/// let mut notification = Notification::new();
/// notification.register_message("f1", "{field} is required", None, None);
/// notification.register_message("f1", "{field} is required", None, None);
///
/// assert_eq!(notification.all_messages().len(), 1);
/// assert!(!notification.is_valid());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Notification {
    messages: Vec<Message>,
    hashes: HashSet<String>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds and registers a message. Returns `false` if an identical one was already present.
    pub fn register_message(
        &mut self,
        field: impl Into<String>,
        token: impl Into<Token>,
        element: Option<ElementRef>,
        context: Option<TemplateContext>,
    ) -> bool {
        self.register(Message::new(field, token, element, context))
    }

    /// Registers a prebuilt message. Returns `false` if an identical one was already present.
    pub fn register(&mut self, message: Message) -> bool {
        if !self.hashes.insert(message.to_hash()) {
            log::trace!("Skipping duplicate message for '{}'", message.field);
            return false;
        }
        log::trace!("Registered message for '{}': {}", message.field, message.token);
        self.messages.push(message);
        true
    }

    /// Messages for one field in registration order; empty for unknown fields.
    pub fn messages_for(&self, field: &str) -> Vec<&Message> {
        self.messages.iter().filter(|m| m.field == field).collect()
    }

    pub fn all_messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_valid(&self) -> bool {
        self.messages.is_empty()
    }

    /// Replaces this notification's messages for the target's field with `other`'s.
    ///
    /// Messages for every other field are left untouched, which lets a
    /// single-field pass be merged into a whole-form result.
    pub fn import_for_target(&mut self, other: &Notification, target: &Target) {
        let field = target.field_name.as_str();
        let hashes = &mut self.hashes;
        self.messages.retain(|m| {
            if m.field == field {
                hashes.remove(&m.to_hash());
                false
            } else {
                true
            }
        });

        for message in other.messages_for(field) {
            self.register(message.clone());
        }
    }

    /// Transforms this notification into the submission outcome.
    pub fn to_continuation(&self) -> Continuation {
        Continuation::from(self)
    }
}
