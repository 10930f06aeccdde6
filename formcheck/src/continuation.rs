//! Submission outcome built from a notification.

use serde::Serialize;

use crate::element::ElementRef;
use crate::message::Message;
use crate::notification::Notification;
use crate::rules::RuleRef;

/// Outcome handed to an asynchronous submission collaborator.
///
/// Serializes to `{"success": bool, "errors": [{"field", "label", "message"}]}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Continuation {
    pub success: bool,
    pub errors: Vec<ContinuationError>,
}

/// One error entry in a [`Continuation`].
#[derive(Debug, Clone, Serialize)]
pub struct ContinuationError {
    /// Field id, matched exactly against server-side field identifiers.
    pub field: String,
    pub label: String,
    pub message: String,
    /// Element the message is bound to, for in-process consumers.
    #[serde(skip)]
    pub element: Option<ElementRef>,
    /// Rule that produced the message, for in-process consumers.
    #[serde(skip)]
    pub source: Option<RuleRef>,
}

impl Continuation {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<&Message> for ContinuationError {
    fn from(message: &Message) -> Self {
        let label = message
            .element
            .as_ref()
            .and_then(|e| e.localized_label().or_else(|| e.get_name()))
            .unwrap_or(message.field.as_str())
            .to_string();

        Self {
            field: message.field.clone(),
            label,
            message: message.to_string(),
            element: message.element.clone(),
            source: message.source.clone(),
        }
    }
}

impl From<&Notification> for Continuation {
    fn from(notification: &Notification) -> Self {
        Self {
            success: notification.is_valid(),
            errors: notification
                .all_messages()
                .iter()
                .map(ContinuationError::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::element::Element;
    use crate::token::{Token, ValidationKeys};

    #[test]
    fn test_sets_success_flag() {
        let mut notification = Notification::new();
        assert!(notification.to_continuation().success);
        assert!(notification.to_continuation().errors.is_empty());

        let element = Arc::new(Element::input().name("Test"));
        notification.register_message("Test", ValidationKeys::token(ValidationKeys::REQUIRED), Some(element), None);
        assert!(!notification.to_continuation().success);
    }

    #[test]
    fn test_sets_element_on_error() {
        let element = Arc::new(Element::input().name("Test"));
        let mut notification = Notification::new();
        notification.register_message("field", ValidationKeys::token(ValidationKeys::REQUIRED), Some(element.clone()), None);

        let continuation = notification.to_continuation();
        let bound = continuation.errors[0].element.as_ref().expect("element is set");
        assert!(Arc::ptr_eq(bound, &element));
    }

    #[test]
    fn test_renders_message_with_localized_label() {
        let element = Arc::new(Element::input().name("FirstName").data("localized-label", "First Name"));
        let context = BTreeMap::from([("Property".to_string(), json!("The Value"))]);
        let mut notification = Notification::new();
        notification.register_message(
            "FirstName",
            Token::new("FirstName", "{Property} is required"),
            Some(element),
            Some(context),
        );

        let continuation = notification.to_continuation();
        assert_eq!(continuation.errors.len(), 1);

        let error = &continuation.errors[0];
        assert_eq!(error.field, "FirstName");
        assert_eq!(error.label, "First Name");
        assert_eq!(error.message, "The Value is required");
    }

    #[test]
    fn test_label_falls_back_to_name() {
        let element = Arc::new(Element::input().name("FirstName"));
        let mut notification = Notification::new();
        notification.register_message("FirstName", "{field} is required", Some(element), None);

        assert_eq!(notification.to_continuation().errors[0].label, "FirstName");
    }

    #[test]
    fn test_json_payload() {
        let mut notification = Notification::new();
        notification.register_message("Name", "Required Field", None, None);

        let json: serde_json::Value =
            serde_json::from_str(&notification.to_continuation().to_json().expect("serializes"))
                .expect("valid json");

        assert_eq!(
            json,
            json!({
                "success": false,
                "errors": [{ "field": "Name", "label": "Name", "message": "Required Field" }]
            })
        );
    }
}
