//! Validation targets: the identity and value of one field under validation.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Deserialize;

use crate::element::{Element, ElementRef, FormRef};
use crate::hash::digest;

/// Shape of the `data-localization` payload on a bound element.
#[derive(Debug, Default, Deserialize)]
struct LocalizationPayload {
    #[serde(rename = "Messages", default)]
    messages: BTreeMap<String, String>,
}

/// One field being validated, optionally scoped to a form and a correlation id.
///
/// Identity is `(correlation_id, field_name)`; the value and element never
/// take part in it. Targets are cheap to rebuild for every pass.
#[derive(Debug, Clone)]
pub struct Target {
    pub field_name: String,
    pub correlation_id: Option<String>,
    pub form: Option<FormRef>,
    pub element: ElementRef,
    explicit_value: Option<String>,
    localization: BTreeMap<String, String>,
}

impl Target {
    /// Creates a target with an explicit value and a detached element named after the field.
    pub fn new(field_name: impl Into<String>, value: impl Into<String>) -> Self {
        let field_name = field_name.into();
        let element = Arc::new(Element::input().name(field_name.clone()));
        Self {
            field_name,
            correlation_id: None,
            form: None,
            element,
            explicit_value: Some(value.into()),
            localization: BTreeMap::new(),
        }
    }

    /// Creates a target bound to an element; the field name is the element's declared name.
    pub fn for_element(element: impl Into<ElementRef>) -> Self {
        let element = element.into();
        let field_name = element.display_name().unwrap_or_default().to_string();
        Self {
            field_name,
            correlation_id: None,
            form: None,
            element,
            explicit_value: None,
            localization: BTreeMap::new(),
        }
    }

    pub fn with_correlation_id(mut self, correlation_id: impl Into<String>) -> Self {
        self.correlation_id = Some(correlation_id.into());
        self
    }

    pub fn with_form(mut self, form: impl Into<FormRef>) -> Self {
        self.form = Some(form.into());
        self
    }

    /// The explicit value given at construction, else the element's current value.
    pub fn value(&self) -> &str {
        match &self.explicit_value {
            Some(value) => value.as_str(),
            None => self.element.get_value(),
        }
    }

    /// Stable identity hash over `(correlation_id, field_name)`.
    pub fn to_hash(&self) -> String {
        // A missing correlation id is distinct from an empty one.
        let correlation = match &self.correlation_id {
            Some(id) => ["1", id.as_str()],
            None => ["0", ""],
        };
        digest(correlation.into_iter().chain([self.field_name.as_str()]))
    }

    /// Overrides localized messages for this target; consulted before the element.
    pub fn use_localization_messages<I, K, V>(&mut self, messages: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.localization = messages
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
    }

    /// Localized text for a message key, `None` when neither source defines it.
    pub fn localized_message_for(&self, key: &str) -> Option<String> {
        if let Some(message) = self.localization.get(key) {
            return Some(message.clone());
        }

        let raw = self.element.get_data("localization")?;
        match serde_json::from_str::<LocalizationPayload>(raw) {
            Ok(mut payload) => payload.messages.remove(key),
            Err(e) => {
                log::warn!(
                    "Ignoring malformed localization data on '{}': {}",
                    self.field_name,
                    e
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_value() {
        let target = Target::new("field", "123");
        assert_eq!(target.value(), "123");
    }

    #[test]
    fn test_uses_element_name_and_value() {
        let target = Target::for_element(Element::input().name("Tester").value("test-test-test"));
        assert_eq!(target.field_name, "Tester");
        assert_eq!(target.value(), "test-test-test");
    }

    #[test]
    fn test_hashes_on_correlation_and_field() {
        let target1 = Target::new("field 1", "val").with_correlation_id("Correlation1");
        let target2 = Target::new("field 2", "val").with_correlation_id("Correlation1");
        let target3 = Target::new("field 1", "val").with_correlation_id("Correlation2");
        let target4 = Target::new("field 1", "other").with_correlation_id("Correlation1");

        assert_ne!(target1.to_hash(), target2.to_hash());
        assert_ne!(target1.to_hash(), target3.to_hash());
        assert_eq!(target1.to_hash(), target4.to_hash());
    }

    #[test]
    fn test_missing_correlation_differs_from_empty() {
        let bare = Target::new("field", "");
        let empty = Target::new("field", "").with_correlation_id("");
        assert_ne!(bare.to_hash(), empty.to_hash());
    }

    #[test]
    fn test_localization_from_element() {
        let element = Element::input().data("localization", r#"{"Messages":{"required":"Required Field"}}"#);
        let target = Target::for_element(element);

        assert_eq!(target.localized_message_for("required").as_deref(), Some("Required Field"));
        assert_eq!(target.localized_message_for("email"), None);
    }

    #[test]
    fn test_localization_overrides() {
        let mut target = Target::for_element(Element::input());
        target.use_localization_messages([("fieldequality", "Example message")]);

        assert_eq!(
            target.localized_message_for("fieldequality").as_deref(),
            Some("Example message")
        );
    }

    #[test]
    fn test_localization_missing_attribute() {
        let target = Target::for_element(Element::input());
        assert_eq!(target.localized_message_for("required"), None);
    }

    #[test]
    fn test_localization_malformed_payload_is_ignored() {
        let target = Target::for_element(Element::input().data("localization", "{not json"));
        assert_eq!(target.localized_message_for("required"), None);
    }
}
