//! Bound elements and forms.
//!
//! The engine never touches a real document. It consumes these attribute bags,
//! which page-level glue fills from whatever markup or widget tree it owns.

use std::collections::BTreeMap;
use std::sync::Arc;

/// Shared handle to a bound element.
pub type ElementRef = Arc<Element>;

/// Shared handle to a form.
pub type FormRef = Arc<Form>;

const DATA_PREFIX: &str = "data-";

/// A single bound field: its attributes and its current value.
///
/// # Example
///
/// ```
/// use formcheck::Element;
///
/// let element = Element::input()
///     .name("Email")
///     .class("required email")
///     .data("minlength", "3")
///     .value("someone@example.com");
///
/// assert_eq!(element.get_name(), Some("Email"));
/// assert_eq!(element.get_data("minlength"), Some("3"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    pub value: Option<String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn input() -> Self {
        Self::new("input")
    }

    // Identity
    pub fn name(self, name: impl Into<String>) -> Self {
        self.attr("name", name)
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    pub fn class(self, classes: impl Into<String>) -> Self {
        self.attr("class", classes)
    }

    // Attributes
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Sets a `data-` attribute. The prefix is added for you.
    pub fn data(self, key: &str, value: impl Into<String>) -> Self {
        self.attr(format!("{DATA_PREFIX}{key}"), value)
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn get_data(&self, key: &str) -> Option<&str> {
        self.get_attr(&format!("{DATA_PREFIX}{key}"))
    }

    pub fn get_name(&self) -> Option<&str> {
        self.get_attr("name")
    }

    pub fn get_id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    /// Current value, empty when the element carries none.
    pub fn get_value(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }

    /// Class names in declaration order.
    pub fn classes(&self) -> Vec<&str> {
        self.get_attr("class")
            .map(|classes| classes.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// The name the element declares for itself, falling back to its id.
    pub fn display_name(&self) -> Option<&str> {
        self.get_name().or_else(|| self.get_id())
    }

    /// Label supplied through `data-localized-label`.
    pub fn localized_label(&self) -> Option<&str> {
        self.get_data("localized-label")
    }
}

/// A form: its own attributes plus the elements bound inside it.
#[derive(Debug, Clone, Default)]
pub struct Form {
    pub attributes: BTreeMap<String, String>,
    pub elements: Vec<ElementRef>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn data(self, key: &str, value: impl Into<String>) -> Self {
        self.attr(format!("{DATA_PREFIX}{key}"), value)
    }

    pub fn element(mut self, element: impl Into<ElementRef>) -> Self {
        self.elements.push(element.into());
        self
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn get_data(&self, key: &str) -> Option<&str> {
        self.get_attr(&format!("{DATA_PREFIX}{key}"))
    }

    /// Find a bound element by its declared name.
    pub fn find(&self, name: &str) -> Option<&ElementRef> {
        self.elements.iter().find(|e| e.get_name() == Some(name))
    }
}
