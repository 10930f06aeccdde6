//! Per-request validation options and the mode policy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::{Element, Form};
use crate::error::ConfigError;

/// Attribute on a form carrying its options payload.
pub const OPTIONS_ATTRIBUTE: &str = "validation-options";

/// When a rule takes part in validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Incremental validation while the user edits a field.
    Live,
    /// Exhaustive validation, typically on submit.
    #[default]
    Triggered,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Live => write!(f, "live"),
            Mode::Triggered => write!(f, "triggered"),
        }
    }
}

/// Error returned when parsing an unknown mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown validation mode '{0}'")]
pub struct ParseModeError(pub String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "live" => Ok(Mode::Live),
            "triggered" => Ok(Mode::Triggered),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// Mode override for one rule of one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOptions {
    pub rule: String,
    pub mode: Mode,
}

/// Mode configuration for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOptions {
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<RuleOptions>,
}

/// Validation configuration for one request.
///
/// The effective mode of a rule is its rule-level override, else its field's
/// mode, else [`Options::default_mode`].
///
/// # Example
///
/// ```
/// use formcheck::{Element, Mode, Options};
///
/// let options = Options::new()
///     .field("field1", None)
///     .rule("field1", "required", Mode::Triggered)
///     .rule("field1", "email", Mode::Live);
///
/// let element = Element::input().name("field1");
/// assert_eq!(options.mode_for(&element, "email"), Mode::Live);
/// assert!(!options.should_validate(&element, "required", Mode::Live));
/// assert!(options.should_validate(&element, "required", Mode::Triggered));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    #[serde(default)]
    pub fields: Vec<FieldOptions>,

    /// Mode for rules with no field or rule configuration.
    ///
    /// Default: [`Mode::Triggered`]
    #[serde(skip)]
    pub default_mode: Mode,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the JSON payload of a `data-validation-options` attribute.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::malformed(OPTIONS_ATTRIBUTE, e))
    }

    /// Reads options from a form; a form without the attribute gets the defaults.
    pub fn from_form(form: &Form) -> Result<Self, ConfigError> {
        match form.get_data(OPTIONS_ATTRIBUTE) {
            Some(json) => Self::from_json(json),
            None => Ok(Self::default()),
        }
    }

    pub fn with_default_mode(mut self, mode: Mode) -> Self {
        self.default_mode = mode;
        self
    }

    /// Sets the field-level mode, adding the field if needed.
    pub fn field(mut self, field: impl Into<String>, mode: Option<Mode>) -> Self {
        let field = field.into();
        self.entry(&field).mode = mode;
        self
    }

    /// Sets a rule-level override, adding the field if needed.
    pub fn rule(mut self, field: impl Into<String>, rule: impl Into<String>, mode: Mode) -> Self {
        let field = field.into();
        let rule = rule.into();
        let entry = self.entry(&field);
        match entry.rules.iter_mut().find(|r| r.rule == rule) {
            Some(existing) => existing.mode = mode,
            None => entry.rules.push(RuleOptions { rule, mode }),
        }
        self
    }

    fn entry(&mut self, field: &str) -> &mut FieldOptions {
        let index = match self.fields.iter().position(|f| f.field == field) {
            Some(index) => index,
            None => {
                self.fields.push(FieldOptions {
                    field: field.to_string(),
                    mode: None,
                    rules: Vec::new(),
                });
                self.fields.len() - 1
            }
        };
        &mut self.fields[index]
    }

    /// Configuration for a field, if any.
    pub fn field_options(&self, field: &str) -> Option<&FieldOptions> {
        self.fields.iter().find(|f| f.field == field)
    }

    /// Effective mode of a rule for the element's field.
    pub fn mode_for(&self, element: &Element, rule_id: &str) -> Mode {
        let Some(field) = element.display_name().and_then(|name| self.field_options(name)) else {
            return self.default_mode;
        };

        field
            .rules
            .iter()
            .find(|r| r.rule == rule_id)
            .map(|r| r.mode)
            .or(field.mode)
            .unwrap_or(self.default_mode)
    }

    /// Whether a rule participates in a pass run in `requested` mode.
    ///
    /// A triggered pass always runs every rule; other passes only run rules
    /// whose effective mode matches.
    pub fn should_validate(&self, element: &Element, rule_id: &str, requested: Mode) -> bool {
        match requested {
            Mode::Triggered => true,
            Mode::Live => self.mode_for(element, rule_id) == requested,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element() -> Element {
        Element::input().name("field1").id("field1")
    }

    #[test]
    fn test_parses_fields() {
        let options = Options::from_json(r#"{"fields":[{"field":"field1","mode":"live"}]}"#).unwrap();
        assert_eq!(options.fields.len(), 1);
        assert_eq!(options.fields[0].field, "field1");
        assert_eq!(options.fields[0].mode, Some(Mode::Live));
        assert!(options.fields[0].rules.is_empty());
    }

    #[test]
    fn test_parses_fields_and_rules() {
        let options = Options::from_json(
            r#"{"fields":[{"field":"field1","mode":"live","rules":[{"rule":"required","mode":"triggered"}]}]}"#,
        )
        .unwrap();

        assert_eq!(
            options.fields[0].rules,
            vec![RuleOptions {
                rule: "required".to_string(),
                mode: Mode::Triggered
            }]
        );
    }

    #[test]
    fn test_mode_for_rules() {
        let options = Options::new()
            .rule("field1", "required", Mode::Triggered)
            .rule("field1", "email", Mode::Live);

        assert_eq!(options.mode_for(&element(), "email"), Mode::Live);
        assert_eq!(options.mode_for(&element(), "required"), Mode::Triggered);
    }

    #[test]
    fn test_rule_override_beats_field_mode() {
        let options = Options::new()
            .field("field1", Some(Mode::Live))
            .rule("field1", "r1", Mode::Triggered);

        assert_eq!(options.mode_for(&element(), "r1"), Mode::Triggered);
        assert_eq!(options.mode_for(&element(), "r2"), Mode::Live);
    }

    #[test]
    fn test_unconfigured_field_uses_default() {
        let options = Options::new();
        assert_eq!(options.mode_for(&element(), "required"), Mode::Triggered);

        let options = options.with_default_mode(Mode::Live);
        assert_eq!(options.mode_for(&element(), "required"), Mode::Live);
    }

    #[test]
    fn test_should_validate() {
        let options = Options::new()
            .rule("field1", "required", Mode::Triggered)
            .rule("field1", "email", Mode::Live);

        assert!(!options.should_validate(&element(), "required", Mode::Live));
        assert!(options.should_validate(&element(), "required", Mode::Triggered));

        assert!(options.should_validate(&element(), "email", Mode::Live));
        // Triggered passes always run every rule.
        assert!(options.should_validate(&element(), "email", Mode::Triggered));
    }

    #[test]
    fn test_from_form() {
        let json = r#"{"fields":[{"field":"field1","mode":"live"}]}"#;
        let form = Form::new().data(OPTIONS_ATTRIBUTE, json);

        let from_form = Options::from_form(&form).unwrap();
        assert_eq!(from_form, Options::from_json(json).unwrap());
        assert_eq!(from_form, Options::new().field("field1", Some(Mode::Live)));
    }

    #[test]
    fn test_from_form_without_attribute() {
        assert_eq!(Options::from_form(&Form::new()).unwrap(), Options::default());
    }

    #[test]
    fn test_from_form_malformed() {
        let form = Form::new().data(OPTIONS_ATTRIBUTE, "{\"fields\": 3}");
        let err = Options::from_form(&form).unwrap_err();
        assert_eq!(err.attribute(), OPTIONS_ATTRIBUTE);
    }

    #[test]
    fn test_mode_round_trips_through_str() {
        assert_eq!("live".parse::<Mode>(), Ok(Mode::Live));
        assert_eq!("Triggered".parse::<Mode>(), Ok(Mode::Triggered));
        assert_eq!(Mode::Live.to_string(), "live");
        assert!("ajax".parse::<Mode>().is_err());
    }
}
