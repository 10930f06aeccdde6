//! Sources driven by a single element attribute.

use std::str::FromStr;
use std::sync::Arc;

use super::{RuleSource, parse_json};
use crate::error::ConfigError;
use crate::rules::{Max, MaxLength, Min, MinLength, RangeLength, RegularExpression, RuleRef, parse_number};
use crate::target::Target;

/// Reads and parses an attribute; `None` when the element does not carry it.
fn parse_attr<T: FromStr>(target: &Target, attribute: &str) -> Result<Option<T>, ConfigError> {
    let Some(raw) = target.element.get_attr(attribute) else {
        return Ok(None);
    };
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::invalid_number(attribute, raw))
}

/// Reads a numeric bound written in the same decimal grammar as field values.
fn parse_bounds(target: &Target, attribute: &str) -> Result<Option<f64>, ConfigError> {
    let Some(raw) = target.element.get_attr(attribute) else {
        return Ok(None);
    };
    parse_number(raw)
        .map(Some)
        .ok_or_else(|| ConfigError::invalid_number(attribute, raw))
}

/// `data-minlength` produces a [`MinLength`] rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinLengthSource;

impl MinLengthSource {
    pub const ATTRIBUTE: &'static str = "data-minlength";
}

impl RuleSource for MinLengthSource {
    fn rules_for(&self, target: &Target) -> Result<Vec<RuleRef>, ConfigError> {
        Ok(parse_attr(target, Self::ATTRIBUTE)?
            .map(|length| Arc::new(MinLength::new(length)) as RuleRef)
            .into_iter()
            .collect())
    }

    fn name(&self) -> &str {
        "minlength"
    }
}

/// `maxlength` produces a [`MaxLength`] rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxLengthSource;

impl MaxLengthSource {
    pub const ATTRIBUTE: &'static str = "maxlength";
}

impl RuleSource for MaxLengthSource {
    fn rules_for(&self, target: &Target) -> Result<Vec<RuleRef>, ConfigError> {
        Ok(parse_attr(target, Self::ATTRIBUTE)?
            .map(|length| Arc::new(MaxLength::new(length)) as RuleRef)
            .into_iter()
            .collect())
    }

    fn name(&self) -> &str {
        "maxlength"
    }
}

/// `data-rangelength` (`{"min": 5, "max": 10}`) produces a [`RangeLength`] rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeLengthSource;

impl RangeLengthSource {
    pub const ATTRIBUTE: &'static str = "data-rangelength";
}

impl RuleSource for RangeLengthSource {
    fn rules_for(&self, target: &Target) -> Result<Vec<RuleRef>, ConfigError> {
        let Some(raw) = target.element.get_attr(Self::ATTRIBUTE) else {
            return Ok(Vec::new());
        };
        let rule: RangeLength = parse_json(Self::ATTRIBUTE, raw)?;
        let rule: RuleRef = Arc::new(rule);
        Ok(vec![rule])
    }

    fn name(&self) -> &str {
        "rangelength"
    }
}

/// `data-min` produces a [`Min`] rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinSource;

impl MinSource {
    pub const ATTRIBUTE: &'static str = "data-min";
}

impl RuleSource for MinSource {
    fn rules_for(&self, target: &Target) -> Result<Vec<RuleRef>, ConfigError> {
        Ok(parse_bounds(target, Self::ATTRIBUTE)?
            .map(|bounds| Arc::new(Min::new(bounds)) as RuleRef)
            .into_iter()
            .collect())
    }

    fn name(&self) -> &str {
        "min"
    }
}

/// `data-max` produces a [`Max`] rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxSource;

impl MaxSource {
    pub const ATTRIBUTE: &'static str = "data-max";
}

impl RuleSource for MaxSource {
    fn rules_for(&self, target: &Target) -> Result<Vec<RuleRef>, ConfigError> {
        Ok(parse_bounds(target, Self::ATTRIBUTE)?
            .map(|bounds| Arc::new(Max::new(bounds)) as RuleRef)
            .into_iter()
            .collect())
    }

    fn name(&self) -> &str {
        "max"
    }
}

/// `data-regex` produces a [`RegularExpression`] rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegularExpressionSource;

impl RegularExpressionSource {
    pub const ATTRIBUTE: &'static str = "data-regex";
}

impl RuleSource for RegularExpressionSource {
    fn rules_for(&self, target: &Target) -> Result<Vec<RuleRef>, ConfigError> {
        let Some(pattern) = target.element.get_attr(Self::ATTRIBUTE) else {
            return Ok(Vec::new());
        };
        let rule = RegularExpression::new(pattern).map_err(|source| ConfigError::InvalidPattern {
            attribute: Self::ATTRIBUTE.to_string(),
            source,
        })?;
        let rule: RuleRef = Arc::new(rule);
        Ok(vec![rule])
    }

    fn name(&self) -> &str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use crate::message::TemplateContext;

    fn rules_for(source: &dyn RuleSource, element: Element) -> Vec<RuleRef> {
        source.rules_for(&Target::for_element(element)).unwrap()
    }

    fn single_context(source: &dyn RuleSource, element: Element) -> TemplateContext {
        let rules = rules_for(source, element);
        assert_eq!(rules.len(), 1);
        rules[0].template_context()
    }

    #[test]
    fn test_min_length() {
        let ctx = single_context(&MinLengthSource, Element::input().name("Test").data("minlength", "3"));
        assert_eq!(ctx["length"], 3);
        assert!(rules_for(&MinLengthSource, Element::input().name("Test")).is_empty());
    }

    #[test]
    fn test_max_length() {
        let ctx = single_context(&MaxLengthSource, Element::input().name("Test").attr("maxlength", "5"));
        assert_eq!(ctx["length"], 5);
        assert!(rules_for(&MaxLengthSource, Element::input().name("Test")).is_empty());
    }

    #[test]
    fn test_range_length() {
        let element = Element::input().name("Test").data("rangelength", r#"{"min":5, "max":10}"#);
        let ctx = single_context(&RangeLengthSource, element);
        assert_eq!(ctx["min"], 5);
        assert_eq!(ctx["max"], 10);
        assert!(rules_for(&RangeLengthSource, Element::input().name("Test")).is_empty());
    }

    #[test]
    fn test_min_and_max() {
        let ctx = single_context(&MinSource, Element::input().name("Test").data("min", "8"));
        assert_eq!(ctx["bounds"], 8);
        let ctx = single_context(&MaxSource, Element::input().name("Test").data("max", "12"));
        assert_eq!(ctx["bounds"], 12);
        let ctx = single_context(&MaxSource, Element::input().name("Test").data("max", "1,000.5"));
        assert_eq!(ctx["bounds"], 1000.5);

        assert!(rules_for(&MinSource, Element::input().name("Test")).is_empty());
        assert!(rules_for(&MaxSource, Element::input().name("Test")).is_empty());
    }

    #[test]
    fn test_regex() {
        let element = Element::input().name("Test").data("regex", "[a-zA-Z0-9]+$");
        let ctx = single_context(&RegularExpressionSource, element);
        assert_eq!(ctx["expression"], "[a-zA-Z0-9]+$");
        assert!(rules_for(&RegularExpressionSource, Element::input().name("Test")).is_empty());
    }

    #[test]
    fn test_malformed_attributes_fail() {
        let target = Target::for_element(Element::input().data("minlength", "three"));
        assert!(matches!(
            MinLengthSource.rules_for(&target),
            Err(ConfigError::InvalidNumber { .. })
        ));

        for bounds in ["NaN", "inf", "1e5", "1,2,3"] {
            let target = Target::for_element(Element::input().data("min", bounds));
            assert!(
                matches!(MinSource.rules_for(&target), Err(ConfigError::InvalidNumber { .. })),
                "{bounds}"
            );
            let target = Target::for_element(Element::input().data("max", bounds));
            assert!(
                matches!(MaxSource.rules_for(&target), Err(ConfigError::InvalidNumber { .. })),
                "{bounds}"
            );
        }

        let target = Target::for_element(Element::input().data("rangelength", "{\"min\":5}"));
        assert!(matches!(
            RangeLengthSource.rules_for(&target),
            Err(ConfigError::MalformedAttribute { .. })
        ));

        let target = Target::for_element(Element::input().data("regex", "(unclosed"));
        assert!(matches!(
            RegularExpressionSource.rules_for(&target),
            Err(ConfigError::InvalidPattern { .. })
        ));
    }
}
