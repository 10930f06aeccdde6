//! Validation rules.
//!
//! A rule inspects the target in its [`Context`] and reports failures through
//! [`Context::register_message`]. Returning an error means the rule could not
//! be evaluated at all, and aborts the validation pass.

mod bounds;
mod equality;
mod length;
mod pattern;
mod remote;
mod simple;

use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::Regex;

pub use bounds::{Max, Min};
pub use equality::{FieldEquality, FieldEqualityOptions};
pub use length::{MaxLength, MinLength, RangeLength};
pub use pattern::RegularExpression;
pub use remote::{Remote, RemoteRequest, RemoteTransport};
pub use simple::{Date, Email, Number, Required};

use crate::context::Context;
use crate::error::RuleError;
use crate::message::TemplateContext;

/// A unit of validation logic.
pub trait Rule: fmt::Debug + Send + Sync {
    /// Identifier used by [`Options`](crate::Options) to configure this rule's mode.
    fn id(&self) -> &str;

    /// Parameters exposed to message placeholders while this rule is active.
    fn template_context(&self) -> TemplateContext {
        TemplateContext::new()
    }

    fn validate(&self, context: &mut Context<'_>) -> Result<(), RuleError>;
}

/// Shared handle to a rule.
pub type RuleRef = Arc<dyn Rule>;

/// Renders a number the way it was most likely written: `8` rather than `8.0`.
pub(crate) fn number_value(n: f64) -> serde_json::Value {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        serde_json::Value::from(n as i64)
    } else {
        serde_json::Value::from(n)
    }
}

/// Optional sign, plain or comma-grouped digits, optional fraction.
pub(crate) static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:(?:\d+|\d{1,3}(?:,\d{3})+)(?:\.\d+)?|\.\d+)$").expect("number pattern is valid")
});

/// Parses a value written as a decimal number, `None` when it is not one.
///
/// Exponents, `inf` and `NaN` are not numbers here; commas are only accepted
/// as thousands separators.
pub(crate) fn parse_number(value: &str) -> Option<f64> {
    let value = value.trim();
    if !NUMBER.is_match(value) {
        return None;
    }
    value
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number(" -1,234.5 "), Some(-1234.5));
        assert_eq!(parse_number("+5"), Some(5.0));
        assert_eq!(parse_number(".5"), Some(0.5));
    }

    #[test]
    fn test_parse_number_rejects_other_float_syntax() {
        for value in ["inf", "-inf", "NaN", "1e5", "1,2,3", "1,23", "-", "", "12a"] {
            assert_eq!(parse_number(value), None, "{value}");
        }
    }
}
