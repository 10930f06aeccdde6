//! Parameterless rules, usually attached through CSS class aliases.

use chrono::{DateTime, NaiveDate};

use super::{NUMBER, Rule};
use crate::context::Context;
use crate::error::RuleError;
use crate::token::ValidationKeys;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Fails when the value is empty or whitespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Required;

impl Rule for Required {
    fn id(&self) -> &str {
        ValidationKeys::REQUIRED
    }

    fn validate(&self, context: &mut Context<'_>) -> Result<(), RuleError> {
        if context.target.value().trim().is_empty() {
            let token = context.token_for(ValidationKeys::REQUIRED);
            context.register_message(token);
        }
        Ok(())
    }
}

/// Fails when a non-empty value is not an email address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Email;

impl Rule for Email {
    fn id(&self) -> &str {
        ValidationKeys::EMAIL
    }

    fn validate(&self, context: &mut Context<'_>) -> Result<(), RuleError> {
        let value = context.target.value();
        // Empty is valid; Required owns emptiness
        if !value.is_empty() && !email_address::EmailAddress::is_valid(value) {
            let token = context.token_for(ValidationKeys::EMAIL);
            context.register_message(token);
        }
        Ok(())
    }
}

/// Fails when a non-empty value is not a calendar date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Date;

impl Date {
    fn is_date(value: &str) -> bool {
        DATE_FORMATS
            .iter()
            .any(|format| NaiveDate::parse_from_str(value, format).is_ok())
            || DateTime::parse_from_rfc3339(value).is_ok()
    }
}

impl Rule for Date {
    fn id(&self) -> &str {
        ValidationKeys::DATE
    }

    fn validate(&self, context: &mut Context<'_>) -> Result<(), RuleError> {
        let value = context.target.value().trim();
        if !value.is_empty() && !Self::is_date(value) {
            let token = context.token_for(ValidationKeys::DATE);
            context.register_message(token);
        }
        Ok(())
    }
}

/// Fails when a non-empty value is not a decimal number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Number;

impl Rule for Number {
    fn id(&self) -> &str {
        ValidationKeys::NUMBER
    }

    fn validate(&self, context: &mut Context<'_>) -> Result<(), RuleError> {
        let value = context.target.value().trim();
        if !value.is_empty() && !NUMBER.is_match(value) {
            let token = context.token_for(ValidationKeys::NUMBER);
            context.register_message(token);
        }
        Ok(())
    }
}
