//! Error types

/// Error raised while turning element or form attributes into typed configuration.
///
/// A source either receives well-formed configuration or fails the pass; there is
/// no partial recovery.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A JSON payload attribute could not be parsed into its expected shape.
    #[error("Attribute '{attribute}' holds malformed JSON: {source}")]
    MalformedAttribute {
        attribute: String,
        #[source]
        source: serde_json::Error,
    },

    /// A numeric attribute could not be parsed.
    #[error("Attribute '{attribute}' is not a valid number: '{value}'")]
    InvalidNumber { attribute: String, value: String },

    /// A regular expression attribute failed to compile.
    #[error("Attribute '{attribute}' holds an invalid pattern: {source}")]
    InvalidPattern {
        attribute: String,
        #[source]
        source: regex::Error,
    },
}

impl ConfigError {
    /// Creates a new malformed attribute error.
    pub fn malformed(attribute: impl Into<String>, source: serde_json::Error) -> Self {
        Self::MalformedAttribute {
            attribute: attribute.into(),
            source,
        }
    }

    /// Creates a new invalid number error.
    pub fn invalid_number(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    /// Returns the attribute the error originated from.
    pub fn attribute(&self) -> &str {
        match self {
            Self::MalformedAttribute { attribute, .. }
            | Self::InvalidNumber { attribute, .. }
            | Self::InvalidPattern { attribute, .. } => attribute,
        }
    }
}

/// Error raised by a rule that could not be evaluated.
///
/// This is distinct from a field being invalid: invalid fields are reported as
/// messages on the notification, never as errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RuleError {
    /// The rule itself failed.
    #[error("Rule '{rule}' failed: {message}")]
    Failed { rule: String, message: String },

    /// The remote transport could not evaluate a remote rule.
    #[error("Remote rule at '{url}' failed: {message}")]
    Remote { url: String, message: String },
}

impl RuleError {
    /// Creates a new rule failure.
    pub fn failed(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failed {
            rule: rule.into(),
            message: message.into(),
        }
    }

    /// Creates a new remote failure.
    pub fn remote(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Remote {
            url: url.into(),
            message: message.into(),
        }
    }
}

/// Top-level error for a validation pass.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Rule(#[from] RuleError),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
