//! Validation messages.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::element::ElementRef;
use crate::hash::digest;
use crate::rules::RuleRef;
use crate::token::Token;

/// Values available to `{name}` placeholders when a message is rendered.
pub type TemplateContext = BTreeMap<String, serde_json::Value>;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\w+)\}").expect("placeholder pattern is valid"));

/// Placeholder resolved to the bound element's display name.
const FIELD_PLACEHOLDER: &str = "field";

/// One reported validation failure.
#[derive(Debug, Clone)]
pub struct Message {
    /// Field id used for indexing.
    pub field: String,
    pub token: Token,
    pub element: Option<ElementRef>,
    pub context: TemplateContext,
    /// Rule that reported the message, if it came from a rule.
    pub source: Option<RuleRef>,
}

impl Message {
    pub fn new(
        field: impl Into<String>,
        token: impl Into<Token>,
        element: Option<ElementRef>,
        context: Option<TemplateContext>,
    ) -> Self {
        Self {
            field: field.into(),
            token: token.into(),
            element,
            context: context.unwrap_or_default(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: RuleRef) -> Self {
        self.source = Some(source);
        self
    }

    /// Dedup hash over field, token and context. Element and source are ignored.
    pub fn to_hash(&self) -> String {
        let mut parts = vec![
            self.field.clone(),
            self.token.key.clone(),
            self.token.text.clone(),
        ];
        for (key, value) in &self.context {
            parts.push(key.clone());
            parts.push(value.to_string());
        }
        digest(parts.iter().map(String::as_str))
    }

    /// Name substituted for `{field}`: the element's declared name, else the field id.
    fn display_name(&self) -> &str {
        self.element
            .as_ref()
            .and_then(|e| e.display_name())
            .unwrap_or(self.field.as_str())
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = PLACEHOLDER.replace_all(&self.token.text, |caps: &Captures| {
            let name = &caps[1];
            if name == FIELD_PLACEHOLDER {
                return self.display_name().to_string();
            }
            match self.context.get(name) {
                Some(serde_json::Value::String(s)) => s.clone(),
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            }
        });
        f.write_str(&rendered)
    }
}
