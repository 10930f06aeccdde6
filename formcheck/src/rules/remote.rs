//! Server round-trip rule.
//!
//! The rule only carries the declaration (url and rule hash). Evaluating it is
//! delegated to a [`RemoteTransport`] supplied by the caller.

use std::fmt;
use std::sync::Arc;

use super::Rule;
use crate::context::Context;
use crate::error::RuleError;
use crate::message::TemplateContext;
use crate::token::{Token, ValidationKeys};

/// What a transport receives for one remote rule evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteRequest<'a> {
    pub url: &'a str,
    pub hash: &'a str,
    pub field: &'a str,
    pub value: &'a str,
}

/// Evaluates remote rules, typically by calling the server at `url`.
///
/// Returns the tokens to report; an empty list means the value is valid.
pub trait RemoteTransport: Send + Sync {
    fn validate(&self, request: &RemoteRequest<'_>) -> Result<Vec<Token>, RuleError>;
}

impl<F> RemoteTransport for F
where
    F: Fn(&RemoteRequest<'_>) -> Result<Vec<Token>, RuleError> + Send + Sync,
{
    fn validate(&self, request: &RemoteRequest<'_>) -> Result<Vec<Token>, RuleError> {
        self(request)
    }
}

/// A remote rule identified by `hash`, evaluated at `url`.
#[derive(Clone)]
pub struct Remote {
    pub url: String,
    pub hash: String,
    transport: Option<Arc<dyn RemoteTransport>>,
}

impl Remote {
    pub fn new(url: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            hash: hash.into(),
            transport: None,
        }
    }

    pub fn with_transport(mut self, transport: Arc<dyn RemoteTransport>) -> Self {
        self.transport = Some(transport);
        self
    }
}

impl fmt::Debug for Remote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Remote")
            .field("url", &self.url)
            .field("hash", &self.hash)
            .field("transport", &self.transport.is_some())
            .finish()
    }
}

impl Rule for Remote {
    fn id(&self) -> &str {
        ValidationKeys::REMOTE
    }

    fn template_context(&self) -> TemplateContext {
        TemplateContext::from([
            ("url".to_string(), self.url.as_str().into()),
            ("hash".to_string(), self.hash.as_str().into()),
        ])
    }

    fn validate(&self, context: &mut Context<'_>) -> Result<(), RuleError> {
        let Some(transport) = &self.transport else {
            log::debug!("No transport for remote rule '{}' at '{}'", self.hash, self.url);
            return Ok(());
        };

        let target = context.target;
        let request = RemoteRequest {
            url: &self.url,
            hash: &self.hash,
            field: &target.field_name,
            value: target.value(),
        };

        for token in transport.validate(&request)? {
            context.register_message(token);
        }
        Ok(())
    }
}
