//! Remote rules declared on the element.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use super::{RuleSource, parse_json};
use crate::error::ConfigError;
use crate::rules::{Remote, RemoteTransport, RuleRef};
use crate::target::Target;

/// Payload of the `data-remote-rule` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteRuleConfig {
    pub url: String,
    #[serde(default)]
    pub rules: Vec<String>,
}

/// One [`Remote`] rule per declared hash, all sharing the declared url.
///
/// Every rule produced carries this source's transport, if it has one.
#[derive(Clone, Default)]
pub struct RemoteSource {
    transport: Option<Arc<dyn RemoteTransport>>,
}

impl RemoteSource {
    pub const ATTRIBUTE: &'static str = "data-remote-rule";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transport(transport: Arc<dyn RemoteTransport>) -> Self {
        Self {
            transport: Some(transport),
        }
    }
}

impl fmt::Debug for RemoteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteSource")
            .field("transport", &self.transport.is_some())
            .finish()
    }
}

impl RuleSource for RemoteSource {
    fn rules_for(&self, target: &Target) -> Result<Vec<RuleRef>, ConfigError> {
        let Some(raw) = target.element.get_attr(Self::ATTRIBUTE) else {
            return Ok(Vec::new());
        };
        let config: RemoteRuleConfig = parse_json(Self::ATTRIBUTE, raw)?;

        Ok(config
            .rules
            .into_iter()
            .map(|hash| {
                let rule = Remote::new(config.url.clone(), hash);
                let rule = match &self.transport {
                    Some(transport) => rule.with_transport(Arc::clone(transport)),
                    None => rule,
                };
                Arc::new(rule) as RuleRef
            })
            .collect())
    }

    fn name(&self) -> &str {
        "remote"
    }
}
