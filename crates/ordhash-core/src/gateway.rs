//! Gateway URL templates.
//!
//! A gateway is an ordinals content mirror addressed by a URL template with
//! an `{id}` placeholder. Templates are evaluated strictly in list order;
//! the first gateway that returns the content wins.

use serde::{Deserialize, Serialize};

/// Placeholder substituted with the inscription ID when building a URL.
pub const ID_PLACEHOLDER: &str = "{id}";

/// Content gateways tried by default, in fallback order.
pub const DEFAULT_GATEWAYS: [&str; 3] = [
    "https://ordinals.com/content/{id}",
    "https://ord.io/content/{id}",
    "https://ordiscan.com/content/{id}",
];

/// A single gateway URL template, e.g. `https://ordinals.com/content/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GatewayTemplate {
    template: String,
}

impl GatewayTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Raw template string as configured.
    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Builds the request URL for an inscription ID.
    ///
    /// The ID is substituted verbatim for the first `{id}` placeholder. A
    /// template without a placeholder is treated as a prefix and the ID is
    /// appended, so `https://host/content/` still resolves.
    pub fn url_for(&self, inscription_id: &str) -> String {
        if self.template.contains(ID_PLACEHOLDER) {
            self.template.replacen(ID_PLACEHOLDER, inscription_id, 1)
        } else {
            format!("{}{}", self.template, inscription_id)
        }
    }

    /// Host part of the template, for log lines and status output.
    pub fn host(&self) -> Option<String> {
        let probe = self.url_for("probe");
        url::Url::parse(&probe)
            .ok()?
            .host_str()
            .map(|h| h.to_string())
    }
}

/// The built-in gateway list, in fallback order.
pub fn default_gateways() -> Vec<GatewayTemplate> {
    DEFAULT_GATEWAYS
        .into_iter()
        .map(GatewayTemplate::new)
        .collect()
}
