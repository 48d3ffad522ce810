use std::time::Duration;

use secrecy::SecretString;
use serde::{Deserialize, Deserializer};
use url::Url;

/// Default `OpenAI` API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Image generation provider configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageGenConfig {
    /// API key sent as a bearer token
    pub api_key: SecretString,
    /// Organization identifier sent alongside the API key
    ///
    /// An empty string is treated as unset so that
    /// `{{ env.VAR | default("") }}` works for optional organizations.
    #[serde(default, deserialize_with = "non_empty_string")]
    pub organization_id: Option<String>,
    /// Provider base URL
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Per-request timeout (e.g. "90s", "2m")
    #[serde(default = "default_timeout", deserialize_with = "duration_str::deserialize_duration")]
    pub timeout: Duration,
}

impl ImageGenConfig {
    /// Build a configuration with default base URL and timeout
    pub fn new(api_key: SecretString) -> Self {
        Self {
            api_key,
            organization_id: None,
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }

    /// Set the organization identifier; blank values leave it unset
    #[must_use]
    pub fn with_organization(mut self, organization_id: impl Into<String>) -> Self {
        self.organization_id = trimmed(&organization_id.into());
        self
    }

    /// Override the provider base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Override the request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base URL must be valid")
}

const fn default_timeout() -> Duration {
    Duration::from_secs(120)
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().and_then(trimmed))
}

fn trimmed(value: &str) -> Option<String> {
    Some(value.trim().to_owned()).filter(|s| !s.is_empty())
}
