use std::time::Duration;

use pictor_config::ImageGenConfig;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::error::{ImageGenError, Result};

/// Immutable per-service settings shared by every call
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    api_key: SecretString,
    organization_id: Option<String>,
    endpoint: Url,
    timeout: Duration,
}

impl ServiceConfig {
    /// Build service settings from the provider configuration
    ///
    /// The generation endpoint is `{base_url}/images/generations`; trailing
    /// slashes on the base URL are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ImageGenError::Config`] if the API key is empty or the
    /// endpoint cannot be derived from the base URL
    pub fn new(config: &ImageGenConfig) -> Result<Self> {
        if config.api_key.expose_secret().trim().is_empty() {
            return Err(ImageGenError::Config("API key must not be empty".to_owned()));
        }

        let base_url = config.base_url.as_str().trim_end_matches('/');
        let endpoint = format!("{base_url}/images/generations");
        let endpoint = Url::parse(&endpoint).map_err(|e| {
            ImageGenError::Config(format!("invalid image generation endpoint `{endpoint}`: {e}"))
        })?;

        let organization_id = config
            .organization_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(ToOwned::to_owned);

        Ok(Self {
            api_key: config.api_key.clone(),
            organization_id,
            endpoint,
            timeout: config.timeout,
        })
    }

    pub(crate) const fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    pub fn organization_id(&self) -> Option<&str> {
        self.organization_id.as_deref()
    }

    /// Full URL generation requests are posted to
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}
