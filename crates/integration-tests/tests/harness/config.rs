//! Programmatic configuration for integration tests

use std::time::Duration;

use pictor_config::ImageGenConfig;
use secrecy::SecretString;
use url::Url;

/// Provider configuration pointed at a mock backend
pub fn provider_config(base_url: &str) -> ImageGenConfig {
    ImageGenConfig::new(SecretString::from("sk-integration"))
        .with_base_url(Url::parse(base_url).expect("valid URL"))
        .with_timeout(Duration::from_secs(10))
}
