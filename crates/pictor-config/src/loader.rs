use std::path::Path;

use secrecy::ExposeSecret;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, a placeholder cannot be
    /// resolved, the TOML is malformed, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::parse(&raw)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if a placeholder cannot be resolved, the TOML is
    /// malformed, or validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded = crate::env::expand_env(raw)
            .map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded)
            .map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is usable
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is empty, the base URL is not
    /// http(s), or the timeout is zero
    pub fn validate(&self) -> anyhow::Result<()> {
        let imagegen = &self.imagegen;

        if imagegen.api_key.expose_secret().trim().is_empty() {
            anyhow::bail!("imagegen.api_key must not be empty");
        }

        if !matches!(imagegen.base_url.scheme(), "http" | "https") {
            anyhow::bail!(
                "imagegen.base_url must use http or https, got `{}`",
                imagegen.base_url.scheme()
            );
        }

        if imagegen.timeout.is_zero() {
            anyhow::bail!("imagegen.timeout must be greater than 0");
        }

        Ok(())
    }
}
