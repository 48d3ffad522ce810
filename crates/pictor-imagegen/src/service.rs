use std::sync::Arc;

use pictor_config::ImageGenConfig;
use tokio_util::sync::CancellationToken;

use crate::{
    config::ServiceConfig,
    error::Result,
    extract::{ResultSelector, extract_first},
    request::build_request,
    transport::{HttpExecutor, HttpTransport},
};

/// Caller-facing generation parameters
///
/// [`ImageParams::new`] fills in the defaults (`standard` quality, `vivid`
/// style). Setting a field to `None` is passed through to validation and
/// rejected there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageParams {
    pub description: Option<String>,
    pub width: u32,
    pub height: u32,
    pub quality: Option<String>,
    pub style: Option<String>,
}

impl ImageParams {
    pub const DEFAULT_QUALITY: &'static str = "standard";
    pub const DEFAULT_STYLE: &'static str = "vivid";

    pub fn new(description: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            description: Some(description.into()),
            width,
            height,
            quality: Some(Self::DEFAULT_QUALITY.to_owned()),
            style: Some(Self::DEFAULT_STYLE.to_owned()),
        }
    }

    #[must_use]
    pub fn with_quality(mut self, quality: impl Into<String>) -> Self {
        self.quality = Some(quality.into());
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }
}

/// Text-to-image service
///
/// Cheap to clone and safe to share between tasks; all state is immutable.
#[derive(Clone)]
pub struct ImageGenService {
    config: Arc<ServiceConfig>,
    executor: Arc<dyn HttpExecutor>,
}

impl ImageGenService {
    /// Create a service backed by the default HTTP transport
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is unusable or the HTTP client
    /// cannot be built
    pub fn new(config: &ImageGenConfig) -> Result<Self> {
        let config = Arc::new(ServiceConfig::new(config)?);
        let executor = Arc::new(HttpTransport::new(Arc::clone(&config))?);

        Ok(Self { config, executor })
    }

    /// Create a service with a caller-supplied executor
    pub fn with_executor(config: ServiceConfig, executor: Arc<dyn HttpExecutor>) -> Self {
        Self {
            config: Arc::new(config),
            executor,
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Generate one image and return its URL
    ///
    /// Parameters are validated before anything is sent. `cancel` is handed
    /// to the executor unchanged; firing it aborts the pending request.
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed parameters, the executor's
    /// transport error or cancellation, or a protocol error if the provider
    /// returns no usable image
    pub async fn generate_image(
        &self,
        params: &ImageParams,
        cancel: &CancellationToken,
    ) -> Result<String> {
        let request = build_request(
            params.description.as_deref(),
            params.width,
            params.height,
            params.quality.as_deref(),
            params.style.as_deref(),
        )?;

        tracing::debug!(
            size = %request.size(),
            quality = %request.quality(),
            style = %request.style(),
            "image generation request validated"
        );

        let selector = ResultSelector::for_format(request.response_format());
        let body = serde_json::to_string(&request)?;

        let response = self.executor.execute(self.config.endpoint(), body, cancel).await?;

        extract_first(response, selector)
    }
}
