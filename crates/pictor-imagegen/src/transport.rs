use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use http::{HeaderMap, HeaderValue, header};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::{
    auth::{RequestDecorator, decorate_request},
    config::ServiceConfig,
    error::{ImageGenError, Result, TransportError},
    types::GenerationResponse,
};

/// Executes a serialized generation request against the provider
///
/// Implementations own transport concerns: connections, headers, status
/// handling and decoding. They must stop work and return
/// [`ImageGenError::Cancelled`] once `cancel` fires.
#[async_trait]
pub trait HttpExecutor: Send + Sync {
    async fn execute(
        &self,
        endpoint: &Url,
        body: String,
        cancel: &CancellationToken,
    ) -> Result<GenerationResponse>;
}

/// `reqwest`-backed executor used by default
pub struct HttpTransport {
    client: Client,
    config: Arc<ServiceConfig>,
    decorator: RequestDecorator,
}

impl HttpTransport {
    /// Create a transport with its own connection pool
    ///
    /// # Errors
    ///
    /// Returns [`ImageGenError::Config`] if the HTTP client cannot be built
    pub fn new(config: Arc<ServiceConfig>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));

        let client = Client::builder()
            .pool_idle_timeout(Some(Duration::from_secs(5)))
            .tcp_nodelay(true)
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .default_headers(headers)
            .build()
            .map_err(|e| ImageGenError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            config,
            decorator: decorate_request,
        })
    }

    /// Replace the request decorator (e.g. for providers using an `api-key` header)
    #[must_use]
    pub fn with_decorator(mut self, decorator: RequestDecorator) -> Self {
        self.decorator = decorator;
        self
    }

    async fn send(&self, endpoint: &Url, body: String) -> Result<GenerationResponse> {
        let request = self
            .client
            .post(endpoint.clone())
            .timeout(self.config.timeout())
            .header(header::CONTENT_TYPE, "application/json")
            .body(body);

        let request = (self.decorator)(request, &self.config);

        tracing::debug!(endpoint = %endpoint, "sending image generation request");

        let response = request.send().await.map_err(|e| self.classify(&e))?;

        let status = response.status();

        if !status.is_success() {
            let message = error_message(response).await;

            tracing::error!(status = %status, "image generation API error");

            return Err(match status {
                StatusCode::UNAUTHORIZED => TransportError::Authentication(message),
                _ => TransportError::Api {
                    status: status.as_u16(),
                    message,
                },
            }
            .into());
        }

        let bytes = response.bytes().await.map_err(|e| self.classify(&e))?;

        let decoded = serde_json::from_slice::<GenerationResponse>(&bytes).map_err(|e| {
            tracing::error!(error = %e, "failed to parse image generation response");
            TransportError::Decode(e.to_string())
        })?;

        tracing::debug!(images = decoded.data.len(), "image generation request complete");

        Ok(decoded)
    }

    fn classify(&self, error: &reqwest::Error) -> ImageGenError {
        tracing::error!(error = %error, "image generation request failed");

        if error.is_timeout() {
            TransportError::Timeout(self.config.timeout()).into()
        } else {
            TransportError::Connection(error.to_string()).into()
        }
    }
}

#[async_trait]
impl HttpExecutor for HttpTransport {
    async fn execute(
        &self,
        endpoint: &Url,
        body: String,
        cancel: &CancellationToken,
    ) -> Result<GenerationResponse> {
        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                tracing::debug!("image generation cancelled");
                Err(ImageGenError::Cancelled)
            }
            result = self.send(endpoint, body) => result,
        }
    }
}

/// Provider error envelope: `{"error": {"message": "..."}}`
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

async fn error_message(response: Response) -> String {
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_owned());

    serde_json::from_str::<ErrorEnvelope>(&text).map_or(text, |envelope| envelope.error.message)
}
