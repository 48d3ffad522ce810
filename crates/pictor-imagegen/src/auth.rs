use reqwest::RequestBuilder;
use secrecy::ExposeSecret;

use crate::config::ServiceConfig;

/// Header carrying the provider organization identifier
pub const ORGANIZATION_HEADER: &str = "OpenAI-Organization";

/// Hook applied to every outgoing request right before it is sent
pub type RequestDecorator = fn(RequestBuilder, &ServiceConfig) -> RequestBuilder;

/// Attach the bearer token and, when configured, the organization header
pub fn decorate_request(request: RequestBuilder, config: &ServiceConfig) -> RequestBuilder {
    let request = request.bearer_auth(config.api_key().expose_secret());

    match config.organization_id() {
        Some(organization_id) => request.header(ORGANIZATION_HEADER, organization_id),
        None => request,
    }
}
