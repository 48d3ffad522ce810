#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

//! Typed client adapter for OpenAI-compatible image generation
//!
//! Caller parameters are validated and turned into a [`GenerationRequest`]
//! by [`build_request`], sent through an [`HttpExecutor`], and the decoded
//! [`GenerationResponse`] is reduced to one string by [`extract_first`].
//! [`ImageGenService`] ties the three together.

mod auth;
mod config;
mod error;
mod extract;
mod request;
mod service;
mod transport;
mod types;

pub use auth::{ORGANIZATION_HEADER, RequestDecorator, decorate_request};
pub use config::ServiceConfig;
pub use error::{ImageGenError, Result, TransportError, ValidationError};
pub use extract::{ResultSelector, extract_first};
pub use request::build_request;
pub use service::{ImageGenService, ImageParams};
pub use tokio_util::sync::CancellationToken;
pub use transport::{HttpExecutor, HttpTransport};
pub use types::{
    GenerationRequest, GenerationResponse, ImageResult, ImageSize, Quality, ResponseFormat,
    SUPPORTED_SIDES, Style,
};
