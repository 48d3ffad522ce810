#![allow(clippy::must_use_candidate)]

mod env;
pub mod imagegen;
mod loader;
pub mod telemetry;

use serde::Deserialize;

pub use env::EnvError;
pub use imagegen::*;
pub use telemetry::*;

/// Top-level Pictor configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Image generation provider configuration
    pub imagegen: ImageGenConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
