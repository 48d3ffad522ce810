use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use strum::{AsRefStr, Display, EnumString};

/// Side lengths accepted by the provider for square images
pub const SUPPORTED_SIDES: [u32; 3] = [256, 512, 1024];

/// Rendering quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Quality {
    Standard,
    Hd,
}

/// Rendering style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Style {
    /// Hyper-real and dramatic
    Vivid,
    /// Less saturated, more natural looking
    Natural,
}

/// Representation the provider returns each image in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
pub enum ResponseFormat {
    #[serde(rename = "url")]
    #[strum(serialize = "url")]
    Url,
    #[serde(rename = "b64_json")]
    #[strum(serialize = "b64_json")]
    Base64,
}

/// Output dimensions, encoded on the wire as `WIDTHxHEIGHT`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl Serialize for ImageSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Validated generation request, serialized as the provider's JSON body
///
/// Only [`crate::build_request`] constructs one, so every instance
/// satisfies the size, quality and style rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    prompt: String,
    size: ImageSize,
    n: u8,
    response_format: ResponseFormat,
    style: Style,
    quality: Quality,
}

impl GenerationRequest {
    pub(crate) const fn new(
        prompt: String,
        size: ImageSize,
        quality: Quality,
        style: Style,
    ) -> Self {
        Self {
            prompt,
            size,
            n: 1,
            response_format: ResponseFormat::Url,
            style,
            quality,
        }
    }

    pub fn description(&self) -> &str {
        &self.prompt
    }

    pub const fn size(&self) -> ImageSize {
        self.size
    }

    /// Number of images requested (always 1)
    pub const fn count(&self) -> u8 {
        self.n
    }

    pub const fn response_format(&self) -> ResponseFormat {
        self.response_format
    }

    pub const fn style(&self) -> Style {
        self.style
    }

    pub const fn quality(&self) -> Quality {
        self.quality
    }
}

/// One generated image as returned by the provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImageResult {
    /// Hosted image URL (`response_format = "url"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Base64-encoded image bytes (`response_format = "b64_json"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b64_json: Option<String>,
    /// Prompt as rewritten by the provider, if it did so
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revised_prompt: Option<String>,
}

impl ImageResult {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn from_base64(payload: impl Into<String>) -> Self {
        Self {
            b64_json: Some(payload.into()),
            ..Self::default()
        }
    }
}

/// Decoded provider response
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenerationResponse {
    /// Unix timestamp of generation
    #[serde(default)]
    pub created: u64,
    /// Generated images in provider order
    #[serde(default)]
    pub data: Vec<ImageResult>,
}
