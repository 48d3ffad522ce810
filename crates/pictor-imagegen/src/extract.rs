use crate::{
    error::{ImageGenError, Result},
    types::{GenerationResponse, ImageResult, ResponseFormat},
};

/// Which field of an [`ImageResult`] the caller contracted for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSelector {
    Url,
    Base64,
}

impl ResultSelector {
    /// Selector matching the format the request asked for
    pub const fn for_format(format: ResponseFormat) -> Self {
        match format {
            ResponseFormat::Url => Self::Url,
            ResponseFormat::Base64 => Self::Base64,
        }
    }

    /// Take the selected value out of a result
    pub fn select(self, result: ImageResult) -> Option<String> {
        match self {
            Self::Url => result.url,
            Self::Base64 => result.b64_json,
        }
    }

    const fn field(self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Base64 => "b64_json",
        }
    }
}

/// Reduce a provider response to the value of its first image
///
/// A successful response always carries at least one image; an empty list
/// or a first image without the selected field is a protocol violation.
///
/// # Errors
///
/// Returns [`ImageGenError::Protocol`] when the response breaks that
/// contract
pub fn extract_first(response: GenerationResponse, selector: ResultSelector) -> Result<String> {
    let first = response.data.into_iter().next().ok_or_else(|| {
        ImageGenError::Protocol("provider reported success but returned no images".to_owned())
    })?;

    selector.select(first).ok_or_else(|| {
        ImageGenError::Protocol(format!("first image has no `{}` field", selector.field()))
    })
}
