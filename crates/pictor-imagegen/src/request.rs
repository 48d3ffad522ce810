use crate::{
    error::ValidationError,
    types::{GenerationRequest, ImageSize, Quality, SUPPORTED_SIDES, Style},
};

/// Validate caller parameters and build the provider request
///
/// Nothing is defaulted here: a `None` quality or style is rejected the
/// same way as an unknown value. The description is only required to be
/// present; empty text is passed through to the provider.
///
/// Checks run in parameter order and the first failure is returned.
///
/// # Errors
///
/// Returns the [`ValidationError`] for the first offending parameter
pub fn build_request(
    description: Option<&str>,
    width: u32,
    height: u32,
    quality: Option<&str>,
    style: Option<&str>,
) -> Result<GenerationRequest, ValidationError> {
    let description = description.ok_or(ValidationError::MissingDescription)?;

    if width != height || !SUPPORTED_SIDES.contains(&width) {
        return Err(ValidationError::InvalidSize { width, height });
    }

    let quality = quality
        .and_then(|q| q.parse::<Quality>().ok())
        .ok_or_else(|| ValidationError::InvalidQuality(quality.map(ToOwned::to_owned)))?;

    let style = style
        .and_then(|s| s.parse::<Style>().ok())
        .ok_or_else(|| ValidationError::InvalidStyle(style.map(ToOwned::to_owned)))?;

    Ok(GenerationRequest::new(
        description.to_owned(),
        ImageSize { width, height },
        quality,
        style,
    ))
}
