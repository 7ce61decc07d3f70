//! Validation of destination URLs.
//!
//! Links store the submitted URL verbatim; this module only decides whether
//! it is an acceptable redirect target.

use url::Url;

/// Errors that can occur while validating a destination URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Checks that `input` is an absolute `http` or `https` URL with a host.
///
/// Rejects relative references and schemes like `javascript:`, `data:` or
/// `file:`.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for unparseable input,
/// [`UrlValidationError::UnsupportedProtocol`] for other schemes and
/// [`UrlValidationError::MissingHost`] when the host is empty.
pub fn validate_original_url(input: &str) -> Result<(), UrlValidationError> {
    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlValidationError::MissingHost),
    }
}
